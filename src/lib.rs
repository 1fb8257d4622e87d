/// Meet Landing - welcome page and runtime context classification
/// Built with Rust + WASM + Yew

pub mod config;
pub mod context;
pub mod destination;
pub mod labels;
pub mod landing;
pub mod marker;
pub mod slots;
pub mod tabs;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Classification for the host's router: `{embedded, kiosk}`
#[wasm_bindgen]
pub fn classify_context(signals: JsValue) -> Result<JsValue, JsValue> {
    let signals: context::HostSignals = if signals.is_null() || signals.is_undefined() {
        context::HostSignals::default()
    } else {
        serde_wasm_bindgen::from_value(signals)?
    };

    let classification = context::classify(&signals.with_browser_user_agent());
    log::debug!("Context classified as {:?}", classification);

    Ok(serde_wasm_bindgen::to_value(&classification)?)
}

#[wasm_bindgen]
pub fn is_valid_room_name(room: &str) -> bool {
    destination::matches_room_pattern(room)
}

// Start the Yew app for the welcome page
#[wasm_bindgen]
pub fn start_welcome_page(config: JsValue) {
    let mut config = config::WelcomeConfig::from_js(config).unwrap_or_else(|e| {
        log::error!("{}, using defaults", e);
        config::WelcomeConfig::default()
    });
    config.host = config.host.with_browser_user_agent();

    yew::Renderer::<ui::welcome::WelcomePage>::with_props(ui::welcome::WelcomePageProps { config }).render();
}
