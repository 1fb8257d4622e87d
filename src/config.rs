/// Configuration handed to the landing view by the host page
use crate::context::HostSignals;
use crate::destination::ForbiddenSet;
use serde::{Deserialize, Serialize};
use url::Url;
use wasm_bindgen::JsValue;

/// Root configuration object passed to `start_welcome_page`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WelcomeConfig {
    pub host: HostSignals,
    pub interface_config: InterfaceConfig,
    pub deeplinking: DeepLinkConfig,
    pub calendar_enabled: bool,
    pub recent_list_enabled: bool,
    pub upcoming_meetings: Vec<CalendarEntry>,
    pub recent_rooms: Vec<RecentEntry>,
    pub forbidden_set: ForbiddenSet,
}

impl WelcomeConfig {
    pub fn from_js(value: JsValue) -> Result<WelcomeConfig, String> {
        if value.is_null() || value.is_undefined() {
            return Ok(WelcomeConfig::default());
        }

        serde_wasm_bindgen::from_value(value).map_err(|e| format!("Failed to parse config: {:?}", e))
    }
}

/// Branding and feature toggles, keyed the way `interfaceConfig` spells them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct InterfaceConfig {
    pub app_name: String,
    pub display_welcome_page_additional_card: bool,
    pub display_welcome_page_content: bool,
    pub display_welcome_page_toolbar_additional_content: bool,
    pub display_welcome_footer: bool,
    pub generate_roomnames_on_welcome_page: bool,
}

impl Default for InterfaceConfig {
    fn default() -> Self {
        InterfaceConfig {
            app_name: "Jitsi Meet".to_string(),
            display_welcome_page_additional_card: false,
            display_welcome_page_content: false,
            display_welcome_page_toolbar_additional_content: false,
            display_welcome_footer: false,
            generate_roomnames_on_welcome_page: false,
        }
    }
}

/// Mobile app download links shown in the footer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeepLinkConfig {
    pub ios: IosDeepLink,
    pub android: AndroidDeepLink,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IosDeepLink {
    pub download_link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AndroidDeepLink {
    pub download_link: Option<String>,
    pub f_droid_url: Option<String>,
}

impl DeepLinkConfig {
    pub fn ios_download(&self) -> Option<Url> {
        parse_link(self.ios.download_link.as_deref())
    }

    pub fn android_download(&self) -> Option<Url> {
        parse_link(self.android.download_link.as_deref())
    }

    pub fn f_droid(&self) -> Option<Url> {
        parse_link(self.android.f_droid_url.as_deref())
    }
}

// Relative or malformed links count as not configured.
fn parse_link(link: Option<&str>) -> Option<Url> {
    let link = link?.trim();
    if link.is_empty() {
        return None;
    }

    match Url::parse(link) {
        Ok(url) => Some(url),
        Err(e) => {
            log::warn!("Ignoring download link {:?}: {}", link, e);
            None
        }
    }
}

/// An upcoming meeting listed in the calendar tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub title: String,
    pub room: String,
    #[serde(default)]
    pub start_time: Option<String>,
}

/// A previously joined room listed in the recent tab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentEntry {
    pub room: String,
    #[serde(default)]
    pub date: Option<String>,
}
