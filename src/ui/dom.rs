/// Browser-side implementations of the landing view's collaborators
use crate::landing::{JoinOperation, ValidityReporter};
use crate::marker::StyleMarker;
use crate::slots::{SlotHost, SlotKind};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DomTokenList, Element, HtmlInputElement, HtmlTemplateElement};

// Import JS bridge functions
#[wasm_bindgen(module = "/welcome.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn joinRoom(room: &str) -> Result<(), JsValue>;
}

/// Hands the room to the conference app through the JS bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeJoin;

impl JoinOperation for BridgeJoin {
    fn join(&self, destination: &str) {
        let room = destination.to_string();
        log::info!("Joining room {:?}", room);

        spawn_local(async move {
            if let Err(e) = joinRoom(&room).await {
                log::error!("Failed to join {:?}: {:?}", room, e);
            }
        });
    }
}

impl ValidityReporter for HtmlInputElement {
    fn report_validity(&self) -> bool {
        HtmlInputElement::report_validity(self)
    }
}

/// `document.body.classList`, or nothing when there is no body
pub struct BodyClassList {
    list: Option<DomTokenList>,
}

impl BodyClassList {
    pub fn from_document() -> BodyClassList {
        let list = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.class_list());

        BodyClassList { list }
    }
}

impl StyleMarker for BodyClassList {
    fn add_marker(&self, class: &str) {
        if let Some(list) = &self.list {
            if let Err(e) = list.add_1(class) {
                log::warn!("Failed to add body class {}: {:?}", class, e);
            }
        }
    }

    fn remove_marker(&self, class: &str) {
        if let Some(list) = &self.list {
            if let Err(e) = list.remove_1(class) {
                log::warn!("Failed to remove body class {}: {:?}", class, e);
            }
        }
    }
}

/// Slot templates and containers, looked up in the document by id
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DomSlotHost;

fn find_element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

fn find_template(kind: SlotKind) -> Option<HtmlTemplateElement> {
    find_element(kind.template_id())?.dyn_into::<HtmlTemplateElement>().ok()
}

impl SlotHost for DomSlotHost {
    fn template_markup(&self, kind: SlotKind) -> Option<String> {
        find_template(kind).map(|template| template.inner_html())
    }

    fn inject(&mut self, kind: SlotKind) -> bool {
        let (Some(template), Some(container)) = (find_template(kind), find_element(kind.container_id())) else {
            return false;
        };

        let appended = template
            .content()
            .clone_node_with_deep(true)
            .and_then(|fragment| container.append_child(&fragment));

        match appended {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Failed to inject {:?} slot: {:?}", kind, e);
                false
            }
        }
    }
}

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}
