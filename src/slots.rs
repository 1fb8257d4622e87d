/// Customization slots: optional `<template>` fragments injected once per mount
use crate::config::InterfaceConfig;

/// The three places a deployment can inject its own markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// Extra card displayed next to the main one.
    Card,
    /// Main content below the header.
    Content,
    /// Extra content in the header toolbar, next to the settings button.
    ToolbarContent,
}

impl SlotKind {
    pub const ALL: [SlotKind; 3] = [SlotKind::Card, SlotKind::Content, SlotKind::ToolbarContent];

    /// Id of the `<template>` element the deployment provides
    pub fn template_id(&self) -> &'static str {
        match self {
            SlotKind::Card => "welcome-page-additional-card-template",
            SlotKind::Content => "welcome-page-additional-content-template",
            SlotKind::ToolbarContent => "settings-toolbar-additional-content-template",
        }
    }

    /// Id of the container element the template is cloned into
    pub fn container_id(&self) -> &'static str {
        match self {
            SlotKind::Card => "welcome-page-additional-card",
            SlotKind::Content => "welcome-page-additional-content",
            SlotKind::ToolbarContent => "settings-toolbar-additional-content",
        }
    }

    /// Class of the container element
    pub fn container_class(&self) -> &'static str {
        match self {
            SlotKind::Card => "welcome-card welcome-card--dark",
            SlotKind::Content => "welcome-page-content",
            SlotKind::ToolbarContent => "settings-toolbar-content",
        }
    }

    pub fn enabled_by(&self, config: &InterfaceConfig) -> bool {
        match self {
            SlotKind::Card => config.display_welcome_page_additional_card,
            SlotKind::Content => config.display_welcome_page_content,
            SlotKind::ToolbarContent => config.display_welcome_page_toolbar_additional_content,
        }
    }

    fn index(&self) -> usize {
        match self {
            SlotKind::Card => 0,
            SlotKind::Content => 1,
            SlotKind::ToolbarContent => 2,
        }
    }
}

/// Page that owns the templates and their target containers
pub trait SlotHost {
    /// Inner markup of the slot's template, `None` if there is no template
    fn template_markup(&self, kind: SlotKind) -> Option<String>;

    /// Clone the slot's template into its container. `false` if either is missing.
    fn inject(&mut self, kind: SlotKind) -> bool;
}

/// Whitespace-only templates count as empty
pub fn has_template_content(markup: Option<&str>) -> bool {
    markup.is_some_and(|m| !m.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomizationSlot {
    pub kind: SlotKind,
    pub template_has_content: bool,
    pub enabled_by_config: bool,
}

impl CustomizationSlot {
    pub fn shown(&self) -> bool {
        self.template_has_content && self.enabled_by_config
    }
}

/// All three slots, evaluated the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlots {
    slots: [CustomizationSlot; 3],
}

impl ResolvedSlots {
    pub fn resolve(host: &impl SlotHost, config: &InterfaceConfig) -> ResolvedSlots {
        let slots = SlotKind::ALL.map(|kind| CustomizationSlot {
            kind,
            template_has_content: has_template_content(host.template_markup(kind).as_deref()),
            enabled_by_config: kind.enabled_by(config),
        });

        ResolvedSlots { slots }
    }

    pub fn get(&self, kind: SlotKind) -> &CustomizationSlot {
        &self.slots[kind.index()]
    }

    pub fn is_shown(&self, kind: SlotKind) -> bool {
        self.get(kind).shown()
    }

    /// Inject every shown slot. Returns how many containers received content.
    pub fn inject_into(&self, host: &mut impl SlotHost) -> usize {
        self.slots
            .iter()
            .filter(|slot| slot.shown())
            .filter(|slot| {
                let injected = host.inject(slot.kind);
                if !injected {
                    log::warn!("No container for {:?} slot", slot.kind);
                }
                injected
            })
            .count()
    }
}
