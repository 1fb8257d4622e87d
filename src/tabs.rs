/// Meeting tabs shown below the room input

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabId {
    Calendar,
    Recent,
}

impl TabId {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Calendar => "calendar",
            TabId::Recent => "recent",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TabId::Calendar => "welcomepage.upcomingMeetings",
            TabId::Recent => "welcomepage.recentMeetings",
        }
    }
}

/// Ordered tabs to render, or `None` when no tab container should exist.
///
/// Tabs are hidden on mobile browsers, and an empty container is never
/// produced.
pub fn compose_tabs(calendar_enabled: bool, recent_enabled: bool, is_mobile: bool) -> Option<Vec<TabId>> {
    if is_mobile {
        return None;
    }

    let tabs: Vec<TabId> = [
        (calendar_enabled, TabId::Calendar),
        (recent_enabled, TabId::Recent),
    ]
    .into_iter()
    .filter_map(|(enabled, id)| enabled.then_some(id))
    .collect();

    if tabs.is_empty() { None } else { Some(tabs) }
}
