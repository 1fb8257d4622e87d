/// Runtime context classification: embedded host apps and kiosk (Spot) mode
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Bundle ids of the first-party mobile apps.
///
/// Anything else loading the client is treated like a web iframe: an SDK
/// consumer embedding us.
pub const FIRST_PARTY_BUNDLE_IDS: [&str; 3] = [
    // iOS app.
    "com.atlassian.JitsiMeet.ios",
    // Android + iOS (testing) app.
    "org.jitsi.meet",
    // Android debug app.
    "org.jitsi.meet.debug",
];

/// User-agent markers of the meeting-room display apps.
pub const KIOSK_USER_AGENT_MARKERS: [&str; 2] = [
    "JitsiSpot/",       // Jitsi Spot app
    "8x8MeetingRooms/", // 8x8 Meeting Rooms app
];

/// Display name reserved for meeting-room devices.
pub const MEETING_ROOM_DISPLAY_NAME: &str = "Meeting Room";

static MOBILE_USER_AGENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Android|iPhone|iPad|iPod|Mobi").expect("mobile user-agent pattern is valid")
});

/// Signals supplied by the host, read once per classification.
///
/// Every field is optional on the wire; a partially populated object
/// classifies conservatively (embedded, not kiosk).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HostSignals {
    pub bundle_identifier: Option<String>,
    pub user_agent: String,
    pub i_am_spot: bool,
    pub default_local_display_name: Option<String>,
}

impl HostSignals {
    /// Fill in the user agent from `navigator.userAgent` when the host left it blank.
    pub fn with_browser_user_agent(mut self) -> Self {
        if self.user_agent.is_empty() {
            if let Some(ua) = web_sys::window().and_then(|w| w.navigator().user_agent().ok()) {
                self.user_agent = ua;
            }
        }
        self
    }
}

/// Result of classifying a set of host signals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextClassification {
    pub embedded: bool,
    pub kiosk: bool,
}

/// Whether the client runs inside an app that is not one of ours.
///
/// Exact, case-sensitive match. Absent or empty ids are embedded.
pub fn classify_embedding(bundle_identifier: Option<&str>) -> bool {
    match bundle_identifier {
        Some(id) => !FIRST_PARTY_BUNDLE_IDS.contains(&id),
        None => true,
    }
}

/// Whether the client runs on an unattended meeting-room display.
pub fn classify_kiosk(signals: &HostSignals) -> bool {
    signals.i_am_spot
        || KIOSK_USER_AGENT_MARKERS
            .iter()
            .any(|marker| signals.user_agent.contains(marker))
        || signals.default_local_display_name.as_deref() == Some(MEETING_ROOM_DISPLAY_NAME)
}

pub fn classify(signals: &HostSignals) -> ContextClassification {
    ContextClassification {
        embedded: classify_embedding(signals.bundle_identifier.as_deref()),
        kiosk: classify_kiosk(signals),
    }
}

/// Whether a user agent belongs to a phone or tablet browser
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_USER_AGENT.is_match(user_agent)
}
