/// Translation lookup used by the landing view
use crate::destination::ForbiddenSet;

/// Resolves a translation key to display text
pub trait TranslationLookup {
    fn translate(&self, key: &str) -> String;
}

/// Built-in English strings. Unknown keys are returned as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnglishLabels;

impl TranslationLookup for EnglishLabels {
    fn translate(&self, key: &str) -> String {
        let text = match key {
            "welcomepage.startMeeting" => "Start meeting",
            "welcomepage.roomname" => "Enter room name",
            "welcomepage.roomNameAllowedChars" => {
                "Meeting name should not contain any of these characters"
            }
            "welcomepage.upcomingMeetings" => "Your upcoming meetings",
            "welcomepage.recentMeetings" => "Your recent meetings",
            "welcomepage.meetingsAccessibilityLabel" => "Meetings",
            "welcomepage.noUpcomingMeetings" => "No upcoming meetings",
            "welcomepage.noRecentMeetings" => "No recent meetings",
            "welcomepage.jitsiOnMobile" => "Get the mobile app",
            "welcomepage.mobileDownLoadLinkIos" => "Download the iOS app",
            "welcomepage.mobileDownLoadLinkAndroid" => "Download the Android app",
            "welcomepage.mobileDownLoadLinkFDroid" => "Download the F-Droid app",
            other => other,
        };
        text.to_string()
    }
}

/// Allowed-characters hint listing exactly the characters of `set`
pub fn forbidden_characters_message(labels: &impl TranslationLookup, set: ForbiddenSet) -> String {
    format!("{}: {}.", labels.translate("welcomepage.roomNameAllowedChars"), set.listing())
}
