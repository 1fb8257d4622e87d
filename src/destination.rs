/// Destination (room name) input: forbidden characters, format pattern, generated names
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use uuid::Uuid;

/// Pattern the room input must satisfy before a join is attempted.
///
/// Also set as the `pattern` attribute of the input so the browser's
/// native validity UI reports the same rule.
pub const ROOM_NAME_VALIDATE_PATTERN_STR: &str = "^[^?&:\u{0022}\u{0027}%#]+$";

static ROOM_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ROOM_NAME_VALIDATE_PATTERN_STR).expect("room name pattern is valid")
});

const PATTERN_CHARACTERS: [char; 7] = ['?', '&', ':', '\'', '"', '%', '#'];
const PATTERN_AND_DOT_CHARACTERS: [char; 8] = ['?', '&', ':', '\'', '"', '%', '#', '.'];

/// Which characters flag a destination as forbidden
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ForbiddenSet {
    /// Exactly the characters the validation pattern rejects.
    #[default]
    Pattern,
    /// The pattern characters plus `.`.
    PatternAndDot,
}

impl ForbiddenSet {
    pub fn characters(&self) -> &'static [char] {
        match self {
            ForbiddenSet::Pattern => &PATTERN_CHARACTERS,
            ForbiddenSet::PatternAndDot => &PATTERN_AND_DOT_CHARACTERS,
        }
    }

    /// Characters separated by `, `, for messages
    pub fn listing(&self) -> String {
        self.characters()
            .iter()
            .map(char::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn contains_forbidden(&self, text: &str) -> bool {
        let forbidden = self.characters();
        text.chars().any(|c| forbidden.contains(&c))
    }
}

/// Whether `text` satisfies [`ROOM_NAME_VALIDATE_PATTERN_STR`]
pub fn matches_room_pattern(text: &str) -> bool {
    ROOM_NAME_PATTERN.is_match(text)
}

/// Advisory result of an edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationStatus {
    pub forbidden: bool,
}

/// Current contents of the room input.
///
/// Editing is never blocked; `forbidden` only drives the warning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DestinationInput {
    raw_text: String,
    forbidden: bool,
    set: ForbiddenSet,
}

impl DestinationInput {
    pub fn new(set: ForbiddenSet) -> DestinationInput {
        DestinationInput {
            raw_text: String::new(),
            forbidden: false,
            set,
        }
    }

    pub fn on_change(&mut self, text: impl Into<String>) -> DestinationStatus {
        self.raw_text = text.into();
        self.forbidden = self.set.contains_forbidden(&self.raw_text);
        DestinationStatus {
            forbidden: self.forbidden,
        }
    }

    pub fn text(&self) -> &str {
        &self.raw_text
    }

    pub fn forbidden(&self) -> bool {
        self.forbidden
    }
}

const ADJECTIVES: [&str; 16] = [
    "Brave", "Calm", "Clever", "Eager", "Fancy", "Gentle", "Happy", "Jolly", "Lucky", "Mighty",
    "Noble", "Proud", "Quiet", "Rapid", "Sunny", "Witty",
];

const PLURAL_NOUNS: [&str; 16] = [
    "Badgers", "Comets", "Dolphins", "Engines", "Falcons", "Geckos", "Harbors", "Islands",
    "Lanterns", "Meadows", "Otters", "Pianos", "Rivers", "Saddles", "Tigers", "Volcanoes",
];

const VERBS: [&str; 16] = [
    "Admire", "Build", "Chase", "Dance", "Explore", "Follow", "Greet", "Juggle", "Launch", "Mend",
    "Paint", "Race", "Sing", "Trade", "Visit", "Wander",
];

const ADVERBS: [&str; 16] = [
    "Boldly", "Briskly", "Calmly", "Gladly", "Gently", "Kindly", "Loudly", "Neatly", "Openly",
    "Proudly", "Quickly", "Rarely", "Safely", "Slowly", "Warmly", "Wisely",
];

/// Generate a readable room name such as `BraveOttersChaseQuickly`
pub fn generate_room_name() -> String {
    room_name_from_bytes(Uuid::new_v4().as_bytes())
}

/// Deterministic room name from 16 random bytes
pub fn room_name_from_bytes(bytes: &[u8; 16]) -> String {
    let pick = |words: &[&'static str; 16], byte: u8| words[usize::from(byte) % words.len()];

    [
        pick(&ADJECTIVES, bytes[0]),
        pick(&PLURAL_NOUNS, bytes[1]),
        pick(&VERBS, bytes[2]),
        pick(&ADVERBS, bytes[3]),
    ]
    .concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_name_not_forbidden() {
        let mut input = DestinationInput::new(ForbiddenSet::Pattern);

        let status = input.on_change("team-standup-42");

        assert!(!status.forbidden);
        assert_eq!(input.text(), "team-standup-42");
    }

    #[test]
    fn test_hash_is_forbidden() {
        let mut input = DestinationInput::new(ForbiddenSet::Pattern);

        let status = input.on_change("room#1");

        assert!(status.forbidden);
        assert!(input.forbidden());
        // The text is kept as typed
        assert_eq!(input.text(), "room#1");
    }

    #[test]
    fn test_forbidden_clears_after_edit() {
        let mut input = DestinationInput::new(ForbiddenSet::Pattern);

        input.on_change("a&b");
        assert!(input.forbidden());

        input.on_change("ab");
        assert!(!input.forbidden());
    }

    #[test]
    fn test_every_pattern_character_is_forbidden() {
        for c in ForbiddenSet::Pattern.characters() {
            let text = format!("room{}name", c);
            assert!(ForbiddenSet::Pattern.contains_forbidden(&text), "{:?}", text);
            assert!(!matches_room_pattern(&text), "{:?}", text);
        }
    }

    #[test]
    fn test_dot_only_in_extended_set() {
        assert!(!ForbiddenSet::Pattern.contains_forbidden("v1.2"));
        assert!(ForbiddenSet::PatternAndDot.contains_forbidden("v1.2"));
        assert!(matches_room_pattern("v1.2"));
    }

    #[test]
    fn test_listing() {
        assert_eq!(ForbiddenSet::Pattern.listing(), "?, &, :, ', \", %, #");
        assert_eq!(ForbiddenSet::PatternAndDot.listing(), "?, &, :, ', \", %, #, .");
    }

    #[test]
    fn test_room_pattern() {
        assert!(matches_room_pattern("safe-room-name"));
        assert!(matches_room_pattern("Ünïcode räum"));
        assert!(!matches_room_pattern("bad#name"));
        assert!(!matches_room_pattern(""));
    }

    #[test]
    fn test_generated_names_are_valid() {
        for _ in 0..32 {
            let name = generate_room_name();
            assert!(matches_room_pattern(&name), "{:?}", name);
            assert!(!ForbiddenSet::PatternAndDot.contains_forbidden(&name));
        }
    }

    #[test]
    fn test_room_name_from_bytes() {
        let mut bytes = [0u8; 16];
        assert_eq!(room_name_from_bytes(&bytes), "BraveBadgersAdmireBoldly");

        bytes[0] = 17;
        bytes[1] = 14;
        bytes[2] = 2;
        bytes[3] = 10;
        assert_eq!(room_name_from_bytes(&bytes), "CalmTigersChaseQuickly");
    }
}
