//! Per-character pronunciation records
//!
//! A `CharacterRecord` is one slot of a decomposed word: the character itself,
//! its plain pinyin letters and its tone digit.

use serde::{Serialize, Serializer};
use std::fmt;

/// Mandarin tone digit (1-4)
///
/// The neutral tone and unresolved characters have no `Tone`; they are
/// represented as `Option::<Tone>::None` wherever a tone is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tone(u8);

impl Tone {
    /// Create a tone from its digit
    ///
    /// Returns `None` unless `digit` is in 1..=4.
    #[must_use]
    pub const fn new(digit: u8) -> Option<Self> {
        match digit {
            1..=4 => Some(Self(digit)),
            _ => None,
        }
    }

    /// Extract the tone from numbered pinyin such as `"chun1"` or `"zho1ng"`
    ///
    /// Uses the first digit 1-4 found anywhere in the string.
    ///
    /// # Examples
    /// ```
    /// use sizi_wordle::core::Tone;
    ///
    /// assert_eq!(Tone::extract("chun1"), Tone::new(1));
    /// assert_eq!(Tone::extract("xia4"), Tone::new(4));
    /// assert_eq!(Tone::extract("de"), None);
    /// assert_eq!(Tone::extract("de5"), None);
    /// ```
    #[must_use]
    pub fn extract(numbered: &str) -> Option<Self> {
        numbered
            .chars()
            .find(|c| matches!(c, '1'..='4'))
            .and_then(|c| c.to_digit(10))
            .and_then(|d| Self::new(d as u8))
    }

    /// Get the tone digit (1-4)
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serialize an optional tone as `"1"`..`"4"`, or `""` when absent
pub(crate) fn serialize_tone<S: Serializer>(
    tone: &Option<Tone>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match tone {
        Some(tone) => serializer.collect_str(tone),
        None => serializer.serialize_str(""),
    }
}

/// One decomposed character: the character, its plain letters and its tone
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterRecord {
    character: char,
    letters: String,
    #[serde(serialize_with = "serialize_tone")]
    tone: Option<Tone>,
}

impl CharacterRecord {
    #[must_use]
    pub fn new(character: char, letters: impl Into<String>, tone: Option<Tone>) -> Self {
        Self {
            character,
            letters: letters.into(),
            tone,
        }
    }

    /// Record for a character the transliteration service could not resolve
    #[must_use]
    pub const fn unknown(character: char) -> Self {
        Self {
            character,
            letters: String::new(),
            tone: None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn character(&self) -> char {
        self.character
    }

    /// Plain romanization letters, without tone marks
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub const fn tone(&self) -> Option<Tone> {
        self.tone
    }

    /// True if the record carries neither letters nor a tone
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.letters.is_empty() && self.tone.is_none()
    }
}

impl fmt::Display for CharacterRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Some(tone) => write!(f, "{} - {} - tone {tone}", self.character, self.letters),
            None => write!(f, "{} - {} - neutral", self.character, self.letters),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_range() {
        assert_eq!(Tone::new(0), None);
        assert_eq!(Tone::new(1).map(Tone::digit), Some(1));
        assert_eq!(Tone::new(4).map(Tone::digit), Some(4));
        assert_eq!(Tone::new(5), None);
    }

    #[test]
    fn tone_extract_uses_first_valid_digit() {
        assert_eq!(Tone::extract("zho1ng"), Tone::new(1));
        assert_eq!(Tone::extract("a5b3"), Tone::new(3));
        assert_eq!(Tone::extract(""), None);
    }

    #[test]
    fn record_accessors() {
        let record = CharacterRecord::new('春', "chun", Tone::new(1));
        assert_eq!(record.character(), '春');
        assert_eq!(record.letters(), "chun");
        assert_eq!(record.tone(), Tone::new(1));
        assert!(!record.is_unknown());
    }

    #[test]
    fn unknown_record_is_empty() {
        let record = CharacterRecord::unknown('㐀');
        assert_eq!(record.letters(), "");
        assert_eq!(record.tone(), None);
        assert!(record.is_unknown());
    }

    #[test]
    fn record_serializes_tone_as_string() {
        let record = CharacterRecord::new('夏', "xia", Tone::new(4));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["character"], "夏");
        assert_eq!(json["letters"], "xia");
        assert_eq!(json["tone"], "4");

        let neutral = CharacterRecord::new('的', "de", None);
        let json = serde_json::to_value(&neutral).unwrap();
        assert_eq!(json["tone"], "");
    }

    #[test]
    fn record_display() {
        let record = CharacterRecord::new('冬', "dong", Tone::new(1));
        assert_eq!(record.to_string(), "冬 - dong - tone 1");
    }
}
