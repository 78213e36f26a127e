//! Core type definitions for compile-time safety.
//!
//! Rhyme group labels are a newtype over an index into a fixed palette so a
//! label can never name something outside it. [`RhymeGroup`] is the public
//! summary of one labeled group.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display identifiers handed out to rhyme groups, in priority order.
pub const LABEL_PALETTE: [&str; 46] = [
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
    "1", "2", "3", "4", "5", "6", "7", "8", "9", "10",
    "11", "12", "13", "14", "15", "16", "17", "18", "19", "20",
];

/// Identifier of a rhyme group (`A`..`Z`, then `1`..`20`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label(u8);

impl Label {
    /// Label for the group at `rank` in priority order.
    ///
    /// Ranks past the end of the palette wrap around, so two groups can
    /// share a label once more than 46 groups exist.
    pub fn from_rank(rank: usize) -> Self {
        Self(u8::try_from(rank % LABEL_PALETTE.len()).unwrap_or(0))
    }

    /// Parse a palette entry such as `"C"` or `"12"`.
    pub fn parse(s: &str) -> Option<Self> {
        LABEL_PALETTE
            .iter()
            .position(|entry| *entry == s)
            .map(Self::from_rank)
    }

    /// Get the display string.
    pub fn as_str(self) -> &'static str {
        LABEL_PALETTE[usize::from(self.0)]
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

impl TryFrom<String> for Label {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s).ok_or_else(|| format!("unknown rhyme label: {s}"))
    }
}

/// A labeled group of two or more rhyming words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RhymeGroup {
    /// Display identifier.
    pub label: Label,
    /// Distinct member words in first-seen order.
    pub words: Vec<String>,
    /// Number of distinct words (always `words.len()`).
    pub count: usize,
}

impl RhymeGroup {
    /// Build a group from words, dropping duplicates.
    ///
    /// Returns `None` when fewer than two distinct words remain.
    pub fn from_words<I, S>(label: Label, words: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for word in words {
            let word = word.into();
            if !distinct.contains(&word) {
                distinct.push(word);
            }
        }
        (distinct.len() >= 2).then(|| Self { label, count: distinct.len(), words: distinct })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn palette_order() {
        assert_eq!(Label::from_rank(0).as_str(), "A");
        assert_eq!(Label::from_rank(25).as_str(), "Z");
        assert_eq!(Label::from_rank(26).as_str(), "1");
        assert_eq!(Label::from_rank(45).as_str(), "20");
    }

    #[test]
    fn ranks_wrap_around_palette() {
        assert_eq!(Label::from_rank(46), Label::from_rank(0));
        assert_eq!(Label::from_rank(47).as_str(), "B");
    }

    #[test]
    fn parse_round_trips_display() {
        let label = Label::parse("14").unwrap();
        assert_eq!(label.to_string(), "14");
        assert!(Label::parse("21").is_none());
        assert!(Label::parse("a").is_none());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Label::from_rank(2)).unwrap();
        assert_eq!(json, "\"C\"");
        let back: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Label::from_rank(2));
        assert!(serde_json::from_str::<Label>("\"?\"").is_err());
    }

    #[test]
    fn rhyme_group_deduplicates_words() {
        let group =
            RhymeGroup::from_words(Label::from_rank(0), ["night", "light", "night"]).unwrap();
        assert_eq!(group.words, vec!["night", "light"]);
        assert_eq!(group.count, 2);
    }

    #[test]
    fn rhyme_group_needs_two_distinct_words() {
        assert!(RhymeGroup::from_words(Label::from_rank(0), ["love", "love"]).is_none());
        assert!(RhymeGroup::from_words(Label::from_rank(0), Vec::<String>::new()).is_none());
    }
}
