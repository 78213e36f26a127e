//! Rhyme key extraction.
//!
//! A phoneme string is reduced to several keys of decreasing specificity.
//! Two words rhyme more strongly the more specific the key they share.

use serde::{Deserialize, Serialize};

use super::inventory::{base_phoneme, has_stress_digit, is_stressed, is_vowel};

/// Comparison keys derived from one phoneme string.
///
/// Every key is a space-joined run of phonemes taken from the end of the
/// pronunciation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RhymeKeys {
    /// From the last stressed vowel onward (`"AE1 T"` for `cat`).
    pub perfect: String,
    /// One phoneme earlier than `perfect` (`"K AE1 T"`).
    pub near: String,
    /// Last two phonemes.
    pub slant: String,
    /// Last phoneme.
    pub ending: String,
    /// Entire pronunciation.
    pub full: String,
}

impl RhymeKeys {
    /// Iterate the phonemes of the full pronunciation.
    pub fn phonemes(&self) -> impl Iterator<Item = &str> {
        self.full.split_whitespace()
    }

    /// Base form of the last vowel (`"IY"` for `happy`).
    pub fn core_vowel(&self) -> Option<&str> {
        let phonemes: Vec<&str> = self.phonemes().collect();
        last_vowel(&phonemes).map(|i| base_phoneme(phonemes[i]))
    }

    /// Consonants after the last vowel (`["N", "D"]` for `found`).
    pub fn trailing_consonants(&self) -> Vec<&str> {
        let phonemes: Vec<&str> = self.phonemes().collect();
        let start = last_vowel(&phonemes).map_or(0, |i| i + 1);
        phonemes[start..].to_vec()
    }

    /// Syllable estimate: the number of phonemes carrying a stress digit.
    pub fn syllable_count(&self) -> usize {
        self.phonemes().filter(|p| has_stress_digit(p)).count()
    }

    /// Number of phonemes in the `perfect` key.
    pub fn perfect_len(&self) -> usize {
        self.perfect.split_whitespace().count()
    }

    /// Whether the pronunciation ends with the given base phonemes.
    pub fn ends_with_bases(&self, suffix: &[&str]) -> bool {
        let phonemes: Vec<&str> = self.phonemes().collect();
        phonemes.len() >= suffix.len()
            && phonemes[phonemes.len() - suffix.len()..]
                .iter()
                .zip(suffix)
                .all(|(p, want)| base_phoneme(p) == *want)
    }
}

/// Index of the rightmost stressed phoneme, falling back to the rightmost vowel.
fn rhyme_anchor(phonemes: &[&str]) -> Option<usize> {
    phonemes
        .iter()
        .rposition(|p| is_stressed(p))
        .or_else(|| phonemes.iter().rposition(|p| is_vowel(p)))
}

/// Index of the rightmost vowel, stressed or not.
fn last_vowel(phonemes: &[&str]) -> Option<usize> {
    phonemes.iter().rposition(|p| is_stressed(p) || is_vowel(p))
}

/// Extract rhyme keys from a phoneme string such as `"K AE1 T"`.
///
/// Returns `None` for empty input or a pronunciation without any vowel.
pub fn extract_rhyme_keys(phoneme_string: &str) -> Option<RhymeKeys> {
    let phonemes: Vec<&str> = phoneme_string.split_whitespace().collect();
    let last = phonemes.len().checked_sub(1)?;
    let anchor = rhyme_anchor(&phonemes)?;

    Some(RhymeKeys {
        perfect: phonemes[anchor..].join(" "),
        near: phonemes[anchor.saturating_sub(1)..].join(" "),
        slant: phonemes[phonemes.len().saturating_sub(2)..].join(" "),
        ending: phonemes[last].to_string(),
        full: phonemes.join(" "),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_extract_single_syllable() {
        let keys = extract_rhyme_keys("K AE1 T").unwrap();
        assert_eq!(keys.perfect, "AE1 T");
        assert_eq!(keys.near, "K AE1 T");
        assert_eq!(keys.slant, "AE1 T");
        assert_eq!(keys.ending, "T");
        assert_eq!(keys.full, "K AE1 T");
    }

    #[test]
    fn test_extract_uses_rightmost_stress() {
        // "understand": secondary stress early, primary on the last syllable
        let keys = extract_rhyme_keys("AH2 N D ER0 S T AE1 N D").unwrap();
        assert_eq!(keys.perfect, "AE1 N D");
        assert_eq!(keys.near, "T AE1 N D");
        assert_eq!(keys.slant, "N D");
        assert_eq!(keys.ending, "D");
    }

    #[test]
    fn test_extract_falls_back_to_unstressed_vowel() {
        let keys = extract_rhyme_keys("DH AH0").unwrap();
        assert_eq!(keys.perfect, "AH0");
        assert_eq!(keys.near, "DH AH0");
    }

    #[test]
    fn test_extract_vowel_at_start() {
        let keys = extract_rhyme_keys("AY1").unwrap();
        assert_eq!(keys.perfect, "AY1");
        assert_eq!(keys.near, "AY1");
        assert_eq!(keys.slant, "AY1");
        assert_eq!(keys.ending, "AY1");
    }

    #[test]
    fn test_extract_rejects_empty_and_vowelless() {
        assert!(extract_rhyme_keys("").is_none());
        assert!(extract_rhyme_keys("   ").is_none());
        assert!(extract_rhyme_keys("HH M M").is_none());
    }

    #[test]
    fn test_extract_normalizes_spacing() {
        let keys = extract_rhyme_keys("  K   AE1 T ").unwrap();
        assert_eq!(keys.full, "K AE1 T");
    }

    #[test]
    fn test_core_vowel_and_trailing_consonants() {
        let keys = extract_rhyme_keys("F AW1 N D").unwrap();
        assert_eq!(keys.core_vowel(), Some("AW"));
        assert_eq!(keys.trailing_consonants(), vec!["N", "D"]);

        let open = extract_rhyme_keys("S IY1").unwrap();
        assert!(open.trailing_consonants().is_empty());
    }

    #[test]
    fn test_core_vowel_after_unstressed_vowel() {
        // "happy": rhyme anchored on AE1, but the core vowel is the final IY0
        let keys = extract_rhyme_keys("HH AE1 P IY0").unwrap();
        assert_eq!(keys.perfect, "AE1 P IY0");
        assert_eq!(keys.core_vowel(), Some("IY"));
        assert!(keys.trailing_consonants().is_empty());

        let keys = extract_rhyme_keys("B IH1 G ER0").unwrap();
        assert_eq!(keys.core_vowel(), Some("ER"));
        assert!(keys.trailing_consonants().is_empty());
    }

    #[test]
    fn test_syllable_count() {
        assert_eq!(extract_rhyme_keys("K AE1 T").unwrap().syllable_count(), 1);
        assert_eq!(
            extract_rhyme_keys("B Y UW1 T AH0 F AH0 L").unwrap().syllable_count(),
            3
        );
    }

    #[test]
    fn test_ends_with_bases() {
        let keys = extract_rhyme_keys("S IH1 NG IH0 NG").unwrap();
        assert!(keys.ends_with_bases(&["IH", "NG"]));
        assert!(!keys.ends_with_bases(&["IY", "NG"]));
        assert!(!keys.ends_with_bases(&["A", "B", "C", "D", "E", "F"]));
    }
}
