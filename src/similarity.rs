//! Phonetic similarity between two words.
//!
//! Scores run from 0 to 100 and blend four heuristics:
//! 1. a traditional tiered key match (perfect, near, slant, ending);
//! 2. a vowel-family fallback for weak traditional matches;
//! 3. a consonant bonus when the vowel fallback hits;
//! 4. small "flow" bonuses for shared rhythm and common endings.
//!
//! The score is symmetric and a word always scores 100 against itself.

use crate::constants::scoring::{
    CONSONANT_WEIGHT, ENDING_MATCH, FINAL_D_BONUS, ING_BONUS, LY_BONUS, MAX_SCORE,
    MISMATCHED_CONSONANTS, NEAR_MATCH, ONE_SIDED_CONSONANTS, PERFECT_MATCH, SAME_CONSONANT_GROUP,
    SAME_VOWEL, SLANT_MATCH, SYLLABLE_BONUS, VOWEL_BONUS_CEILING, VOWEL_FAMILY,
};
use crate::phonetics::{share_vowel_family, ConsonantGroup, RhymeKeys};

/// Score two optional key sets; absent keys never rhyme.
pub fn score_pair(a: Option<&RhymeKeys>, b: Option<&RhymeKeys>) -> u8 {
    match (a, b) {
        (Some(a), Some(b)) => score(a, b),
        _ => 0,
    }
}

/// Score two key sets from 0 to 100.
pub fn score(a: &RhymeKeys, b: &RhymeKeys) -> u8 {
    let mut total = f64::from(traditional_score(a, b));

    // A strong traditional match is never overridden by the coarser vowel heuristic
    if total < f64::from(VOWEL_BONUS_CEILING) {
        if let Some(candidate) = vowel_score(a, b) {
            total = total.max(f64::from(candidate));
            total += consonant_similarity(&a.trailing_consonants(), &b.trailing_consonants())
                * CONSONANT_WEIGHT;
        }
    }

    total += f64::from(flow_bonus(a, b));
    clamp_score(total)
}

/// Tiered key comparison; the first matching tier wins.
pub fn traditional_score(a: &RhymeKeys, b: &RhymeKeys) -> u8 {
    if a.perfect == b.perfect {
        PERFECT_MATCH
    } else if a.near == b.near {
        NEAR_MATCH
    } else if a.slant == b.slant {
        SLANT_MATCH
    } else if a.ending == b.ending {
        ENDING_MATCH
    } else {
        0
    }
}

/// Candidate score from the core vowels, if they are identical or related.
fn vowel_score(a: &RhymeKeys, b: &RhymeKeys) -> Option<u8> {
    let (va, vb) = (a.core_vowel()?, b.core_vowel()?);
    if va == vb {
        Some(SAME_VOWEL)
    } else if share_vowel_family(va, vb) {
        Some(VOWEL_FAMILY)
    } else {
        None
    }
}

/// Similarity of two trailing consonant clusters, from 0.0 to 1.0.
pub fn consonant_similarity(a: &[&str], b: &[&str]) -> f64 {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => 1.0,
        (true, false) | (false, true) => ONE_SIDED_CONSONANTS,
        _ if a.len() != b.len() => MISMATCHED_CONSONANTS,
        _ => {
            let total: f64 = a
                .iter()
                .zip(b)
                .map(|(x, y)| {
                    if x == y {
                        1.0
                    } else if ConsonantGroup::of(x).is_some()
                        && ConsonantGroup::of(x) == ConsonantGroup::of(y)
                    {
                        SAME_CONSONANT_GROUP
                    } else {
                        0.0
                    }
                })
                .sum();
            #[allow(clippy::cast_precision_loss)] // clusters are a handful of phonemes
            let len = a.len() as f64;
            total / len
        }
    }
}

/// Rhythm and ending bonuses, applied to every pair.
pub fn flow_bonus(a: &RhymeKeys, b: &RhymeKeys) -> u8 {
    let mut bonus = 0;

    if a.syllable_count() == b.syllable_count() {
        bonus += SYLLABLE_BONUS;
    }
    if ends_in_ing(a) && ends_in_ing(b) {
        bonus += ING_BONUS;
    }
    if a.ends_with_bases(&["D"]) && b.ends_with_bases(&["D"]) {
        bonus += FINAL_D_BONUS;
    }
    if a.ends_with_bases(&["L", "IY"]) && b.ends_with_bases(&["L", "IY"]) {
        bonus += LY_BONUS;
    }

    bonus
}

fn ends_in_ing(keys: &RhymeKeys) -> bool {
    keys.ends_with_bases(&["IH", "NG"]) || keys.ends_with_bases(&["IY", "NG"])
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100 first
fn clamp_score(total: f64) -> u8 {
    total.clamp(0.0, f64::from(MAX_SCORE)).round() as u8
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::phonetics::extract_rhyme_keys;

    fn keys(phonemes: &str) -> RhymeKeys {
        extract_rhyme_keys(phonemes).unwrap()
    }

    #[test]
    fn test_perfect_match_scores_100() {
        assert_eq!(score(&keys("K AE1 T"), &keys("HH AE1 T")), 100);
    }

    #[test]
    fn test_self_similarity() {
        for p in ["K AE1 T", "B Y UW1 T AH0 F AH0 L", "S IH1 NG IH0 NG", "DH AH0"] {
            assert_eq!(score(&keys(p), &keys(p)), 100, "{p}");
        }
    }

    #[test]
    fn test_missing_keys_score_zero() {
        let cat = keys("K AE1 T");
        assert_eq!(score_pair(None, Some(&cat)), 0);
        assert_eq!(score_pair(Some(&cat), None), 0);
        assert_eq!(score_pair(None, None), 0);
        assert_eq!(score_pair(Some(&cat), Some(&cat)), 100);
    }

    #[test]
    fn test_traditional_tiers() {
        // Shared "near" key requires a shared perfect key in practice, so
        // exercise the lower tiers directly.
        assert_eq!(traditional_score(&keys("K AE1 T"), &keys("B OW1 T")), 45);
        assert_eq!(traditional_score(&keys("B IH1 G ER0"), &keys("S AO1 G ER0")), 60);
        assert_eq!(traditional_score(&keys("K AE1 T"), &keys("D AO1 G")), 0);
    }

    #[test]
    fn test_ending_only_match_adds_syllable_bonus() {
        // 45 from the shared T, vowels unrelated, +5 for equal syllables
        assert_eq!(score(&keys("K AE1 T"), &keys("B OW1 T")), 50);
    }

    #[test]
    fn test_same_vowel_with_related_consonants() {
        // AE == AE -> 75, T/D both stops -> 0.7 * 10, +5 syllables, no shared D ending
        assert_eq!(score(&keys("K AE1 T"), &keys("HH AE1 D")), 87);
    }

    #[test]
    fn test_vowel_family_match() {
        // UW/UH family -> 65, both end in D -> 1.0 * 10 + 5 + 8
        assert_eq!(score(&keys("F UW1 D"), &keys("G UH1 D")), 88);
    }

    #[test]
    fn test_core_vowel_is_last_vowel() {
        // only IY0 is shared (45); IY == IY -> 75, both open -> 1.0 * 10, +5 syllables
        assert_eq!(score(&keys("HH AE1 P IY0"), &keys("S IH1 T IY0")), 90);
    }

    #[test]
    fn test_ly_bonus() {
        // slant "L IY0" -> 60, equal syllables +5, shared L IY ending +8
        assert_eq!(score(&keys("K W IH1 K L IY0"), &keys("S L OW1 L IY0")), 73);
    }

    #[test]
    fn test_strong_match_not_overridden_by_vowel_heuristic() {
        // slant match (60) is above the vowel ceiling; no consonant bonus applies
        let a = keys("B IH1 G ER0");
        let b = keys("S AO1 G ER0");
        assert_eq!(score(&a, &b), 65);
    }

    #[test]
    fn test_ing_bonus() {
        let singing = keys("S IH1 NG IH0 NG");
        let bringing = keys("B R IH1 NG IH0 NG");
        assert_eq!(score(&singing, &bringing), 100);

        let running = keys("R AH1 N IH0 NG");
        let falling = keys("F AO1 L IH0 NG");
        // slant "IH0 NG" -> 60, equal syllables +5, -ing +10
        assert_eq!(score(&running, &falling), 75);
    }

    #[test]
    fn test_consonant_similarity_cases() {
        assert!((consonant_similarity(&[], &[]) - 1.0).abs() < f64::EPSILON);
        assert!((consonant_similarity(&["T"], &[]) - 0.3).abs() < f64::EPSILON);
        assert!((consonant_similarity(&["N", "D"], &["T"]) - 0.2).abs() < f64::EPSILON);
        assert!((consonant_similarity(&["N", "D"], &["M", "D"]) - 0.85).abs() < 1e-9);
        assert!((consonant_similarity(&["T"], &["L"]) - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_is_symmetric() {
        let samples = [
            "K AE1 T", "HH AE1 D", "B OW1 T", "F UW1 D", "G UH1 D", "S IH1 NG IH0 NG",
            "L AH1 V", "AH0 B AH1 V", "HH AE1 P IY0", "L AY1 F", "N AY1 T", "F L AY1",
        ];
        for a in samples {
            for b in samples {
                assert_eq!(score(&keys(a), &keys(b)), score(&keys(b), &keys(a)), "{a} / {b}");
            }
        }
    }
}
