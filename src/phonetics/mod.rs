//! Phonetic primitives for rhyme detection.
//!
//! Phoneme strings use ARPAbet notation (`"K AE1 T"`), as found in the CMU
//! pronouncing dictionary. Vowels carry a stress digit: `0` unstressed,
//! `1` primary, `2` secondary.

pub mod inventory;
pub mod keys;

// Re-export commonly used items
pub use inventory::{
    base_phoneme, is_stressed, is_vowel, share_vowel_family, ConsonantGroup, VowelFamily,
};
pub use keys::{extract_rhyme_keys, RhymeKeys};
