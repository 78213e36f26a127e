//! `RhymeFlow` - phonetic rhyme analysis for song lyrics.
//!
//! Words are looked up in a pronunciation vocabulary, reduced to rhyme keys,
//! scored pairwise, and clustered into labeled rhyme groups. A second pipeline
//! counts perfect, near, sounds-like and internal rhymes for a song.

pub mod analyzer;
pub mod clustering;
pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod phonetics;
pub mod services;
pub mod similarity;
pub mod statistics;
pub mod types;
pub mod vocabulary;

pub use analyzer::RhymeAnalyzer;
pub use lyrics::Token;
pub use phonetics::{extract_rhyme_keys, RhymeKeys};
pub use statistics::{LibraryStatistics, Statistics};
pub use types::{Label, RhymeGroup};
pub use vocabulary::Vocabulary;

/// Label every token of `lyrics` with its rhyme group, using default thresholds.
pub fn analyze_rhyme_scheme(lyrics: &str, vocabulary: &Vocabulary) -> Vec<Vec<Token>> {
    RhymeAnalyzer::default().rhyme_scheme(lyrics, vocabulary)
}

/// Rhyme statistics for `lyrics`, using default thresholds.
pub fn analyze_rhyme_statistics(lyrics: &str, vocabulary: &Vocabulary) -> Statistics {
    RhymeAnalyzer::default().statistics(lyrics, vocabulary)
}
