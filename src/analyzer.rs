//! Rhyme analysis entry points.

use crate::clustering::{
    apply_labels, assign_labels, consolidate, rhymable_words, HierarchicalClusterer,
    SimilarityMatrix,
};
use crate::constants::clustering::{SCHEME_THRESHOLD, STATISTICS_THRESHOLD};
use crate::lyrics::{tokenize, Token};
use crate::statistics::{self, Statistics};
use crate::vocabulary::Vocabulary;

/// Runs the scheme and statistics pipelines with configurable thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RhymeAnalyzer {
    /// Merge threshold for rhyme scheme clustering.
    pub scheme_threshold: u8,
    /// Merge threshold for statistics rhyme groups.
    pub statistics_threshold: u8,
}

impl Default for RhymeAnalyzer {
    fn default() -> Self {
        Self {
            scheme_threshold: SCHEME_THRESHOLD,
            statistics_threshold: STATISTICS_THRESHOLD,
        }
    }
}

impl RhymeAnalyzer {
    /// Tokenize lyrics and label every token that belongs to a rhyme group.
    ///
    /// Whitespace tokens are kept, so concatenating every token's text
    /// reproduces the input.
    pub fn rhyme_scheme(&self, lyrics: &str, vocabulary: &Vocabulary) -> Vec<Vec<Token>> {
        let mut lines = tokenize(lyrics, vocabulary);

        let labeled = {
            let words = rhymable_words(&lines);
            if words.is_empty() {
                return lines;
            }
            let matrix = SimilarityMatrix::build(&words);
            let clusters =
                HierarchicalClusterer::new(self.scheme_threshold).cluster(&words, &matrix);
            let groups = consolidate(clusters, &words, &matrix, None);
            assign_labels(&groups, &words, &matrix)
        };

        tracing::debug!(
            "Rhyme scheme: {} labeled groups over {} lines",
            labeled.len(),
            lines.len()
        );
        apply_labels(&mut lines, &labeled);
        lines
    }

    /// Count rhymes and report the strongest rhyme groups.
    pub fn statistics(&self, lyrics: &str, vocabulary: &Vocabulary) -> Statistics {
        let lines = tokenize(lyrics, vocabulary);
        statistics::compute(&lines, self.statistics_threshold)
    }
}
