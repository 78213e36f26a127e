//! Rhyme clustering pipeline.
//!
//! Rhymable words are scored pairwise into a [`SimilarityMatrix`], grouped
//! by average-linkage agglomeration ([`HierarchicalClusterer`]), cleaned up
//! by [`consolidate`], and finally labeled by priority ([`assign_labels`]).

pub mod consolidate;
pub mod hierarchical;
pub mod labels;
pub mod matrix;

pub use consolidate::{consolidate, shares_ending_pattern, ConsolidatedGroup};
pub use hierarchical::{Cluster, HierarchicalClusterer};
pub use labels::{apply_labels, assign_labels, legend, LabeledGroup};
pub use matrix::SimilarityMatrix;

use crate::lyrics::Token;
use crate::phonetics::RhymeKeys;

/// A token that carries rhyme keys, addressed by its position in the lyrics.
#[derive(Debug, Clone, Copy)]
pub struct RhymableWord<'a> {
    /// Line of the source token.
    pub line_index: usize,
    /// Position of the source token within its line.
    pub word_index: usize,
    /// Cleaned word text.
    pub clean: &'a str,
    /// Phonetic keys of the word.
    pub keys: &'a RhymeKeys,
}

/// Collect every rhymable token in reading order.
pub fn rhymable_words(lines: &[Vec<Token>]) -> Vec<RhymableWord<'_>> {
    lines
        .iter()
        .flatten()
        .filter_map(|token| {
            token.rhyme_keys.as_ref().map(|keys| RhymableWord {
                line_index: token.line_index,
                word_index: token.word_index,
                clean: &token.clean,
                keys,
            })
        })
        .collect()
}
