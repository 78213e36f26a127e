//! Label assignment: rank consolidated groups and hand out palette labels.

use std::collections::{BTreeMap, BTreeSet};

use super::{ConsolidatedGroup, RhymableWord, SimilarityMatrix};
use crate::constants::labels::{
    COHESION_WEIGHT, MIXED_LENGTH_BONUS, SIZE_CAP, SIZE_WEIGHT, SYLLABLE_VARIETY_CAP,
    SYLLABLE_VARIETY_WEIGHT,
};
use crate::lyrics::Token;
use crate::types::{Label, RhymeGroup};

/// A group with its label and the token addresses it covers.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledGroup {
    /// Assigned label.
    pub label: Label,
    /// Priority the label order was derived from.
    pub priority: f64,
    /// `(line_index, word_index)` of every member token.
    pub tokens: Vec<(usize, usize)>,
}

/// Priority of a group: size, cohesion and syllable diversity.
#[allow(clippy::cast_precision_loss)] // member and syllable counts are small
pub fn priority(
    group: &ConsolidatedGroup,
    words: &[RhymableWord<'_>],
    matrix: &SimilarityMatrix,
) -> f64 {
    let size = (group.members.len() as f64 * SIZE_WEIGHT).min(SIZE_CAP);
    let cohesion = matrix.mean_within(&group.members) * COHESION_WEIGHT;

    let syllables: BTreeSet<usize> = group
        .members
        .iter()
        .map(|&m| words[m].keys.syllable_count())
        .collect();
    let variety = (syllables.len() as f64 * SYLLABLE_VARIETY_WEIGHT).min(SYLLABLE_VARIETY_CAP);
    let mixed = if syllables.iter().any(|&s| s <= 2) && syllables.iter().any(|&s| s >= 3) {
        MIXED_LENGTH_BONUS
    } else {
        0.0
    };

    size + cohesion + variety + mixed
}

/// Label groups in descending priority order.
///
/// Ties keep their consolidation order. Past 46 groups the palette wraps.
pub fn assign_labels(
    groups: &[ConsolidatedGroup],
    words: &[RhymableWord<'_>],
    matrix: &SimilarityMatrix,
) -> Vec<LabeledGroup> {
    let mut ranked: Vec<(f64, &ConsolidatedGroup)> = groups
        .iter()
        .map(|g| (priority(g, words, matrix), g))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .enumerate()
        .map(|(rank, (priority, group))| LabeledGroup {
            label: Label::from_rank(rank),
            priority,
            tokens: group
                .members
                .iter()
                .map(|&m| (words[m].line_index, words[m].word_index))
                .collect(),
        })
        .collect()
}

/// Write labels onto the tokens they cover.
pub fn apply_labels(lines: &mut [Vec<Token>], groups: &[LabeledGroup]) {
    for group in groups {
        for &(line, word) in &group.tokens {
            if let Some(token) = lines.get_mut(line).and_then(|l| l.get_mut(word)) {
                token.rhyme_group = Some(group.label);
            }
        }
    }
}

/// Summarize labeled token lines as rhyme groups, in palette order.
pub fn legend(lines: &[Vec<Token>]) -> Vec<RhymeGroup> {
    let mut by_label: BTreeMap<Label, Vec<&str>> = BTreeMap::new();
    for token in lines.iter().flatten() {
        if let Some(label) = token.rhyme_group {
            by_label.entry(label).or_default().push(&token.clean);
        }
    }

    by_label
        .into_iter()
        .filter_map(|(label, words)| RhymeGroup::from_words(label, words))
        .collect()
}
