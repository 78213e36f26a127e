//! Second pass over raw clusters: merge duplicates, drop weak pairs, rank.

use super::{Cluster, RhymableWord, SimilarityMatrix};
use crate::constants::clustering::CONSOLIDATION_THRESHOLD;
use crate::phonetics::RhymeKeys;
use crate::similarity;

/// Spelling suffix pairs accepted as rhyming even though the final letters differ.
const CROSS_SUFFIXES: &[(&str, &str)] = &[
    ("ight", "ite"),
    ("y", "ie"),
    ("ay", "eigh"),
    ("oo", "ue"),
    ("oo", "ew"),
    ("ew", "ue"),
    ("ow", "ough"),
    ("o", "ow"),
    ("ee", "ea"),
    ("ain", "ane"),
    ("ine", "ign"),
    ("one", "own"),
    ("ear", "ere"),
];

/// A cluster that survived consolidation.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedGroup {
    /// Indices into the rhymable word list, without duplicates.
    pub members: Vec<usize>,
    /// Keys of the most general contributing centroid.
    pub centroid: RhymeKeys,
    /// The `perfect` key of `centroid`, used as the group's sound.
    pub rhyme_sound: String,
    /// Mean pairwise similarity between members.
    pub cohesion: f64,
}

impl ConsolidatedGroup {
    fn from_cluster(cluster: Cluster) -> Self {
        let mut members = Vec::with_capacity(cluster.members.len());
        for m in cluster.members {
            if !members.contains(&m) {
                members.push(m);
            }
        }
        Self {
            members,
            rhyme_sound: cluster.centroid.perfect.clone(),
            centroid: cluster.centroid,
            cohesion: 0.0,
        }
    }

    /// Fold another group in, keeping the shorter rhyme sound.
    fn absorb(&mut self, other: Self) {
        for m in other.members {
            if !self.members.contains(&m) {
                self.members.push(m);
            }
        }
        if other.centroid.perfect_len() < self.centroid.perfect_len() {
            self.centroid = other.centroid;
            self.rhyme_sound = other.rhyme_sound;
        }
    }

    fn shares_word_with(&self, other: &Self, words: &[RhymableWord<'_>]) -> bool {
        self.members
            .iter()
            .any(|&a| other.members.iter().any(|&b| words[a].clean == words[b].clean))
    }
}

/// Merge overlapping clusters, filter weak pairs and sort by strength.
///
/// Two clusters merge when they share a word or have identical centroids,
/// and their centroids score at least 95. The result is ordered by member
/// count, then cohesion, and truncated to `limit` when given.
pub fn consolidate(
    clusters: Vec<Cluster>,
    words: &[RhymableWord<'_>],
    matrix: &SimilarityMatrix,
    limit: Option<usize>,
) -> Vec<ConsolidatedGroup> {
    let mut slots: Vec<Option<ConsolidatedGroup>> = clusters
        .into_iter()
        .map(|c| Some(ConsolidatedGroup::from_cluster(c)))
        .collect();

    let mut merged = true;
    while merged {
        merged = false;
        for i in 0..slots.len() {
            for j in i + 1..slots.len() {
                let mergeable = match (&slots[i], &slots[j]) {
                    (Some(a), Some(b)) => should_merge(a, b, words),
                    _ => false,
                };
                if !mergeable {
                    continue;
                }
                if let Some(absorbed) = slots[j].take() {
                    if let Some(target) = slots[i].as_mut() {
                        target.absorb(absorbed);
                    }
                }
                merged = true;
            }
        }
    }

    let mut groups: Vec<ConsolidatedGroup> = slots
        .into_iter()
        .flatten()
        .filter(|g| passes_quality_filter(g, words))
        .map(|mut g| {
            g.cohesion = matrix.mean_within(&g.members);
            g
        })
        .collect();

    groups.sort_by(|a, b| {
        b.members
            .len()
            .cmp(&a.members.len())
            .then_with(|| b.cohesion.total_cmp(&a.cohesion))
    });
    if let Some(limit) = limit {
        groups.truncate(limit);
    }
    groups
}

fn should_merge(a: &ConsolidatedGroup, b: &ConsolidatedGroup, words: &[RhymableWord<'_>]) -> bool {
    (a.centroid == b.centroid || a.shares_word_with(b, words))
        && similarity::score(&a.centroid, &b.centroid) >= CONSOLIDATION_THRESHOLD
}

/// Two-member groups must look alike on paper as well as by sound.
fn passes_quality_filter(group: &ConsolidatedGroup, words: &[RhymableWord<'_>]) -> bool {
    match group.members.as_slice() {
        [a, b] => shares_ending_pattern(words[*a].clean, words[*b].clean),
        members => members.len() > 2,
    }
}

/// Whether two spellings end alike: same last two letters, same last
/// letter, or a known cross-spelling pair such as `night`/`kite`.
pub fn shares_ending_pattern(a: &str, b: &str) -> bool {
    let same_suffix = |n| {
        matches!((char_suffix(a, n), char_suffix(b, n)), (Some(x), Some(y)) if x == y)
    };

    same_suffix(2)
        || same_suffix(1)
        || CROSS_SUFFIXES.iter().any(|(x, y)| {
            (a.ends_with(x) && b.ends_with(y)) || (a.ends_with(y) && b.ends_with(x))
        })
}

/// The last `n` characters of `word`, if it has that many.
fn char_suffix(word: &str, n: usize) -> Option<&str> {
    let start = word.char_indices().rev().nth(n.checked_sub(1)?)?.0;
    Some(&word[start..])
}
