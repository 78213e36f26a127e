//! Greedy average-linkage clustering of rhymable words.
//!
//! Clusters live in an arena of slots; a merge folds the later cluster into
//! the earlier slot and tombstones the later one. Cross-cluster score sums
//! are cached and folded on merge, so each step costs O(k^2) in the number
//! of live clusters rather than re-scoring every member pair.
//!
//! Scaling limit: the matrix and the link cache are both quadratic in the
//! number of rhymable words, and up to n-1 merge steps run. Per-song inputs
//! of a few hundred words are fine; whole corpora are not.

use super::{RhymableWord, SimilarityMatrix};
use crate::phonetics::RhymeKeys;

/// A working group of words tentatively considered to rhyme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    /// Indices into the rhymable word list (and the matrix).
    pub members: Vec<usize>,
    /// Representative keys, fixed to the first member at creation.
    pub centroid: RhymeKeys,
}

impl Cluster {
    /// A cluster holding a single word.
    pub fn singleton(index: usize, keys: &RhymeKeys) -> Self {
        Self { members: vec![index], centroid: keys.clone() }
    }
}

/// Agglomerative clusterer with a fixed merge threshold.
#[derive(Debug, Clone, Copy)]
pub struct HierarchicalClusterer {
    threshold: f64,
}

impl HierarchicalClusterer {
    /// Create a clusterer that merges while the best pair averages at least `threshold`.
    pub fn new(threshold: u8) -> Self {
        Self { threshold: f64::from(threshold) }
    }

    /// Cluster words starting from one singleton per word.
    pub fn cluster(&self, words: &[RhymableWord<'_>], matrix: &SimilarityMatrix) -> Vec<Cluster> {
        let seeds = words
            .iter()
            .enumerate()
            .map(|(i, word)| Cluster::singleton(i, word.keys))
            .collect();
        self.cluster_from(seeds, matrix)
    }

    /// Cluster starting from the given seed clusters.
    ///
    /// Returns the surviving clusters with at least two members, in slot order.
    pub fn cluster_from(&self, seeds: Vec<Cluster>, matrix: &SimilarityMatrix) -> Vec<Cluster> {
        let mut slots: Vec<Option<Cluster>> = seeds.into_iter().map(Some).collect();
        let n = slots.len();

        // links[i][j]: summed member-pair scores between slots i and j
        let mut links = vec![vec![0u64; n]; n];
        for (i, a) in slots.iter().enumerate() {
            let Some(a) = a else { continue };
            for (j, b) in slots.iter().enumerate().skip(i + 1) {
                let Some(b) = b else { continue };
                let sum = matrix.sum_between(&a.members, &b.members);
                links[i][j] = sum;
                links[j][i] = sum;
            }
        }

        let mut merges = 0usize;
        while let Some((i, j, similarity)) = best_pair(&slots, &links) {
            if similarity < self.threshold {
                break;
            }

            let absorbed = slots[j].take();
            if let (Some(target), Some(absorbed)) = (slots[i].as_mut(), absorbed) {
                target.members.extend(absorbed.members);
            }
            for k in 0..n {
                if k != i && k != j {
                    links[i][k] += links[j][k];
                    links[k][i] = links[i][k];
                }
            }

            merges += 1;
            tracing::trace!("Merged cluster {j} into {i} at similarity {similarity:.1}");
        }

        let clusters: Vec<Cluster> = slots
            .into_iter()
            .flatten()
            .filter(|cluster| cluster.members.len() >= 2)
            .collect();
        tracing::debug!(
            "Clustering at threshold {} made {merges} merges, {} clusters kept",
            self.threshold,
            clusters.len()
        );
        clusters
    }
}

/// The live pair with the highest mean similarity; the earliest pair wins ties.
#[allow(clippy::cast_precision_loss)] // link sums stay far below 2^52
fn best_pair(slots: &[Option<Cluster>], links: &[Vec<u64>]) -> Option<(usize, usize, f64)> {
    let mut best: Option<(usize, usize, f64)> = None;

    for (i, a) in slots.iter().enumerate() {
        let Some(a) = a else { continue };
        for (j, b) in slots.iter().enumerate().skip(i + 1) {
            let Some(b) = b else { continue };
            let pairs = (a.members.len() * b.members.len()) as f64;
            let mean = links[i][j] as f64 / pairs;
            if best.is_none_or(|(_, _, top)| mean > top) {
                best = Some((i, j, mean));
            }
        }
    }

    best
}
