//! Pairwise similarity matrix over rhymable words.

use super::RhymableWord;
use crate::constants::scoring::MAX_SCORE;
use crate::similarity;

/// Symmetric matrix of similarity scores with 100 on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<u8>,
}

impl SimilarityMatrix {
    /// Score every pair of words.
    pub fn build(words: &[RhymableWord<'_>]) -> Self {
        let size = words.len();
        let mut scores = vec![0; size * size];

        for (i, a) in words.iter().enumerate() {
            scores[i * size + i] = MAX_SCORE;
            for (j, b) in words.iter().enumerate().skip(i + 1) {
                let s = similarity::score(a.keys, b.keys);
                scores[i * size + j] = s;
                scores[j * size + i] = s;
            }
        }

        Self { size, scores }
    }

    /// Number of words covered.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no words.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Score between words `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.scores[i * self.size + j]
    }

    /// Sum of scores over every member pair across two groups.
    pub fn sum_between(&self, a: &[usize], b: &[usize]) -> u64 {
        a.iter()
            .flat_map(|&i| b.iter().map(move |&j| u64::from(self.get(i, j))))
            .sum()
    }

    /// Mean score over every member pair across two groups.
    pub fn mean_between(&self, a: &[usize], b: &[usize]) -> f64 {
        mean(self.sum_between(a, b), a.len() * b.len())
    }

    /// Mean score over the distinct pairs inside one group.
    ///
    /// Groups with fewer than two members have no pairs and score 0.
    pub fn mean_within(&self, members: &[usize]) -> f64 {
        let mut sum = 0;
        let mut pairs = 0;
        for (n, &i) in members.iter().enumerate() {
            for &j in &members[n + 1..] {
                sum += u64::from(self.get(i, j));
                pairs += 1;
            }
        }
        mean(sum, pairs)
    }
}

#[allow(clippy::cast_precision_loss)] // sums stay far below 2^52
fn mean(sum: u64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
