//! Per-song rhyme statistics.
//!
//! Counts are computed straight from the tokens and pairwise scores; only
//! the reported rhyme groups go through clustering and consolidation.

use std::collections::{BTreeMap, HashMap, HashSet};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analyzer::RhymeAnalyzer;
use crate::clustering::{
    consolidate, Cluster, HierarchicalClusterer, RhymableWord, SimilarityMatrix,
};
use crate::constants::clustering::MAX_STATISTICS_GROUPS;
use crate::constants::statistics::{
    CROSS_END_WORDS, CROSS_INTERNAL_WORDS, CROSS_NEAR, CROSS_PERFECT, CROSS_SOUNDS_LIKE, END_NEAR,
    END_PERFECT, END_SOUNDS_LIKE, INTERNAL_RHYME_THRESHOLD, MIN_CROSS_INTERNAL_LEN,
    MIN_END_WORD_LEN, MIN_INTERNAL_WORD_LEN,
};
use crate::lyrics::Token;
use crate::similarity;
use crate::types::{Label, RhymeGroup};
use crate::vocabulary::Vocabulary;

/// Rhyme summary for one song.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Words with phonetic data.
    pub total_rhymable_words: usize,
    /// Perfect rhyme pairs.
    pub perfect_rhymes: usize,
    /// Near rhyme pairs.
    pub near_rhymes: usize,
    /// Sounds-like pairs.
    pub sounds_like: usize,
    /// Rhyming word pairs inside a single line.
    pub internal_rhymes: usize,
    /// Percentage of words that are rhymable, to one decimal.
    pub rhyme_density: f64,
    /// Strongest rhyme groups, largest first.
    pub rhyme_groups: Vec<RhymeGroup>,
}

/// Rhyme strength classes used by the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RhymeTier {
    /// Strongest class.
    Perfect,
    /// Middle class.
    Near,
    /// Weakest counted class.
    SoundsLike,
}

/// Lower score bounds of each tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Minimum score for [`RhymeTier::Perfect`].
    pub perfect: u8,
    /// Minimum score for [`RhymeTier::Near`].
    pub near: u8,
    /// Minimum score for [`RhymeTier::SoundsLike`].
    pub sounds_like: u8,
}

/// Thresholds for end word against end word.
pub const END_WORD_TIERS: TierThresholds =
    TierThresholds { perfect: END_PERFECT, near: END_NEAR, sounds_like: END_SOUNDS_LIKE };

/// Thresholds for end word against internal word. These are looser than
/// [`END_WORD_TIERS`]; the two sets are kept separate on purpose.
pub const CROSS_TIERS: TierThresholds =
    TierThresholds { perfect: CROSS_PERFECT, near: CROSS_NEAR, sounds_like: CROSS_SOUNDS_LIKE };

impl TierThresholds {
    /// Classify a score, or `None` below the sounds-like bound.
    pub const fn classify(self, score: u8) -> Option<RhymeTier> {
        if score >= self.perfect {
            Some(RhymeTier::Perfect)
        } else if score >= self.near {
            Some(RhymeTier::Near)
        } else if score >= self.sounds_like {
            Some(RhymeTier::SoundsLike)
        } else {
            None
        }
    }
}

impl Statistics {
    fn record(&mut self, tier: RhymeTier) {
        match tier {
            RhymeTier::Perfect => self.perfect_rhymes += 1,
            RhymeTier::Near => self.near_rhymes += 1,
            RhymeTier::SoundsLike => self.sounds_like += 1,
        }
    }
}

/// Compute statistics for tokenized lyrics.
///
/// `group_threshold` is the merge threshold for the rhyme group clustering.
pub fn compute(lines: &[Vec<Token>], group_threshold: u8) -> Statistics {
    let total_words = lines.iter().flatten().filter(|t| t.is_word()).count();
    let mut stats = Statistics::default();

    let mut end_words: Vec<RhymableWord<'_>> = Vec::new();
    let mut internal_words: Vec<RhymableWord<'_>> = Vec::new();

    for line in lines {
        let words = crate::clustering::rhymable_words(std::slice::from_ref(line));
        stats.total_rhymable_words += words.len();

        let Some((last, rest)) = words.split_last() else { continue };
        if last.clean.chars().count() >= MIN_END_WORD_LEN {
            end_words.push(*last);
        }

        let internal: Vec<RhymableWord<'_>> = rest
            .iter()
            .filter(|w| w.clean.chars().count() >= MIN_INTERNAL_WORD_LEN)
            .copied()
            .collect();
        stats.internal_rhymes += count_internal_rhymes(&internal);
        internal_words.extend(internal);
    }

    let mut seen: HashSet<(&str, &str)> = HashSet::new();
    let mut perfect_groups: BTreeMap<&str, Vec<RhymableWord<'_>>> = BTreeMap::new();

    for (i, a) in end_words.iter().enumerate() {
        for b in &end_words[i + 1..] {
            if a.clean == b.clean || !seen.insert(sorted_pair(a.clean, b.clean)) {
                continue;
            }
            let Some(tier) = END_WORD_TIERS.classify(similarity::score(a.keys, b.keys)) else {
                continue;
            };
            stats.record(tier);
            if tier == RhymeTier::Perfect {
                let group = perfect_groups.entry(a.keys.perfect.as_str()).or_default();
                for word in [a, b] {
                    if !group.iter().any(|w| w.clean == word.clean) {
                        group.push(*word);
                    }
                }
            }
        }
    }

    let cross_internal: Vec<&RhymableWord<'_>> = internal_words
        .iter()
        .filter(|w| w.clean.chars().count() >= MIN_CROSS_INTERNAL_LEN)
        .take(CROSS_INTERNAL_WORDS)
        .collect();
    for a in end_words.iter().take(CROSS_END_WORDS) {
        for b in &cross_internal {
            if a.clean == b.clean || !seen.insert(sorted_pair(a.clean, b.clean)) {
                continue;
            }
            if let Some(tier) = CROSS_TIERS.classify(similarity::score(a.keys, b.keys)) {
                stats.record(tier);
            }
        }
    }

    stats.rhyme_groups = rhyme_groups(&perfect_groups, group_threshold);
    stats.rhyme_density = density(stats.total_rhymable_words, total_words);

    tracing::debug!(
        "Statistics: {} rhymable of {total_words} words, {} end words, {} groups",
        stats.total_rhymable_words,
        end_words.len(),
        stats.rhyme_groups.len()
    );
    stats
}

fn count_internal_rhymes(words: &[RhymableWord<'_>]) -> usize {
    words
        .iter()
        .enumerate()
        .flat_map(|(i, a)| words[i + 1..].iter().map(move |b| (a, b)))
        .filter(|(a, b)| {
            a.clean != b.clean && similarity::score(a.keys, b.keys) >= INTERNAL_RHYME_THRESHOLD
        })
        .count()
}

fn sorted_pair<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Cluster the perfect-match groups and report the strongest ones.
fn rhyme_groups(
    perfect_groups: &BTreeMap<&str, Vec<RhymableWord<'_>>>,
    threshold: u8,
) -> Vec<RhymeGroup> {
    let mut table: Vec<RhymableWord<'_>> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut seeds = Vec::with_capacity(perfect_groups.len());

    for words in perfect_groups.values() {
        let Some(first) = words.first() else { continue };
        let members = words
            .iter()
            .map(|word| {
                *index.entry(word.clean).or_insert_with(|| {
                    table.push(*word);
                    table.len() - 1
                })
            })
            .collect();
        seeds.push(Cluster { members, centroid: first.keys.clone() });
    }

    let matrix = SimilarityMatrix::build(&table);
    let clusters = HierarchicalClusterer::new(threshold).cluster_from(seeds, &matrix);

    consolidate(clusters, &table, &matrix, Some(MAX_STATISTICS_GROUPS))
        .iter()
        .enumerate()
        .filter_map(|(rank, group)| {
            let words = group.members.iter().map(|&m| table[m].clean);
            RhymeGroup::from_words(Label::from_rank(rank), words)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)] // word counts are far below 2^52
fn density(rhymable: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (rhymable as f64 / total as f64 * 1000.0).round() / 10.0
}

/// Analyze many songs in parallel, preserving input order.
pub fn analyze_songs<S>(
    songs: &[S],
    vocabulary: &Vocabulary,
    analyzer: &RhymeAnalyzer,
) -> Vec<Statistics>
where
    S: AsRef<str> + Sync,
{
    songs
        .par_iter()
        .map(|lyrics| analyzer.statistics(lyrics.as_ref(), vocabulary))
        .collect()
}

/// Totals across several songs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryStatistics {
    /// Number of songs aggregated.
    pub songs: usize,
    /// Sum of rhymable words.
    pub total_rhymable_words: usize,
    /// Sum of perfect rhymes.
    pub perfect_rhymes: usize,
    /// Sum of near rhymes.
    pub near_rhymes: usize,
    /// Sum of sounds-like pairs.
    pub sounds_like: usize,
    /// Sum of internal rhymes.
    pub internal_rhymes: usize,
    /// Mean of per-song densities, to one decimal.
    pub average_density: f64,
}

impl LibraryStatistics {
    /// Sum counts and average density over per-song statistics.
    #[allow(clippy::cast_precision_loss)] // song counts are small
    pub fn aggregate(songs: &[Statistics]) -> Self {
        let mut total = songs.iter().fold(Self::default(), |mut acc, s| {
            acc.songs += 1;
            acc.total_rhymable_words += s.total_rhymable_words;
            acc.perfect_rhymes += s.perfect_rhymes;
            acc.near_rhymes += s.near_rhymes;
            acc.sounds_like += s.sounds_like;
            acc.internal_rhymes += s.internal_rhymes;
            acc.average_density += s.rhyme_density;
            acc
        });
        if total.songs > 0 {
            total.average_density =
                (total.average_density / total.songs as f64 * 10.0).round() / 10.0;
        }
        total
    }
}
