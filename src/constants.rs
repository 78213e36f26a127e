//! Analysis constants.
//!
//! Centralizes the scoring tiers, thresholds and caps used across the
//! rhyme pipeline.

/// Similarity scoring constants.
pub mod scoring {
    /// Score for identical `perfect` keys.
    pub const PERFECT_MATCH: u8 = 100;

    /// Score for identical `near` keys.
    pub const NEAR_MATCH: u8 = 80;

    /// Score for identical `slant` keys.
    pub const SLANT_MATCH: u8 = 60;

    /// Score for identical `ending` keys.
    pub const ENDING_MATCH: u8 = 45;

    /// Vowel heuristics only apply below this traditional score.
    pub const VOWEL_BONUS_CEILING: u8 = 50;

    /// Candidate score when both core vowels are identical.
    pub const SAME_VOWEL: u8 = 75;

    /// Candidate score when both core vowels share a family.
    pub const VOWEL_FAMILY: u8 = 65;

    /// Multiplier applied to the 0.0-1.0 consonant similarity.
    pub const CONSONANT_WEIGHT: f64 = 10.0;

    /// Per-position credit for consonants in the same articulation group.
    pub const SAME_CONSONANT_GROUP: f64 = 0.7;

    /// Consonant similarity when only one side has trailing consonants.
    pub const ONE_SIDED_CONSONANTS: f64 = 0.3;

    /// Consonant similarity when the trailing clusters differ in length.
    pub const MISMATCHED_CONSONANTS: f64 = 0.2;

    /// Bonus for equal syllable counts.
    pub const SYLLABLE_BONUS: u8 = 5;

    /// Bonus for shared "-ing" endings.
    pub const ING_BONUS: u8 = 10;

    /// Bonus for shared final `D`.
    pub const FINAL_D_BONUS: u8 = 8;

    /// Bonus for shared final `L IY`.
    pub const LY_BONUS: u8 = 8;

    /// Upper bound of every score.
    pub const MAX_SCORE: u8 = 100;
}

/// Clustering constants.
pub mod clustering {
    /// Merge threshold for the rhyme scheme (highlighting) clustering.
    pub const SCHEME_THRESHOLD: u8 = 77;

    /// Merge threshold for the statistics group clustering.
    pub const STATISTICS_THRESHOLD: u8 = 70;

    /// Centroid similarity required before consolidating two clusters.
    pub const CONSOLIDATION_THRESHOLD: u8 = 95;

    /// Maximum rhyme groups reported by the statistics path.
    pub const MAX_STATISTICS_GROUPS: usize = 15;
}

/// Label priority constants.
pub mod labels {
    /// Points per cluster member.
    pub const SIZE_WEIGHT: f64 = 10.0;

    /// Cap on the size component.
    pub const SIZE_CAP: f64 = 50.0;

    /// Weight applied to the mean internal similarity.
    pub const COHESION_WEIGHT: f64 = 0.3;

    /// Points per distinct syllable count among members.
    pub const SYLLABLE_VARIETY_WEIGHT: f64 = 3.0;

    /// Cap on the syllable variety component.
    pub const SYLLABLE_VARIETY_CAP: f64 = 15.0;

    /// Bonus when short (<= 2 syllables) and long (>= 3) words mix.
    pub const MIXED_LENGTH_BONUS: f64 = 5.0;
}

/// Statistics aggregation constants.
pub mod statistics {
    /// Minimum clean length for an end-of-line word.
    pub const MIN_END_WORD_LEN: usize = 3;

    /// Minimum clean length for an internal word.
    pub const MIN_INTERNAL_WORD_LEN: usize = 4;

    /// Minimum score for two internal words on a line to rhyme.
    pub const INTERNAL_RHYME_THRESHOLD: u8 = 75;

    /// End-word pass: perfect rhyme threshold.
    pub const END_PERFECT: u8 = 82;

    /// End-word pass: near rhyme threshold.
    pub const END_NEAR: u8 = 80;

    /// End-word pass: sounds-like threshold.
    pub const END_SOUNDS_LIKE: u8 = 78;

    /// Cross pass: perfect rhyme threshold.
    pub const CROSS_PERFECT: u8 = 82;

    /// Cross pass: near rhyme threshold.
    pub const CROSS_NEAR: u8 = 68;

    /// Cross pass: sounds-like threshold.
    pub const CROSS_SOUNDS_LIKE: u8 = 55;

    /// End words considered by the cross pass.
    pub const CROSS_END_WORDS: usize = 20;

    /// Internal words considered by the cross pass.
    pub const CROSS_INTERNAL_WORDS: usize = 10;

    /// Minimum clean length for an internal word in the cross pass.
    pub const MIN_CROSS_INTERNAL_LEN: usize = 5;
}

/// Async service constants.
pub mod async_tasks {
    /// Channel buffer size for analysis updates.
    pub const CHANNEL_BUFFER_SIZE: usize = 64;
}
