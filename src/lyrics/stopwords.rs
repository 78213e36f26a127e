//! Common English function words excluded from rhyme analysis.

use std::collections::HashSet;

use lazy_static::lazy_static;

lazy_static! {
    /// Frozen stopword set, built on first use
    static ref STOPWORDS: HashSet<&'static str> = [
        // Articles and conjunctions
        "a", "an", "the", "and", "or", "but", "nor", "so", "yet", "if", "than", "then",
        "as", "because", "while", "though",
        // Prepositions
        "of", "at", "by", "for", "with", "about", "to", "from", "in", "on", "up", "out",
        "into", "onto", "over", "under", "off", "down", "through",
        // Pronouns
        "i", "me", "my", "mine", "we", "us", "our", "you", "your", "yours", "he", "him",
        "his", "she", "her", "hers", "it", "its", "they", "them", "their", "this", "that",
        "these", "those", "what", "which", "who", "whom", "whose",
        // Auxiliaries
        "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had",
        "do", "does", "did", "can", "could", "will", "would", "shall", "should", "may",
        "might", "must",
        // Contractions; a trailing 's is stripped before lookup
        "i'm", "don't", "can't", "won't", "i'll", "you're", "we're", "they're", "i've",
        // Adverbs and determiners
        "not", "no", "all", "any", "some", "just", "very", "too", "only", "here", "there",
        "when", "where", "why", "how",
    ]
    .into_iter()
    .collect();
}

/// Whether a cleaned, lower-cased word is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}
