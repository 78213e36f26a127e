//! Lyrics tokenization.
//!
//! Every character of the input ends up in exactly one token, so joining the
//! `text` of all tokens reproduces the lyrics byte for byte.

// Allow expect for compile-time constant regex patterns in LazyLock blocks
#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::stopwords::is_stopword;
use crate::phonetics::{extract_rhyme_keys, RhymeKeys};
use crate::types::Label;
use crate::vocabulary::Vocabulary;

/// Runs of whitespace or of anything else.
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+|\S+").expect("valid regex: RE_TOKEN")
});

/// Characters dropped when cleaning a word.
static RE_STRIP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\p{L}\p{N}'\-]").expect("valid regex: RE_STRIP")
});

/// One whitespace run or word from the lyrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Verbatim text, including punctuation and line breaks.
    pub text: String,
    /// Normalized word, empty for whitespace and pure punctuation.
    pub clean: String,
    /// Line the token belongs to.
    pub line_index: usize,
    /// Position within the line's token list.
    pub word_index: usize,
    /// Phonetic keys, absent for anything that cannot rhyme.
    pub rhyme_keys: Option<RhymeKeys>,
    /// Rhyme group assigned by the scheme analysis.
    pub rhyme_group: Option<Label>,
}

impl Token {
    /// Whether the token carries phonetic data.
    pub const fn is_rhymable(&self) -> bool {
        self.rhyme_keys.is_some()
    }

    /// Whether the token is a whitespace run.
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Whether the token counts as a word (non-empty after cleaning).
    pub fn is_word(&self) -> bool {
        !self.clean.is_empty()
    }
}

/// Normalize a raw word: lowercase, keep letters, digits, apostrophes and
/// hyphens, then drop a trailing possessive `'s`.
pub fn clean_word(raw: &str) -> String {
    let lower = raw.to_lowercase().replace('\u{2019}', "'");
    let stripped = RE_STRIP.replace_all(&lower, "");
    stripped.strip_suffix("'s").unwrap_or(&stripped).to_string()
}

/// Split lyrics into lines of tokens, attaching rhyme keys from the vocabulary.
///
/// Empty lyrics produce no lines. Words missing from the vocabulary are kept
/// as non-rhymable tokens.
pub fn tokenize(lyrics: &str, vocabulary: &Vocabulary) -> Vec<Vec<Token>> {
    lyrics
        .split_inclusive('\n')
        .enumerate()
        .map(|(line_index, line)| tokenize_line(line, line_index, vocabulary))
        .collect()
}

fn tokenize_line(line: &str, line_index: usize, vocabulary: &Vocabulary) -> Vec<Token> {
    RE_TOKEN
        .find_iter(line)
        .enumerate()
        .map(|(word_index, m)| {
            let text = m.as_str();
            let clean = if text.trim().is_empty() {
                String::new()
            } else {
                clean_word(text)
            };
            let rhyme_keys = if clean.is_empty() || is_stopword(&clean) {
                None
            } else {
                lookup_phonemes(&clean, vocabulary).and_then(extract_rhyme_keys)
            };

            Token {
                text: text.to_string(),
                clean,
                line_index,
                word_index,
                rhyme_keys,
                rhyme_group: None,
            }
        })
        .collect()
}

/// Look up a cleaned word, retrying without edge apostrophes and hyphens
/// (`singin'`, `'cause`).
fn lookup_phonemes<'v>(clean: &str, vocabulary: &'v Vocabulary) -> Option<&'v str> {
    vocabulary
        .get(clean)
        .or_else(|| {
            let trimmed = clean.trim_matches(['\'', '-']);
            (trimmed != clean && !trimmed.is_empty())
                .then(|| vocabulary.get(trimmed))
                .flatten()
        })
        .map(String::as_str)
}
