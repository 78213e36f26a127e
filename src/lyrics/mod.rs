//! Lyrics processing module.
//!
//! Splits lyric text into lines and whitespace-preserving tokens and attaches
//! phonetic data from a word -> phoneme vocabulary.

pub mod stopwords;
pub mod tokenizer;

pub use stopwords::is_stopword;
pub use tokenizer::{clean_word, tokenize, Token};
