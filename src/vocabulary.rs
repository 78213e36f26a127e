//! Word -> phoneme vocabulary loading.
//!
//! The vocabulary is a precomputed asset supplied by the caller. Two on-disk
//! formats are understood:
//! - `.json`: an object mapping words to phoneme strings
//! - anything else: CMU pronouncing dictionary text (`WORD  PH ON EMES`)

use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

/// Lower-cased word -> ARPAbet phoneme string.
pub type Vocabulary = HashMap<String, String>;

/// Load a vocabulary file, picking the format from the extension.
pub fn load(path: &Path) -> Result<Vocabulary> {
    let text = fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))?;

    let vocabulary = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        parse_json(&text).map_err(|e| match e {
            Error::Parse { message, .. } => Error::parse(message, path.to_path_buf()),
            other => other,
        })?
    } else {
        parse_cmudict(&text)
    };

    tracing::info!("Loaded {} pronunciations from {}", vocabulary.len(), path.display());
    Ok(vocabulary)
}

/// Parse a JSON object of `word -> phonemes`, lower-casing the keys.
pub fn parse_json(text: &str) -> Result<Vocabulary> {
    let raw: HashMap<String, String> = serde_json::from_str(text)?;
    Ok(raw.into_iter().map(|(word, phonemes)| (word.to_lowercase(), phonemes)).collect())
}

/// Parse CMU dictionary text.
///
/// Comment lines (`;;;`) and blank lines are ignored. Alternate
/// pronunciations (`WORD(2)`) never replace the first one listed.
pub fn parse_cmudict(text: &str) -> Vocabulary {
    let mut vocabulary = Vocabulary::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(";;;") {
            continue;
        }

        let Some((word, phonemes)) = line.split_once(char::is_whitespace) else {
            tracing::warn!("Skipping malformed dictionary line {}: {line:?}", line_no + 1);
            continue;
        };
        let phonemes = phonemes.trim();
        if phonemes.is_empty() {
            tracing::warn!("Skipping dictionary line {} without phonemes", line_no + 1);
            continue;
        }

        let word = word.split_once('(').map_or(word, |(stem, _)| stem).to_lowercase();
        vocabulary.entry(word).or_insert_with(|| phonemes.to_string());
    }

    vocabulary
}
