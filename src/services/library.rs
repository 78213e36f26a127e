//! Lyrics library: a directory of `.txt` songs.
//!
//! Every `.txt` file under the root (recursively) becomes a [`Song`] titled
//! by its file stem. Files that cannot be read are skipped with a warning.

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::analyzer::RhymeAnalyzer;
use crate::error::{Error, Result};
use crate::statistics::{analyze_songs, LibraryStatistics, Statistics};
use crate::vocabulary::Vocabulary;

/// A single song loaded from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Display title (the file stem).
    pub title: String,
    /// Source file.
    pub path: PathBuf,
    /// Full lyrics text.
    pub lyrics: String,
}

/// Statistics for one song of a library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongReport {
    /// Song title.
    pub title: String,
    /// Per-song statistics.
    pub statistics: Statistics,
}

/// Per-song statistics plus library totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryReport {
    /// Songs in title order.
    pub songs: Vec<SongReport>,
    /// Aggregated totals.
    pub totals: LibraryStatistics,
}

/// Songs scanned from a directory, sorted by title.
#[derive(Debug, Clone)]
pub struct LyricsLibrary {
    root: PathBuf,
    songs: Vec<Song>,
}

impl LyricsLibrary {
    /// Scan `root` for `.txt` lyrics files.
    pub fn scan(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(Error::Library(format!("{} is not a directory", root.display())));
        }

        let start = Instant::now();
        let mut songs: Vec<Song> = WalkDir::new(&root)
            .follow_links(true)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && is_lyrics_file(e.path()))
            .filter_map(|entry| load_song(entry.path()))
            .collect();
        songs.sort_by(|a, b| a.title.cmp(&b.title));

        tracing::info!(
            "Loaded {} songs from {} in {:?}",
            songs.len(),
            root.display(),
            start.elapsed()
        );
        Ok(Self { root, songs })
    }

    /// Directory the library was scanned from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All songs, sorted by title.
    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Number of songs.
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Whether the library holds no songs.
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Find a song by title, ignoring case.
    pub fn find(&self, title: &str) -> Option<&Song> {
        let wanted = title.trim().to_lowercase();
        self.songs.iter().find(|song| song.title.to_lowercase() == wanted)
    }

    /// Analyze every song in parallel and aggregate the results.
    pub fn analyze(&self, vocabulary: &Vocabulary, analyzer: &RhymeAnalyzer) -> LibraryReport {
        let lyrics: Vec<&str> = self.songs.iter().map(|s| s.lyrics.as_str()).collect();
        let statistics = analyze_songs(&lyrics, vocabulary, analyzer);
        let totals = LibraryStatistics::aggregate(&statistics);

        let songs = self
            .songs
            .iter()
            .zip(statistics)
            .map(|(song, statistics)| SongReport { title: song.title.clone(), statistics })
            .collect();
        LibraryReport { songs, totals }
    }
}

fn is_lyrics_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("txt"))
}

fn load_song(path: &Path) -> Option<Song> {
    let title = path.file_stem()?.to_str()?.trim().to_string();
    match fs_err::read_to_string(path) {
        Ok(lyrics) => Some(Song { title, path: path.to_path_buf(), lyrics }),
        Err(e) => {
            tracing::warn!("Skipping unreadable lyrics file: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn write(dir: &Path, name: &str, text: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, text).unwrap();
    }

    #[test]
    fn test_scan_finds_txt_files_sorted_by_title() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "Zebra Song.txt", "z");
        write(dir.path(), "nested/Amazing Grace.TXT", "how sweet the sound");
        write(dir.path(), "notes.md", "ignored");

        let library = LyricsLibrary::scan(dir.path()).unwrap();
        let titles: Vec<&str> = library.songs().iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Grace", "Zebra Song"]);
        assert_eq!(library.songs()[0].lyrics, "how sweet the sound");
        assert_eq!(library.root(), dir.path());
    }

    #[test]
    fn test_scan_skips_unreadable_files() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "good.txt", "fine");
        std::fs::write(dir.path().join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let library = LyricsLibrary::scan(dir.path()).unwrap();
        assert_eq!(library.len(), 1);
        assert!(library.find("GOOD").is_some());
        assert!(library.find("bad").is_none());
    }

    #[test]
    fn test_scan_rejects_missing_directory() {
        let err = LyricsLibrary::scan("/nonexistent/rhymeflow/lyrics").unwrap_err();
        assert!(matches!(err, Error::Library(_)));
    }

    #[test]
    fn test_analyze_reports_each_song_and_totals() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.txt", "cat\nhat");
        write(dir.path(), "b.txt", "the");

        let vocab: Vocabulary = [("cat", "K AE1 T"), ("hat", "HH AE1 T")]
            .iter()
            .map(|(w, p)| ((*w).to_string(), (*p).to_string()))
            .collect();
        let report = LyricsLibrary::scan(dir.path())
            .unwrap()
            .analyze(&vocab, &RhymeAnalyzer::default());

        assert_eq!(report.songs.len(), 2);
        assert_eq!(report.songs[0].title, "a");
        assert_eq!(report.songs[0].statistics.perfect_rhymes, 1);
        assert_eq!(report.totals.songs, 2);
        assert_eq!(report.totals.perfect_rhymes, 1);
        assert!((report.totals.average_density - 50.0).abs() < f64::EPSILON);
    }
}
