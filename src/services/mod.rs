//! Services built on top of the analysis core.
//!
//! `analysis` runs analyses off the calling thread; `library` scans a
//! directory of lyrics files and reports statistics across it.

pub mod analysis;
pub mod library;

pub use analysis::{AnalysisKind, AnalysisService, AnalysisUpdate};
pub use library::{LibraryReport, LyricsLibrary, Song, SongReport};
