//! Off-thread rhyme analysis.
//!
//! Requests run on the blocking pool and report back over an mpsc channel,
//! so a caller driving a UI loop never waits on clustering. A request whose
//! kind and lyrics match one already running is dropped.

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::analyzer::RhymeAnalyzer;
use crate::constants::async_tasks::CHANNEL_BUFFER_SIZE;
use crate::lyrics::Token;
use crate::statistics::Statistics;
use crate::vocabulary::Vocabulary;

/// Which pipeline a request runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisKind {
    /// Labeled rhyme scheme.
    Scheme,
    /// Rhyme statistics.
    Statistics,
}

/// Identity of an in-flight request: its kind and a hash of its lyrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestKey {
    kind: AnalysisKind,
    lyrics_hash: u64,
}

impl RequestKey {
    fn new(kind: AnalysisKind, lyrics: &str) -> Self {
        let mut hasher = DefaultHasher::new();
        lyrics.hash(&mut hasher);
        Self { kind, lyrics_hash: hasher.finish() }
    }

    /// The pipeline this request runs.
    pub const fn kind(self) -> AnalysisKind {
        self.kind
    }
}

/// Result delivered from a background analysis.
#[derive(Debug, Clone)]
pub enum AnalysisUpdate {
    /// A rhyme scheme finished.
    SchemeReady {
        /// Caller-supplied song identifier.
        song_id: String,
        /// Request identity.
        key: RequestKey,
        /// Labeled token lines.
        lines: Vec<Vec<Token>>,
    },
    /// Statistics finished.
    StatisticsReady {
        /// Caller-supplied song identifier.
        song_id: String,
        /// Request identity.
        key: RequestKey,
        /// Computed statistics.
        statistics: Statistics,
    },
    /// The background task panicked or was cancelled.
    Failed {
        /// Caller-supplied song identifier.
        song_id: String,
        /// Request identity.
        key: RequestKey,
        /// Error description.
        message: String,
    },
}

impl AnalysisUpdate {
    /// Identity of the request this update answers.
    pub const fn key(&self) -> RequestKey {
        match self {
            Self::SchemeReady { key, .. }
            | Self::StatisticsReady { key, .. }
            | Self::Failed { key, .. } => *key,
        }
    }

    /// Song identifier the request was made for.
    pub fn song_id(&self) -> &str {
        match self {
            Self::SchemeReady { song_id, .. }
            | Self::StatisticsReady { song_id, .. }
            | Self::Failed { song_id, .. } => song_id,
        }
    }
}

/// Runs analyses in the background and collects their results.
///
/// Must be used from within a tokio runtime.
pub struct AnalysisService {
    vocabulary: Arc<Vocabulary>,
    analyzer: RhymeAnalyzer,
    tx: mpsc::Sender<AnalysisUpdate>,
    rx: mpsc::Receiver<AnalysisUpdate>,
    in_flight: HashSet<RequestKey>,
}

impl AnalysisService {
    /// Create a service over a shared vocabulary.
    pub fn new(vocabulary: Arc<Vocabulary>, analyzer: RhymeAnalyzer) -> Self {
        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        Self { vocabulary, analyzer, tx, rx, in_flight: HashSet::new() }
    }

    /// Start a rhyme scheme analysis. Returns `false` if an identical one is running.
    pub fn request_scheme(
        &mut self,
        song_id: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> bool {
        self.dispatch(AnalysisKind::Scheme, song_id.into(), lyrics.into())
    }

    /// Start a statistics analysis. Returns `false` if an identical one is running.
    pub fn request_statistics(
        &mut self,
        song_id: impl Into<String>,
        lyrics: impl Into<String>,
    ) -> bool {
        self.dispatch(AnalysisKind::Statistics, song_id.into(), lyrics.into())
    }

    /// Whether an identical request is still running.
    pub fn is_pending(&self, kind: AnalysisKind, lyrics: &str) -> bool {
        self.in_flight.contains(&RequestKey::new(kind, lyrics))
    }

    /// Number of requests still running.
    pub fn pending(&self) -> usize {
        self.in_flight.len()
    }

    fn dispatch(&mut self, kind: AnalysisKind, song_id: String, lyrics: String) -> bool {
        let key = RequestKey::new(kind, &lyrics);
        if !self.in_flight.insert(key) {
            tracing::debug!("Dropping duplicate {kind:?} request for {song_id}");
            return false;
        }

        let vocabulary = Arc::clone(&self.vocabulary);
        let analyzer = self.analyzer;
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let id = song_id.clone();
            let result = tokio::task::spawn_blocking(move || match kind {
                AnalysisKind::Scheme => AnalysisUpdate::SchemeReady {
                    song_id: id,
                    key,
                    lines: analyzer.rhyme_scheme(&lyrics, &vocabulary),
                },
                AnalysisKind::Statistics => AnalysisUpdate::StatisticsReady {
                    song_id: id,
                    key,
                    statistics: analyzer.statistics(&lyrics, &vocabulary),
                },
            })
            .await;

            let update = result.unwrap_or_else(|e| {
                tracing::warn!("{kind:?} analysis for {song_id} failed: {e}");
                AnalysisUpdate::Failed { song_id, key, message: e.to_string() }
            });
            if tx.send(update).await.is_err() {
                tracing::debug!("Analysis receiver dropped before {kind:?} result arrived");
            }
        });

        true
    }

    /// Wait for the next finished analysis.
    ///
    /// Returns `None` immediately when nothing is running.
    pub async fn next_update(&mut self) -> Option<AnalysisUpdate> {
        if self.in_flight.is_empty() {
            return None;
        }
        let update = self.rx.recv().await?;
        self.in_flight.remove(&update.key());
        Some(update)
    }

    /// Drain every finished analysis without waiting.
    pub fn poll_updates(&mut self) -> Vec<AnalysisUpdate> {
        let mut updates = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(update) => {
                    self.in_flight.remove(&update.key());
                    updates.push(update);
                }
                Err(
                    mpsc::error::TryRecvError::Empty | mpsc::error::TryRecvError::Disconnected,
                ) => break,
            }
        }
        updates
    }
}
