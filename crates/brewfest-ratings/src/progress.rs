//! Progress event types and broadcast channel for run telemetry.
//!
//! The pipeline emits `ProgressEvent`s as it moves through its stages. They
//! flow through a `tokio::sync::broadcast` channel to whoever is rendering
//! them (the CLI prints one line per event). When nobody subscribes, events
//! are silently dropped.

use serde::{Deserialize, Serialize};

/// A progress event emitted during a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Monotonically increasing sequence number.
    pub seq: u64,
    /// The kind of progress event.
    pub event: ProgressEventKind,
}

/// The specific kind of progress event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ProgressEventKind {
    /// A pipeline stage has started.
    StageStarted { stage: Stage },
    /// The catalog was fetched and flattened.
    CatalogLoaded { beer_count: usize },
    /// About to look up one beer. `index` is 1-based.
    ItemStarted {
        index: usize,
        total: usize,
        brewery: String,
        name: String,
    },
    /// Lookup for one beer finished (matched or not).
    ItemFinished {
        index: usize,
        total: usize,
        matched: bool,
    },
    /// The CSV file was written.
    OutputWritten { path: String, rows: usize },
}

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    FetchCatalog,
    FetchRatings,
    WriteCsv,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FetchCatalog => write!(f, "Fetch Catalog"),
            Self::FetchRatings => write!(f, "Fetch Ratings"),
            Self::WriteCsv => write!(f, "Write CSV"),
        }
    }
}

/// Sender handle for emitting progress events.
pub type ProgressSender = tokio::sync::broadcast::Sender<ProgressEvent>;

/// Receiver handle for consuming progress events.
pub type ProgressReceiver = tokio::sync::broadcast::Receiver<ProgressEvent>;

/// Create a new progress broadcast channel with a bounded buffer.
pub fn channel() -> (ProgressSender, ProgressReceiver) {
    tokio::sync::broadcast::channel(256)
}

/// Sequenced emitter wrapping an optional sender.
#[derive(Debug, Default)]
pub struct Emitter {
    tx: Option<ProgressSender>,
    seq: u64,
}

impl Emitter {
    pub fn new(tx: Option<ProgressSender>) -> Self {
        Self { tx, seq: 0 }
    }

    /// Emit an event, ignoring send errors (no receivers listening).
    pub fn emit(&mut self, event: ProgressEventKind) {
        if let Some(ref sender) = self.tx {
            self.seq += 1;
            let _ = sender.send(ProgressEvent {
                seq: self.seq,
                event,
            });
        }
    }
}
