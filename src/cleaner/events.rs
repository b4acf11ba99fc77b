// Structured events emitted by the scanner and deleter
// The core never formats console output itself; callers inject a sink and
// decide how (or whether) events reach the user.

use std::path::PathBuf;
use std::sync::Mutex;

use crate::cleaner::deleter::FailureReason;

/// One observable step of a scan or cleanup pass.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    /// A pattern-matching file was examined during a scan.
    Scanned {
        path: PathBuf,
        age_days: u64,
        expired: bool,
    },
    /// A candidate was deleted, or would have been in a dry run.
    Deleted { path: PathBuf, dry_run: bool },
    /// A candidate could not be deleted.
    DeleteFailed {
        path: PathBuf,
        reason: FailureReason,
    },
}

/// Sink for scan and cleanup events.
///
/// Implementations take `&self` so a single sink can be shared across the
/// scan and delete phases of one invocation.
pub trait EventSink {
    fn emit(&self, event: Event);
}

/// Sink that discards everything.
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&self, _event: Event) {}
}

/// Sink that records events in memory, in emission order.
#[derive(Default)]
pub struct MemorySink {
    events: Mutex<Vec<Event>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far.
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for MemorySink {
    fn emit(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}
