// Batch deletion module
// Deletes scanned candidates one by one, isolating per-file failures and
// refusing anything outside the scanned directory.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::cleaner::events::{Event, EventSink};
use crate::cleaner::paths;
use crate::cleaner::scanner::FileCandidate;

/// Why a single deletion did not happen.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The file vanished between scan and delete.
    NotFound,
    PermissionDenied,
    /// The path names a directory, which this tool never removes.
    IsDirectory,
    /// The path is not a child of the scanned directory.
    OutsideRoot,
    /// Any other I/O failure, with the OS message.
    Io(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FailureReason::NotFound => write!(f, "not found"),
            FailureReason::PermissionDenied => write!(f, "permission denied"),
            FailureReason::IsDirectory => write!(f, "is a directory"),
            FailureReason::OutsideRoot => write!(f, "outside the scanned directory"),
            FailureReason::Io(message) => write!(f, "I/O error: {}", message),
        }
    }
}

/// Result of attempting to delete one candidate.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DeletionOutcome {
    pub candidate: FileCandidate,
    pub deleted: bool,
    /// Present iff `deleted` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailureReason>,
}

/// Aggregate of one cleanup pass. `deleted + failed` always equals the
/// number of candidates passed in; outcomes keep the input order.
#[derive(Debug, Clone, serde::Serialize)]
pub struct BatchSummary {
    pub deleted: usize,
    pub failed: usize,
    pub outcomes: Vec<DeletionOutcome>,
}

impl BatchSummary {
    /// Bytes freed by the successful deletions in this pass.
    pub fn bytes_reclaimed(&self) -> u64 {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.deleted)
            .map(|outcome| outcome.candidate.size_bytes)
            .sum()
    }
}

/// Deletes candidates produced by a scan of `root`.
///
/// The root is remembered so every deletion can be checked against it: a
/// candidate outside the scanned directory is always refused, even in a dry
/// run. The scanner is the only in-tree producer of candidates, but the
/// guard keeps this safe to call with arbitrary input.
pub struct Deleter {
    root: PathBuf,
    dry_run: bool,
}

impl Deleter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Enable or disable dry-run mode. A dry run performs no filesystem
    /// mutation and reports every in-root candidate as deletable.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Attempt to delete a single candidate.
    ///
    /// Never returns an error and never panics: every failure mode becomes
    /// an outcome with a categorized reason. Emits one event either way.
    pub fn delete_one(&self, candidate: FileCandidate, sink: &dyn EventSink) -> DeletionOutcome {
        // Safety check comes first, before the dry-run shortcut: an
        // out-of-root path is refused no matter what.
        if !paths::is_strict_child(&self.root, &candidate.path) {
            return self.fail(candidate, FailureReason::OutsideRoot, sink);
        }

        if self.dry_run {
            sink.emit(Event::Deleted {
                path: candidate.path.clone(),
                dry_run: true,
            });
            return DeletionOutcome {
                candidate,
                deleted: true,
                reason: None,
            };
        }

        match fs::remove_file(&candidate.path) {
            Ok(()) => {
                sink.emit(Event::Deleted {
                    path: candidate.path.clone(),
                    dry_run: false,
                });
                DeletionOutcome {
                    candidate,
                    deleted: true,
                    reason: None,
                }
            }
            Err(err) => {
                let reason = classify_error(&err, &candidate.path);
                self.fail(candidate, reason, sink)
            }
        }
    }

    /// Delete every candidate in input order, sequentially.
    ///
    /// One candidate failing never aborts the rest of the batch; failed
    /// deletions are recorded and skipped, never retried.
    pub fn delete_many(
        &self,
        candidates: Vec<FileCandidate>,
        sink: &dyn EventSink,
    ) -> BatchSummary {
        let mut deleted = 0;
        let mut failed = 0;
        let mut outcomes = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let outcome = self.delete_one(candidate, sink);
            if outcome.deleted {
                deleted += 1;
            } else {
                failed += 1;
            }
            outcomes.push(outcome);
        }

        BatchSummary {
            deleted,
            failed,
            outcomes,
        }
    }

    fn fail(
        &self,
        candidate: FileCandidate,
        reason: FailureReason,
        sink: &dyn EventSink,
    ) -> DeletionOutcome {
        sink.emit(Event::DeleteFailed {
            path: candidate.path.clone(),
            reason: reason.clone(),
        });
        DeletionOutcome {
            candidate,
            deleted: false,
            reason: Some(reason),
        }
    }
}

/// Map an I/O error from `remove_file` to a categorized reason.
fn classify_error(err: &io::Error, path: &Path) -> FailureReason {
    match err.kind() {
        io::ErrorKind::NotFound => FailureReason::NotFound,
        // Removing a directory with remove_file reports a different kind
        // per platform (EISDIR on Linux, EPERM on macOS), so check the
        // path instead of the kind.
        _ if path.is_dir() => FailureReason::IsDirectory,
        io::ErrorKind::PermissionDenied => FailureReason::PermissionDenied,
        _ => FailureReason::Io(err.to_string()),
    }
}
