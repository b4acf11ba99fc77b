// Directory scanning module
// Enumerates one flat directory and selects screenshot files old enough to
// qualify for deletion. Read-only: nothing here mutates the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::cleaner::events::{Event, EventSink};
use crate::cleaner::patterns;

/// One file eligible for deletion.
///
/// Constructed transiently during a scan and never mutated afterwards; a
/// candidate has no identity beyond its path.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FileCandidate {
    pub path: PathBuf,
    #[serde(serialize_with = "serialize_timestamp")]
    pub modified: DateTime<Utc>,
    /// Whole days since last modification, clamped at zero.
    pub age_days: u64,
    pub size_bytes: u64,
}

// Helper function to serialize timestamps as RFC 3339 strings
fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339())
}

/// Returns the platform-conventional screenshot location.
///
/// Purely lexical: the returned path is not required to exist.
pub fn default_screenshot_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .unwrap_or_else(|| PathBuf::from("Desktop"))
}

/// Whole-day difference between `modified` and `now`, floored.
///
/// A modification time in the future (clock skew, restored backups) counts
/// as age zero, never negative.
pub fn age_in_days(modified: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    now.signed_duration_since(modified).num_days().max(0) as u64
}

/// Scan `directory` for screenshot files at least `min_age_days` old.
///
/// Only direct entries are considered; subdirectories are never entered and
/// directories or symlinks whose names happen to match the pattern are
/// excluded. One `Event::Scanned` is emitted per pattern-matching file.
///
/// A directory that is missing, not a directory, or unreadable yields an
/// empty vec rather than an error: at this level that simply means there is
/// nothing to clean. Callers wanting a hard failure validate the directory
/// up front (see `Config::validate`).
///
/// The result is sorted by path, so repeated scans of an unmodified
/// directory return identical sequences.
pub fn find_expired(
    directory: &Path,
    min_age_days: u64,
    sink: &dyn EventSink,
) -> Vec<FileCandidate> {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };

    let now = Utc::now();
    let mut candidates = Vec::new();

    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if !patterns::is_screenshot_name(&name) {
            continue;
        }

        // DirEntry::metadata does not follow symlinks, so this also rules
        // out links pointing at regular files elsewhere.
        let metadata = match entry.metadata() {
            Ok(metadata) => metadata,
            Err(_) => continue,
        };
        if !metadata.is_file() {
            continue;
        }

        // A matching file whose mtime cannot be read is treated as not
        // expired rather than aborting the scan.
        let modified: DateTime<Utc> = match metadata.modified() {
            Ok(time) => time.into(),
            Err(_) => continue,
        };

        let age_days = age_in_days(modified, now);
        let expired = age_days >= min_age_days;

        sink.emit(Event::Scanned {
            path: entry.path(),
            age_days,
            expired,
        });

        if expired {
            candidates.push(FileCandidate {
                path: entry.path(),
                modified,
                age_days,
                size_bytes: metadata.len(),
            });
        }
    }

    candidates.sort_by(|a, b| a.path.cmp(&b.path));
    candidates
}
