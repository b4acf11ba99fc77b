// Centralized error handling module
// Only configuration-level problems surface here; filesystem trouble during
// scanning or deletion degrades to empty results or per-file failures.

use std::fmt;
use std::path::PathBuf;

/// Errors that terminate an invocation before any file is touched.
#[derive(Debug)]
pub enum CleanerError {
    /// This operating system has no known screenshot convention.
    UnsupportedPlatform { os: String },
    /// The age threshold is negative.
    InvalidThreshold { value: i64 },
    /// The target directory is missing or not a directory.
    DirectoryInvalid { path: PathBuf },
}

impl CleanerError {
    /// Process exit code for this error. Zero is reserved for success and
    /// "nothing to do"; per-file deletion failures use their own code at
    /// the orchestration layer.
    pub fn exit_code(&self) -> u8 {
        match self {
            // Same band clap uses for malformed arguments.
            CleanerError::InvalidThreshold { .. } => 2,
            CleanerError::UnsupportedPlatform { .. } => 3,
            CleanerError::DirectoryInvalid { .. } => 4,
        }
    }
}

impl fmt::Display for CleanerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CleanerError::UnsupportedPlatform { os } => {
                write!(f, "Unsupported operating system: {}\n", os)?;
                write!(
                    f,
                    "Suggestion: screensweep knows the screenshot naming conventions of macOS, Windows and Linux only"
                )
            }
            CleanerError::InvalidThreshold { value } => {
                write!(f, "Invalid age threshold: {}\n", value)?;
                write!(f, "Suggestion: pass a day count of zero or more via --days")
            }
            CleanerError::DirectoryInvalid { path } => {
                write!(f, "Not a readable directory: {}\n", path.display())?;
                write!(
                    f,
                    "Suggestion: check the path, or pass --dir to scan somewhere other than the desktop"
                )
            }
        }
    }
}

impl std::error::Error for CleanerError {}
