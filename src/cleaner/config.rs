// Run configuration for one invocation
// Built and validated once at the orchestration boundary; the scanner and
// deleter assume validated inputs but stay defensive themselves.

use std::path::PathBuf;

use crate::cleaner::error::CleanerError;

/// Default minimum age before a screenshot counts as stale.
pub const DEFAULT_MIN_AGE_DAYS: i64 = 7;

/// Configuration for one scan-and-clean pass.
///
/// The threshold is kept signed so that rejecting a negative value is this
/// type's job, not the parser's: `min_age()` is only meaningful after
/// `validate()` has passed.
#[derive(Debug, Clone)]
pub struct Config {
    pub directory: PathBuf,
    pub min_age_days: i64,
    pub dry_run: bool,
}

impl Config {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            min_age_days: DEFAULT_MIN_AGE_DAYS,
            dry_run: false,
        }
    }

    /// Set the minimum age in whole days.
    pub fn with_min_age_days(mut self, days: i64) -> Self {
        self.min_age_days = days;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check the configuration once, up front.
    ///
    /// The scanner itself treats a missing directory as "nothing to clean";
    /// rejecting it here is what keeps the interactive tool from silently
    /// doing nothing.
    pub fn validate(&self) -> Result<(), CleanerError> {
        if self.min_age_days < 0 {
            return Err(CleanerError::InvalidThreshold {
                value: self.min_age_days,
            });
        }
        if !self.directory.is_dir() {
            return Err(CleanerError::DirectoryInvalid {
                path: self.directory.clone(),
            });
        }
        Ok(())
    }

    /// The validated threshold as an unsigned day count.
    pub fn min_age(&self) -> u64 {
        self.min_age_days.max(0) as u64
    }
}
