//! Cleaner module - locates and removes stale screenshot files
//!
//! This module provides scanning of a single flat directory for OS-generated
//! screenshot files older than an age threshold, and batch deletion with
//! per-file failure isolation and dry-run support.

pub mod config;
pub mod deleter;
pub mod error;
pub mod events;
pub mod paths;
pub mod patterns;
pub mod scanner;

pub use config::Config;
pub use deleter::{BatchSummary, Deleter, DeletionOutcome, FailureReason};
pub use error::CleanerError;
pub use events::{Event, EventSink, MemorySink, NullSink};
pub use scanner::{age_in_days, default_screenshot_dir, find_expired, FileCandidate};
