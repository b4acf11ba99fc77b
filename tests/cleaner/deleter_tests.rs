// Tests for the deleter module

use std::fs;
use std::path::Path;

use chrono::Utc;
use screensweep::cleaner::{Deleter, Event, FailureReason, FileCandidate, MemorySink, NullSink};
use tempfile::tempdir;

/// Build a candidate by hand, the way a scan would.
fn candidate(path: &Path) -> FileCandidate {
    FileCandidate {
        path: path.to_path_buf(),
        modified: Utc::now(),
        age_days: 30,
        size_bytes: 4,
    }
}

#[test]
fn test_dry_run_deletes_nothing_and_reports_success() {
    let dir = tempdir().unwrap();
    let file_a = dir.path().join("Screenshot a.png");
    let file_b = dir.path().join("Screenshot b.png");
    fs::write(&file_a, b"aaaa").unwrap();
    fs::write(&file_b, b"bbbb").unwrap();

    let deleter = Deleter::new(dir.path()).with_dry_run(true);
    let summary = deleter.delete_many(vec![candidate(&file_a), candidate(&file_b)], &NullSink);

    assert_eq!(summary.deleted, 2);
    assert_eq!(summary.failed, 0);
    assert!(file_a.exists());
    assert!(file_b.exists());
}

#[test]
fn test_real_run_removes_files() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Screenshot a.png");
    fs::write(&file, b"aaaa").unwrap();

    let deleter = Deleter::new(dir.path());
    let outcome = deleter.delete_one(candidate(&file), &NullSink);

    assert!(outcome.deleted);
    assert!(outcome.reason.is_none());
    assert!(!file.exists());
}

#[test]
fn test_vanished_file_is_an_isolated_failure() {
    let dir = tempdir().unwrap();
    let file_a = dir.path().join("Screenshot a.png");
    let file_b = dir.path().join("Screenshot b.png");
    fs::write(&file_a, b"aaaa").unwrap();
    // file_b is never created: it "vanished" between scan and delete.

    let deleter = Deleter::new(dir.path());
    let summary = deleter.delete_many(vec![candidate(&file_a), candidate(&file_b)], &NullSink);

    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.failed, 1);
    assert!(!file_a.exists());
    assert_eq!(summary.outcomes[1].reason, Some(FailureReason::NotFound));
}

#[test]
fn test_failure_never_aborts_the_batch() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("Screenshot gone.png");
    let file = dir.path().join("Screenshot here.png");
    fs::write(&file, b"here").unwrap();

    // The failing candidate comes first; the following one must still be
    // processed.
    let deleter = Deleter::new(dir.path());
    let summary = deleter.delete_many(vec![candidate(&missing), candidate(&file)], &NullSink);

    assert_eq!(summary.deleted, 1);
    assert_eq!(summary.failed, 1);
    assert!(!file.exists());
}

#[test]
fn test_counts_always_add_up_to_input_length() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Screenshot a.png");
    fs::write(&file, b"aaaa").unwrap();
    let outside = dir.path().join("..").join("escape.png");
    let missing = dir.path().join("Screenshot missing.png");

    let deleter = Deleter::new(dir.path());
    let summary = deleter.delete_many(
        vec![candidate(&file), candidate(&outside), candidate(&missing)],
        &NullSink,
    );

    assert_eq!(summary.deleted + summary.failed, 3);
    assert_eq!(summary.outcomes.len(), 3);
}

#[test]
fn test_path_outside_root_is_refused() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let target = elsewhere.path().join("Screenshot elsewhere.png");
    fs::write(&target, b"keep").unwrap();

    let deleter = Deleter::new(dir.path());
    let outcome = deleter.delete_one(candidate(&target), &NullSink);

    assert!(!outcome.deleted);
    assert_eq!(outcome.reason, Some(FailureReason::OutsideRoot));
    assert!(target.exists());
}

#[test]
fn test_path_outside_root_is_refused_even_in_dry_run() {
    let dir = tempdir().unwrap();
    let elsewhere = tempdir().unwrap();
    let target = elsewhere.path().join("Screenshot elsewhere.png");
    fs::write(&target, b"keep").unwrap();

    let deleter = Deleter::new(dir.path()).with_dry_run(true);
    let outcome = deleter.delete_one(candidate(&target), &NullSink);

    assert!(!outcome.deleted);
    assert_eq!(outcome.reason, Some(FailureReason::OutsideRoot));
    assert!(target.exists());
}

#[test]
fn test_parent_traversal_cannot_escape_the_root() {
    let dir = tempdir().unwrap();
    let sibling = dir.path().parent().unwrap().join("sibling.png");
    let sneaky = dir
        .path()
        .join("sub")
        .join("..")
        .join("..")
        .join("sibling.png");

    let deleter = Deleter::new(dir.path());
    let outcome = deleter.delete_one(candidate(&sneaky), &NullSink);

    assert!(!outcome.deleted);
    assert_eq!(outcome.reason, Some(FailureReason::OutsideRoot));
    assert!(!sibling.exists());
}

#[test]
fn test_root_itself_is_not_a_deletable_child() {
    let dir = tempdir().unwrap();

    let deleter = Deleter::new(dir.path());
    let outcome = deleter.delete_one(candidate(dir.path()), &NullSink);

    assert!(!outcome.deleted);
    assert_eq!(outcome.reason, Some(FailureReason::OutsideRoot));
    assert!(dir.path().exists());
}

#[test]
fn test_directory_candidate_fails_and_survives() {
    let dir = tempdir().unwrap();
    let subdir = dir.path().join("Screenshot folder.png");
    fs::create_dir(&subdir).unwrap();

    let deleter = Deleter::new(dir.path());
    let outcome = deleter.delete_one(candidate(&subdir), &NullSink);

    assert!(!outcome.deleted);
    assert_eq!(outcome.reason, Some(FailureReason::IsDirectory));
    assert!(subdir.is_dir());
}

#[test]
fn test_one_event_per_outcome_in_input_order() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Screenshot a.png");
    fs::write(&file, b"aaaa").unwrap();
    let missing = dir.path().join("Screenshot b.png");

    let sink = MemorySink::new();
    let deleter = Deleter::new(dir.path());
    let summary = deleter.delete_many(vec![candidate(&file), candidate(&missing)], &sink);

    assert_eq!(summary.outcomes.len(), 2);

    let events = sink.events();
    assert_eq!(events.len(), 2);
    match &events[0] {
        Event::Deleted { path, dry_run } => {
            assert_eq!(path, &file);
            assert!(!dry_run);
        }
        other => panic!("expected Deleted event, got {:?}", other),
    }
    match &events[1] {
        Event::DeleteFailed { path, reason } => {
            assert_eq!(path, &missing);
            assert_eq!(reason, &FailureReason::NotFound);
        }
        other => panic!("expected DeleteFailed event, got {:?}", other),
    }
}

#[test]
fn test_bytes_reclaimed_counts_only_successes() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("Screenshot a.png");
    fs::write(&file, b"aaaa").unwrap();
    let missing = dir.path().join("Screenshot b.png");

    let deleter = Deleter::new(dir.path());
    let summary = deleter.delete_many(vec![candidate(&file), candidate(&missing)], &NullSink);

    assert_eq!(summary.bytes_reclaimed(), 4);
}
