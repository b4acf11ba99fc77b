// Lexical path utilities for the deletion safety guard
// These never touch the filesystem: candidates may already have vanished by
// the time they are checked, so canonicalization is not an option.

use std::path::{Component, Path, PathBuf};

/// Remove `.` components and resolve `..` against preceding normal
/// components, without consulting the filesystem.
///
/// Leading `..` components that cannot be resolved are kept, so a path that
/// climbs out of its anchor still looks like it does after cleaning.
pub fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.last() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                _ => cleaned.push(component),
            },
            other => cleaned.push(other),
        }
    }

    if cleaned.is_empty() {
        PathBuf::from(".")
    } else {
        cleaned.iter().collect()
    }
}

/// Returns true when `path` is a strict lexical child of `root`.
///
/// Both sides are cleaned first, so `root/sub/../../etc/passwd` is not a
/// child of `root`. The root itself is not its own child.
pub fn is_strict_child(root: &Path, path: &Path) -> bool {
    let root = lexical_clean(root);
    let path = lexical_clean(path);

    path != root && path.starts_with(&root)
}
