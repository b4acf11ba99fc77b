// Filename rules for screenshot detection
// The rule set is fixed and not user-configurable: loosening it risks
// matching files the user never meant to delete.

/// Prefixes produced by the stock screenshot tools. Each one ends with the
/// separating space, so "screenshot.png" without a space does not match.
const PREFIXES: [&str; 2] = ["screen shot ", "screenshot "];

const EXTENSION: &str = ".png";

/// Returns true when `name` looks like an OS-generated screenshot.
///
/// Matching is anchored and case-insensitive: the name must start with one of
/// the known prefixes and end with `.png`. The middle part is unconstrained
/// and may be empty.
pub fn is_screenshot_name(name: &str) -> bool {
    let lower = name.to_lowercase();

    if !lower.ends_with(EXTENSION) {
        return false;
    }

    PREFIXES.iter().any(|prefix| {
        // Require the prefix and extension to be disjoint, so a name can
        // never satisfy both with overlapping characters.
        lower.len() >= prefix.len() + EXTENSION.len() && lower.starts_with(prefix)
    })
}
