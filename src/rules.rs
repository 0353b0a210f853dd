//! Static denylists and the path check itself.

use crate::decision::Decision;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Exact basenames that may never be edited, regardless of directory.
static PROTECTED_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".env", ".env.local", ".env.production", "credentials.json"]
        .into_iter()
        .collect()
});

/// Substrings that block the edit when they appear anywhere in the
/// full path. Checked in order; the first match names the diagnostic.
const PROTECTED_PATTERNS: [&str; 3] = ["id_rsa", ".pem", ".key"];

/// Check a target path against the denylists.
///
/// The empty path (missing `file_path` in the payload) matches nothing
/// and allows. Pattern matching is plain substring matching, so `.key`
/// also catches paths like `monkey.txt`.
pub fn check_path(path: &str) -> Decision {
    let filename = basename(path);

    if PROTECTED_FILES.contains(filename) {
        return Decision::block(
            "protected_file",
            format!("Cannot edit protected file: {filename}"),
        );
    }

    for pattern in PROTECTED_PATTERNS {
        if path.contains(pattern) {
            return Decision::block(
                "protected_pattern",
                format!("Cannot edit file matching pattern: {pattern}"),
            );
        }
    }

    Decision::allow()
}

/// Final `/`-separated segment of a path, "" for the empty path.
fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}
