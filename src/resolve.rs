//! Default reference file path derivation.
//!
//! When an assertion supplies no explicit path, one is derived from the test
//! file location, the test name, and the per-test assertion sequence number.
//! Sanitization is a pure function so path derivation stays unit-testable
//! without I/O.

use std::path::{Path, PathBuf};

use crate::errors::MatchError;

/// Directory, next to the test file, that holds derived reference files.
pub const SNAPSHOT_DIR: &str = "__file_snapshots__";

/// Replaces filesystem-unsafe characters in a test name with hyphens.
///
/// ASCII alphanumerics, `_` and `.` pass through; everything else (including
/// all whitespace and path separators) becomes `-`. Runs of replaced
/// characters collapse to a single hyphen, and leading/trailing hyphens are
/// trimmed.
pub fn sanitize(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() || c == '_' || c == '.' {
            out.push(c);
            pending_hyphen = false;
        } else if !pending_hyphen {
            out.push('-');
            pending_hyphen = true;
        }
    }
    out.trim_matches('-').to_string()
}

/// Derives the default reference file path for an assertion.
///
/// Layout: `<dir of test_file>/__file_snapshots__/<sanitized name>-<seq><ext>`.
/// The extension, when given, is appended verbatim (callers include the dot).
pub fn default_snapshot_path(
    test_file: &Path,
    test_name: &str,
    sequence: usize,
    extension: Option<&str>,
) -> Result<PathBuf, MatchError> {
    let slug = sanitize(test_name);
    if slug.is_empty() {
        return Err(MatchError::usage(
            "test name sanitizes to an empty reference file name",
        ));
    }

    let dir = test_file.parent().unwrap_or_else(|| Path::new("."));
    let mut file_name = format!("{slug}-{sequence}");
    if let Some(ext) = extension {
        file_name.push_str(ext);
    }
    Ok(dir.join(SNAPSHOT_DIR).join(file_name))
}
