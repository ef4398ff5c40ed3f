//! Checks file loading.
//!
//! A checks file is a JSON array of CSS selector strings, e.g.
//! `["h1", "a[href=\"http://example.com\"]"]`. Selectors are returned in
//! sorted order; the report's key order follows from it.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Parse a JSON array of selector strings and return it sorted.
///
/// Duplicates are kept; they collapse later when the report is built.
///
/// # Example
///
/// ```rust
/// use html_grader::checks::parse_checks;
///
/// let checks = parse_checks(r#"["h2", "h1"]"#)?;
/// assert_eq!(checks, vec!["h1".to_string(), "h2".to_string()]);
/// # Ok::<(), html_grader::Error>(())
/// ```
pub fn parse_checks(raw: &str) -> Result<Vec<String>> {
    let mut checks: Vec<String> = serde_json::from_str(raw)?;
    checks.sort();
    Ok(checks)
}

/// Load and parse a checks file.
///
/// The path is verified to exist before reading; a missing file is
/// `Error::NotFound`. Malformed JSON is `Error::ChecksParse` and is a fatal
/// misconfiguration as far as callers are concerned.
pub fn load_checks(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_checks(&raw)
}
