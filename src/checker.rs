//! Selector matching.
//!
//! Evaluates each selector against a parsed document and records whether the
//! match set is non-empty. The document is passed in explicitly; there is no
//! shared query context.

use crate::dom::{self, Document};
use crate::report::CheckReport;

/// Run every selector against an already-parsed document.
///
/// Selectors are evaluated in the order given (callers pass them sorted) and
/// independently of each other. Duplicate selectors overwrite the same report
/// key. An empty selector list yields an empty report.
#[must_use]
pub fn run_checks(doc: &Document, checks: &[String]) -> CheckReport {
    let mut report = CheckReport::default();
    for selector in checks {
        report.set(selector.clone(), dom::has_match(doc, selector));
    }
    report
}

/// Parse an HTML document and run every selector against it.
///
/// # Example
///
/// ```rust
/// use html_grader::check_html;
///
/// let html = "<html><body><h1>Hi</h1></body></html>";
/// let checks = vec!["h1".to_string(), "h2".to_string()];
/// let report = check_html(html, &checks);
///
/// assert_eq!(report.get("h1"), Some(true));
/// assert_eq!(report.get("h2"), Some(false));
/// ```
#[must_use]
pub fn check_html(html: &str, checks: &[String]) -> CheckReport {
    let doc = dom::parse(html);
    run_checks(&doc, checks)
}
