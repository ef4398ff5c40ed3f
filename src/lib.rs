//! # html-grader
//!
//! Checks whether an HTML document contains elements matching a list of CSS
//! selectors and reports the result as a JSON object mapping each selector
//! to a presence flag.
//!
//! The document comes from a local file or a URL; the selector list comes
//! from a JSON checks file. The `grader` binary wires these together on the
//! command line, and a second `serve` binary hosts a static page for the
//! grader to run against.
//!
//! ## Quick Start
//!
//! ```rust
//! use html_grader::{check_html, report};
//!
//! let html = "<html><body><h1>Hi</h1></body></html>";
//! let checks = vec!["h1".to_string(), "h2".to_string()];
//!
//! let result = check_html(html, &checks);
//! assert_eq!(
//!     report::render_json(&result),
//!     "{\n    \"h1\": true,\n    \"h2\": false\n}"
//! );
//! ```

mod error;

/// Selector matching against a parsed document.
pub mod checker;

/// Checks file loading and parsing.
pub mod checks;

/// DOM adapter over the query engine.
pub mod dom;

/// Document loading from disk or network.
pub mod loader;

/// Report types and JSON rendering.
pub mod report;

/// Static page server used by the `serve` binary.
pub mod server;

// Public API - re-exports
pub use checker::{check_html, run_checks};
pub use error::{Error, Result};
pub use report::CheckReport;
