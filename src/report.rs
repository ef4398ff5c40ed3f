//! Report types and JSON rendering.
//!
//! The check report maps each selector to a presence flag. Keys iterate in
//! sorted order, which together with sorted input gives the stable output
//! ordering the CLI promises.

use std::collections::{btree_map, BTreeMap};

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

/// Mapping from selector string to presence flag.
///
/// Backed by a `BTreeMap`, so keys are unique (duplicate selectors overwrite)
/// and iterate lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckReport(BTreeMap<String, bool>);

impl CheckReport {
    /// Record the presence flag for a selector, overwriting any prior entry.
    pub fn set(&mut self, selector: String, present: bool) {
        self.0.insert(selector, present);
    }

    /// Presence flag for a selector, if it was checked.
    #[must_use]
    pub fn get(&self, selector: &str) -> Option<bool> {
        self.0.get(selector).copied()
    }

    /// Number of distinct selectors in the report.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no selectors were checked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in sorted selector order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, bool> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a CheckReport {
    type Item = (&'a String, &'a bool);
    type IntoIter = btree_map::Iter<'a, String, bool>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Render the report as 4-space-indented JSON.
///
/// This is the exact form the CLI writes to stdout, without a trailing
/// newline. Serialization of a string-to-bool map cannot realistically fail;
/// if it ever does the result is an empty string.
#[must_use]
pub fn render_json(report: &CheckReport) -> String {
    let mut buf = Vec::with_capacity(64);
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    if report.serialize(&mut ser).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_renders_as_empty_object() {
        assert_eq!(render_json(&CheckReport::default()), "{}");
    }

    #[test]
    fn rendering_uses_four_space_indentation() {
        let mut report = CheckReport::default();
        report.set("h1".to_string(), true);
        report.set("h2".to_string(), false);

        assert_eq!(
            render_json(&report),
            "{\n    \"h1\": true,\n    \"h2\": false\n}"
        );
    }

    #[test]
    fn keys_iterate_in_sorted_order_regardless_of_insertion() {
        let mut report = CheckReport::default();
        report.set("h2".to_string(), false);
        report.set("a[href]".to_string(), true);
        report.set("h1".to_string(), true);

        let keys: Vec<&str> = report.iter().map(|(sel, _)| sel.as_str()).collect();
        assert_eq!(keys, vec!["a[href]", "h1", "h2"]);
    }

    #[test]
    fn set_overwrites_existing_entry() {
        let mut report = CheckReport::default();
        report.set("p".to_string(), true);
        report.set("p".to_string(), false);

        assert_eq!(report.len(), 1);
        assert_eq!(report.get("p"), Some(false));
    }

    #[test]
    fn report_round_trips_through_serde() {
        let mut report = CheckReport::default();
        report.set("h1".to_string(), true);

        let json = render_json(&report);
        let parsed: CheckReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
