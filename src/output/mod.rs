//! Output writers for query results and trie renderings.
//!
//! This module handles writing data to disk in various formats:
//! - JSON query reports
//! - Plain-text trie renderings

pub mod json;
pub mod report;
pub mod text;

// Re-export main types and functions
pub use json::{read_report, report_to_string, write_report};
pub use report::QueryReport;
pub use text::write_tree;
