//! JSON schema of a query report.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::Aggregation;
use crate::engine::PivotSnapshot;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Result of one query against a pivot, as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Where the rows came from (file path or label)
    pub input: String,

    /// Explicit hierarchy, `None` for natural order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<Vec<String>>,

    /// Dimension names in build order
    pub dimensions: Vec<String>,

    /// Queried path of dimension values
    pub path: Vec<String>,

    pub aggregation: Aggregation,

    /// Whether the path matched a node
    pub found: bool,

    /// Reduced value, or the missing-path sentinel
    pub value: f64,

    /// Number of measures under the path
    pub matched_rows: usize,

    /// Number of rows in the pivot
    pub row_count: usize,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

impl QueryReport {
    /// Run `aggregation` over `path` in `snapshot` and capture the result
    pub fn from_query(
        input: impl Into<String>,
        snapshot: &PivotSnapshot,
        path: &[String],
        aggregation: Aggregation,
    ) -> Self {
        let node = snapshot.trie().node_at(path);

        Self {
            version: SCHEMA_VERSION.to_string(),
            input: input.into(),
            hierarchy: snapshot.hierarchy().names().map(<[String]>::to_vec),
            dimensions: snapshot.dimensions().to_vec(),
            path: path.to_vec(),
            aggregation,
            found: node.is_some(),
            value: snapshot.query(path, aggregation.reducer()),
            matched_rows: node.map_or(0, |n| n.values().len()),
            row_count: snapshot.trie().row_count(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
