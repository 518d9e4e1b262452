//! `PivotEngine` orchestrates a full pivot:
//! 1. Validate the hierarchy (if any)
//! 2. Validate and normalize the rows
//! 3. Build a fresh trie off to the side
//! 4. Swap it in together with its hierarchy
//!
//! A failed pivot leaves the previous snapshot untouched.

use crate::hierarchy::HierarchyOrder;
use crate::normalizer::{normalize_batch, Row};
use crate::trie::AggregationTrie;
use crate::utils::error::PivotError;
use log::{debug, info};
use std::sync::Arc;

/// A built trie together with the hierarchy and dimension order it was built with.
///
/// Snapshots are immutable; readers may hold one while the engine pivots again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotSnapshot {
    hierarchy: HierarchyOrder,
    dimensions: Vec<String>,
    trie: AggregationTrie,
}

impl PivotSnapshot {
    pub fn hierarchy(&self) -> &HierarchyOrder {
        &self.hierarchy
    }

    /// Dimension names in build order: position `i` of a query path is a
    /// value of `dimensions()[i]`
    pub fn dimensions(&self) -> &[String] {
        &self.dimensions
    }

    pub fn trie(&self) -> &AggregationTrie {
        &self.trie
    }

    pub fn query<S, F>(&self, path: &[S], reduce: F) -> f64
    where
        S: AsRef<str>,
        F: FnOnce(&[f64]) -> f64,
    {
        self.trie.query(path, reduce)
    }
}

/// Owns exactly one active snapshot, replaced wholesale by every pivot.
#[derive(Debug, Clone, Default)]
pub struct PivotEngine {
    current: Arc<PivotSnapshot>,
}

impl PivotEngine {
    /// Engine holding an empty trie with natural ordering
    pub fn new() -> Self {
        Self::default()
    }

    /// Pivot `rows` in natural (lexical) dimension order
    pub fn pivot(&mut self, rows: &[Row]) -> Result<&AggregationTrie, PivotError> {
        self.pivot_with_order(rows, HierarchyOrder::natural())
    }

    /// Pivot `rows` stacking dimensions in the order given by `hierarchy`.
    ///
    /// The hierarchy is checked for duplicates and the measure key before
    /// any row is looked at.
    pub fn pivot_with_hierarchy<I, S>(
        &mut self,
        rows: &[Row],
        hierarchy: I,
    ) -> Result<&AggregationTrie, PivotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order = HierarchyOrder::explicit(hierarchy)?;
        self.pivot_with_order(rows, order)
    }

    /// Pivot `rows` with an already constructed order
    pub fn pivot_with_order(
        &mut self,
        rows: &[Row],
        order: HierarchyOrder,
    ) -> Result<&AggregationTrie, PivotError> {
        debug!("Pivoting {} rows with {} hierarchy", rows.len(), order);

        let batch = normalize_batch(rows, &order)?;
        let trie = AggregationTrie::build(&batch.rows)?;

        self.current = Arc::new(PivotSnapshot {
            hierarchy: order,
            dimensions: batch.dimensions,
            trie,
        });

        info!(
            "Pivot built: {} rows over dimensions {:?}",
            self.current.trie.row_count(),
            self.current.dimensions
        );
        Ok(&self.current.trie)
    }

    /// Reduce the measures under `path` with `reduce`, see [`AggregationTrie::query`]
    pub fn query<S, F>(&self, path: &[S], reduce: F) -> f64
    where
        S: AsRef<str>,
        F: FnOnce(&[f64]) -> f64,
    {
        self.current.query(path, reduce)
    }

    pub fn hierarchy(&self) -> &HierarchyOrder {
        &self.current.hierarchy
    }

    pub fn dimensions(&self) -> &[String] {
        &self.current.dimensions
    }

    pub fn trie(&self) -> &AggregationTrie {
        &self.current.trie
    }

    /// Shared handle to the active snapshot, unaffected by later pivots
    pub fn snapshot(&self) -> Arc<PivotSnapshot> {
        Arc::clone(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::sum;

    fn rows() -> Vec<Row> {
        vec![
            Row::from([("eyes", "brown"), ("hair", "dark"), ("#", "10")]),
            Row::from([("eyes", "blue"), ("hair", "dark"), ("#", "20")]),
        ]
    }

    #[test]
    fn test_new_engine_is_empty() {
        let engine = PivotEngine::new();
        let empty: [&str; 0] = [];
        assert_eq!(engine.query(&empty, sum), 0.0);
        assert!(engine.hierarchy().is_natural());
        assert!(engine.dimensions().is_empty());
    }

    #[test]
    fn test_pivot_records_dimensions() {
        let mut engine = PivotEngine::new();
        engine.pivot_with_hierarchy(&rows(), ["hair", "eyes"]).unwrap();

        assert_eq!(engine.dimensions(), ["hair", "eyes"]);
        assert_eq!(engine.query(&["dark"], sum), 30.0);
    }

    #[test]
    fn test_failed_pivot_keeps_previous_state() {
        let mut engine = PivotEngine::new();
        engine.pivot(&rows()).unwrap();

        let bad = vec![Row::from([("eyes", "brown"), ("#", "x")])];
        assert!(engine.pivot(&bad).is_err());
        assert!(engine.pivot_with_hierarchy(&rows(), ["#"]).is_err());

        assert_eq!(engine.query(&["brown"], sum), 10.0);
        assert_eq!(engine.dimensions(), ["eyes", "hair"]);
    }

    #[test]
    fn test_snapshot_survives_repivot() {
        let mut engine = PivotEngine::new();
        engine.pivot(&rows()).unwrap();
        let before = engine.snapshot();

        engine.pivot_with_hierarchy(&rows(), ["hair", "eyes"]).unwrap();

        assert_eq!(before.query(&["brown"], sum), 10.0);
        assert_eq!(engine.query(&["brown"], sum), 0.0);
        assert_eq!(engine.query(&["dark"], sum), 30.0);
    }
}
