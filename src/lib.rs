//! Pivot Trie
//!
//! An in-memory pivot-table engine. Flat rows of named dimension values
//! plus one numeric measure (under the reserved key `#`) are folded into a
//! trie over dimension values; any path prefix can then be aggregated with
//! a caller-supplied reducer.
//!
//! ```
//! use pivot_trie::aggregator::average;
//! use pivot_trie::engine::PivotEngine;
//! use pivot_trie::normalizer::Row;
//!
//! let rows = vec![
//!     Row::from([("eyes", "blue"), ("nation", "italy"), ("#", "20")]),
//!     Row::from([("eyes", "blue"), ("nation", "spain"), ("#", "30")]),
//! ];
//!
//! let mut engine = PivotEngine::new();
//! engine.pivot(&rows).unwrap();
//! assert_eq!(engine.query(&["blue"], average), 25.0);
//! ```
//!
//! Query paths are dimension values in build order: natural (lexical)
//! order of dimension names, or the explicit hierarchy given to
//! [`engine::PivotEngine::pivot_with_hierarchy`].

pub mod aggregator;
pub mod commands;
pub mod engine;
pub mod hierarchy;
pub mod normalizer;
pub mod output;
pub mod parser;
pub mod trie;
pub mod utils;

pub use aggregator::Aggregation;
pub use engine::{PivotEngine, PivotSnapshot};
pub use hierarchy::HierarchyOrder;
pub use normalizer::{PathRow, Row};
pub use trie::{AggregationTrie, TrieNode};
pub use utils::error::PivotError;
