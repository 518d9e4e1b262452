//! Row validation and conversion into trie paths.
//!
//! This module handles:
//! - The raw flat row representation (`Row`)
//! - The dimension schema shared by every row of a batch
//! - Validation of a batch against that schema
//! - Conversion into hierarchy-ordered `PathRow`s

pub mod row;
pub mod schema;
pub mod validate;

// Re-export main types
pub use row::{PathRow, Row};
pub use schema::DimensionSchema;
pub use validate::{normalize, normalize_batch, parse_measure, NormalizedBatch};
