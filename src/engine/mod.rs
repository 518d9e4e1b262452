//! The pivot engine: validate, order, build, and query.

pub mod pivot;

pub use pivot::{PivotEngine, PivotSnapshot};
