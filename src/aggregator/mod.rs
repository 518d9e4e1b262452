//! Reduction functions applied to the measures retained at a trie node.
//!
//! Any `Fn(&[f64]) -> f64` can be used as a reducer; this module provides
//! the canonical ones plus an `Aggregation` enum naming them for configs
//! and the CLI.

pub mod functions;

// Re-export main types and functions
pub use functions::{average, count, max, min, mode, sum, Aggregation};
