//! Row sources.
//!
//! Adapters that turn external data into flat `Row`s. Validation against
//! the dimension schema is left to the normalizer.

pub mod json_rows;

// Re-export main functions
pub use json_rows::{parse_rows, parse_rows_str, read_rows};
