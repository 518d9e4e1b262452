//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod query;
pub mod tree;
pub mod utils;

// Re-export main command functions
pub use models::{QueryArgs, TreeArgs};
pub use query::{execute_query, validate_args};
pub use tree::execute_tree;
pub use utils::{display_version, validate_report_file};
