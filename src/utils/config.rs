//! Configuration and constants for the pivot engine and CLI.

use super::error::ConfigError;
use crate::aggregator::Aggregation;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Reserved row key holding the numeric measure
pub const MEASURE_KEY: &str = "#";

/// Fixed label of the trie root
pub const ROOT_LABEL: &str = "root";

/// Returned by queries whose path has no matching node.
/// The reducer is never invoked in that case.
pub const MISSING_PATH_VALUE: f64 = 0.0;

/// Current query report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Reducer used when neither the command line nor a config file names one
pub const DEFAULT_AGGREGATION: Aggregation = Aggregation::Sum;

/// Separator accepted by `--path` and `--hierarchy` on the command line
pub const LIST_SEPARATOR: char = ',';

/// Pivot settings loaded from a TOML file.
///
/// ```toml
/// hierarchy = ["hair", "eyes", "nation"]
/// aggregation = "average"
/// ```
///
/// Command-line flags take precedence over every field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PivotConfig {
    /// Explicit dimension order, natural order when absent
    #[serde(default)]
    pub hierarchy: Option<Vec<String>>,

    /// Default reducer for queries
    #[serde(default)]
    pub aggregation: Option<Aggregation>,
}

/// Load pivot settings from a TOML file
///
/// # Errors
/// * `ConfigError::IoError` - If file cannot be read
/// * `ConfigError::ParseFailed` - If TOML is invalid
pub fn load_config(path: impl AsRef<Path>) -> Result<PivotConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parse pivot settings from TOML text
pub fn parse_config(contents: &str) -> Result<PivotConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}
