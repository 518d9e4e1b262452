use crate::aggregator::Aggregation;
use crate::utils::config::{PivotConfig, DEFAULT_AGGREGATION};
use std::path::PathBuf;

/// Arguments for the query command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, Default)]
pub struct QueryArgs {
    /// JSON row file
    pub input: PathBuf,

    /// Dimension values, ordered by the hierarchy (empty = root)
    pub path: Vec<String>,

    /// Explicit hierarchy from the command line
    pub hierarchy: Option<Vec<String>>,

    /// Reducer from the command line
    pub aggregation: Option<Aggregation>,

    /// Settings from a config file, overridden by the fields above
    pub config: PivotConfig,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print the trie to stdout
    pub print_tree: bool,
}

impl QueryArgs {
    /// Hierarchy after applying config precedence
    pub fn effective_hierarchy(&self) -> Option<&[String]> {
        self.hierarchy
            .as_deref()
            .or(self.config.hierarchy.as_deref())
    }

    /// Aggregation after applying config precedence
    pub fn effective_aggregation(&self) -> Aggregation {
        self.aggregation
            .or(self.config.aggregation)
            .unwrap_or(DEFAULT_AGGREGATION)
    }
}

/// Arguments for the tree command
#[derive(Debug, Clone, Default)]
pub struct TreeArgs {
    /// JSON row file
    pub input: PathBuf,

    /// Explicit hierarchy from the command line
    pub hierarchy: Option<Vec<String>>,

    /// Settings from a config file
    pub config: PivotConfig,

    /// Write the rendering here instead of stdout
    pub output: Option<PathBuf>,
}

impl TreeArgs {
    pub fn effective_hierarchy(&self) -> Option<&[String]> {
        self.hierarchy
            .as_deref()
            .or(self.config.hierarchy.as_deref())
    }
}
