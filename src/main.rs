//! Pivot Trie CLI
//!
//! Pivots a JSON row file into an aggregation trie and queries it.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};

use pivot_trie::aggregator::Aggregation;
use pivot_trie::commands::{
    display_version, execute_query, execute_tree, validate_args, validate_report_file, QueryArgs,
    TreeArgs,
};
use pivot_trie::utils::config::{load_config, PivotConfig, LIST_SEPARATOR};

/// Pivot Trie - hierarchical aggregation over flat rows
#[derive(Parser, Debug)]
#[command(name = "pivot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Pivot a row file and aggregate one path
    Query {
        /// JSON row file
        #[arg(short, long, env = "PIVOT_INPUT")]
        input: PathBuf,

        /// Comma-separated dimension values in hierarchy order (omit for the root)
        #[arg(short, long, value_delimiter = LIST_SEPARATOR)]
        path: Vec<String>,

        /// Comma-separated dimension names, outermost first
        #[arg(long, value_delimiter = LIST_SEPARATOR)]
        hierarchy: Option<Vec<String>>,

        /// Reducer: sum, average, mode, min, max, count
        #[arg(short, long, value_parser = parse_aggregation)]
        aggregation: Option<Aggregation>,

        /// TOML file with default hierarchy / aggregation
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output path for the JSON report (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also print the trie
        #[arg(long)]
        tree: bool,
    },

    /// Pivot a row file and print the trie
    Tree {
        /// JSON row file
        #[arg(short, long, env = "PIVOT_INPUT")]
        input: PathBuf,

        /// Comma-separated dimension names, outermost first
        #[arg(long, value_delimiter = LIST_SEPARATOR)]
        hierarchy: Option<Vec<String>>,

        /// TOML file with a default hierarchy
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Write the rendering to a file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Validate a query report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Query {
            input,
            path,
            hierarchy,
            aggregation,
            config,
            output,
            tree,
        } => {
            let args = QueryArgs {
                input,
                path,
                hierarchy,
                aggregation,
                config: read_config(config.as_deref())?,
                output_json: output,
                print_tree: tree,
            };

            validate_args(&args)?;
            execute_query(&args)?;
        }

        Commands::Tree {
            input,
            hierarchy,
            config,
            output,
        } => {
            let args = TreeArgs {
                input,
                hierarchy,
                config: read_config(config.as_deref())?,
                output,
            };

            execute_tree(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

fn parse_aggregation(value: &str) -> Result<Aggregation, String> {
    value.parse()
}

fn read_config(path: Option<&Path>) -> Result<PivotConfig> {
    match path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(PivotConfig::default()),
    }
}
