//! Query command implementation.
//!
//! The query command:
//! 1. Reads rows from a JSON file
//! 2. Pivots them with the effective hierarchy
//! 3. Runs the aggregation over the requested path
//! 4. Writes / prints the report

use super::models::QueryArgs;
use crate::engine::PivotEngine;
use crate::output::{report_to_string, write_report, QueryReport};
use crate::parser::read_rows;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the query command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed row file
/// * Row validation or hierarchy errors
/// * Report write errors
pub fn execute_query(args: &QueryArgs) -> Result<QueryReport> {
    let start_time = Instant::now();

    info!("Step 1/3: Reading rows from {}", args.input.display());
    let rows = read_rows(&args.input)
        .with_context(|| format!("Failed to read rows from {}", args.input.display()))?;

    info!("Step 2/3: Pivoting {} rows...", rows.len());
    let mut engine = PivotEngine::new();
    let pivoted = match args.effective_hierarchy() {
        Some(hierarchy) => engine.pivot_with_hierarchy(&rows, hierarchy.iter().cloned()),
        None => engine.pivot(&rows),
    };
    pivoted.context("Failed to build pivot")?;

    debug!("Build order: {:?}", engine.dimensions());

    let aggregation = args.effective_aggregation();
    info!("Step 3/3: Querying {:?} with {}", args.path, aggregation);

    let snapshot = engine.snapshot();
    let report = QueryReport::from_query(
        args.input.display().to_string(),
        &snapshot,
        &args.path,
        aggregation,
    );

    if !report.found {
        warn!(
            "Path {:?} matches no rows; reporting {}",
            report.path, report.value
        );
    }

    if args.print_tree {
        println!("{}", snapshot.trie());
    }

    match &args.output_json {
        Some(path) => {
            write_report(&report, path).context("Failed to write query report")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => println!("{}", report_to_string(&report)?),
    }

    info!(
        "Query completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// Validate query arguments
///
/// **Public** - can be called before execute_query for early validation
pub fn validate_args(args: &QueryArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input file cannot be empty");
    }

    if args.path.iter().any(|label| label.trim().is_empty()) {
        anyhow::bail!("Query path cannot contain empty values");
    }

    if let Some(hierarchy) = &args.hierarchy {
        if hierarchy.is_empty() {
            anyhow::bail!("Hierarchy cannot be empty when given");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::Aggregation;
    use crate::utils::config::PivotConfig;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_valid() {
        let args = QueryArgs {
            input: PathBuf::from("rows.json"),
            path: vec!["italy".to_string()],
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_empty_input() {
        let args = QueryArgs::default();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_blank_path_value() {
        let args = QueryArgs {
            input: PathBuf::from("rows.json"),
            path: vec!["italy".to_string(), " ".to_string()],
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_hierarchy() {
        let args = QueryArgs {
            input: PathBuf::from("rows.json"),
            hierarchy: Some(vec![]),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_cli_overrides_config() {
        let args = QueryArgs {
            input: PathBuf::from("rows.json"),
            hierarchy: Some(vec!["hair".to_string()]),
            aggregation: Some(Aggregation::Max),
            config: PivotConfig {
                hierarchy: Some(vec!["eyes".to_string()]),
                aggregation: Some(Aggregation::Mode),
            },
            ..Default::default()
        };

        assert_eq!(args.effective_hierarchy(), Some(&["hair".to_string()][..]));
        assert_eq!(args.effective_aggregation(), Aggregation::Max);
    }

    #[test]
    fn test_config_fills_missing_flags() {
        let args = QueryArgs {
            config: PivotConfig {
                hierarchy: Some(vec!["eyes".to_string()]),
                aggregation: Some(Aggregation::Mode),
            },
            ..Default::default()
        };

        assert_eq!(args.effective_hierarchy(), Some(&["eyes".to_string()][..]));
        assert_eq!(args.effective_aggregation(), Aggregation::Mode);
        assert_eq!(QueryArgs::default().effective_aggregation(), Aggregation::Sum);
    }
}
