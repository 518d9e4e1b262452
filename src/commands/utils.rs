use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::Path;

/// Validate a query report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Input: {}", report.input);
    println!("  Dimensions: {}", report.dimensions.join(" > "));
    println!("  Path: [{}]", report.path.join(", "));
    println!("  {}: {}", report.aggregation, report.value);
    println!("  Rows: {}/{}", report.matched_rows, report.row_count);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Pivot Trie v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Hierarchical pivot-table aggregation over flat rows.");
}
