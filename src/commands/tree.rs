//! Tree command: pivot a row file and render the resulting trie.

use super::models::TreeArgs;
use crate::engine::PivotEngine;
use crate::output::write_tree;
use crate::parser::read_rows;
use anyhow::{Context, Result};
use log::info;

/// Execute the tree command, returning the rendering
pub fn execute_tree(args: &TreeArgs) -> Result<String> {
    let rows = read_rows(&args.input)
        .with_context(|| format!("Failed to read rows from {}", args.input.display()))?;

    let mut engine = PivotEngine::new();
    let trie = match args.effective_hierarchy() {
        Some(hierarchy) => engine.pivot_with_hierarchy(&rows, hierarchy.iter().cloned()),
        None => engine.pivot(&rows),
    }
    .context("Failed to build pivot")?;

    let rendered = trie.to_string();

    match &args.output {
        Some(path) => {
            write_tree(trie, path).context("Failed to write tree")?;
            info!("✓ Tree written to: {}", path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(rendered)
}
