//! Plain-text trie output.

use super::json::prepare_output_path;
use crate::trie::{render_tree, AggregationTrie};
use crate::utils::error::OutputError;
use log::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the rendering of `trie` to a text file
pub fn write_tree(trie: &AggregationTrie, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing tree to: {}", output_path.display());
    prepare_output_path(output_path)?;

    let rendered = render_tree(trie);
    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);

    writer
        .write_all(rendered.as_bytes())
        .map_err(OutputError::WriteFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Tree written successfully ({} bytes)", rendered.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalizer::PathRow;

    #[test]
    fn test_write_tree() {
        let trie = AggregationTrie::build(&[PathRow::new(vec!["a".into()], 1.0)]).unwrap();
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("tree.txt");

        write_tree(&trie, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "root ([1.0])\n  a ([1.0])\n");
    }
}
