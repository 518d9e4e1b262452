//! Text rendering of a trie, one node per line.
//!
//! Format: `label ([v1, v2, ...])`, indented two spaces per depth.
//! Siblings are listed in ascending label order.

use super::node::TrieNode;
use super::tree::AggregationTrie;
use std::fmt::{self, Write};

/// Render a trie to a string
pub fn render_tree(trie: &AggregationTrie) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail
    let _ = render_node(&mut out, trie.root(), 0);
    out
}

fn render_node<W: Write>(out: &mut W, node: &TrieNode, depth: usize) -> fmt::Result {
    writeln!(
        out,
        "{:indent$}{} ({:?})",
        "",
        node.label(),
        node.values(),
        indent = depth * 2
    )?;

    for child in node.sorted_children() {
        render_node(out, child, depth + 1)?;
    }
    Ok(())
}

impl fmt::Display for AggregationTrie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render_node(f, self.root(), 0)
    }
}
