//! The aggregation trie.
//!
//! Rows are folded into a label-path tree where every node keeps the
//! measures of all rows passing through it, so a query at any depth can
//! reduce over everything "under" its prefix.

pub mod node;
pub mod render;
pub mod tree;

pub use node::TrieNode;
pub use render::render_tree;
pub use tree::AggregationTrie;
