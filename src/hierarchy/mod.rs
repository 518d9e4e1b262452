//! Dimension ordering for trie construction.
//!
//! A hierarchy decides which dimension sits at which depth of the trie.
//! It is either the natural lexical order of dimension names or an explicit,
//! caller-supplied list.

pub mod order;

pub use order::HierarchyOrder;
