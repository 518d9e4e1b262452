//! Trie construction and path queries.
//!
//! Build: for each row, start at the root and append the row's measure to
//! every node along its path, creating children on first use.
//! Cost is O(rows x path length).
//!
//! Query: walk child by child. A missing child short-circuits to
//! `MISSING_PATH_VALUE` without calling the reducer.

use super::node::TrieNode;
use crate::normalizer::PathRow;
use crate::utils::config::{MISSING_PATH_VALUE, ROOT_LABEL};
use crate::utils::error::PivotError;
use log::{debug, warn};

/// Label-path tree over a batch of path rows. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregationTrie {
    root: TrieNode,

    /// Shared path length of the rows it was built from
    path_len: Option<usize>,
}

impl Default for AggregationTrie {
    fn default() -> Self {
        Self {
            root: TrieNode::new(ROOT_LABEL),
            path_len: None,
        }
    }
}

impl AggregationTrie {
    /// An unpopulated trie: a root with no values and no children
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from path rows, iteratively.
    ///
    /// An empty slice is legal and yields an unpopulated root.
    ///
    /// # Errors
    /// * `PivotError::InvalidInput` - rows with different path lengths
    pub fn build(rows: &[PathRow]) -> Result<Self, PivotError> {
        let mut trie = Self::prepare(rows)?;

        for row in rows {
            let measure = row.measure();
            let mut node = &mut trie.root;
            node.push_value(measure);

            for label in row.path() {
                node = node.get_or_add_child(label);
                node.push_value(measure);
            }
        }

        debug!("Built trie from {} rows", rows.len());
        Ok(trie)
    }

    /// Build a trie from path rows, recursively.
    ///
    /// Produces exactly the same tree as [`AggregationTrie::build`].
    pub fn build_recursive(rows: &[PathRow]) -> Result<Self, PivotError> {
        let mut trie = Self::prepare(rows)?;

        for row in rows {
            insert_recursive(&mut trie.root, row.path(), row.measure());
        }

        debug!("Built trie recursively from {} rows", rows.len());
        Ok(trie)
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Path length shared by every row, `None` for an empty build
    pub fn path_len(&self) -> Option<usize> {
        self.path_len
    }

    /// Number of rows folded into the trie
    pub fn row_count(&self) -> usize {
        self.root.values().len()
    }

    /// Node reached by following `path` from the root.
    ///
    /// An empty path denotes the root.
    pub fn node_at<S: AsRef<str>>(&self, path: &[S]) -> Option<&TrieNode> {
        path.iter()
            .try_fold(&self.root, |node, label| node.child(label.as_ref()))
    }

    pub fn contains_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.node_at(path).is_some()
    }

    /// Reduce the measures at the node addressed by `path`.
    ///
    /// Path elements are dimension values, positionally ordered by the
    /// hierarchy used at build time. Returns `MISSING_PATH_VALUE` without
    /// invoking `reduce` when no such node exists.
    pub fn query<S, F>(&self, path: &[S], reduce: F) -> f64
    where
        S: AsRef<str>,
        F: FnOnce(&[f64]) -> f64,
    {
        match self.node_at(path) {
            Some(node) => reduce(node.values()),
            None => {
                debug!("No node for path {:?}", labels(path));
                MISSING_PATH_VALUE
            }
        }
    }

    fn prepare(rows: &[PathRow]) -> Result<Self, PivotError> {
        let path_len = rows.first().map(|row| row.path().len());

        if let Some(expected) = path_len {
            if let Some((index, row)) = rows
                .iter()
                .enumerate()
                .find(|(_, row)| row.path().len() != expected)
            {
                return Err(PivotError::InvalidInput(format!(
                    "path row {} has {} labels, expected {}",
                    index,
                    row.path().len(),
                    expected
                )));
            }
        } else {
            warn!("Building trie from zero rows");
        }

        Ok(Self {
            root: TrieNode::new(ROOT_LABEL),
            path_len,
        })
    }
}

fn insert_recursive(node: &mut TrieNode, path: &[String], measure: f64) {
    node.push_value(measure);

    if let Some((head, rest)) = path.split_first() {
        insert_recursive(node.get_or_add_child(head), rest, measure);
    }
}

fn labels<S: AsRef<str>>(path: &[S]) -> Vec<&str> {
    path.iter().map(AsRef::as_ref).collect()
}
