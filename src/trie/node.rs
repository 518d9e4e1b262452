//! A single trie node.

use std::collections::HashMap;

/// One label, the measures observed through it, and its children keyed by label.
#[derive(Debug, Clone, PartialEq)]
pub struct TrieNode {
    label: String,
    values: Vec<f64>,
    children: HashMap<String, TrieNode>,
}

impl TrieNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: Vec::new(),
            children: HashMap::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Every measure routed through this node, in build order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn children(&self) -> &HashMap<String, TrieNode> {
        &self.children
    }

    pub fn child(&self, label: &str) -> Option<&TrieNode> {
        self.children.get(label)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Children sorted by label
    pub fn sorted_children(&self) -> Vec<&TrieNode> {
        let mut children: Vec<&TrieNode> = self.children.values().collect();
        children.sort_by(|a, b| a.label.cmp(&b.label));
        children
    }

    pub(crate) fn push_value(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Child for `label`, created on first use
    pub(crate) fn get_or_add_child(&mut self, label: &str) -> &mut TrieNode {
        self.children
            .entry(label.to_string())
            .or_insert_with(|| TrieNode::new(label))
    }
}
