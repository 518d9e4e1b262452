//! The dimension schema of a batch.

use super::row::Row;
use crate::utils::config::MEASURE_KEY;
use std::collections::BTreeSet;

/// Dimension names of the first row in a batch, measure key excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionSchema {
    names: BTreeSet<String>,
}

impl DimensionSchema {
    pub fn from_row(row: &Row) -> Self {
        Self {
            names: row
                .names()
                .filter(|name| *name != MEASURE_KEY)
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of dimensions, which is also the path length of every row
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in lexical order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_excludes_measure() {
        let row = Row::from([("nation", "italy"), ("eyes", "blue"), ("#", "3")]);
        let schema = DimensionSchema::from_row(&row);

        assert_eq!(schema.len(), 2);
        assert!(schema.contains("eyes"));
        assert!(!schema.contains("#"));
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["eyes", "nation"]);
    }
}
