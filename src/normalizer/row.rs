//! Flat input rows and their ordered path form.

use crate::utils::config::MEASURE_KEY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A flat input row: dimension name -> value, plus the measure under `#`.
///
/// Values are optional so that sources carrying explicit nulls can be
/// represented and rejected during validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Row {
    fields: BTreeMap<String, Option<String>>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a dimension value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, Some(value.into()));
        self
    }

    /// Builder-style insert of the measure
    pub fn with_measure(self, measure: impl ToString) -> Self {
        self.with(MEASURE_KEY, measure.to_string())
    }

    /// Builder-style insert of an absent (null) value
    pub fn with_absent(mut self, name: impl Into<String>) -> Self {
        self.insert(name, None);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Option<String>) {
        self.fields.insert(name.into(), value);
    }

    /// `None` if the field is missing, `Some(None)` if present but absent
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.fields.get(name).map(Option::as_deref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields, measure included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_deref()))
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Row
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs
            .into_iter()
            .map(|(name, value)| (name.into(), Some(value.into())))
            .collect()
    }
}

impl FromIterator<(String, Option<String>)> for Row {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Dimension values in hierarchy order plus the row's measure.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PathRow {
    path: Vec<String>,
    measure: f64,
}

impl PathRow {
    pub fn new(path: Vec<String>, measure: f64) -> Self {
        Self { path, measure }
    }

    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub fn measure(&self) -> f64 {
        self.measure
    }
}

impl fmt::Display for PathRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Row{{labels=[{}], value={:.2}}}",
            self.path.join(", "),
            self.measure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_pairs() {
        let row = Row::from([("eyes", "brown"), ("#", "10")]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("eyes"), Some(Some("brown")));
        assert_eq!(row.get("hair"), None);
    }

    #[test]
    fn test_row_builder_absent_value() {
        let row = Row::new().with("eyes", "blue").with_absent("hair").with_measure(2.5);
        assert_eq!(row.get("hair"), Some(None));
        assert_eq!(row.get("#"), Some(Some("2.5")));
        assert!(row.contains("eyes"));
    }

    #[test]
    fn test_row_deserializes_nulls() {
        let row: Row = serde_json::from_str(r##"{"eyes": null, "#": "1"}"##).unwrap();
        assert_eq!(row.get("eyes"), Some(None));
    }

    #[test]
    fn test_path_row_display() {
        let row = PathRow::new(vec!["brown".into(), "dark".into()], 10.0);
        assert_eq!(row.to_string(), "Row{labels=[brown, dark], value=10.00}");
    }
}
