//! `HierarchyOrder`: a total order over dimension names.
//!
//! Ranking, from first to last:
//! 1. names listed in an explicit hierarchy, by list position
//! 2. every other dimension, lexically
//! 3. the measure key, always last

use crate::normalizer::DimensionSchema;
use crate::utils::config::MEASURE_KEY;
use crate::utils::error::PivotError;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Build order for dimensions. Immutable once constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyOrder {
    /// Explicit list as given by the caller, `None` for natural order
    explicit: Option<Vec<String>>,

    /// Position of each explicitly listed name
    ranks: HashMap<String, usize>,
}

/// Sort class of a dimension name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RankClass {
    Listed(usize),
    Unlisted,
    Measure,
}

impl HierarchyOrder {
    /// Natural lexical order over dimension names
    pub fn natural() -> Self {
        Self::default()
    }

    /// Explicit order, validated for blank, duplicate and reserved entries.
    ///
    /// Names are checked against a row schema separately, see
    /// [`HierarchyOrder::validate_against`].
    ///
    /// # Errors
    /// * `PivotError::Configuration` - blank name, duplicate name, or the measure key
    pub fn explicit<I, S>(names: I) -> Result<Self, PivotError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let mut ranks = HashMap::with_capacity(names.len());

        for (index, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(PivotError::Configuration(format!(
                    "entry {} is an empty dimension name",
                    index
                )));
            }
            if name == MEASURE_KEY {
                return Err(PivotError::Configuration(format!(
                    "the measure key '{}' cannot be part of a hierarchy",
                    MEASURE_KEY
                )));
            }
            if ranks.insert(name.clone(), index).is_some() {
                return Err(PivotError::Configuration(format!(
                    "dimension '{}' is listed more than once",
                    name
                )));
            }
        }

        Ok(Self {
            explicit: Some(names),
            ranks,
        })
    }

    pub fn is_natural(&self) -> bool {
        self.explicit.is_none()
    }

    /// The explicit list, if any
    pub fn names(&self) -> Option<&[String]> {
        self.explicit.as_deref()
    }

    /// Fails if the hierarchy names a dimension the schema does not have
    pub fn validate_against(&self, schema: &DimensionSchema) -> Result<(), PivotError> {
        let Some(names) = &self.explicit else {
            return Ok(());
        };

        let unknown: Vec<&str> = names
            .iter()
            .filter(|name| !schema.contains(name))
            .map(String::as_str)
            .collect();

        if unknown.is_empty() {
            Ok(())
        } else {
            Err(PivotError::Configuration(format!(
                "unknown dimension(s) {:?}; row schema has {:?}",
                unknown,
                schema.names().collect::<Vec<_>>()
            )))
        }
    }

    /// Compare two dimension names in build order
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.class(a)
            .cmp(&self.class(b))
            .then_with(|| a.cmp(b))
    }

    /// Sort dimension names into build order
    pub fn arrange<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut arranged: Vec<String> = names.into_iter().map(str::to_string).collect();
        arranged.sort_by(|a, b| self.compare(a, b));
        arranged
    }

    fn class(&self, name: &str) -> RankClass {
        if name == MEASURE_KEY {
            RankClass::Measure
        } else if let Some(&rank) = self.ranks.get(name) {
            RankClass::Listed(rank)
        } else {
            RankClass::Unlisted
        }
    }
}

impl fmt::Display for HierarchyOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.explicit {
            Some(names) => write!(f, "[{}]", names.join(", ")),
            None => write!(f, "natural"),
        }
    }
}
