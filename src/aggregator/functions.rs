//! Canonical reducers.
//!
//! Every reducer receives a node's full multiset of measures in append
//! order, duplicates included.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sum of all values. `0.0` for an empty slice.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Arithmetic mean. `NaN` for an empty slice.
///
/// A node reached by a query always holds at least one value, except the
/// root of a trie built from zero rows.
pub fn average(values: &[f64]) -> f64 {
    sum(values) / values.len() as f64
}

/// Most frequent value. Ties go to the smallest value; `0.0` for an empty slice.
pub fn mode(values: &[f64]) -> f64 {
    let mut occurrences: BTreeMap<OrderedFloat<f64>, usize> = BTreeMap::new();
    for &value in values {
        *occurrences.entry(OrderedFloat(value)).or_insert(0) += 1;
    }

    // Ascending key order plus a strict comparison keeps the smallest on ties
    let mut best: Option<(f64, usize)> = None;
    for (value, count) in occurrences {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((value.into_inner(), count));
        }
    }

    best.map_or(0.0, |(value, _)| value)
}

/// Smallest value. `0.0` for an empty slice.
pub fn min(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::min).unwrap_or(0.0)
}

/// Largest value. `0.0` for an empty slice.
pub fn max(values: &[f64]) -> f64 {
    values.iter().copied().reduce(f64::max).unwrap_or(0.0)
}

/// Number of values
pub fn count(values: &[f64]) -> f64 {
    values.len() as f64
}

/// Named reducer, selectable from configuration files and the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    Average,
    Mode,
    Min,
    Max,
    Count,
}

impl Aggregation {
    pub const ALL: [Aggregation; 6] = [
        Aggregation::Sum,
        Aggregation::Average,
        Aggregation::Mode,
        Aggregation::Min,
        Aggregation::Max,
        Aggregation::Count,
    ];

    /// The reducer function for this aggregation
    pub fn reducer(self) -> fn(&[f64]) -> f64 {
        match self {
            Aggregation::Sum => sum,
            Aggregation::Average => average,
            Aggregation::Mode => mode,
            Aggregation::Min => min,
            Aggregation::Max => max,
            Aggregation::Count => count,
        }
    }

    pub fn apply(self, values: &[f64]) -> f64 {
        (self.reducer())(values)
    }

    pub fn name(self) -> &'static str {
        match self {
            Aggregation::Sum => "sum",
            Aggregation::Average => "average",
            Aggregation::Mode => "mode",
            Aggregation::Min => "min",
            Aggregation::Max => "max",
            Aggregation::Count => "count",
        }
    }
}

impl fmt::Display for Aggregation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Aggregation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Aggregation::Sum),
            "average" | "avg" | "mean" => Ok(Aggregation::Average),
            "mode" => Ok(Aggregation::Mode),
            "min" => Ok(Aggregation::Min),
            "max" => Ok(Aggregation::Max),
            "count" => Ok(Aggregation::Count),
            other => Err(format!(
                "unknown aggregation '{}' (expected one of: sum, average, mode, min, max, count)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[10.0, 20.0, 30.0]), 60.0);
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[20.0, 30.0]), 25.0);
        assert!(average(&[]).is_nan());
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), 2.0);
        assert_eq!(mode(&[5.0]), 5.0);
        assert_eq!(mode(&[]), 0.0);
    }

    #[test]
    fn test_mode_tie_picks_smallest_value() {
        assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0, 2.0]), 1.0);
        assert_eq!(mode(&[-4.0, 7.0]), -4.0);
    }

    #[test]
    fn test_min_max_count() {
        let values = [4.0, -1.0, 9.5, 4.0];
        assert_eq!(min(&values), -1.0);
        assert_eq!(max(&values), 9.5);
        assert_eq!(count(&values), 4.0);
        assert_eq!(min(&[]), 0.0);
        assert_eq!(max(&[]), 0.0);
    }

    #[test]
    fn test_aggregation_from_str() {
        assert_eq!("SUM".parse::<Aggregation>(), Ok(Aggregation::Sum));
        assert_eq!("avg".parse::<Aggregation>(), Ok(Aggregation::Average));
        assert!("median".parse::<Aggregation>().is_err());
    }

    #[test]
    fn test_aggregation_names_round_trip() {
        for aggregation in Aggregation::ALL {
            assert_eq!(aggregation.name().parse::<Aggregation>(), Ok(aggregation));
        }
    }

    #[test]
    fn test_aggregation_apply() {
        assert_eq!(Aggregation::Average.apply(&[10.0, 20.0, 30.0]), 20.0);
        assert_eq!(Aggregation::Count.apply(&[1.0, 1.0]), 2.0);
    }
}
