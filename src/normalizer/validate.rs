//! Batch validation and conversion into `PathRow`s.
//!
//! Validation is all-or-nothing: every row is checked before any row is
//! converted, so a failure never yields partial results.

use super::row::{PathRow, Row};
use super::schema::DimensionSchema;
use crate::hierarchy::HierarchyOrder;
use crate::utils::config::MEASURE_KEY;
use crate::utils::error::PivotError;
use log::debug;

/// Output of a successful normalization
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBatch {
    /// Dimension names in build order, i.e. the meaning of each path position
    pub dimensions: Vec<String>,

    /// One path row per input row, in input order
    pub rows: Vec<PathRow>,
}

/// Validate `rows` and convert them into path rows ordered by `order`.
///
/// # Errors
/// * `PivotError::EmptyInput` - no rows
/// * `PivotError::Configuration` - the hierarchy names an unknown dimension
/// * `PivotError::SchemaMismatch` - field count or names differ from row 0
/// * `PivotError::MissingMeasure` / `PivotError::InvalidMeasure` - bad `#` field
/// * `PivotError::InvalidLabel` - blank dimension name or null value
pub fn normalize(rows: &[Row], order: &HierarchyOrder) -> Result<Vec<PathRow>, PivotError> {
    normalize_batch(rows, order).map(|batch| batch.rows)
}

/// Same as [`normalize`], also returning the ordered dimension names
pub fn normalize_batch(
    rows: &[Row],
    order: &HierarchyOrder,
) -> Result<NormalizedBatch, PivotError> {
    let first = rows.first().ok_or(PivotError::EmptyInput)?;
    let schema = DimensionSchema::from_row(first);
    order.validate_against(&schema)?;

    debug!(
        "Validating {} rows against {} dimensions",
        rows.len(),
        schema.len()
    );

    let expected_len = first.len();
    let measures = rows
        .iter()
        .enumerate()
        .map(|(index, row)| validate_row(index, row, &schema, expected_len))
        .collect::<Result<Vec<f64>, PivotError>>()?;

    // Sorting once is enough: every row shares the schema.
    let dimensions = order.arrange(schema.names());
    debug!("Build order: {:?}", dimensions);

    let path_rows = rows
        .iter()
        .zip(measures)
        .map(|(row, measure)| {
            let path = dimensions
                .iter()
                .map(|name| row.get(name).flatten().unwrap_or_default().to_string())
                .collect();
            PathRow::new(path, measure)
        })
        .collect();

    Ok(NormalizedBatch {
        dimensions,
        rows: path_rows,
    })
}

/// Parse a measure string as a finite number.
///
/// Surrounding whitespace is ignored; `NaN` and infinities are rejected.
pub fn parse_measure(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Check one row and return its parsed measure
fn validate_row(
    index: usize,
    row: &Row,
    schema: &DimensionSchema,
    expected_len: usize,
) -> Result<f64, PivotError> {
    if row.len() != expected_len {
        return Err(PivotError::SchemaMismatch {
            row: index,
            reason: format!("expected {} fields, found {}", expected_len, row.len()),
        });
    }

    let measure = match row.get(MEASURE_KEY) {
        None => return Err(PivotError::MissingMeasure { row: index }),
        Some(None) => {
            return Err(PivotError::InvalidMeasure {
                row: index,
                value: "null".to_string(),
            })
        }
        Some(Some(raw)) => parse_measure(raw).ok_or_else(|| PivotError::InvalidMeasure {
            row: index,
            value: raw.to_string(),
        })?,
    };

    for (name, value) in row.fields() {
        if name.trim().is_empty() {
            return Err(PivotError::InvalidLabel {
                row: index,
                reason: "dimension names must be non-empty".to_string(),
            });
        }
        if value.is_none() {
            return Err(PivotError::InvalidLabel {
                row: index,
                reason: format!("null value for dimension '{}'", name),
            });
        }
        if name != MEASURE_KEY && !schema.contains(name) {
            return Err(PivotError::SchemaMismatch {
                row: index,
                reason: format!("unexpected dimension '{}'", name),
            });
        }
    }

    Ok(measure)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<Row> {
        vec![
            Row::from([("eyes", "brown"), ("hair", "dark"), ("nation", "italy"), ("#", "10")]),
            Row::from([("eyes", "blue"), ("hair", "blonde"), ("nation", "italy"), ("#", "20")]),
        ]
    }

    #[test]
    fn test_parse_measure() {
        assert_eq!(parse_measure("10"), Some(10.0));
        assert_eq!(parse_measure(" -2.5 "), Some(-2.5));
        assert_eq!(parse_measure("1e3"), Some(1000.0));
        assert_eq!(parse_measure("M"), None);
        assert_eq!(parse_measure(""), None);
        assert_eq!(parse_measure("NaN"), None);
        assert_eq!(parse_measure("inf"), None);
    }

    #[test]
    fn test_normalize_natural_order() {
        let batch = normalize_batch(&sample_rows(), &HierarchyOrder::natural()).unwrap();

        assert_eq!(batch.dimensions, vec!["eyes", "hair", "nation"]);
        assert_eq!(batch.rows[0].path(), ["brown", "dark", "italy"]);
        assert_eq!(batch.rows[1].measure(), 20.0);
    }

    #[test]
    fn test_normalize_explicit_order() {
        let order = HierarchyOrder::explicit(["nation", "hair", "eyes"]).unwrap();
        let rows = normalize(&sample_rows(), &order).unwrap();

        assert_eq!(rows[0].path(), ["italy", "dark", "brown"]);
        assert_eq!(rows[1].path(), ["italy", "blonde", "blue"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            normalize(&[], &HierarchyOrder::natural()),
            Err(PivotError::EmptyInput)
        );
    }

    #[test]
    fn test_field_count_mismatch() {
        let mut rows = sample_rows();
        rows.push(Row::from([("eyes", "blue"), ("hair", "dark"), ("#", "30")]));

        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert!(matches!(err, PivotError::SchemaMismatch { row: 2, .. }));
    }

    #[test]
    fn test_dimension_identity_mismatch() {
        let mut rows = sample_rows();
        rows.push(Row::from([("eyes", "blue"), ("hair", "dark"), ("city", "rome"), ("#", "30")]));

        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert!(matches!(err, PivotError::SchemaMismatch { row: 2, .. }));
    }

    #[test]
    fn test_missing_measure() {
        let rows = vec![Row::from([("eyes", "brown"), ("hair", "dark")])];
        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert_eq!(err, PivotError::MissingMeasure { row: 0 });
    }

    #[test]
    fn test_invalid_measure() {
        let mut rows = sample_rows();
        rows.push(Row::from([("eyes", "blue"), ("hair", "dark"), ("nation", "italy"), ("#", "M")]));

        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert_eq!(
            err,
            PivotError::InvalidMeasure {
                row: 2,
                value: "M".to_string()
            }
        );
    }

    #[test]
    fn test_null_measure_is_invalid() {
        let rows = vec![Row::new().with("eyes", "blue").with_absent("#")];
        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert!(matches!(err, PivotError::InvalidMeasure { row: 0, .. }));
    }

    #[test]
    fn test_blank_dimension_name() {
        let rows = vec![Row::from([(" ", "brown"), ("#", "1")])];
        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert!(matches!(err, PivotError::InvalidLabel { row: 0, .. }));
    }

    #[test]
    fn test_null_dimension_value() {
        let mut rows = sample_rows();
        rows.push(
            Row::new()
                .with("eyes", "blue")
                .with_absent("hair")
                .with("nation", "italy")
                .with_measure(5),
        );

        let err = normalize(&rows, &HierarchyOrder::natural()).unwrap_err();
        assert!(matches!(err, PivotError::InvalidLabel { row: 2, .. }));
    }

    #[test]
    fn test_unknown_hierarchy_dimension() {
        let order = HierarchyOrder::explicit(["hair", "city"]).unwrap();
        let err = normalize(&sample_rows(), &order).unwrap_err();
        assert!(matches!(err, PivotError::Configuration(_)));
    }
}
