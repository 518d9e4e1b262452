//! JSON row source.
//!
//! Accepted layouts:
//! - a top-level array of objects: `[{"eyes": "blue", "#": 20}, ...]`
//! - an object wrapping that array under `"rows"`
//!
//! Scalars are kept as strings (numbers and booleans are stringified),
//! `null` becomes an absent value.

use crate::normalizer::Row;
use crate::utils::error::ParseError;
use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Read and parse a JSON row file
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Row>, ParseError> {
    let path = path.as_ref();
    debug!("Reading rows from: {}", path.display());

    let contents = fs::read_to_string(path)?;
    parse_rows_str(&contents)
}

/// Parse rows from JSON text
pub fn parse_rows_str(contents: &str) -> Result<Vec<Row>, ParseError> {
    let raw: Value = serde_json::from_str(contents)?;
    parse_rows(&raw)
}

/// Parse rows from a JSON value
///
/// # Errors
/// * `ParseError::InvalidFormat` - not an array of flat objects
pub fn parse_rows(raw: &Value) -> Result<Vec<Row>, ParseError> {
    let items = match raw {
        Value::Array(items) => items,
        Value::Object(obj) => match obj.get("rows") {
            Some(Value::Array(items)) => items,
            _ => {
                return Err(ParseError::InvalidFormat(
                    "expected an array of rows or an object with a \"rows\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(ParseError::InvalidFormat(
                "expected an array of rows".to_string(),
            ))
        }
    };

    let rows = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_row(index, item))
        .collect::<Result<Vec<Row>, ParseError>>()?;

    debug!("Parsed {} rows", rows.len());
    Ok(rows)
}

fn parse_row(index: usize, item: &Value) -> Result<Row, ParseError> {
    let Value::Object(fields) = item else {
        return Err(ParseError::InvalidFormat(format!(
            "row {} is not an object",
            index
        )));
    };

    fields
        .iter()
        .map(|(name, value)| {
            let value = match value {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                Value::Number(n) => Some(n.to_string()),
                Value::Bool(b) => Some(b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ParseError::InvalidFormat(format!(
                        "row {} field '{}' is not a scalar",
                        index, name
                    )))
                }
            };
            Ok((name.clone(), value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array_of_rows() {
        let rows = parse_rows_str(
            r##"[{"eyes": "brown", "#": 10}, {"eyes": "blue", "#": "20.5"}]"##,
        )
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("#"), Some(Some("10")));
        assert_eq!(rows[1].get("#"), Some(Some("20.5")));
    }

    #[test]
    fn test_parse_wrapped_rows() {
        let rows = parse_rows_str(r##"{"rows": [{"eyes": null, "#": 1}]}"##).unwrap();
        assert_eq!(rows[0].get("eyes"), Some(None));
    }

    #[test]
    fn test_rejects_nested_values() {
        let err = parse_rows_str(r#"[{"eyes": ["blue"]}]"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_non_object_rows() {
        let err = parse_rows_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse_rows_str("[{").unwrap_err();
        assert!(matches!(err, ParseError::JsonError(_)));
    }
}
