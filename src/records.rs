//! Record sets
//!
//! Records are plain JSON objects supplied by the caller. Record files may
//! hold a bare array of objects, or a paginated list response whose
//! `results` field carries the array.

use std::io::Read;
use std::path::Path;

use clap::ValueEnum;
use serde_json::{Map, Value};

use crate::error::{TallyError, TallyResult};

/// One record: field name to arbitrary value
pub type DataRecord = Map<String, Value>;

/// Field holding the records of a paginated list response
pub const RESULTS_FIELD: &str = "results";

/// Encoding of a record file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputFormat {
    /// JSON document
    #[default]
    Json,
    /// YAML document
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension (`.yaml`/`.yml` are YAML)
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

/// Parse a record set from text
///
/// Blank input yields an empty set.
pub fn parse_records(text: &str, format: InputFormat) -> TallyResult<Vec<DataRecord>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: Value = match format {
        InputFormat::Json => serde_json::from_str(text)?,
        InputFormat::Yaml => serde_yaml::from_str(text)?,
    };

    records_from_value(value)
}

/// Extract records from an already parsed document
pub fn records_from_value(value: Value) -> TallyResult<Vec<DataRecord>> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(map),
                other => Err(TallyError::Validation(format!(
                    "Record {} is not an object (found {})",
                    index,
                    kind(&other)
                ))),
            })
            .collect(),
        Value::Object(mut map) => {
            if matches!(map.get(RESULTS_FIELD), Some(Value::Array(_))) {
                let results = map.remove(RESULTS_FIELD).unwrap_or(Value::Null);
                records_from_value(results)
            } else {
                Ok(vec![map])
            }
        }
        other => Err(TallyError::Validation(format!(
            "Expected an array of records, found {}",
            kind(&other)
        ))),
    }
}

/// Read a record set from a file, or from stdin when `path` is `None` or `-`
///
/// The format defaults to the one implied by the file extension.
pub fn read_records(path: Option<&Path>, format: Option<InputFormat>) -> TallyResult<Vec<DataRecord>> {
    match path.filter(|p| p.as_os_str() != "-") {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| {
                TallyError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            parse_records(&text, format.unwrap_or_else(|| InputFormat::from_path(path)))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|e| TallyError::Io(format!("Failed to read stdin: {}", e)))?;
            parse_records(&text, format.unwrap_or_default())
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_bare_array() {
        let records = parse_records(r#"[{"id": 1}, {"id": 2}]"#, InputFormat::Json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("id"), Some(&json!(2)));
    }

    #[test]
    fn test_paginated_envelope() {
        let text = r#"{"count": 2, "next": null, "previous": null, "results": [{"id": 1}, {"id": 2}]}"#;
        let records = parse_records(text, InputFormat::Json).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_single_object() {
        let records = parse_records(r#"{"id": 1, "results": "n/a"}"#, InputFormat::Json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("results"), Some(&json!("n/a")));
    }

    #[test]
    fn test_blank_and_null_input() {
        assert!(parse_records("  \n", InputFormat::Json).unwrap().is_empty());
        assert!(parse_records("null", InputFormat::Json).unwrap().is_empty());
        assert!(parse_records("[]", InputFormat::Json).unwrap().is_empty());
    }

    #[test]
    fn test_non_object_item_rejected() {
        let err = parse_records(r#"[{"id": 1}, 5]"#, InputFormat::Json).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Record 1 is not an object"));
    }

    #[test]
    fn test_scalar_document_rejected() {
        assert!(parse_records("\"hello\"", InputFormat::Json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_records("[{", InputFormat::Json).unwrap_err();
        assert!(matches!(err, TallyError::Json(_)));
    }

    #[test]
    fn test_yaml_records() {
        let yaml = "- id: 1\n  customer:\n    name: Acme\n- id: 2\n";
        let records = parse_records(yaml, InputFormat::Yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("customer"), Some(&json!({"name": "Acme"})));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(InputFormat::from_path(Path::new("a.yaml")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.YML")), InputFormat::Yaml);
        assert_eq!(InputFormat::from_path(Path::new("a.json")), InputFormat::Json);
        assert_eq!(InputFormat::from_path(Path::new("records")), InputFormat::Json);
    }

    #[test]
    fn test_read_records_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("staff.yml");
        std::fs::write(&path, "results:\n  - id: 3\n").unwrap();

        let records = read_records(Some(&path), None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("id"), Some(&json!(3)));
    }

    #[test]
    fn test_read_records_missing_file() {
        let err = read_records(Some(Path::new("/nonexistent/records.json")), None).unwrap_err();
        assert!(matches!(err, TallyError::Io(_)));
    }
}
