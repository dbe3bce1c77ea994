//! Export configuration types
//!
//! An [`ExportConfig`] fixes the output file name and the ordered list of
//! columns for one entity type. Each column maps a header label to a
//! [`ColumnSpec`]: a dot path into the record plus an optional transform.

use std::collections::HashSet;
use std::ffi::OsStr;
use std::path::Path;

use crate::error::{TallyError, TallyResult};
use crate::records::DataRecord;

use super::path::resolve_path;
use super::transform::{self, Transform};

/// Rule for producing one cell from a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    path: String,
    transform: Option<Transform>,
}

impl ColumnSpec {
    /// Column rendered with the default string coercion
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            transform: None,
        }
    }

    /// Column rendered through a named transform
    pub fn with_transform(path: impl Into<String>, transform: Transform) -> Self {
        Self {
            path: path.into(),
            transform: Some(transform),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn transform(&self) -> Option<Transform> {
        self.transform
    }

    /// Resolve the path against a record and format the value
    pub fn render(&self, record: &DataRecord) -> String {
        let value = resolve_path(record, &self.path);
        match self.transform {
            Some(t) => t.apply(value),
            None => transform::text(value),
        }
    }
}

/// A header label together with its column rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub spec: ColumnSpec,
}

impl Column {
    pub fn new(header: impl Into<String>, spec: ColumnSpec) -> Self {
        Self {
            header: header.into(),
            spec,
        }
    }
}

/// Export configuration for one entity type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    file_name: String,
    columns: Vec<Column>,
}

impl ExportConfig {
    /// Build a configuration, validating the column list
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty file name, a file name that
    /// carries directory components, an empty column list, a blank header
    /// or path, or a header declared twice.
    pub fn new(file_name: impl Into<String>, columns: Vec<Column>) -> TallyResult<Self> {
        let file_name = file_name.into();

        if file_name.trim().is_empty() {
            return Err(TallyError::Validation(
                "Export file name cannot be empty".into(),
            ));
        }

        if !is_bare_file_name(&file_name) {
            return Err(TallyError::Validation(format!(
                "Export file name '{}' must not contain directory components",
                file_name
            )));
        }

        if columns.is_empty() {
            return Err(TallyError::Validation(format!(
                "Export '{}' declares no columns",
                file_name
            )));
        }

        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if column.header.trim().is_empty() {
                return Err(TallyError::Validation(format!(
                    "Export '{}' has a column with an empty header",
                    file_name
                )));
            }
            if column.spec.path.trim().is_empty() {
                return Err(TallyError::Validation(format!(
                    "Column '{}' in '{}' has an empty path",
                    column.header, file_name
                )));
            }
            if !seen.insert(column.header.as_str()) {
                return Err(TallyError::Validation(format!(
                    "Duplicate header '{}' in '{}'",
                    column.header, file_name
                )));
            }
        }

        Ok(Self { file_name, columns })
    }

    /// File name offered for the download
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Columns in declaration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Header labels in declaration order
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Render one record into cells, one per column
    pub fn render_row(&self, record: &DataRecord) -> Vec<String> {
        self.columns.iter().map(|c| c.spec.render(record)).collect()
    }
}

/// True when `name` is a plain file name: no separators, no `..`, not absolute
pub fn is_bare_file_name(name: &str) -> bool {
    Path::new(name).file_name() == Some(OsStr::new(name))
}

/// Column entry in a static configuration table
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub header: &'static str,
    pub path: &'static str,
    pub transform: Option<Transform>,
}

impl ColumnDef {
    pub const fn plain(header: &'static str, path: &'static str) -> Self {
        Self {
            header,
            path,
            transform: None,
        }
    }

    pub const fn with(header: &'static str, path: &'static str, transform: Transform) -> Self {
        Self {
            header,
            path,
            transform: Some(transform),
        }
    }
}

/// Static configuration table for one entity type
#[derive(Debug, Clone, Copy)]
pub struct EntityTable {
    pub entity_type: &'static str,
    pub file_name: &'static str,
    pub columns: &'static [ColumnDef],
}

impl EntityTable {
    /// Convert the table into a validated configuration
    pub fn to_config(&self) -> TallyResult<ExportConfig> {
        let columns = self
            .columns
            .iter()
            .map(|def| {
                let spec = match def.transform {
                    Some(t) => ColumnSpec::with_transform(def.path, t),
                    None => ColumnSpec::new(def.path),
                };
                Column::new(def.header, spec)
            })
            .collect();

        ExportConfig::new(self.file_name, columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::transform::YES_NO;
    use serde_json::json;

    fn record(value: serde_json::Value) -> DataRecord {
        value.as_object().cloned().unwrap()
    }

    fn sample_config() -> ExportConfig {
        ExportConfig::new(
            "orders.csv",
            vec![
                Column::new("Order", ColumnSpec::new("id")),
                Column::new("Customer", ColumnSpec::new("customer.name")),
                Column::new("Paid", ColumnSpec::with_transform("paid", YES_NO)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_headers_keep_declaration_order() {
        let config = sample_config();
        assert_eq!(config.headers(), vec!["Order", "Customer", "Paid"]);
        assert_eq!(config.file_name(), "orders.csv");
    }

    #[test]
    fn test_render_row() {
        let config = sample_config();
        let rec = record(json!({"id": 7, "customer": {"name": "Acme"}, "paid": true}));
        assert_eq!(config.render_row(&rec), vec!["7", "Acme", "Yes"]);
    }

    #[test]
    fn test_render_row_with_missing_fields() {
        let config = sample_config();
        let rec = record(json!({"id": null}));
        assert_eq!(config.render_row(&rec), vec!["", "", "No"]);
    }

    #[test]
    fn test_duplicate_header_rejected() {
        let err = ExportConfig::new(
            "dup.csv",
            vec![
                Column::new("ID", ColumnSpec::new("id")),
                Column::new("ID", ColumnSpec::new("uuid")),
            ],
        )
        .unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Duplicate header 'ID'"));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        assert!(ExportConfig::new("", vec![Column::new("ID", ColumnSpec::new("id"))]).is_err());
        assert!(ExportConfig::new("x.csv", vec![]).is_err());
        assert!(ExportConfig::new("x.csv", vec![Column::new(" ", ColumnSpec::new("id"))]).is_err());
        assert!(ExportConfig::new("x.csv", vec![Column::new("ID", ColumnSpec::new(""))]).is_err());
    }

    #[test]
    fn test_file_name_must_be_bare() {
        let columns = || vec![Column::new("ID", ColumnSpec::new("id"))];

        for name in ["../escaped.csv", "/etc/x.csv", "out/x.csv", "..", "x.csv/"] {
            let err = ExportConfig::new(name, columns()).unwrap_err();
            assert!(err.is_validation(), "{}", name);
        }
        assert!(ExportConfig::new("staff list (2024).csv", columns()).is_ok());
    }

    #[test]
    fn test_bare_file_name() {
        assert!(is_bare_file_name("users-list.csv"));
        assert!(!is_bare_file_name("./users-list.csv"));
        assert!(!is_bare_file_name("a/b.csv"));
        assert!(!is_bare_file_name(""));
    }

    #[test]
    fn test_entity_table_conversion() {
        const TABLE: EntityTable = EntityTable {
            entity_type: "widgets",
            file_name: "widgets.csv",
            columns: &[
                ColumnDef::plain("ID", "id"),
                ColumnDef::with("Enabled", "enabled", YES_NO),
            ],
        };

        let config = TABLE.to_config().unwrap();
        assert_eq!(config.headers(), vec!["ID", "Enabled"]);
        assert_eq!(config.columns()[1].spec.transform(), Some(YES_NO));
    }
}
