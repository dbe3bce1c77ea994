//! CSV rendering
//!
//! Formats records through an [`ExportConfig`] and serializes the result
//! with a header row. Fields are quoted only when they contain the
//! delimiter, a quote or a line break; embedded quotes are doubled.

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::{TallyError, TallyResult};
use crate::records::DataRecord;

use super::config::ExportConfig;

/// MIME type of every produced file
pub const CSV_MIME_TYPE: &str = "text/csv";

/// A finished CSV file, ready to be handed to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvFile {
    file_name: String,
    text: String,
    row_count: usize,
}

impl CsvFile {
    pub fn new(file_name: impl Into<String>, text: String, row_count: usize) -> Self {
        Self {
            file_name: file_name.into(),
            text,
            row_count,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &'static str {
        CSV_MIME_TYPE
    }

    /// CSV text including the header row
    pub fn text(&self) -> &str {
        &self.text
    }

    /// UTF-8 bytes of the file
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of data rows (the header row is not counted)
    pub fn row_count(&self) -> usize {
        self.row_count
    }
}

/// Format every record into one row of display strings
pub fn format_rows(records: &[DataRecord], config: &ExportConfig) -> Vec<Vec<String>> {
    records.iter().map(|r| config.render_row(r)).collect()
}

/// Serialize formatted rows under the config's header row
pub fn write_csv(config: &ExportConfig, rows: &[Vec<String>]) -> TallyResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(config.headers())?;
    for row in rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| TallyError::Csv(format!("Failed to flush CSV output: {}", e)))?;

    String::from_utf8(bytes).map_err(|e| TallyError::Csv(format!("Invalid UTF-8 in output: {}", e)))
}

/// Format and serialize records into a named file
pub fn render_file(records: &[DataRecord], config: &ExportConfig) -> TallyResult<CsvFile> {
    let rows = format_rows(records, config);
    let text = write_csv(config, &rows)?;
    Ok(CsvFile::new(config.file_name(), text, rows.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::config::{Column, ColumnSpec};
    use serde_json::json;

    fn config() -> ExportConfig {
        ExportConfig::new(
            "notes.csv",
            vec![
                Column::new("ID", ColumnSpec::new("id")),
                Column::new("Note", ColumnSpec::new("note")),
            ],
        )
        .unwrap()
    }

    fn records(values: Vec<serde_json::Value>) -> Vec<DataRecord> {
        values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect()
    }

    #[test]
    fn test_header_and_rows() {
        let recs = records(vec![json!({"id": 1, "note": "a"}), json!({"id": 2, "note": "b"})]);
        let file = render_file(&recs, &config()).unwrap();

        assert_eq!(file.text(), "ID,Note\r\n1,a\r\n2,b\r\n");
        assert_eq!(file.row_count(), 2);
        assert_eq!(file.file_name(), "notes.csv");
        assert_eq!(file.mime_type(), "text/csv");
    }

    #[test]
    fn test_quoting_rules() {
        let recs = records(vec![
            json!({"id": 1, "note": "hello, world"}),
            json!({"id": 2, "note": "say \"hi\""}),
            json!({"id": 3, "note": "two\nlines"}),
        ]);
        let file = render_file(&recs, &config()).unwrap();

        assert!(file.text().contains("1,\"hello, world\"\r\n"));
        assert!(file.text().contains("2,\"say \"\"hi\"\"\"\r\n"));
        assert!(file.text().contains("3,\"two\nlines\"\r\n"));
    }

    #[test]
    fn test_quoted_output_reads_back() {
        let recs = records(vec![json!({"id": 9, "note": "a,\"b\"\nc"})]);
        let file = render_file(&recs, &config()).unwrap();

        let mut reader = csv::Reader::from_reader(file.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers.iter().collect::<Vec<_>>(), vec!["ID", "Note"]);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "a,\"b\"\nc");
    }

    #[test]
    fn test_empty_cells_unquoted() {
        let recs = records(vec![json!({"id": 5})]);
        let file = render_file(&recs, &config()).unwrap();
        assert_eq!(file.text(), "ID,Note\r\n5,\r\n");
    }

    #[test]
    fn test_format_rows_counts() {
        let recs = records(vec![json!({}), json!({}), json!({})]);
        let rows = format_rows(&recs, &config());
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 2));
    }
}
