//! Custom error types for tally-export
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for tally-export operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// Configuration-related errors (settings, definition files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML serialization/deserialization errors
    #[error("YAML error: {0}")]
    Yaml(String),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Validation errors for export configurations and record sets
    #[error("Validation error: {0}")]
    Validation(String),

    /// Sink errors while handing a finished file off
    #[error("Export error: {0}")]
    Export(String),

    /// Export requested with no records
    #[error("No data available to export")]
    NoData,

    /// Export requested for an entity type with no registered configuration
    #[error("No export configuration registered for '{entity_type}'")]
    ConfigMissing { entity_type: String },
}

impl TallyError {
    /// Create a "config missing" error for an entity type
    pub fn config_missing(entity_type: impl Into<String>) -> Self {
        Self::ConfigMissing {
            entity_type: entity_type.into(),
        }
    }

    /// Check if this is the empty-input error
    pub fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// Check if this is the unknown-entity error
    pub fn is_config_missing(&self) -> bool {
        matches!(self, Self::ConfigMissing { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TallyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TallyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for TallyError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err.to_string())
    }
}

impl From<csv::Error> for TallyError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for tally-export operations
pub type TallyResult<T> = Result<T, TallyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::Config("bad file".into());
        assert_eq!(err.to_string(), "Configuration error: bad file");
    }

    #[test]
    fn test_no_data_message() {
        let err = TallyError::NoData;
        assert_eq!(err.to_string(), "No data available to export");
        assert!(err.is_no_data());
        assert!(!err.is_config_missing());
    }

    #[test]
    fn test_config_missing_error() {
        let err = TallyError::config_missing("vendors");
        assert_eq!(
            err.to_string(),
            "No export configuration registered for 'vendors'"
        );
        assert!(err.is_config_missing());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TallyError = json_err.into();
        assert!(matches!(err, TallyError::Json(_)));
    }
}
