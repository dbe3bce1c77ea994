//! tally-export - declarative CSV export for business records
//!
//! Records of a named entity type (users, staff, clients, invoices, ...)
//! are turned into CSV files whose columns and cell formatting come from a
//! per-entity configuration registry.
//!
//! # Architecture
//!
//! - `export`: path resolution, transforms, configuration registry, CSV
//!   rendering, sinks and the engine
//! - `records`: reading record sets from JSON or YAML
//! - `config`: paths and persisted settings
//! - `error`: custom error types
//! - `logging`: tracing subscriber setup
//! - `display` / `cli`: terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::export::{ExportEngine, ExportRegistry, FileSink, NoticeLog};
//!
//! let registry = ExportRegistry::builtin()?;
//! let engine = ExportEngine::new(&registry);
//! let mut sink = FileSink::new("exports");
//! let mut notices = NoticeLog::new();
//! engine.export(&records, "staff", &mut sink, &mut notices);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod records;

pub use error::{TallyError, TallyResult};
pub use records::DataRecord;
