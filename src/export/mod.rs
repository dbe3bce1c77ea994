//! Export module for tally-export
//!
//! Declarative CSV export of business records:
//! - `path`: dot-path resolution into records
//! - `transform`: named display transforms
//! - `config` / `builtin`: per-entity column tables
//! - `registry`: immutable lookup of configurations by entity type
//! - `csv`: row formatting and CSV serialization
//! - `sink` / `notice`: where finished files and user messages go
//! - `engine`: ties it together

pub mod builtin;
pub mod config;
pub mod csv;
pub mod engine;
pub mod notice;
pub mod path;
pub mod registry;
pub mod sink;
pub mod transform;

pub use self::config::{Column, ColumnDef, ColumnSpec, EntityTable, ExportConfig};
pub use self::csv::{format_rows, render_file, write_csv, CsvFile, CSV_MIME_TYPE};
pub use self::engine::ExportEngine;
pub use self::notice::{ConsoleNotifier, Notice, NoticeLevel, NoticeLog, Notifier, NO_DATA_MESSAGE};
pub use self::path::resolve_path;
pub use self::registry::{DefinitionFile, ExportRegistry, RegistryBuilder};
pub use self::sink::{DownloadSink, FileSink, MemorySink, SavedFile, WriterSink};
pub use self::transform::Transform;
