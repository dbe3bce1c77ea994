//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the export engine.

pub mod entities;
pub mod export;

pub use entities::handle_entities_command;
pub use export::{handle_export_command, ExportArgs};
