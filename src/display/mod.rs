//! Display formatting for terminal output
//!
//! Plain-text tables for the CLI.

pub mod entity;

pub use entity::{format_entity_columns, format_entity_list};
