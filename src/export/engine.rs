//! Export engine
//!
//! Turns a record set of a named entity type into a CSV file using the
//! registered configuration, then hands the file to a sink.

use tracing::{error, info};

use crate::error::{TallyError, TallyResult};
use crate::records::DataRecord;

use super::csv::{render_file, CsvFile};
use super::notice::{Notice, Notifier};
use super::registry::ExportRegistry;
use super::sink::DownloadSink;

/// Stateless engine over a shared registry
#[derive(Debug, Clone, Copy)]
pub struct ExportEngine<'r> {
    registry: &'r ExportRegistry,
}

impl<'r> ExportEngine<'r> {
    pub fn new(registry: &'r ExportRegistry) -> Self {
        Self { registry }
    }

    /// Build the CSV file for a record set
    ///
    /// # Errors
    ///
    /// `NoData` when `records` is empty (checked before anything else),
    /// `ConfigMissing` when no configuration is registered for
    /// `entity_type`.
    pub fn prepare(&self, records: &[DataRecord], entity_type: &str) -> TallyResult<CsvFile> {
        if records.is_empty() {
            return Err(TallyError::NoData);
        }

        let config = self
            .registry
            .get(entity_type)
            .ok_or_else(|| TallyError::config_missing(entity_type))?;

        render_file(records, config)
    }

    /// Export a record set and hand the file to `sink`
    ///
    /// Outcomes are reported rather than returned: an empty record set
    /// produces the empty-data notice, an unknown entity type only logs a
    /// diagnostic. Nothing reaches the sink in either case.
    pub fn export<S, N>(
        &self,
        records: &[DataRecord],
        entity_type: &str,
        sink: &mut S,
        notifier: &mut N,
    ) where
        S: DownloadSink + ?Sized,
        N: Notifier + ?Sized,
    {
        let file = match self.prepare(records, entity_type) {
            Ok(file) => file,
            Err(TallyError::NoData) => {
                notifier.notify(Notice::no_data());
                return;
            }
            Err(e @ TallyError::ConfigMissing { .. }) => {
                error!(entity_type, "{}", e);
                return;
            }
            Err(e) => {
                error!(entity_type, error = %e, "Failed to render export");
                notifier.notify(Notice::error(format!("Export failed: {}", e)));
                return;
            }
        };

        match sink.save(&file) {
            Ok(saved) => {
                info!(
                    entity_type,
                    file = %saved.file_name,
                    rows = file.row_count(),
                    location = %saved.location,
                    "Export saved"
                );
                if saved.file_name != file.file_name() {
                    notifier.notify(Notice::info(format!(
                        "{} already exists, saved as {}",
                        file.file_name(),
                        saved.file_name
                    )));
                }
                notifier.notify(Notice::success(format!(
                    "Exported {} {} to {}",
                    file.row_count(),
                    entity_type,
                    saved.location
                )));
            }
            Err(e) => {
                error!(entity_type, file = file.file_name(), error = %e, "Failed to save export");
                notifier.notify(Notice::error(format!(
                    "Could not save {}: {}",
                    file.file_name(),
                    e
                )));
            }
        }
    }
}
