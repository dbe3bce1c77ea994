//! CLI command for exporting records
//!
//! Reads a record set, runs the export engine and reports the outcome.

use std::io;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Settings, TallyPaths};
use crate::error::{TallyError, TallyResult};
use crate::export::{
    ConsoleNotifier, ExportEngine, ExportRegistry, FileSink, NoticeLevel, NoticeLog, Notifier,
    WriterSink,
};
use crate::records::{read_records, InputFormat};

/// Arguments of `tally export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Entity type to export (see `tally entities`)
    pub entity: String,

    /// Record file (JSON or YAML); reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Input format (defaults to the file extension, JSON for stdin)
    #[arg(short, long, value_enum)]
    pub format: Option<InputFormat>,

    /// Directory for the exported file (defaults to the configured output dir)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Write the CSV to stdout instead of a file
    #[arg(long, conflicts_with = "output_dir")]
    pub stdout: bool,

    /// Replace an existing file with the same name
    #[arg(long)]
    pub overwrite: bool,
}

/// Handle `tally export`
pub fn handle_export_command(
    registry: &ExportRegistry,
    settings: &Settings,
    paths: &TallyPaths,
    args: ExportArgs,
) -> TallyResult<()> {
    let records = read_records(args.input.as_deref(), args.format)?;
    let engine = ExportEngine::new(registry);
    let mut notices = NoticeLog::new();

    if args.stdout {
        let mut sink = WriterSink::new(io::stdout().lock());
        engine.export(&records, &args.entity, &mut sink, &mut notices);
    } else {
        let dir = args
            .output_dir
            .unwrap_or_else(|| settings.output_dir(paths));
        let mut sink = FileSink::new(dir).overwrite(args.overwrite || settings.overwrite_existing);
        engine.export(&records, &args.entity, &mut sink, &mut notices);
    }

    let mut console = ConsoleNotifier;
    for notice in notices.notices() {
        console.notify(notice.clone());
    }

    let produced = notices
        .notices()
        .iter()
        .any(|n| n.level == NoticeLevel::Success);

    if produced {
        Ok(())
    } else if notices.is_empty() {
        Err(TallyError::config_missing(args.entity))
    } else {
        Err(TallyError::Export(format!(
            "No file was produced for '{}'",
            args.entity
        )))
    }
}
