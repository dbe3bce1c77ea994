//! Download sinks
//!
//! A sink receives a finished [`CsvFile`] and stores or streams it, the way
//! a browser "save as" receives a blob.

use std::fs;
use std::io::{self, Write};
use std::iter;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{TallyError, TallyResult};

use super::config::is_bare_file_name;
use super::csv::CsvFile;

/// Upper bound on `name (n).csv` attempts before giving up
pub const MAX_NUMBERED_NAMES: u32 = 1000;

/// Where a sink put a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedFile {
    /// Human-readable location
    pub location: String,
    /// File name actually used, which may differ from the requested one
    pub file_name: String,
}

impl SavedFile {
    pub fn new(location: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            file_name: file_name.into(),
        }
    }
}

/// Destination for finished files
pub trait DownloadSink {
    /// Store the file and report where it went
    fn save(&mut self, file: &CsvFile) -> TallyResult<SavedFile>;
}

/// Writes files into a directory
///
/// The file is written to a uniquely named temp file in the target
/// directory, synced, then published. Unless `overwrite` is set an existing
/// file is never replaced: the new one is claimed as `name (1).csv`,
/// `name (2).csv`, and so on. Names with directory components are refused.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
    overwrite: bool,
    saved: Vec<PathBuf>,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            overwrite: false,
            saved: Vec::new(),
        }
    }

    /// Replace existing files instead of picking a free name
    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Paths written so far
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }

    /// The requested name followed by its numbered variants
    fn candidates<'a>(&'a self, file_name: &str) -> impl Iterator<Item = PathBuf> + 'a {
        let name = Path::new(file_name);
        let stem = name
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| file_name.to_string());
        let extension = name.extension().map(|e| e.to_string_lossy().into_owned());
        let first = self.dir.join(file_name);

        iter::once(first).chain((1..=MAX_NUMBERED_NAMES).map(move |n| {
            let numbered = match &extension {
                Some(ext) => format!("{} ({}).{}", stem, n, ext),
                None => format!("{} ({})", stem, n),
            };
            self.dir.join(numbered)
        }))
    }

    fn publish(&self, temp: NamedTempFile, file_name: &str) -> TallyResult<PathBuf> {
        if self.overwrite {
            let path = self.dir.join(file_name);
            temp.persist(&path).map_err(|e| {
                TallyError::Export(format!("Failed to save {}: {}", path.display(), e.error))
            })?;
            return Ok(path);
        }

        let mut temp = temp;
        for path in self.candidates(file_name) {
            match temp.persist_noclobber(&path) {
                Ok(_) => return Ok(path),
                Err(e) if e.error.kind() == io::ErrorKind::AlreadyExists => temp = e.file,
                Err(e) => {
                    return Err(TallyError::Export(format!(
                        "Failed to save {}: {}",
                        path.display(),
                        e.error
                    )))
                }
            }
        }

        Err(TallyError::Export(format!(
            "No free file name left for {} in {}",
            file_name,
            self.dir.display()
        )))
    }
}

impl DownloadSink for FileSink {
    fn save(&mut self, file: &CsvFile) -> TallyResult<SavedFile> {
        if !is_bare_file_name(file.file_name()) {
            return Err(TallyError::Export(format!(
                "Refusing to save '{}': not a plain file name",
                file.file_name()
            )));
        }

        fs::create_dir_all(&self.dir).map_err(|e| {
            TallyError::Export(format!(
                "Failed to create directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        // Dropping the temp file on any error below removes it.
        let mut temp = NamedTempFile::new_in(&self.dir)
            .map_err(|e| TallyError::Export(format!("Failed to create temp file: {}", e)))?;

        temp.write_all(file.as_bytes())
            .and_then(|_| temp.flush())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| TallyError::Export(format!("Failed to write file: {}", e)))?;

        let path = self.publish(temp, file.file_name())?;
        let saved_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.file_name().to_string());

        self.saved.push(path.clone());
        Ok(SavedFile::new(path.display().to_string(), saved_name))
    }
}

/// Streams files to a writer such as stdout
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> DownloadSink for WriterSink<W> {
    fn save(&mut self, file: &CsvFile) -> TallyResult<SavedFile> {
        self.writer
            .write_all(file.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| TallyError::Export(e.to_string()))?;
        Ok(SavedFile::new(
            format!("stream ({})", file.file_name()),
            file.file_name(),
        ))
    }
}

/// Keeps copies of saved files in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    files: Vec<CsvFile>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[CsvFile] {
        &self.files
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl DownloadSink for MemorySink {
    fn save(&mut self, file: &CsvFile) -> TallyResult<SavedFile> {
        self.files.push(file.clone());
        Ok(SavedFile::new(
            format!("memory:{}", file.file_name()),
            file.file_name(),
        ))
    }
}
