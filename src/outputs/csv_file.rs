//! CSV output for exported story rows.
//!
//! One record per story, no header row, CRLF line endings and quoting only
//! where a field needs it (delimiters, quotes, line breaks). Opening the file
//! truncates whatever a previous run left behind.

use crate::error::NprError;
use crate::models::StoryRow;
use crate::utils::ensure_parent_dir;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// An open CSV destination.
///
/// The underlying `csv::Writer` flushes its buffer when dropped, so rows
/// written before an aborted run still reach the file. [`CsvOutput::finish`]
/// is the normal exit and reports flush errors.
pub struct CsvOutput {
    path: PathBuf,
    writer: ::csv::Writer<File>,
    rows: usize,
}

impl CsvOutput {
    /// Create (or truncate) `path`, creating missing parent directories.
    #[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>) -> Result<Self, NprError> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let writer = ::csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(::csv::Terminator::CRLF)
            .from_path(path)?;
        info!("Opened CSV output");
        Ok(Self {
            path: path.to_path_buf(),
            writer,
            rows: 0,
        })
    }

    pub fn write_row(&mut self, row: &StoryRow) -> Result<(), NprError> {
        self.writer.serialize(row)?;
        self.rows += 1;
        debug!(title = %row.title, "Wrote row");
        Ok(())
    }

    /// Rows written so far.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flush and close the file, returning the number of rows written.
    pub fn finish(mut self) -> Result<usize, NprError> {
        self.writer.flush()?;
        info!(path = %self.path.display(), rows = self.rows, "Wrote CSV file");
        Ok(self.rows)
    }
}
