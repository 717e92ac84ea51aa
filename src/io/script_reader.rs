//! Command script reader with iterator interface
//!
//! Provides a streaming iterator over commands from a CSV script file.
//! Delegates CSV format concerns to the csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator
//! - Errors carry the physical line of the offending row, counting blank
//!   lines and the header
//!
//! ```no_run
//! use expense_tracker::io::ScriptReader;
//! use std::path::Path;
//!
//! let reader = ScriptReader::new(Path::new("script.csv")).unwrap();
//! for result in reader {
//!     match result {
//!         Ok(command) => println!("Command: {:?}", command),
//!         Err(e) => eprintln!("Error: {}", e),
//!     }
//! }
//! ```

use crate::io::csv_format::{convert_command_record, Command, CommandRecord};
use crate::types::TrackerError;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Streaming command reader over any byte source
pub struct ScriptReader<R = File> {
    reader: csv::Reader<R>,
    /// Reused buffer for the row being converted
    record: StringRecord,
}

impl ScriptReader<File> {
    /// Open a script file for streaming iteration
    ///
    /// # Returns
    ///
    /// * `Ok(ScriptReader)` if the file opened successfully
    /// * `Err(TrackerError::FileNotFound)` if there is no file at `path`
    /// * `Err(TrackerError::IoError)` for any other open failure
    pub fn new(path: &Path) -> Result<Self, TrackerError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => TrackerError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => TrackerError::IoError {
                message: format!("Failed to open file '{}': {}", path.display(), e),
            },
        })?;

        Ok(Self::from_reader(file))
    }
}

impl<R: Read> ScriptReader<R> {
    /// Wrap an arbitrary reader, e.g. an in-memory script
    ///
    /// Fields are trimmed and rows may omit trailing columns.
    pub fn from_reader(source: R) -> Self {
        let reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(source);

        Self {
            reader,
            record: StringRecord::new(),
        }
    }
}

impl<R: Read> Iterator for ScriptReader<R> {
    type Item = Result<Command, TrackerError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.reader.read_record(&mut self.record) {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => return Some(Err(e.into())),
        }
        let line = self.record.position().map(|pos| pos.line());

        let result = self
            .reader
            .headers()
            .and_then(|headers| self.record.deserialize::<CommandRecord>(Some(headers)))
            .map_err(|e| TrackerError::parse_error(line, e.to_string()));

        Some(result.and_then(|record| convert_command_record(record, line)))
    }
}
