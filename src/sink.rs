//! Output destinations for log records
//!
//! Every logger owns exactly one [`ConsoleSink`] and one [`FileSink`]. Both
//! carry the same threshold and the same [`RecordFormatter`].

use crate::format::{Record, RecordFormatter};
use crate::level::Severity;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Which destination a sink writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    Console,
    File,
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => write!(f, "console"),
            SinkKind::File => write!(f, "file"),
        }
    }
}

/// A thresholded output destination
pub trait Sink: Send + Sync {
    fn kind(&self) -> SinkKind;

    fn threshold(&self) -> Severity;

    fn formatter(&self) -> &RecordFormatter;

    /// Writes one already-formatted line and flushes it
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Formats and writes the record if it meets the threshold.
    ///
    /// Returns `Ok(false)` when the record was filtered out.
    fn emit(&self, record: &Record<'_>) -> io::Result<bool> {
        if !record.severity.passes(self.threshold()) {
            return Ok(false);
        }
        let line = self.formatter().format(record);
        self.write_line(&line)?;
        Ok(true)
    }
}

fn poisoned(kind: SinkKind) -> io::Error {
    io::Error::new(
        io::ErrorKind::Other,
        format!("{} sink writer lock poisoned", kind),
    )
}

/// `line` plus its newline, so a record reaches the writer in one `write_all`
/// and cannot be split from its terminator by another handle on the same file
fn terminated(line: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(line.len() + 1);
    buf.extend_from_slice(line.as_bytes());
    buf.push(b'\n');
    buf
}

/// Writes records to standard output, or to an injected writer
pub struct ConsoleSink {
    threshold: Severity,
    formatter: RecordFormatter,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    /// Console sink on `writer`; the registry passes stdout unless a test
    /// injects its own writer
    pub fn with_writer(threshold: Severity, writer: Box<dyn Write + Send>) -> Self {
        Self {
            threshold,
            formatter: RecordFormatter,
            writer: Mutex::new(writer),
        }
    }
}

impl Sink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().map_err(|_| poisoned(self.kind()))?;
        writer.write_all(&terminated(line))?;
        writer.flush()
    }
}

impl fmt::Debug for ConsoleSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

/// Appends records to a UTF-8 log file
#[derive(Debug)]
pub struct FileSink {
    threshold: Severity,
    formatter: RecordFormatter,
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileSink {
    /// Opens `path` in append mode, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error if the file cannot be opened for
    /// appending (missing parent directory, permissions, ...).
    pub fn open(path: impl AsRef<Path>, threshold: Severity) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            threshold,
            formatter: RecordFormatter,
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> Severity {
        self.threshold
    }

    fn formatter(&self) -> &RecordFormatter {
        &self.formatter
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut writer = self.writer.lock().map_err(|_| poisoned(self.kind()))?;
        writer.write_all(&terminated(line))?;
        writer.flush()
    }
}
