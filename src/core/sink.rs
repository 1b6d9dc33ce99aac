// LogSift - core/sink.rs
//
// Output destinations for matched lines. Console and file sinks share one
// contract so the scan pipeline is written once against the trait.

use crate::util::error::SinkError;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A destination for matched lines.
///
/// `emit` appends one matched line plus a line terminator; `finish` flushes
/// buffered output. Implementations must preserve emission order and must
/// produce byte-identical line content for the same input.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError>;
    fn finish(&mut self) -> Result<(), SinkError>;
}

// =============================================================================
// Console sink
// =============================================================================

/// Writes matched lines immediately to any writer — stdout in production,
/// a byte buffer in tests.
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    out: W,
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self {
            out: std::io::stdout(),
        }
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the sink and return the underlying writer (test inspection).
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputSink for ConsoleSink<W> {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        writeln!(self.out, "{line}").map_err(|source| SinkError::Io { path: None, source })
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.out
            .flush()
            .map_err(|source| SinkError::Io { path: None, source })
    }
}

// =============================================================================
// File sink
// =============================================================================

/// Appends matched lines to a file opened before the scan starts.
///
/// The file is exclusively owned by the scan for its duration. It is closed
/// on every exit path: `finish` flushes on success or early halt, and Drop
/// closes the handle if the scan aborts. `discard` lets the caller remove a
/// destination that never received any bytes after a fatal error, so a
/// failed run does not leave an empty output file behind.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    writer: BufWriter<File>,
    bytes_committed: u64,
}

impl FileSink {
    /// Create (or truncate) the destination file. Fails before any scanning
    /// begins if the path cannot be opened for writing.
    pub fn create(path: &Path) -> Result<Self, SinkError> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .map_err(|source| SinkError::Io {
                path: Some(path.to_path_buf()),
                source,
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
            bytes_committed: 0,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Bytes written so far, including line terminators.
    pub fn bytes_committed(&self) -> u64 {
        self.bytes_committed
    }

    /// Fatal-error cleanup: flush whatever was committed, or remove the file
    /// entirely if nothing was.
    pub fn discard(mut self) -> Result<(), SinkError> {
        if self.bytes_committed == 0 {
            // Close the handle before removal (required on Windows).
            drop(self.writer);
            fs::remove_file(&self.path).map_err(|source| SinkError::Io {
                path: Some(self.path.clone()),
                source,
            })?;
            tracing::debug!(path = %self.path.display(), "Removed empty output file");
            Ok(())
        } else {
            self.finish()
        }
    }
}

impl OutputSink for FileSink {
    fn emit(&mut self, line: &str) -> Result<(), SinkError> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|_| self.writer.write_all(b"\n"))
            .map_err(|source| SinkError::Io {
                path: Some(self.path.clone()),
                source,
            })?;
        self.bytes_committed += line.len() as u64 + 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(|source| SinkError::Io {
            path: Some(self.path.clone()),
            source,
        })?;
        self.writer
            .get_ref()
            .sync_all()
            .map_err(|source| SinkError::Io {
                path: Some(self.path.clone()),
                source,
            })
    }
}
