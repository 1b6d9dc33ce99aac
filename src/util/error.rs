// LogSift - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors keep the causal chain
// for diagnostic logging.
//
// Two distinct severities exist:
//   - ParseError is per-line and recoverable: the scan tallies it and moves on.
//   - SinkError / ScanError / SiftError are fatal: they abort the operation.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for a LogSift run. Produced by the CLI layer
/// wrapping the core scan.
#[derive(Debug)]
pub enum SiftError {
    /// The input log file could not be opened for reading.
    Source { path: PathBuf, source: io::Error },

    /// The output file could not be created before the scan began.
    Destination { path: PathBuf, source: io::Error },

    /// The scan itself failed after both endpoints were open.
    Scan(ScanError),
}

impl fmt::Display for SiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source { path, source } => {
                write!(f, "Unable to read '{}': {source}", path.display())
            }
            Self::Destination { path, source } => {
                write!(f, "Unable to create '{}': {source}", path.display())
            }
            Self::Scan(e) => write!(f, "Scan error: {e}"),
        }
    }
}

impl std::error::Error for SiftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Source { source, .. } => Some(source),
            Self::Destination { source, .. } => Some(source),
            Self::Scan(e) => Some(e),
        }
    }
}

impl From<ScanError> for SiftError {
    fn from(e: ScanError) -> Self {
        Self::Scan(e)
    }
}

// ---------------------------------------------------------------------------
// Scan errors (fatal, abort the whole pass)
// ---------------------------------------------------------------------------

/// Fatal errors raised while a scan is in progress.
#[derive(Debug)]
pub enum ScanError {
    /// The input source became unreadable mid-scan.
    SourceRead { source: io::Error },

    /// The output sink rejected a write or flush.
    Sink(SinkError),
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceRead { source } => write!(f, "Failed reading input: {source}"),
            Self::Sink(e) => write!(f, "Sink error: {e}"),
        }
    }
}

impl std::error::Error for ScanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SourceRead { source } => Some(source),
            Self::Sink(e) => Some(e),
        }
    }
}

impl From<SinkError> for ScanError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}

// ---------------------------------------------------------------------------
// Sink errors
// ---------------------------------------------------------------------------

/// Errors raised by an output sink. `path` is `None` for the console sink.
#[derive(Debug)]
pub enum SinkError {
    Io {
        path: Option<PathBuf>,
        source: io::Error,
    },
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path: Some(path),
                source,
            } => write!(f, "I/O error writing '{}': {source}", path.display()),
            Self::Io { path: None, source } => {
                write!(f, "I/O error writing to console: {source}")
            }
        }
    }
}

impl std::error::Error for SinkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Parse errors (per line, recoverable)
// ---------------------------------------------------------------------------

/// A single line failed structural or numeric parsing. The scan records the
/// failure in its summary counts and continues with the next line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The line has fewer than the minimum number of space-delimited fields.
    TooFewFields { found: usize },

    /// The `date` field is not a valid YYYY-MM-DD date.
    BadDate { raw: String },

    /// The `time` field is not a valid HH:MM:SS time.
    BadTime { raw: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewFields { found } => {
                write!(
                    f,
                    "expected at least {} fields, found {found}",
                    super::constants::MIN_FIELDS
                )
            }
            Self::BadDate { raw } => write!(f, "invalid date field '{raw}'"),
            Self::BadTime { raw } => write!(f, "invalid time field '{raw}'"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Convenience type alias for fallible LogSift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
