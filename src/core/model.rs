// LogSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O.
// These types are the shared vocabulary across parsing, filtering,
// and the scan pipeline.

use chrono::NaiveDateTime;

// =============================================================================
// Log Record (normalised output of parsing)
// =============================================================================

/// A single parsed access-log line.
///
/// Borrows from the raw line it was parsed from: records exist only for the
/// duration of one filter decision and are never retained, so the scan holds
/// at most one line of the input in memory at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Combined date + time at second resolution. The log's timestamp is
    /// treated as a naive local value; no timezone conversion is performed.
    pub timestamp: NaiveDateTime,

    /// The `cs-uri-stem` field: the request path.
    pub path: &'a str,

    /// The `cs-uri-query` field: the query string (`-` when absent in IIS logs).
    pub query: &'a str,

    /// The original unmodified line, emitted verbatim on a match.
    pub raw: &'a str,
}

// =============================================================================
// Filter decision
// =============================================================================

/// Outcome of evaluating one record against the active filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    /// Every active rule passed; emit the line.
    Match,

    /// Some rule failed; drop the line and continue with the next.
    Skip,

    /// The end-time bound was reached; halt the scan entirely. Assumes the
    /// input is sorted ascending by timestamp.
    Stop,
}

// =============================================================================
// Scan Result
// =============================================================================

/// Summary statistics for a completed (or early-halted) scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Total lines consumed from the source, including directives and
    /// malformed lines. Lines after an early halt are never read.
    pub lines_read: u64,

    /// Lines that matched every active filter rule and were emitted.
    pub matched: u64,

    /// Lines that failed structural or numeric parsing and were skipped.
    pub parse_failures: u64,

    /// True when the end-time rule halted the scan before the source was
    /// exhausted.
    pub halted_early: bool,
}
