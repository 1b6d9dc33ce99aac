// LogSift - core/scan.rs
//
// The scan pipeline: a single forward pass over the input line sequence,
// applying the parser and filter engine and streaming matches to a sink.
//
// Strictly sequential and single-pass: each line is fully processed before
// the next is read, and lines are consumed lazily so memory use is constant
// in the input size. Not restartable without re-opening the source.

use crate::core::filter::{FilterCriteria, FilterEngine};
use crate::core::model::{FilterDecision, ScanResult};
use crate::core::parser::{parse_line, ParsedLine};
use crate::core::sink::OutputSink;
use crate::util::constants::DEBUG_MAX_LINE_PREVIEW;
use crate::util::error::ScanError;
use std::io::BufRead;

/// Drive one scan: read lines from `reader`, evaluate each against
/// `criteria`, and forward matches to `sink` in input order.
///
/// Per-line parse failures are tallied and skipped, never fatal. A read
/// error from the source or a write error from the sink aborts the whole
/// operation. An end-time Stop decision halts the scan without consuming
/// further input and is reported as a successful, partial result.
///
/// On success or early halt the sink is flushed before returning; on a
/// fatal error the caller decides whether to keep or discard the
/// destination.
pub fn run_scan<R, S>(
    reader: R,
    criteria: &FilterCriteria,
    sink: &mut S,
) -> Result<ScanResult, ScanError>
where
    R: BufRead,
    S: OutputSink + ?Sized,
{
    let engine = FilterEngine::new(criteria);
    let mut result = ScanResult::default();

    tracing::debug!(
        unfiltered = criteria.is_empty(),
        start_time = ?criteria.start_time,
        end_time = ?criteria.end_time,
        path_substring = ?criteria.path_substring,
        query_substring = ?criteria.query_substring,
        "Scan starting"
    );

    for line in reader.lines() {
        let line = line.map_err(|source| ScanError::SourceRead { source })?;
        result.lines_read += 1;

        match parse_line(&line) {
            Ok(ParsedLine::Directive) => continue,
            Ok(ParsedLine::Record(record)) => match engine.evaluate(&record) {
                FilterDecision::Match => {
                    sink.emit(record.raw)?;
                    result.matched += 1;
                }
                FilterDecision::Skip => {}
                FilterDecision::Stop => {
                    result.halted_early = true;
                    tracing::debug!(
                        line = result.lines_read,
                        timestamp = %record.timestamp,
                        "End-time bound reached, halting scan"
                    );
                    break;
                }
            },
            Err(e) => {
                result.parse_failures += 1;
                tracing::debug!(
                    line = result.lines_read,
                    error = %e,
                    preview = %line.chars().take(DEBUG_MAX_LINE_PREVIEW).collect::<String>(),
                    "Skipping malformed line"
                );
            }
        }
    }

    sink.finish()?;

    tracing::info!(
        lines_read = result.lines_read,
        matched = result.matched,
        parse_failures = result.parse_failures,
        halted_early = result.halted_early,
        "Scan complete"
    );

    Ok(result)
}
