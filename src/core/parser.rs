// LogSift - core/parser.rs
//
// Line-level parsing of IIS W3C extended log format.
// Turns one raw text line into a structured LogRecord, a directive to skip,
// or a recoverable ParseError.

use crate::core::model::LogRecord;
use crate::util::constants::{
    DATE_FORMAT, FIELD_DATE, FIELD_TIME, FIELD_URI_QUERY, FIELD_URI_STEM, MIN_FIELDS, TIME_FORMAT,
};
use crate::util::error::ParseError;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Classification of one raw line.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// A `#`-prefixed directive/comment line, or a blank line. Skipped
    /// outright: never matched, never counted as a parse failure.
    Directive,

    /// A structurally valid data line.
    Record(LogRecord<'a>),
}

/// Parse one raw line.
///
/// A valid data line has space-separated fields in the order
/// `date time c-ip method uri-stem uri-query ...`; only fields 0, 1, 4,
/// and 5 are consumed. Fewer than six fields, or an invalid date/time
/// component, is a recoverable `ParseError` — the caller tallies it and
/// continues with the next line.
pub fn parse_line(raw: &str) -> Result<ParsedLine<'_>, ParseError> {
    let trimmed = raw.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(ParsedLine::Directive);
    }

    let fields: Vec<&str> = raw.split(' ').collect();
    if fields.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields {
            found: fields.len(),
        });
    }

    let date_raw = fields[FIELD_DATE];
    let date = NaiveDate::parse_from_str(date_raw, DATE_FORMAT).map_err(|_| {
        ParseError::BadDate {
            raw: date_raw.to_string(),
        }
    })?;

    let time_raw = fields[FIELD_TIME];
    let time = NaiveTime::parse_from_str(time_raw, TIME_FORMAT).map_err(|_| {
        ParseError::BadTime {
            raw: time_raw.to_string(),
        }
    })?;

    Ok(ParsedLine::Record(LogRecord {
        timestamp: NaiveDateTime::new(date, time),
        path: fields[FIELD_URI_STEM],
        query: fields[FIELD_URI_QUERY],
        raw,
    }))
}
