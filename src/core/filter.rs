// LogSift - core/filter.rs
//
// Filter criteria and the per-record decision engine.
// All active rules are AND-combined; substring matching is case-insensitive
// for both sinks identically.
// Pure logic, no I/O.

use crate::core::model::{FilterDecision, LogRecord};
use chrono::NaiveDateTime;

/// Complete filter state for one scan. Validated and frozen before the scan
/// starts; the engine never mutates it.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Lower time bound. A record must be strictly *after* this to match;
    /// a timestamp exactly equal to the bound is skipped. None = no bound.
    pub start_time: Option<NaiveDateTime>,

    /// Upper time bound. A record at or past this halts the scan entirely
    /// rather than being skipped — valid because the input is assumed
    /// ascending-sorted by timestamp. None = no bound.
    pub end_time: Option<NaiveDateTime>,

    /// Substring the request path must contain (case-insensitive).
    pub path_substring: Option<String>,

    /// Substring the query string must contain (case-insensitive).
    pub query_substring: Option<String>,
}

impl FilterCriteria {
    /// Returns true if no filters are active (every line matches).
    pub fn is_empty(&self) -> bool {
        self.start_time.is_none()
            && self.end_time.is_none()
            && self.path_substring.is_none()
            && self.query_substring.is_none()
    }
}

/// Evaluates records against a fixed set of criteria.
///
/// Built once per scan so the substring needles are lowercased a single
/// time rather than per line.
#[derive(Debug)]
pub struct FilterEngine {
    start_time: Option<NaiveDateTime>,
    end_time: Option<NaiveDateTime>,
    path_needle: Option<String>,
    query_needle: Option<String>,
}

impl FilterEngine {
    pub fn new(criteria: &FilterCriteria) -> Self {
        Self {
            start_time: criteria.start_time,
            end_time: criteria.end_time,
            path_needle: criteria.path_substring.as_deref().map(str::to_lowercase),
            query_needle: criteria.query_substring.as_deref().map(str::to_lowercase),
        }
    }

    /// Evaluate one record. Rules are checked in bound-then-substring order
    /// so the cheap timestamp comparisons run before any allocation.
    pub fn evaluate(&self, record: &LogRecord<'_>) -> FilterDecision {
        if let Some(start) = self.start_time {
            if record.timestamp <= start {
                return FilterDecision::Skip;
            }
        }

        if let Some(end) = self.end_time {
            if record.timestamp >= end {
                return FilterDecision::Stop;
            }
        }

        if let Some(ref needle) = self.path_needle {
            if !record.path.to_lowercase().contains(needle) {
                return FilterDecision::Skip;
            }
        }

        if let Some(ref needle) = self.query_needle {
            if !record.query.to_lowercase().contains(needle) {
                return FilterDecision::Skip;
            }
        }

        FilterDecision::Match
    }
}
