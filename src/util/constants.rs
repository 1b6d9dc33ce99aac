// LogSift - util/constants.rs
//
// Single source of truth for named constants, field positions, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LogSift";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// W3C extended log field layout
// =============================================================================
//
// IIS W3C data lines are space-delimited:
//   date time c-ip method uri-stem uri-query ...
// Only the date, time, uri-stem, and uri-query fields are consumed.

/// Position of the `date` field (YYYY-MM-DD).
pub const FIELD_DATE: usize = 0;

/// Position of the `time` field (HH:MM:SS).
pub const FIELD_TIME: usize = 1;

/// Position of the `cs-uri-stem` (request path) field.
pub const FIELD_URI_STEM: usize = 4;

/// Position of the `cs-uri-query` (query string) field.
pub const FIELD_URI_QUERY: usize = 5;

/// Minimum number of space-delimited fields for a structurally valid data line.
pub const MIN_FIELDS: usize = 6;

/// chrono format string for the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// chrono format string for the `time` field.
pub const TIME_FORMAT: &str = "%H:%M:%S";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Maximum length of a log line included in debug output.
/// Prevents accidental exposure of sensitive data in long lines.
pub const DEBUG_MAX_LINE_PREVIEW: usize = 200;

// =============================================================================
// Size reporting
// =============================================================================

/// Bytes per unit step in the startup size banner (binary kilobytes).
pub const SIZE_UNIT: u64 = 1024;
