// LogSift - util/size.rs
//
// Human-readable file-size formatting for the startup banner.

use super::constants::SIZE_UNIT;

/// Unit names in ascending order of magnitude.
const UNITS: &[&str] = &["bytes", "kilobytes", "megabytes", "gigabytes"];

/// Format a byte count as a whole number of the largest unit it fills,
/// e.g. `3_407_872` -> `"3 megabytes"`.
///
/// Anything at or beyond the largest unit is reported in that unit.
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes;
    let mut unit = 0;

    while value >= SIZE_UNIT && unit < UNITS.len() - 1 {
        value /= SIZE_UNIT;
        unit += 1;
    }

    format!("{value} {}", UNITS[unit])
}
