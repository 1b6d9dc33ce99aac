// LogSift - tests/e2e_scan.rs
//
// End-to-end tests for the scan pipeline over real files on disk.
//
// These tests exercise real file I/O, real chrono timestamp parsing, and
// both sink variants — no mocks, no stubs. This covers the full path from
// a raw W3C log file on disk to filtered lines in an output file.

use logsift::core::filter::FilterCriteria;
use logsift::core::scan::run_scan;
use logsift::core::sink::{ConsoleSink, FileSink};
use logsift::util::error::ScanError;

use chrono::NaiveDateTime;
use std::fs;
use std::io::BufReader;
use std::path::PathBuf;

// =============================================================================
// Helpers
// =============================================================================

/// Absolute path to the on-disk fixture files.
fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
}

fn open_fixture(name: &str) -> BufReader<fs::File> {
    BufReader::new(fs::File::open(fixture(name)).unwrap())
}

/// Scan the named fixture into an in-memory console sink.
fn scan_fixture_to_string(name: &str, criteria: &FilterCriteria) -> String {
    let mut sink = ConsoleSink::new(Vec::new());
    run_scan(open_fixture(name), criteria, &mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

// =============================================================================
// Scans over the sample fixture
// =============================================================================

/// An unfiltered scan emits every data line and no directives.
#[test]
fn e2e_unfiltered_scan_emits_all_data_lines() {
    let mut sink = ConsoleSink::new(Vec::new());
    let result = run_scan(
        open_fixture("iis_w3c_sample.log"),
        &FilterCriteria::default(),
        &mut sink,
    )
    .unwrap();

    assert_eq!(result.lines_read, 11);
    assert_eq!(result.matched, 7);
    assert_eq!(result.parse_failures, 0);
    assert!(!result.halted_early);

    let out = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(out.lines().count(), 7);
    assert!(!out.contains('#'), "directives leaked into output:\n{out}");
}

/// Path filtering is case-insensitive: the fixture's `/API/Customers/42`
/// line matches a lowercase needle.
#[test]
fn e2e_path_filter_case_insensitive() {
    let out = scan_fixture_to_string(
        "iis_w3c_sample.log",
        &FilterCriteria {
            path_substring: Some("/api/customers".to_string()),
            ..Default::default()
        },
    );

    let matched: Vec<&str> = out.lines().collect();
    assert_eq!(matched.len(), 3);
    assert!(matched[2].contains("/API/Customers/42"));
}

/// Time window plus query substring AND-combine.
#[test]
fn e2e_window_and_query_filter() {
    let out = scan_fixture_to_string(
        "iis_w3c_sample.log",
        &FilterCriteria {
            start_time: Some(ts("2016-11-27 10:00:00")),
            end_time: Some(ts("2016-11-27 11:23:05")),
            query_substring: Some("ID=20".to_string()),
            ..Default::default()
        },
    );

    // 10:00:00 is excluded (equal to start); 11:23:05 halts the scan;
    // of the lines in between only the two id=20 requests match.
    let matched: Vec<&str> = out.lines().collect();
    assert_eq!(matched.len(), 2);
    assert!(matched[0].contains("/api/orders id=20 "));
    assert!(matched[1].contains("id=20&expand=lines"));
}

/// The end-time bound halts without consuming the rest of the file.
#[test]
fn e2e_end_time_halts_scan() {
    let mut sink = ConsoleSink::new(Vec::new());
    let result = run_scan(
        open_fixture("iis_w3c_sample.log"),
        &FilterCriteria {
            end_time: Some(ts("2016-11-27 10:30:00")),
            ..Default::default()
        },
        &mut sink,
    )
    .unwrap();

    assert!(result.halted_early);
    // 4 directives + 2 matching lines + the stopping line.
    assert_eq!(result.lines_read, 7);
    assert_eq!(result.matched, 2);
}

// =============================================================================
// File sink round trip
// =============================================================================

/// Console and file sinks produce byte-identical output for the same input
/// and criteria.
#[test]
fn e2e_console_and_file_sinks_agree() {
    let criteria = FilterCriteria {
        path_substring: Some("/api/".to_string()),
        ..Default::default()
    };

    let console_out = scan_fixture_to_string("iis_w3c_sample.log", &criteria);

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("matches.log");
    let mut file_sink = FileSink::create(&out_path).unwrap();
    let file_result = run_scan(
        open_fixture("iis_w3c_sample.log"),
        &criteria,
        &mut file_sink,
    )
    .unwrap();
    drop(file_sink);

    let file_out = fs::read_to_string(&out_path).unwrap();
    assert_eq!(console_out, file_out);
    assert_eq!(file_result.matched as usize, file_out.lines().count());
}

/// A scan into a file sink over a generated log with malformed lines:
/// the failures are tallied, the valid lines still land in the file.
#[test]
fn e2e_file_scan_with_malformed_lines() {
    let dir = tempfile::tempdir().unwrap();
    let in_path = dir.path().join("mixed.log");
    let out_path = dir.path().join("out.log");

    fs::write(
        &in_path,
        "#Fields: date time c-ip cs-method cs-uri-stem cs-uri-query\n\
         2016-11-27 10:00:00 ip GET /api/customers id=10 200\n\
         this line is not a log record\n\
         2016-11-27 10:05:00 ip GET /api/customers id=11 200\n",
    )
    .unwrap();

    let reader = BufReader::new(fs::File::open(&in_path).unwrap());
    let mut sink = FileSink::create(&out_path).unwrap();
    let result = run_scan(reader, &FilterCriteria::default(), &mut sink).unwrap();
    drop(sink);

    assert_eq!(result.parse_failures, 1);
    assert_eq!(result.matched, 2);
    assert_eq!(fs::read_to_string(&out_path).unwrap().lines().count(), 2);
}

/// When the scan fails after the output file was created but before any
/// match was written, `discard` removes the empty destination.
#[test]
fn e2e_failed_scan_leaves_no_empty_output_file() {
    struct BrokenReader;
    impl std::io::Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("disk on fire"))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.log");

    let mut sink = FileSink::create(&out_path).unwrap();
    let result = run_scan(
        BufReader::new(BrokenReader),
        &FilterCriteria::default(),
        &mut sink,
    );
    assert!(matches!(result, Err(ScanError::SourceRead { .. })));

    sink.discard().unwrap();
    assert!(!out_path.exists());
}
