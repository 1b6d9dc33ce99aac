// LogSift - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing and validation
// 2. Logging initialisation (debug mode support)
// 3. Opening the input file and output sink
// 4. Driving the core scan and reporting the summary
//
// Matched lines go to stdout (or the output file); everything else —
// banner, summary, errors — goes to stderr so the tool stays pipe-friendly.

use clap::Parser;
use logsift::core::filter::FilterCriteria;
use logsift::core::model::ScanResult;
use logsift::core::scan::run_scan;
use logsift::core::sink::{ConsoleSink, FileSink};
use logsift::util;
use logsift::util::error::{SiftError, SinkError};

use chrono::NaiveDateTime;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::time::Instant;

/// LogSift - filter IIS/W3C access logs by time range, request path, and
/// query string.
///
/// Assumes the input is sorted ascending by timestamp; when an end time is
/// given the scan stops at the first line at or past it.
#[derive(Parser, Debug)]
#[command(name = "logsift", version, about)]
struct Cli {
    /// Path of the IIS log file to filter.
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Start time, e.g. "2016-11-27T18:00:00" or "2016-11-27 18:00:00".
    /// Only lines strictly after this time are returned.
    #[arg(short = 's', long = "start-time", value_parser = parse_cli_timestamp)]
    start_time: Option<NaiveDateTime>,

    /// End time, same formats as --start-time. Scanning halts at the first
    /// line at or past this time.
    #[arg(short = 'e', long = "end-time", value_parser = parse_cli_timestamp)]
    end_time: Option<NaiveDateTime>,

    /// Request-path substring to match, e.g. "/api/customers"
    /// (case-insensitive). Combined with --query-string, both must match.
    #[arg(short = 'p', long = "path")]
    path: Option<String>,

    /// Query-string substring to match, e.g. "id=10" (case-insensitive).
    #[arg(short = 'q', long = "query-string")]
    query_string: Option<String>,

    /// Write matches to this file instead of stdout.
    #[arg(short = 'o', long = "output-file")]
    output_file: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

/// Accept ISO timestamps with either a `T` or a space between date and time.
fn parse_cli_timestamp(raw: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .map_err(|_| {
            format!("'{raw}' is not a timestamp like 2016-11-27T18:00:00 or \"2016-11-27 18:00:00\"")
        })
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "LogSift starting"
    );

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "Run failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SiftError> {
    let criteria = FilterCriteria {
        start_time: cli.start_time,
        end_time: cli.end_time,
        path_substring: cli.path.clone(),
        query_substring: cli.query_string.clone(),
    };

    let metadata = std::fs::metadata(&cli.file).map_err(|source| SiftError::Source {
        path: cli.file.clone(),
        source,
    })?;
    eprintln!(
        "Scanning '{}', a {} file.",
        cli.file.display(),
        util::size::format_size(metadata.len())
    );

    let file = File::open(&cli.file).map_err(|source| SiftError::Source {
        path: cli.file.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let started = Instant::now();

    let result = match &cli.output_file {
        Some(out_path) => {
            let mut sink = FileSink::create(out_path).map_err(|e| {
                let SinkError::Io { source, .. } = e;
                SiftError::Destination {
                    path: out_path.clone(),
                    source,
                }
            })?;

            match run_scan(reader, &criteria, &mut sink) {
                Ok(result) => result,
                Err(scan_err) => {
                    // Don't leave an empty destination behind a failed run.
                    if let Err(cleanup_err) = sink.discard() {
                        tracing::warn!(error = %cleanup_err, "Output cleanup failed");
                    }
                    return Err(scan_err.into());
                }
            }
        }
        None => {
            let mut sink = ConsoleSink::stdout();
            run_scan(reader, &criteria, &mut sink)?
        }
    };

    report_summary(&result, started);
    Ok(())
}

fn report_summary(result: &ScanResult, started: Instant) {
    eprintln!(
        "{} of {} lines matched ({} malformed lines skipped).",
        result.matched, result.lines_read, result.parse_failures
    );
    if result.halted_early {
        eprintln!("Scan halted early at the end-time bound.");
    }
    eprintln!("Scan took {} ms.", started.elapsed().as_millis());
}
