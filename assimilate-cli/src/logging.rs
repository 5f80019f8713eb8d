// ============================================================================
// assimilate-cli/src/logging.rs
// ============================================================================
//
// LOGGING: Console and optional file logging for the CLI
//
// Console logging goes through env_logger on stderr so stdout stays free for
// documents. When a log directory is given, fern dispatches to both stderr
// and a timestamped log file instead.
//
// USAGE:
// - RUST_LOG=info (default): Normal operation logs
// - RUST_LOG=debug or --verbose: Parse and write details
// - RUST_LOG=trace: Every encoded document

use std::fs;
use std::path::{Path, PathBuf};

use env_logger::filter::{Builder as FilterBuilder, Filter};
use log::LevelFilter;

use crate::error::{CliErrorContext, CliResult};

/// Returns the current local timestamp formatted as "YYYYMMDD_HHMMSS".
pub fn get_timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S").to_string()
}

/// Log file name for a run of the given command.
pub fn log_file_name(command: &str) -> String {
    format!("assimilate_{}_{}.log", command, get_timestamp())
}

/// Level used when RUST_LOG does not name one.
fn default_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Debug } else { LevelFilter::Info }
}

/// Builds the record filter used by file logging. RUST_LOG directives
/// (`info`, `assimilate_core=debug`, ...) layer over the default level the
/// same way env_logger applies them on the console-only path.
fn build_filter(verbose: bool, rust_log: Option<&str>) -> Filter {
    let mut builder = FilterBuilder::new();
    builder.filter_level(default_level(verbose));
    if let Some(directives) = rust_log {
        builder.parse(directives);
    }
    builder.build()
}

/// Initializes logging for the run. Returns the log file path when file
/// logging is enabled.
pub fn init_logging(verbose: bool, log_dir: Option<&Path>, command: &str) -> CliResult<Option<PathBuf>> {
    let Some(log_dir) = log_dir else {
        env_logger::Builder::new()
            .filter_level(default_level(verbose))
            .parse_default_env()
            .format_timestamp(None)
            .init();
        return Ok(None);
    };

    fs::create_dir_all(log_dir)
        .cli_with_context(|| format!("Failed to create log directory '{}'", log_dir.display()))?;
    let log_path = log_dir.join(log_file_name(command));

    let filter = build_filter(verbose, std::env::var("RUST_LOG").ok().as_deref());
    let max_level = filter.filter();

    let log_file = fern::log_file(&log_path)
        .cli_with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    fern::Dispatch::new()
        .level(max_level)
        .filter(move |metadata| filter.enabled(metadata))
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!("[{}] {}", record.level(), message))
                })
                .chain(std::io::stderr()),
        )
        .chain(
            fern::Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "{} [{}] {}",
                        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                        record.level(),
                        message
                    ))
                })
                .chain(log_file),
        )
        .apply()
        .map_err(|e| assimilate_core::CoreError::OperationFailed(format!("Failed to initialize logging: {}", e)))?;

    Ok(Some(log_path))
}
