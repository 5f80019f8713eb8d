// ============================================================================
// assimilate-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Result alias and context for failed steps
//
// The CLI reports every failure as a CoreError. Steps that only the CLI
// performs (creating the log directory, opening the log file, writing an
// output document) name what they were doing before the error is printed.

use assimilate_core::{CoreError, CoreResult};

use std::fmt;

/// Result type returned by every command.
pub type CliResult<T> = CoreResult<T>;

/// Prefixes a failed step's error with a description of the step.
pub trait CliErrorContext<T> {
    /// Wraps the error as `OperationFailed("<description>: <error>")`. The
    /// description is only built on failure.
    fn cli_with_context<C, F>(self, describe: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_with_context<C, F>(self, describe: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| CoreError::OperationFailed(format!("{}: {}", describe(), e.into())))
    }
}
