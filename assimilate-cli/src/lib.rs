// assimilate-cli/src/lib.rs
//
// Library portion of the Assimilate CLI application.
// Contains argument definitions and command logic.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;

// Re-export items needed by the binary or integration tests
pub use cli::{Cli, Commands, EditArgs, FieldArgs, NewArgs, OutputArgs, ShowArgs};
pub use commands::edit::run_edit;
pub use commands::new::run_new;
pub use commands::show::run_show;
pub use error::{CliErrorContext, CliResult};

use log::info;

/// Runs the parsed command line: sets up logging and colour, then dispatches
/// to the subcommand.
pub fn run(cli: Cli) -> CliResult<()> {
    output::configure_color();

    let log_path = logging::init_logging(cli.verbose, cli.log_dir.as_deref(), cli.command.name())?;
    if let Some(path) = &log_path {
        info!("Logging to {}", path.display());
    }

    match &cli.command {
        Commands::Show(args) => run_show(args, cli.strict_enums),
        Commands::Edit(args) => run_edit(args, cli.strict_enums),
        Commands::New(args) => run_new(args, cli.strict_enums),
    }
}
