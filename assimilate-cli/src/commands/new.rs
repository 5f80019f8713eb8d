//! Implementation of the 'new' subcommand.

use assimilate_core::OutputFormat;
use log::info;

use crate::cli::NewArgs;
use crate::commands::{codec_config, write_document};
use crate::error::CliResult;

/// Execute the new command. Fields without a flag stay absent.
pub fn run_new(args: &NewArgs, strict_enums: bool) -> CliResult<()> {
    let config = codec_config(strict_enums, args.output.compact);

    let mut format = OutputFormat::new();
    args.fields.apply(&mut format, strict_enums)?;
    info!("Created output format: {}", format);

    write_document(&format, &args.output, &config)
}
