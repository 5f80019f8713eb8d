//! Implementation of the 'edit' subcommand.
//!
//! Reads a document, clears the fields named by `--unset`, applies the field
//! flags, and writes the result. Fields that are not named keep their
//! values. The input file is only rewritten when `--output` points at it.

use log::{debug, info};

use crate::cli::EditArgs;
use crate::commands::{codec_config, read_input, write_document};
use crate::error::CliResult;

/// Execute the edit command
pub fn run_edit(args: &EditArgs, strict_enums: bool) -> CliResult<()> {
    let config = codec_config(strict_enums, args.output.compact);
    let mut format = read_input(&args.input, &config)?;
    let before = format.clone();

    for field in &args.unset {
        debug!("Clearing {}", field);
        format.unset(*field);
    }
    args.fields.apply(&mut format, strict_enums)?;

    if format == before {
        info!("No fields changed");
    } else {
        info!("Edited output format: {}", format);
    }

    write_document(&format, &args.output, &config)
}
