// assimilate-cli/src/main.rs
//
// Entry point for the `assimilate` binary. Parses arguments, runs the
// selected command and maps failures to exit code 1.

use assimilate_cli::{Cli, output::print_error};
use clap::Parser;
use std::process;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            print_error(e.to_string().trim_end());
            process::exit(1);
        }
    };

    if let Err(e) = assimilate_cli::run(cli) {
        print_error(&format!("Error: {}", e));
        process::exit(1);
    }
}
