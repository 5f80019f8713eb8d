// assimilate-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use assimilate_core::OutputFormatField;
use assimilate_core::config::STRICT_ENUMS_ENV;
use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Assimilate: output-format document tool",
    long_about = "Inspects, creates and edits the default output-format documents \
                  (colorspace, EOTF, bit depth, bit type, components, filetype) \
                  of Assimilate timelines and constructs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Optional: Also write the run's log to a timestamped file in this directory
    #[arg(long, global = true, value_name = "LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Reject colorspace and EOTF names outside the known set.
    /// Can also be set via the ASSIMILATE_STRICT_ENUMS environment variable
    /// (1/0, yes/no, true/false).
    #[arg(long, global = true, env = STRICT_ENUMS_ENV, value_parser = BoolishValueParser::new())]
    pub strict_enums: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints the fields of an output-format document
    Show(ShowArgs),
    /// Changes selected fields of an existing document
    Edit(EditArgs),
    /// Creates a document from the given fields
    New(NewArgs),
}

impl Commands {
    /// Short name used in log file names.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Show(_) => "show",
            Commands::Edit(_) => "edit",
            Commands::New(_) => "new",
        }
    }
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Document to read, or '-' for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Print the canonical JSON instead of a field listing
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Document to read, or '-' for stdin
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    #[command(flatten)]
    pub fields: FieldArgs,

    /// Clear a field (repeatable). Applied before the field flags.
    #[arg(long = "unset", value_name = "FIELD", value_parser = parse_field)]
    pub unset: Vec<OutputFormatField>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug)]
pub struct NewArgs {
    #[command(flatten)]
    pub fields: FieldArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// One optional flag per output-format field.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Colorspace name (e.g. Rec709, Rec2020, P3-D65)
    #[arg(long, value_name = "NAME")]
    pub colorspace: Option<String>,

    /// Transfer function name (e.g. BT.1886, PQ, HLG)
    #[arg(long, value_name = "NAME")]
    pub eotf: Option<String>,

    /// Bit depth (e.g. 8, 10, 12, 16)
    #[arg(long, value_name = "BITS", allow_negative_numbers = true)]
    pub bit_depth: Option<i32>,

    /// Sample format (e.g. int, float, half)
    #[arg(long, value_name = "TYPE")]
    pub bit_type: Option<String>,

    /// Channel layout (e.g. RGB, RGBA, YCbCr)
    #[arg(long, value_name = "LAYOUT")]
    pub components: Option<String>,

    /// Output container or file format (e.g. mov, mxf, exr)
    #[arg(long, value_name = "EXT")]
    pub filetype: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Write the document here instead of stdout
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Write compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

fn parse_field(value: &str) -> Result<OutputFormatField, String> {
    value.parse().map_err(|e: assimilate_core::CoreError| e.to_string())
}
