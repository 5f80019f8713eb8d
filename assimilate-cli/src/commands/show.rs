//! Implementation of the 'show' subcommand.
//!
//! Prints each field of an output-format document, marking absent fields as
//! unset, followed by flags derived from the colour fields.

use assimilate_core::{OutputFormat, OutputFormatField};
use log::debug;

use crate::cli::{OutputArgs, ShowArgs};
use crate::commands::{codec_config, read_input, write_document};
use crate::error::CliResult;
use crate::output::{print_heading, print_info, print_section};

/// Placeholder printed for absent fields.
pub const UNSET: &str = "(unset)";

/// Label shown for each field in the listing.
fn field_label(field: OutputFormatField) -> &'static str {
    match field {
        OutputFormatField::Colorspace => "Colorspace",
        OutputFormatField::Eotf => "EOTF",
        OutputFormatField::BitDepth => "Bit depth",
        OutputFormatField::BitType => "Bit type",
        OutputFormatField::Components => "Components",
        OutputFormatField::Filetype => "Filetype",
    }
}

fn yes_no_unknown(flag: Option<bool>) -> &'static str {
    match flag {
        Some(true) => "yes",
        Some(false) => "no",
        None => "unknown",
    }
}

/// Execute the show command
pub fn run_show(args: &ShowArgs, strict_enums: bool) -> CliResult<()> {
    let config = codec_config(strict_enums, false);
    let format = read_input(&args.input, &config)?;
    debug!("Showing {} ({} field(s) set)", args.input.display(), format.present_fields().len());

    if args.json {
        return write_document(&format, &OutputArgs::default(), &config);
    }

    print_listing(&args.input.display().to_string(), &format);
    Ok(())
}

fn print_listing(source: &str, format: &OutputFormat) {
    print_heading("Output Format");
    print_info("Source", source);

    print_section("Fields");
    for field in OutputFormatField::ALL {
        let value = format.field_value(field).unwrap_or_else(|| UNSET.to_string());
        print_info(field_label(field), value);
    }

    print_section("Derived");
    print_info("HDR", yes_no_unknown(format.eotf().map(|eotf| eotf.is_hdr())));
    print_info(
        "Wide gamut",
        yes_no_unknown(format.colorspace().map(|cs| cs.is_wide_gamut())),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_unknown() {
        assert_eq!(yes_no_unknown(Some(true)), "yes");
        assert_eq!(yes_no_unknown(Some(false)), "no");
        assert_eq!(yes_no_unknown(None), "unknown");
    }

    #[test]
    fn test_every_field_has_a_label() {
        let labels: Vec<_> = OutputFormatField::ALL.into_iter().map(field_label).collect();
        assert_eq!(labels.len(), 6);
        assert!(labels.contains(&"EOTF"));
    }
}
