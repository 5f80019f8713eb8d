//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command. The
//! helpers here are shared by all of them: reading a document from a file or
//! stdin, applying field flags, and writing the result.

/// Prints a document's fields or canonical JSON.
pub mod show;
/// Changes selected fields of an existing document.
pub mod edit;
/// Builds a document from field flags.
pub mod new;

use std::fs;
use std::io;
use std::path::Path;

use assimilate_core::{
    CodecConfig, CodecConfigBuilder, Colorspace, CoreError, Eotf, OutputFormat, codec,
};
use log::{debug, info};

use crate::cli::{FieldArgs, OutputArgs};
use crate::error::CliResult;
use crate::output::print_success;

/// Path that stands for stdin.
pub const STDIN_PATH: &str = "-";

/// Codec settings for a run.
pub fn codec_config(strict_enums: bool, compact: bool) -> CodecConfig {
    CodecConfigBuilder::new()
        .strict_enums(strict_enums)
        .pretty(!compact)
        .build()
}

/// Reads a document from the given path, or from stdin for `-`.
pub fn read_input(path: &Path, config: &CodecConfig) -> CliResult<OutputFormat> {
    if path.as_os_str() == STDIN_PATH {
        debug!("Reading output format from stdin");
        codec::read_output_format(io::stdin().lock(), config)
    } else {
        codec::load_output_format(path, config)
    }
}

/// Writes a document to `--output`, or to stdout when no path is given.
///
/// The document is fully encoded before the target is opened, so a failed
/// encode leaves an existing file untouched.
pub fn write_document(format: &OutputFormat, output: &OutputArgs, config: &CodecConfig) -> CliResult<()> {
    match &output.path {
        Some(path) => {
            let mut contents = codec::to_json_string(format, config)?;
            contents.push('\n');
            fs::write(path, contents).map_err(|source| CoreError::PathError {
                path: path.clone(),
                source,
            })?;
            info!("Wrote output format to {}", path.display());
            print_success(&format!("Wrote {}", path.display()));
        }
        None => {
            codec::write_output_format(io::stdout().lock(), format, config)?;
        }
    }
    Ok(())
}

impl FieldArgs {
    /// Applies every given flag to the record. Fields without a flag are left
    /// as they are.
    pub fn apply(&self, format: &mut OutputFormat, strict_enums: bool) -> CliResult<()> {
        if let Some(name) = &self.colorspace {
            let colorspace = Colorspace::from(name.as_str());
            if strict_enums && !colorspace.is_known() {
                return Err(CoreError::UnknownEnumValue {
                    field: "colorspace",
                    value: name.clone(),
                });
            }
            format.set_colorspace(Some(colorspace));
        }
        if let Some(name) = &self.eotf {
            let eotf = Eotf::from(name.as_str());
            if strict_enums && !eotf.is_known() {
                return Err(CoreError::UnknownEnumValue {
                    field: "eotf",
                    value: name.clone(),
                });
            }
            format.set_eotf(Some(eotf));
        }
        if let Some(bit_depth) = self.bit_depth {
            format.set_bit_depth(Some(bit_depth));
        }
        if let Some(bit_type) = &self.bit_type {
            format.set_bit_type(Some(bit_type.clone()));
        }
        if let Some(components) = &self.components {
            format.set_components(Some(components.clone()));
        }
        if let Some(filetype) = &self.filetype {
            format.set_filetype(Some(filetype.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_leaves_unflagged_fields_alone() {
        let mut format = OutputFormat::new().with_components("RGB").with_eotf(Eotf::Hlg);
        let fields = FieldArgs {
            bit_depth: Some(16),
            filetype: Some("exr".to_string()),
            ..FieldArgs::default()
        };
        fields.apply(&mut format, false).unwrap();

        assert_eq!(format.components(), Some("RGB"));
        assert_eq!(format.eotf(), Some(&Eotf::Hlg));
        assert_eq!(format.bit_depth(), Some(16));
        assert_eq!(format.filetype(), Some("exr"));
    }

    #[test]
    fn test_apply_strict_rejects_unknown_colorspace() {
        let mut format = OutputFormat::new();
        let fields = FieldArgs {
            colorspace: Some("rec709".to_string()),
            ..FieldArgs::default()
        };
        let err = fields.apply(&mut format, true).unwrap_err();
        assert!(matches!(err, CoreError::UnknownEnumValue { field: "colorspace", .. }));
        assert!(format.is_empty());
    }

    #[test]
    fn test_apply_strict_rejects_unknown_eotf() {
        let mut format = OutputFormat::new().with_eotf(Eotf::Pq);
        let fields = FieldArgs {
            eotf: Some("LogC4".to_string()),
            ..FieldArgs::default()
        };
        let err = fields.apply(&mut format, true).unwrap_err();
        assert!(matches!(err, CoreError::UnknownEnumValue { field: "eotf", ref value } if value == "LogC4"));
        assert_eq!(format.eotf(), Some(&Eotf::Pq));

        fields.apply(&mut format, false).unwrap();
        assert_eq!(format.eotf(), Some(&Eotf::Other("LogC4".to_string())));
    }

    #[test]
    fn test_write_document_keeps_existing_file_when_encoding_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("format.json");
        fs::write(&path, "{\"filetype\":\"mov\"}\n").unwrap();

        let output = OutputArgs {
            path: Some(path.clone()),
            ..OutputArgs::default()
        };
        let bad_config = CodecConfig {
            indent: 99,
            ..CodecConfig::default()
        };
        let err = write_document(&OutputFormat::new().with_filetype("mxf"), &output, &bad_config).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"filetype\":\"mov\"}\n");
    }

    #[test]
    fn test_write_document_reports_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("format.json");
        let output = OutputArgs {
            path: Some(path.clone()),
            ..OutputArgs::default()
        };
        let err = write_document(&OutputFormat::new(), &output, &codec_config(false, true)).unwrap_err();
        assert!(matches!(err, CoreError::PathError { path: ref p, .. } if *p == path));
        assert!(!path.exists());
    }

    #[test]
    fn test_codec_config_from_flags() {
        let config = codec_config(true, true);
        assert!(config.strict_enums);
        assert!(!config.pretty);
    }
}
