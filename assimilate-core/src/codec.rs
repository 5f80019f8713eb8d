//! Reading and writing output-format JSON documents.
//!
//! A document is a single JSON object. Absent fields are omitted on output;
//! a missing key and an explicit `null` both read back as absent. Keys the
//! model does not know are ignored.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use log::{debug, trace};
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::PrettyFormatter;

use crate::config::CodecConfig;
use crate::error::{CoreError, CoreResult};
use crate::models::OutputFormat;

/// Parses one output-format document from a reader.
pub fn read_output_format<R: Read>(reader: R, config: &CodecConfig) -> CoreResult<OutputFormat> {
    let value: Value = serde_json::from_reader(reader)?;
    decode(value, config)
}

/// Parses one output-format document from a string.
pub fn parse_output_format(input: &str, config: &CodecConfig) -> CoreResult<OutputFormat> {
    let value: Value = serde_json::from_str(input)?;
    decode(value, config)
}

/// Reads an output-format document from a file.
pub fn load_output_format<P: AsRef<Path>>(path: P, config: &CodecConfig) -> CoreResult<OutputFormat> {
    let path = path.as_ref();
    debug!("Loading output format from {}", path.display());

    let file = File::open(path).map_err(|source| CoreError::PathError {
        path: path.to_path_buf(),
        source,
    })?;
    read_output_format(BufReader::new(file), config)
}

/// Writes a document followed by a newline.
pub fn write_output_format<W: Write>(
    mut writer: W,
    format: &OutputFormat,
    config: &CodecConfig,
) -> CoreResult<()> {
    let bytes = encode(format, config)?;
    writer.write_all(&bytes)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Serialises a document to a string, without a trailing newline.
pub fn to_json_string(format: &OutputFormat, config: &CodecConfig) -> CoreResult<String> {
    let bytes = encode(format, config)?;
    String::from_utf8(bytes).map_err(|e| CoreError::OperationFailed(e.to_string()))
}

fn encode(format: &OutputFormat, config: &CodecConfig) -> CoreResult<Vec<u8>> {
    config.validate()?;
    trace!("Encoding output format: {}", format);

    let mut buffer = Vec::new();
    if config.pretty {
        let indent = vec![b' '; config.indent];
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(&indent));
        format.serialize(&mut serializer)?;
    } else {
        serde_json::to_writer(&mut buffer, format)?;
    }
    Ok(buffer)
}

fn decode(value: Value, config: &CodecConfig) -> CoreResult<OutputFormat> {
    if !value.is_object() {
        return Err(CoreError::InvalidInput(format!(
            "output format document must be a JSON object, found {}",
            json_kind(&value)
        )));
    }

    let format: OutputFormat = serde_json::from_value(value)?;
    debug!("Parsed output format: {}", format);

    if config.strict_enums {
        check_known_enums(&format)?;
    }
    Ok(format)
}

/// Rejects colorspace or EOTF values outside the known set. Each field is
/// judged on its own.
fn check_known_enums(format: &OutputFormat) -> CoreResult<()> {
    if let Some(colorspace) = format.colorspace().filter(|cs| !cs.is_known()) {
        return Err(CoreError::UnknownEnumValue {
            field: "colorspace",
            value: colorspace.to_string(),
        });
    }
    if let Some(eotf) = format.eotf().filter(|eotf| !eotf.is_known()) {
        return Err(CoreError::UnknownEnumValue {
            field: "eotf",
            value: eotf.to_string(),
        });
    }
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CodecConfigBuilder;

    #[test]
    fn test_non_object_document_is_rejected() {
        let config = CodecConfig::default();
        let err = parse_output_format("[1, 2]", &config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref msg) if msg.contains("an array")));

        let err = parse_output_format("null", &config).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = parse_output_format("{\"bit_depth\": ", &CodecConfig::default()).unwrap_err();
        assert!(matches!(err, CoreError::Json(_)));
    }

    #[test]
    fn test_compact_output_has_no_whitespace() {
        let config = CodecConfigBuilder::new().pretty(false).build();
        let format = OutputFormat::new().with_bit_depth(10).with_filetype("mov");
        assert_eq!(
            to_json_string(&format, &config).unwrap(),
            r#"{"bit_depth":10,"filetype":"mov"}"#
        );
    }

    #[test]
    fn test_pretty_output_uses_configured_indent() {
        let config = CodecConfigBuilder::new().indent(4).build();
        let format = OutputFormat::new().with_bit_depth(10);
        assert_eq!(
            to_json_string(&format, &config).unwrap(),
            "{\n    \"bit_depth\": 10\n}"
        );
    }

    #[test]
    fn test_invalid_config_is_reported_before_writing() {
        let config = CodecConfigBuilder::new().indent(20).build();
        let mut out = Vec::new();
        let err = write_output_format(&mut out, &OutputFormat::new(), &config).unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
        assert!(out.is_empty());
    }
}
