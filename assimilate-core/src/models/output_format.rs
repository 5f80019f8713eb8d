// ============================================================================
// assimilate-core/src/models/output_format.rs
// ============================================================================
//
// OUTPUT FORMAT: Default output-format properties of a timeline or construct
//
// The record holds six independent, optional values. Absence carries no
// default: an unset field stays unset through reads, writes and JSON round
// trips. No field constrains another, so setters never validate across
// fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Colorspace, Eotf};
use crate::error::CoreError;

/// Default output-format properties of a timeline or construct.
///
/// # Examples
///
/// ```rust
/// use assimilate_core::{Eotf, OutputFormat};
///
/// let mut format = OutputFormat::new()
///     .with_bit_depth(10)
///     .with_filetype("mov");
/// format.set_eotf(Some(Eotf::Pq));
///
/// assert_eq!(format.bit_depth(), Some(10));
/// assert_eq!(format.filetype(), Some("mov"));
/// assert!(format.colorspace().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFormat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    colorspace: Option<Colorspace>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    eotf: Option<Eotf>,

    /// Default bit depth of a timeline or construct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bit_depth: Option<i32>,

    /// Default sample format of a timeline or construct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bit_type: Option<String>,

    /// Default channel layout of a timeline or construct
    #[serde(default, skip_serializing_if = "Option::is_none")]
    components: Option<String>,

    /// Default output container or file format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    filetype: Option<String>,
}

/// Name under which the APIV2 schema publishes this model.
pub type ProjectDataDefOutputFormat = OutputFormat;

impl OutputFormat {
    /// Creates a record with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- Getters ----

    pub fn colorspace(&self) -> Option<&Colorspace> {
        self.colorspace.as_ref()
    }

    pub fn eotf(&self) -> Option<&Eotf> {
        self.eotf.as_ref()
    }

    pub fn bit_depth(&self) -> Option<i32> {
        self.bit_depth
    }

    pub fn bit_type(&self) -> Option<&str> {
        self.bit_type.as_deref()
    }

    pub fn components(&self) -> Option<&str> {
        self.components.as_deref()
    }

    pub fn filetype(&self) -> Option<&str> {
        self.filetype.as_deref()
    }

    // ---- Setters (None clears the field) ----

    pub fn set_colorspace(&mut self, colorspace: Option<Colorspace>) {
        self.colorspace = colorspace;
    }

    pub fn set_eotf(&mut self, eotf: Option<Eotf>) {
        self.eotf = eotf;
    }

    pub fn set_bit_depth(&mut self, bit_depth: Option<i32>) {
        self.bit_depth = bit_depth;
    }

    pub fn set_bit_type(&mut self, bit_type: Option<String>) {
        self.bit_type = bit_type;
    }

    pub fn set_components(&mut self, components: Option<String>) {
        self.components = components;
    }

    pub fn set_filetype(&mut self, filetype: Option<String>) {
        self.filetype = filetype;
    }

    // ---- Fluent construction ----

    pub fn with_colorspace(mut self, colorspace: impl Into<Colorspace>) -> Self {
        self.colorspace = Some(colorspace.into());
        self
    }

    pub fn with_eotf(mut self, eotf: impl Into<Eotf>) -> Self {
        self.eotf = Some(eotf.into());
        self
    }

    pub fn with_bit_depth(mut self, bit_depth: i32) -> Self {
        self.bit_depth = Some(bit_depth);
        self
    }

    pub fn with_bit_type(mut self, bit_type: impl Into<String>) -> Self {
        self.bit_type = Some(bit_type.into());
        self
    }

    pub fn with_components(mut self, components: impl Into<String>) -> Self {
        self.components = Some(components.into());
        self
    }

    pub fn with_filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    /// Clears a single field, leaving the others untouched.
    pub fn unset(&mut self, field: OutputFormatField) {
        match field {
            OutputFormatField::Colorspace => self.colorspace = None,
            OutputFormatField::Eotf => self.eotf = None,
            OutputFormatField::BitDepth => self.bit_depth = None,
            OutputFormatField::BitType => self.bit_type = None,
            OutputFormatField::Components => self.components = None,
            OutputFormatField::Filetype => self.filetype = None,
        }
    }

    /// Whether the given field currently holds a value.
    pub fn is_set(&self, field: OutputFormatField) -> bool {
        match field {
            OutputFormatField::Colorspace => self.colorspace.is_some(),
            OutputFormatField::Eotf => self.eotf.is_some(),
            OutputFormatField::BitDepth => self.bit_depth.is_some(),
            OutputFormatField::BitType => self.bit_type.is_some(),
            OutputFormatField::Components => self.components.is_some(),
            OutputFormatField::Filetype => self.filetype.is_some(),
        }
    }

    /// True when all six fields are absent.
    pub fn is_empty(&self) -> bool {
        self.present_fields().is_empty()
    }

    /// Present fields, in declaration order.
    pub fn present_fields(&self) -> Vec<OutputFormatField> {
        OutputFormatField::ALL
            .into_iter()
            .filter(|field| self.is_set(*field))
            .collect()
    }

    /// Display form of a single field's value, if present.
    pub fn field_value(&self, field: OutputFormatField) -> Option<String> {
        match field {
            OutputFormatField::Colorspace => self.colorspace.as_ref().map(ToString::to_string),
            OutputFormatField::Eotf => self.eotf.as_ref().map(ToString::to_string),
            OutputFormatField::BitDepth => self.bit_depth.map(|depth| depth.to_string()),
            OutputFormatField::BitType => self.bit_type.clone(),
            OutputFormatField::Components => self.components.clone(),
            OutputFormatField::Filetype => self.filetype.clone(),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = OutputFormatField::ALL
            .into_iter()
            .filter_map(|field| {
                self.field_value(field)
                    .map(|value| format!("{}={}", field.as_str(), value))
            })
            .collect();

        if parts.is_empty() {
            f.write_str("<empty>")
        } else {
            f.write_str(&parts.join(" "))
        }
    }
}

/// Names the six fields of [`OutputFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormatField {
    Colorspace,
    Eotf,
    BitDepth,
    BitType,
    Components,
    Filetype,
}

impl OutputFormatField {
    /// All fields in declaration order.
    pub const ALL: [OutputFormatField; 6] = [
        Self::Colorspace,
        Self::Eotf,
        Self::BitDepth,
        Self::BitType,
        Self::Components,
        Self::Filetype,
    ];

    /// JSON key of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Colorspace => "colorspace",
            Self::Eotf => "eotf",
            Self::BitDepth => "bit_depth",
            Self::BitType => "bit_type",
            Self::Components => "components",
            Self::Filetype => "filetype",
        }
    }
}

impl fmt::Display for OutputFormatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormatField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                CoreError::InvalidInput(format!(
                    "unknown output format field '{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|field| field.as_str()).join(", ")
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let format = OutputFormat::new();
        assert!(format.is_empty());
        assert!(format.present_fields().is_empty());
        assert_eq!(format.to_string(), "<empty>");
    }

    #[test]
    fn test_setter_none_clears_field() {
        let mut format = OutputFormat::new().with_bit_type("float");
        format.set_bit_type(None);
        assert_eq!(format.bit_type(), None);
        assert!(format.is_empty());
    }

    #[test]
    fn test_unset_touches_only_named_field() {
        let mut format = OutputFormat::new()
            .with_colorspace(Colorspace::Rec2020)
            .with_eotf(Eotf::Pq)
            .with_bit_depth(12);
        format.unset(OutputFormatField::Eotf);

        assert_eq!(format.colorspace(), Some(&Colorspace::Rec2020));
        assert_eq!(format.eotf(), None);
        assert_eq!(format.bit_depth(), Some(12));
    }

    #[test]
    fn test_display_skips_absent_fields() {
        let format = OutputFormat::new()
            .with_colorspace(Colorspace::Rec709)
            .with_eotf(Eotf::Bt1886)
            .with_bit_depth(10)
            .with_filetype("mov");
        assert_eq!(
            format.to_string(),
            "colorspace=Rec709 eotf=BT.1886 bit_depth=10 filetype=mov"
        );
    }

    #[test]
    fn test_field_names_parse() {
        assert_eq!("bit_depth".parse::<OutputFormatField>().unwrap(), OutputFormatField::BitDepth);
        assert_eq!("filetype".parse::<OutputFormatField>().unwrap(), OutputFormatField::Filetype);

        let err = "bitdepth".parse::<OutputFormatField>().unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(err.to_string().contains("bit_depth"));
    }
}
