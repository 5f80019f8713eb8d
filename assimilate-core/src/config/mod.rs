//! Configuration structures and constants for the assimilate-core codec.
//!
//! This module controls how output-format documents are read and written:
//! pretty or compact output, indentation width, and whether unrecognised
//! colorspace or EOTF names are accepted.

mod builder;

use crate::error::{CoreError, CoreResult};

pub use builder::CodecConfigBuilder;

// Default constants

/// Pretty-print documents by default, matching how the server's schema
/// documentation shows them.
pub const DEFAULT_PRETTY: bool = true;

/// Default indentation width, in spaces, for pretty output.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indentation width accepted by [`CodecConfig::validate`].
pub const MAX_INDENT: usize = 8;

/// Unknown enum values are preserved, not rejected, unless strict mode is on.
pub const DEFAULT_STRICT_ENUMS: bool = false;

/// Environment variable that switches strict enum mode on in the CLI.
pub const STRICT_ENUMS_ENV: &str = "ASSIMILATE_STRICT_ENUMS";

/// Settings for reading and writing output-format documents.
///
/// # Examples
///
/// ```rust
/// use assimilate_core::config::CodecConfigBuilder;
///
/// let config = CodecConfigBuilder::new()
///     .pretty(false)
///     .strict_enums(true)
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Emit indented, multi-line JSON
    pub pretty: bool,

    /// Reject colorspace and EOTF names outside the known set
    pub strict_enums: bool,

    /// Indentation width for pretty output
    pub indent: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_PRETTY,
            strict_enums: DEFAULT_STRICT_ENUMS,
            indent: DEFAULT_INDENT,
        }
    }
}

impl CodecConfig {
    /// Checks that the settings are usable.
    pub fn validate(&self) -> CoreResult<()> {
        if self.indent > MAX_INDENT {
            return Err(CoreError::Config(format!(
                "indent must be at most {}, got {}",
                MAX_INDENT, self.indent
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CodecConfig::default();
        assert!(config.pretty);
        assert!(!config.strict_enums);
        assert_eq!(config.indent, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_indent_limit() {
        let config = CodecConfig {
            indent: 9,
            ..CodecConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let config = CodecConfig {
            indent: MAX_INDENT,
            ..CodecConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
