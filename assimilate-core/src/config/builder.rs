// ============================================================================
// assimilate-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for CodecConfig
//
// Provides a fluent API for creating CodecConfig instances, starting from the
// library defaults and overriding only what the caller names.

use super::CodecConfig;

/// Builder for creating CodecConfig instances.
#[derive(Debug, Clone)]
pub struct CodecConfigBuilder {
    pretty: bool,
    strict_enums: bool,
    indent: usize,
}

impl Default for CodecConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecConfigBuilder {
    /// Creates a new CodecConfigBuilder with default values.
    pub fn new() -> Self {
        Self {
            pretty: super::DEFAULT_PRETTY,
            strict_enums: super::DEFAULT_STRICT_ENUMS,
            indent: super::DEFAULT_INDENT,
        }
    }

    /// Sets whether output is indented across multiple lines.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Sets whether unknown colorspace and EOTF names are rejected.
    pub fn strict_enums(mut self, strict_enums: bool) -> Self {
        self.strict_enums = strict_enums;
        self
    }

    /// Sets the indentation width used for pretty output.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Builds the configuration. Call [`CodecConfig::validate`] before use
    /// when the values come from user input.
    pub fn build(self) -> CodecConfig {
        CodecConfig {
            pretty: self.pretty,
            strict_enums: self.strict_enums,
            indent: self.indent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_default_config() {
        assert_eq!(CodecConfigBuilder::new().build(), CodecConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = CodecConfigBuilder::new()
            .pretty(false)
            .strict_enums(true)
            .indent(4)
            .build();
        assert!(!config.pretty);
        assert!(config.strict_enums);
        assert_eq!(config.indent, 4);
    }
}
