//! Output-format data models for the Assimilate APIV2 client.
//!
//! This crate provides the `ProjectDataDefOutputFormat` model (exposed as
//! [`OutputFormat`]), the enumerated [`Colorspace`] and [`Eotf`] types it
//! refers to, a handful of neighbouring request bodies, and a JSON codec for
//! reading and writing output-format documents.
//!
//! ## Usage Example
//!
//! ```rust
//! use assimilate_core::{CodecConfig, Colorspace, OutputFormat, codec};
//!
//! let config = CodecConfig::default();
//! let format = codec::parse_output_format(
//!     r#"{ "colorspace": "Rec2020", "bit_depth": 10 }"#,
//!     &config,
//! ).unwrap();
//!
//! assert_eq!(format.colorspace(), Some(&Colorspace::Rec2020));
//! assert_eq!(format.bit_depth(), Some(10));
//! assert_eq!(format.eotf(), None);
//!
//! let edited = format.with_filetype("mov");
//! let json = codec::to_json_string(&edited, &config).unwrap();
//! assert!(json.contains("\"filetype\": \"mov\""));
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod models;

// Re-exports for public API
pub use codec::{
    load_output_format, parse_output_format, read_output_format, to_json_string,
    write_output_format,
};
pub use config::{CodecConfig, CodecConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use models::{
    AudioMode, Colorspace, DeleteMediaData, Eotf, ImageSnapshot, LoopMode, OutputFormat,
    OutputFormatField, PlayMode, PlaymodeData, ProjectDataDefOutputFormat, RenderStatus,
};
