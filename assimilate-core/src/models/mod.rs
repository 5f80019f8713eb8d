//! Data models of the Assimilate APIV2 client.
//!
//! `OutputFormat` describes the default output properties of a timeline or
//! construct. `Colorspace` and `Eotf` are the enumerated types it refers to.
//! The remaining models are request bodies sent alongside it in project
//! browsing workflows (snapshots, playback mode, render queue control).
//!
//! Enumerations owned by the server are "open": values this crate does not
//! know are kept verbatim in an `Other` variant, so a document read from the
//! server can be written back without loss.

/// Declares an open string enumeration.
///
/// Each listed variant maps to exactly one wire string. Any other string
/// lands in `Other(String)` and is serialised back unchanged.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
            /// A value outside the known set, kept verbatim.
            Other(String),
        }

        impl $name {
            /// Wire representation of this value.
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Other(value) => value.as_str(),
                }
            }

            /// Returns `false` only for values held in `Other`.
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $( $wire => Self::$variant, )+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self::from(s))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                <String as serde::Deserialize>::deserialize(deserializer).map(Self::from)
            }
        }
    };
}

pub mod colorspace;
pub mod eotf;
pub mod output_format;
pub mod playback;
pub mod render;

pub use colorspace::Colorspace;
pub use eotf::Eotf;
pub use output_format::{OutputFormat, OutputFormatField, ProjectDataDefOutputFormat};
pub use playback::{AudioMode, LoopMode, PlayMode, PlaymodeData};
pub use render::{DeleteMediaData, ImageSnapshot, RenderStatus};
