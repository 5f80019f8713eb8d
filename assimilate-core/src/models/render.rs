//! Snapshot and render queue request bodies.

use serde::{Deserialize, Serialize};

/// Request for a still frame of a shot.
///
/// When `file` is absent the server answers with the JPEG bytes instead of
/// writing the image itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSnapshot {
    pub uuid: String,

    #[serde(default)]
    pub frame: i64,

    /// Render from proxy media instead of the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proxy: Option<bool>,

    /// Server-side destination path for the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl ImageSnapshot {
    pub fn new(uuid: impl Into<String>, frame: i64) -> Self {
        Self {
            uuid: uuid.into(),
            frame,
            proxy: None,
            file: None,
        }
    }

    pub fn with_proxy(mut self, proxy: bool) -> Self {
        self.proxy = Some(proxy);
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// Body of render start and queue-item requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMediaData {
    pub delete_existing_media: bool,
}

open_enum! {
    /// State of an item in the render queue.
    pub enum RenderStatus {
        Idle => "Idle",
        Waiting => "waiting",
        Processing => "processing",
        Finished => "finished",
        Error => "error",
    }
}

impl RenderStatus {
    /// True once the item will make no further progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Error)
    }
}
