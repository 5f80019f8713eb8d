//! Player control request body.

use serde::{Deserialize, Serialize};

open_enum! {
    /// Transport state requested from the player.
    pub enum PlayMode {
        Pause => "PAUSE",
        PlayForward => "PLAY_FRW",
        PlayReverse => "PLAY_REV",
    }
}

open_enum! {
    /// What the player does when it reaches the end of the range.
    pub enum LoopMode {
        Loop => "LOOP",
        Once => "ONCE",
        PingPong => "PINGPONG",
    }
}

/// Audio output switch for playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AudioMode {
    #[serde(rename = "ON")]
    On,
    #[serde(rename = "OFF")]
    Off,
}

/// Playback settings sent when entering review mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaymodeData {
    pub mode: PlayMode,

    #[serde(rename = "loop")]
    pub loop_mode: LoopMode,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<AudioMode>,

    /// Playback speed multiplier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,

    /// Restrict playback to the marked range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<bool>,
}

impl PlaymodeData {
    pub fn new(mode: PlayMode, loop_mode: LoopMode) -> Self {
        Self {
            mode,
            loop_mode,
            audio: None,
            speed: None,
            range: None,
        }
    }

    /// Forward playback in a loop at normal speed with audio, the review default.
    pub fn review() -> Self {
        Self {
            audio: Some(AudioMode::On),
            speed: Some(1.0),
            range: Some(false),
            ..Self::new(PlayMode::PlayForward, LoopMode::Loop)
        }
    }
}
