// Wire DTOs for the host-facing canvas surface.

use crate::domain::ButtonTexture;
use crate::use_cases::FrameSnapshot;
use serde::Serialize;
use serde_json::Value;

/// Parses one inbound batch: a JSON array of command messages.
pub fn parse_batch(text: &str) -> Result<Vec<Value>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Frame state served to the host for inspection.
#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshotDto {
    pub frame: u64,
    pub spinning: bool,
    // `#RRGGBB`
    pub tint: String,
    pub rotation_radians: f64,
    pub restart_in_flight: bool,
    pub button: ButtonTextureDto,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonTextureDto {
    Enabled,
    Disabled,
}

impl From<ButtonTexture> for ButtonTextureDto {
    fn from(texture: ButtonTexture) -> Self {
        match texture {
            ButtonTexture::Enabled => ButtonTextureDto::Enabled,
            ButtonTexture::Disabled => ButtonTextureDto::Disabled,
        }
    }
}

impl From<&FrameSnapshot> for FrameSnapshotDto {
    fn from(snapshot: &FrameSnapshot) -> Self {
        Self {
            frame: snapshot.frame,
            spinning: snapshot.spinning,
            tint: snapshot.tint.to_string(),
            rotation_radians: snapshot.rotation_radians,
            restart_in_flight: snapshot.restart_in_flight,
            button: snapshot.button.into(),
        }
    }
}
