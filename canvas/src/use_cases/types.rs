// Use-case level inputs/outputs for the scene task.

use super::animation::RestartOutcome;
use crate::domain::{AnimationState, ButtonTexture, Tint};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub enum SceneEvent {
    // One inbound batch from the host's command channel.
    Update(Vec<Value>),
    TapSprite,
    TapRestart,
    RestartReply {
        request_id: Uuid,
        outcome: RestartOutcome,
    },
}

/// Read-only view of the state as of a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub spinning: bool,
    pub tint: Tint,
    pub rotation_radians: f64,
    pub restart_in_flight: bool,
    pub button: ButtonTexture,
}

impl FrameSnapshot {
    pub fn capture(frame: u64, state: &AnimationState) -> Self {
        Self {
            frame,
            spinning: state.spinning,
            tint: state.tint,
            rotation_radians: state.rotation_radians,
            restart_in_flight: state.restart_in_flight,
            button: state.button,
        }
    }
}
