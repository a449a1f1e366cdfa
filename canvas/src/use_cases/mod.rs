// Use cases layer: command routing, the animation loop and the scene task that drives them.

pub mod animation;
pub mod router;
pub mod scene;
pub mod types;

pub use animation::{AnimationLoop, RestartOutcome, RestartTicket};
pub use router::{CommandRouter, DispatchError};
pub use scene::{SceneHandle, SceneSettings, spawn_scene};
pub use types::{FrameSnapshot, SceneEvent};
