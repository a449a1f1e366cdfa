// Domain layer: animation state, host commands and the ports the scene drives.

pub mod command;
pub mod ports;
pub mod state;

pub use command::{Command, CommandError};
pub use ports::{Clock, Renderer, TextQuery, TextQueryError};
pub use state::{AnimationState, ButtonTexture, Tint};
