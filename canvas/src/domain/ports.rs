use async_trait::async_trait;
use std::{fmt, time::Duration};

use super::state::{ButtonTexture, Tint};

// Port for the 2D scene collaborator that draws the sprite and the restart button.
pub trait Renderer: Send {
    fn set_tint(&mut self, tint: Tint);
    fn set_rotation(&mut self, radians: f64);
    fn set_button(&mut self, texture: ButtonTexture);
    fn render(&mut self);
}

// Port for the host's free-text query channel.
#[async_trait]
pub trait TextQuery: Send + Sync {
    async fn send_text_query(&self, query: &str) -> Result<String, TextQueryError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextQueryError {
    Transport(String),
    Upstream { status: u16 },
}

impl fmt::Display for TextQueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextQueryError::Transport(err) => write!(f, "text query transport error: {err}"),
            TextQueryError::Upstream { status } => write!(f, "text query upstream error {status}"),
        }
    }
}

impl std::error::Error for TextQueryError {}

// Port for the high-resolution frame timestamp source.
pub trait Clock: Send {
    fn now(&self) -> Duration;
}
