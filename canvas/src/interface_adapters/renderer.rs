// Headless renderer: keeps a minimal scene graph and traces every drawn frame.

use crate::domain::{ButtonTexture, Renderer, Tint};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteNode {
    pub tint: Tint,
    pub rotation: f64,
}

#[derive(Debug, Default)]
pub struct TracingRenderer {
    sprite: Option<SpriteNode>,
    button: ButtonTexture,
    frames_rendered: u64,
}

impl TracingRenderer {
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn sprite(&self) -> Option<SpriteNode> {
        self.sprite
    }

    pub fn button(&self) -> ButtonTexture {
        self.button
    }

    fn sprite_mut(&mut self) -> &mut SpriteNode {
        self.sprite.get_or_insert(SpriteNode {
            tint: Tint::default(),
            rotation: 0.0,
        })
    }
}

impl Renderer for TracingRenderer {
    fn set_tint(&mut self, tint: Tint) {
        self.sprite_mut().tint = tint;
    }

    fn set_rotation(&mut self, radians: f64) {
        self.sprite_mut().rotation = radians;
    }

    fn set_button(&mut self, texture: ButtonTexture) {
        self.button = texture;
    }

    fn render(&mut self) {
        self.frames_rendered += 1;
        if let Some(sprite) = self.sprite {
            trace!(
                frame = self.frames_rendered,
                tint = %sprite.tint,
                rotation = sprite.rotation,
                button = ?self.button,
                "frame rendered"
            );
        }
    }
}
