// Domain-level animation state for the spinning sprite and its restart button.

use std::fmt;

/// Sprite fill color packed as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(u32);

impl Tint {
    pub const GREEN: Tint = Tint(0x00FF00);
    pub const MAX_RGB: u32 = 0xFF_FFFF;

    /// Returns `None` when `rgb` does not fit in 24 bits.
    pub fn new(rgb: u32) -> Option<Self> {
        (rgb <= Self::MAX_RGB).then_some(Self(rgb))
    }

    pub fn rgb(self) -> u32 {
        self.0
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self::GREEN
    }
}

impl fmt::Display for Tint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Texture shown on the restart button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonTexture {
    #[default]
    Enabled,
    Disabled,
}

/// The single mutable state of a canvas session.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationState {
    pub spinning: bool,
    pub tint: Tint,
    // Accumulates without wrapping.
    pub rotation_radians: f64,
    // Guards the restart button against duplicate outbound requests.
    pub restart_in_flight: bool,
    pub button: ButtonTexture,
}

impl AnimationState {
    pub fn new(default_tint: Tint) -> Self {
        Self {
            spinning: true,
            tint: default_tint,
            rotation_radians: 0.0,
            restart_in_flight: false,
            button: ButtonTexture::Enabled,
        }
    }

    /// Puts the sprite and the restart button back to their initial appearance.
    pub fn reset(&mut self, default_tint: Tint) {
        *self = Self::new(default_tint);
    }
}
