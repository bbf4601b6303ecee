//! Follow camera
//!
//! `target` is the world position drawn at the top-left corner of the
//! viewport. It is recomputed from the player position every tick with no
//! smoothing, so the player is always exactly centred.

use macroquad::prelude::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowCamera {
    /// World position at the viewport's top-left corner
    pub target: Vec2,
    pub zoom: f32,
}

impl FollowCamera {
    pub fn new(zoom: f32) -> Self {
        Self { target: Vec2::ZERO, zoom }
    }

    /// Top-left target that centres `position` in a viewport of `viewport` pixels
    pub fn framing(position: Vec2, viewport: Vec2, zoom: f32) -> Vec2 {
        position - viewport / (2.0 * zoom)
    }

    /// Snap to keep `position` centred. Call after the followed entity moved.
    pub fn follow(&mut self, position: Vec2, viewport: Vec2) {
        self.target = Self::framing(position, viewport, self.zoom);
    }
}

impl Default for FollowCamera {
    fn default() -> Self {
        Self::new(1.0)
    }
}
