//! Drawing interface
//!
//! Game logic draws through the `Renderer` trait so it never touches the
//! window directly. `MacroquadRenderer` is the real backend; tests use
//! `RecordingRenderer`.

mod backend;

pub use backend::MacroquadRenderer;

use macroquad::prelude::{Color, Rect, Vec2};
use crate::game::FollowCamera;

/// Sprite strips that can be drawn with `Renderer::sprite`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    PlayerIdle,
    PlayerRun,
    PlayerJump,
}

/// Drawing primitives provided by the host
pub trait Renderer {
    /// Current viewport size in pixels
    fn viewport(&self) -> Vec2;

    fn clear(&mut self, color: Color);

    fn rect(&mut self, rect: Rect, color: Color);

    fn rect_lines(&mut self, rect: Rect, thickness: f32, color: Color);

    /// Text in the default font, `pos` is the top-left corner
    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color);

    /// Text in the game's display font at `scale` times its base size
    fn display_text(&mut self, text: &str, pos: Vec2, scale: f32, spacing: f32, color: Color);

    /// Draw `source` (pixels within the sheet) with its top-left at `pos`
    fn sprite(&mut self, sheet: SpriteSheet, source: Rect, pos: Vec2, flip_x: bool, tint: Color);

    /// Switch to world space as seen by `camera`
    fn begin_world(&mut self, camera: &FollowCamera);

    /// Back to screen space
    fn end_world(&mut self);
}

/// A single recorded draw call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Color),
    Rect(Rect, Color),
    RectLines(Rect, Color),
    /// Text and its pixel size
    Text(String, f32),
    DisplayText(String),
    Sprite { sheet: SpriteSheet, source: Rect, pos: Vec2, flip_x: bool },
    BeginWorld { target: Vec2, zoom: f32 },
    EndWorld,
}

/// Renderer that records calls instead of drawing
#[cfg(test)]
pub struct RecordingRenderer {
    pub viewport: Vec2,
    pub calls: Vec<DrawCall>,
}

#[cfg(test)]
impl RecordingRenderer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            viewport: Vec2::new(width, height),
            calls: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text(t, _) | DrawCall::DisplayText(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn last_rect(&self) -> Option<(Rect, Color)> {
        self.calls.iter().rev().find_map(|c| match c {
            DrawCall::Rect(r, color) => Some((*r, *color)),
            _ => None,
        })
    }
}

#[cfg(test)]
impl Renderer for RecordingRenderer {
    fn viewport(&self) -> Vec2 {
        self.viewport
    }

    fn clear(&mut self, color: Color) {
        self.calls.push(DrawCall::Clear(color));
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Rect(rect, color));
    }

    fn rect_lines(&mut self, rect: Rect, _thickness: f32, color: Color) {
        self.calls.push(DrawCall::RectLines(rect, color));
    }

    fn text(&mut self, text: &str, _pos: Vec2, size: f32, _color: Color) {
        self.calls.push(DrawCall::Text(text.to_string(), size));
    }

    fn display_text(&mut self, text: &str, _pos: Vec2, _scale: f32, _spacing: f32, _color: Color) {
        self.calls.push(DrawCall::DisplayText(text.to_string()));
    }

    fn sprite(&mut self, sheet: SpriteSheet, source: Rect, pos: Vec2, flip_x: bool, _tint: Color) {
        self.calls.push(DrawCall::Sprite { sheet, source, pos, flip_x });
    }

    fn begin_world(&mut self, camera: &FollowCamera) {
        self.calls.push(DrawCall::BeginWorld { target: camera.target, zoom: camera.zoom });
    }

    fn end_world(&mut self) {
        self.calls.push(DrawCall::EndWorld);
    }
}
