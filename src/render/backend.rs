//! macroquad drawing backend

use macroquad::prelude::*;

use super::{Renderer, SpriteSheet};
use crate::assets::Assets;
use crate::game::FollowCamera;

/// Pixel height of the display font at scale 1
const DISPLAY_FONT_BASE_SIZE: f32 = 16.0;

pub struct MacroquadRenderer<'a> {
    assets: &'a Assets,
}

impl<'a> MacroquadRenderer<'a> {
    pub fn new(assets: &'a Assets) -> Self {
        Self { assets }
    }
}

impl Renderer for MacroquadRenderer<'_> {
    fn viewport(&self) -> Vec2 {
        vec2(screen_width(), screen_height())
    }

    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
    }

    fn rect_lines(&mut self, rect: Rect, thickness: f32, color: Color) {
        draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, thickness, color);
    }

    fn text(&mut self, text: &str, pos: Vec2, size: f32, color: Color) {
        // macroquad places text by its baseline
        draw_text(text, pos.x.round(), (pos.y + size).round(), size, color);
    }

    fn display_text(&mut self, text: &str, pos: Vec2, scale: f32, spacing: f32, color: Color) {
        let font_size = (DISPLAY_FONT_BASE_SIZE * scale) as u16;
        let baseline = (pos.y + font_size as f32).round();
        let mut x = pos.x;

        // Per-character so extra spacing can be inserted between glyphs
        for ch in text.chars() {
            let glyph = ch.to_string();
            let dims = measure_text(&glyph, Some(&self.assets.font), font_size, 1.0);
            draw_text_ex(
                &glyph,
                x.round(),
                baseline,
                TextParams {
                    font: Some(&self.assets.font),
                    font_size,
                    color,
                    ..Default::default()
                },
            );
            x += dims.width + spacing;
        }
    }

    fn sprite(&mut self, sheet: SpriteSheet, source: Rect, pos: Vec2, flip_x: bool, tint: Color) {
        let Some(texture) = self.assets.sprite(sheet) else {
            return;
        };
        draw_texture_ex(
            texture,
            pos.x,
            pos.y,
            tint,
            DrawTextureParams {
                dest_size: Some(vec2(source.w, source.h)),
                source: Some(source),
                flip_x,
                ..Default::default()
            },
        );
    }

    fn begin_world(&mut self, camera: &FollowCamera) {
        let viewport = self.viewport();
        let zoom = camera.zoom.max(f32::EPSILON);
        // FollowCamera keeps the top-left corner, Camera2D wants the centre
        let centre = camera.target + viewport / (2.0 * zoom);
        set_camera(&Camera2D {
            target: centre,
            zoom: vec2(2.0 * zoom / viewport.x, 2.0 * zoom / viewport.y),
            ..Default::default()
        });
    }

    fn end_world(&mut self) {
        set_default_camera();
    }
}
