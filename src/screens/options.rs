//! Options screen
//!
//! Music volume can be nudged up and down. Changes last for the session only.

use macroquad::prelude::{Color, Rect, Vec2, BEIGE, BROWN, DARKBROWN};

use super::{prompt_visible, FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::game::{GameContext, Sfx};
use crate::input::Action;
use crate::render::Renderer;

/// Back to the title screen
pub const OPTIONS_DONE: FinishReason = 1;

/// Volume change per key press
const VOLUME_STEP: f32 = 0.1;

const BAR_WIDTH: f32 = 300.0;
const BAR_HEIGHT: f32 = 20.0;

pub struct OptionsScreen {
    frames_counter: u32,
    finish: FinishReason,
}

impl OptionsScreen {
    pub fn new() -> Self {
        Self {
            frames_counter: 0,
            finish: NOT_FINISHED,
        }
    }
}

impl Default for OptionsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for OptionsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Options
    }

    fn init(&mut self, _ctx: &mut GameContext) {
        self.frames_counter = 0;
        self.finish = NOT_FINISHED;
    }

    fn update(&mut self, ctx: &mut GameContext) {
        self.frames_counter += 1;

        if ctx.input.pressed(Action::VolumeUp) {
            let volume = ctx.music_volume() + VOLUME_STEP;
            ctx.set_music_volume(volume);
        }
        if ctx.input.pressed(Action::VolumeDown) {
            let volume = ctx.music_volume() - VOLUME_STEP;
            ctx.set_music_volume(volume);
        }

        if ctx.input.pressed(Action::Confirm) {
            self.finish = OPTIONS_DONE;
            ctx.play_sfx(Sfx::Coin);
        }
    }

    fn draw(&self, ctx: &GameContext, renderer: &mut dyn Renderer) {
        let viewport = renderer.viewport();
        renderer.rect(Rect::new(0.0, 0.0, viewport.x, viewport.y), BEIGE);

        renderer.display_text("OPTIONS SCREEN", Vec2::new(20.0, 10.0), 3.0, 4.0, DARKBROWN);

        let volume = ctx.music_volume();
        renderer.text(
            &format!("MUSIC VOLUME: {:>3}%", (volume * 100.0).round() as i32),
            Vec2::new(120.0, 160.0),
            20.0,
            DARKBROWN,
        );
        let bar = Rect::new(120.0, 190.0, BAR_WIDTH, BAR_HEIGHT);
        renderer.rect(Rect::new(bar.x, bar.y, bar.w * volume, bar.h), BROWN);
        renderer.rect_lines(bar, 2.0, DARKBROWN);

        if prompt_visible(self.frames_counter) {
            renderer.text(
                "LEFT / RIGHT to change, ENTER or TAP to RETURN to TITLE SCREEN",
                Vec2::new(120.0, 240.0),
                20.0,
                Color::new(DARKBROWN.r, DARKBROWN.g, DARKBROWN.b, 0.8),
            );
        }
    }

    fn finish_reason(&self) -> FinishReason {
        self.finish
    }
}
