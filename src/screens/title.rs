//! Title screen

use macroquad::prelude::{Rect, Vec2, DARKGREEN, GREEN};

use super::{prompt_visible, FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::game::{GameContext, Sfx};
use crate::input::Action;
use crate::render::Renderer;

/// Leave for the options screen
pub const TITLE_TO_OPTIONS: FinishReason = 1;
/// Leave for gameplay
pub const TITLE_TO_GAMEPLAY: FinishReason = 2;

pub struct TitleScreen {
    frames_counter: u32,
    finish: FinishReason,
}

impl TitleScreen {
    pub fn new() -> Self {
        Self {
            frames_counter: 0,
            finish: NOT_FINISHED,
        }
    }
}

impl Default for TitleScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TitleScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Title
    }

    fn init(&mut self, _ctx: &mut GameContext) {
        self.frames_counter = 0;
        self.finish = NOT_FINISHED;
    }

    fn update(&mut self, ctx: &mut GameContext) {
        self.frames_counter += 1;

        if ctx.input.pressed(Action::Confirm) {
            self.finish = TITLE_TO_GAMEPLAY;
            ctx.play_sfx(Sfx::Coin);
        } else if ctx.input.pressed(Action::OpenOptions) {
            self.finish = TITLE_TO_OPTIONS;
            ctx.play_sfx(Sfx::Coin);
        }
    }

    fn draw(&self, _ctx: &GameContext, renderer: &mut dyn Renderer) {
        let viewport = renderer.viewport();
        renderer.rect(Rect::new(0.0, 0.0, viewport.x, viewport.y), GREEN);

        renderer.display_text("TITLE SCREEN", Vec2::new(20.0, 10.0), 3.0, 4.0, DARKGREEN);
        if prompt_visible(self.frames_counter) {
            renderer.text(
                "PRESS ENTER or TAP to JUMP to GAMEPLAY SCREEN",
                Vec2::new(120.0, 220.0),
                20.0,
                DARKGREEN,
            );
        }
        renderer.text("PRESS O for OPTIONS", Vec2::new(120.0, 250.0), 20.0, DARKGREEN);
    }

    fn finish_reason(&self) -> FinishReason {
        self.finish
    }
}
