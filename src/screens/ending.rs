//! Ending screen

use macroquad::prelude::{Rect, Vec2, BLUE, DARKBLUE};

use super::{prompt_visible, FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::game::{GameContext, Sfx};
use crate::input::Action;
use crate::render::Renderer;

/// Back to the title screen
pub const ENDING_DONE: FinishReason = 1;

pub struct EndingScreen {
    frames_counter: u32,
    finish: FinishReason,
}

impl EndingScreen {
    pub fn new() -> Self {
        Self {
            frames_counter: 0,
            finish: NOT_FINISHED,
        }
    }
}

impl Default for EndingScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for EndingScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Ending
    }

    fn init(&mut self, _ctx: &mut GameContext) {
        self.frames_counter = 0;
        self.finish = NOT_FINISHED;
    }

    fn update(&mut self, ctx: &mut GameContext) {
        self.frames_counter += 1;

        if ctx.input.pressed(Action::Confirm) {
            self.finish = ENDING_DONE;
            ctx.play_sfx(Sfx::Coin);
        }
    }

    fn draw(&self, _ctx: &GameContext, renderer: &mut dyn Renderer) {
        let viewport = renderer.viewport();
        renderer.rect(Rect::new(0.0, 0.0, viewport.x, viewport.y), BLUE);

        renderer.display_text("ENDING SCREEN", Vec2::new(20.0, 10.0), 3.0, 4.0, DARKBLUE);
        if prompt_visible(self.frames_counter) {
            renderer.text(
                "PRESS ENTER or TAP to RETURN to TITLE SCREEN",
                Vec2::new(120.0, 220.0),
                20.0,
                DARKBLUE,
            );
        }
    }

    fn finish_reason(&self) -> FinishReason {
        self.finish
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::game::SoundEvent;
    use crate::input::InputFrame;
    use crate::render::RecordingRenderer;

    #[test]
    fn test_confirm_finishes() {
        let mut ctx = GameContext::new(GameConfig::default());
        let mut screen = EndingScreen::new();
        screen.init(&mut ctx);

        screen.update(&mut ctx);
        assert_eq!(screen.finish_reason(), NOT_FINISHED);

        ctx.begin_tick(InputFrame::empty().with_pressed(Action::Confirm), ctx.viewport);
        screen.update(&mut ctx);
        assert_eq!(screen.finish_reason(), ENDING_DONE);
        assert_eq!(ctx.sounds.drain().collect::<Vec<_>>(), vec![SoundEvent::PlaySfx(Sfx::Coin)]);
    }

    #[test]
    fn test_draws_prompt() {
        let ctx = GameContext::new(GameConfig::default());
        let screen = EndingScreen::new();
        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        screen.draw(&ctx, &mut renderer);
        assert_eq!(
            renderer.texts(),
            vec!["ENDING SCREEN", "PRESS ENTER or TAP to RETURN to TITLE SCREEN"]
        );
    }
}
