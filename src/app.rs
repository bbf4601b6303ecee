//! Application state
//!
//! What the host drives: one `init`, a `tick` per frame until the window
//! closes, one `shutdown`. Owns the session context and the screen manager.

use macroquad::prelude::Vec2;

use crate::config::GameConfig;
use crate::game::{GameContext, SoundEvent};
use crate::input::InputFrame;
use crate::render::Renderer;
use crate::screens::{ScreenId, ScreenManager};

pub struct App {
    pub ctx: GameContext,
    pub screens: ScreenManager,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let ctx = GameContext::new(config);
        let screens = ScreenManager::new(&ctx);
        Self { ctx, screens }
    }

    /// Enter the configured initial screen
    pub fn init(&mut self) {
        let initial = self.ctx.config.initial_screen;
        let initial = if initial == ScreenId::Unknown {
            log::warn!("initial_screen is Unknown, using Gameplay");
            ScreenId::Gameplay
        } else {
            initial
        };
        self.screens.start(initial, &mut self.ctx);
    }

    pub fn update(&mut self, input: InputFrame, viewport: Vec2) {
        self.ctx.begin_tick(input, viewport);
        self.screens.advance_frame(&mut self.ctx);
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        self.screens.render_frame(&self.ctx, renderer);
    }

    /// Update then draw
    pub fn tick(&mut self, input: InputFrame, renderer: &mut dyn Renderer) {
        let viewport = renderer.viewport();
        self.update(input, viewport);
        self.draw(renderer);
    }

    /// Sound requests queued during the last tick
    pub fn drain_sounds(&mut self) -> Vec<SoundEvent> {
        self.ctx.sounds.drain().collect()
    }

    pub fn shutdown(&mut self) {
        self.screens.shutdown(&mut self.ctx);
        log::info!("Shut down after {} ticks", self.ctx.tick);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::{FRAME_HEIGHT, FRAME_WIDTH};
    use crate::game::{AnimationState, Sfx, MOVE_SPEED};
    use crate::input::Action;
    use crate::render::{DrawCall, RecordingRenderer, SpriteSheet};
    use crate::screens::TransitionPhase;

    /// Player sprite as drawn this frame: (sheet, frame index, position, flipped)
    fn drawn_player(renderer: &RecordingRenderer) -> (SpriteSheet, u32, Vec2, bool) {
        renderer
            .calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Sprite { sheet, source, pos, flip_x } => Some((
                    *sheet,
                    (source.x / FRAME_WIDTH) as u32,
                    *pos + Vec2::new(FRAME_WIDTH / 2.0, FRAME_HEIGHT / 2.0),
                    *flip_x,
                )),
                _ => None,
            })
            .expect("player sprite drawn")
    }

    fn gameplay_app() -> App {
        let mut app = App::new(GameConfig::default());
        app.init();
        assert_eq!(app.screens.current(), ScreenId::Gameplay);
        app
    }

    fn tick(app: &mut App, input: InputFrame) -> RecordingRenderer {
        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        app.tick(input, &mut renderer);
        renderer
    }

    #[test]
    fn test_player_at_rest_stays_idle() {
        let mut app = gameplay_app();
        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        for _ in 0..10 {
            renderer = tick(&mut app, InputFrame::empty());
        }
        let (sheet, _, pos, _) = drawn_player(&renderer);
        assert_eq!(sheet, AnimationState::Idle.sheet());
        assert_eq!(pos, Vec2::ZERO);
    }

    #[test]
    fn test_holding_right_advances_one_frame() {
        let mut app = gameplay_app();
        let ticks = app.ctx.config.anim_interval() + 1;
        let right = InputFrame::empty().with_held(Action::MoveRight);

        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        for _ in 0..ticks {
            renderer = tick(&mut app, right.clone());
        }
        let (sheet, frame, pos, flipped) = drawn_player(&renderer);
        assert_eq!(sheet, SpriteSheet::PlayerRun);
        assert_eq!(frame, 1);
        assert_eq!(pos.x, MOVE_SPEED * ticks as f32);
        assert!(!flipped);
    }

    #[test]
    fn test_facing_survives_stopping() {
        let mut app = gameplay_app();
        for _ in 0..3 {
            tick(&mut app, InputFrame::empty().with_held(Action::MoveLeft));
        }
        let renderer = tick(&mut app, InputFrame::empty());
        let (sheet, _, _, flipped) = drawn_player(&renderer);
        assert_eq!(sheet, SpriteSheet::PlayerIdle);
        assert!(flipped);
    }

    #[test]
    fn test_title_to_gameplay_fade() {
        let mut app = App::new(GameConfig {
            initial_screen: ScreenId::Title,
            ..GameConfig::default()
        });
        app.init();

        tick(&mut app, InputFrame::empty().with_pressed(Action::Confirm));
        assert!(app.screens.is_transitioning());
        assert_eq!(app.drain_sounds(), vec![SoundEvent::PlaySfx(Sfx::Coin)]);

        let mut ticks = 0;
        while app.screens.current() == ScreenId::Title {
            tick(&mut app, InputFrame::empty());
            ticks += 1;
        }
        assert_eq!(ticks, 21);
        assert_eq!(app.screens.transition().phase(), TransitionPhase::FadingOut);

        ticks = 0;
        while app.screens.is_transitioning() {
            tick(&mut app, InputFrame::empty());
            ticks += 1;
        }
        assert_eq!(ticks, 51);
        assert_eq!(app.screens.current(), ScreenId::Gameplay);
    }

    #[test]
    fn test_gameplay_confirm_reaches_ending() {
        let mut app = App::new(GameConfig {
            fade_transitions: false,
            ..GameConfig::default()
        });
        app.init();

        tick(&mut app, InputFrame::empty().with_pressed(Action::Confirm));
        assert_eq!(app.screens.current(), ScreenId::Ending);

        tick(&mut app, InputFrame::empty().with_pressed(Action::Confirm));
        assert_eq!(app.screens.current(), ScreenId::Title);
    }

    #[test]
    fn test_unknown_initial_screen_falls_back() {
        let mut app = App::new(GameConfig {
            initial_screen: ScreenId::Unknown,
            ..GameConfig::default()
        });
        app.init();
        assert_eq!(app.screens.current(), ScreenId::Gameplay);
        app.shutdown();
    }
}
