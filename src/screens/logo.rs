//! Logo screen
//!
//! Animated intro: a blinking square, a frame drawn side by side, the game's
//! name typed out letter by letter, then everything fades away.

use macroquad::prelude::{Color, Rect, Vec2, BLACK};

use super::{FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::game::GameContext;
use crate::input::Action;
use crate::render::Renderer;

/// Ticks the square blinks before the frame starts growing
const BLINK_TICKS: u32 = 120;
/// Square is visible on even half-periods of this many ticks
const BLINK_HALF_PERIOD: u32 = 15;
/// Outer size of the logo frame
const LOGO_SIZE: f32 = 256.0;
const BAR_THICKNESS: f32 = 16.0;
/// Bar growth per tick
const BAR_GROWTH: f32 = 4.0;
/// Ticks between letters
const LETTER_TICKS: u32 = 12;
/// Ticks the complete logo stays before fading
const HOLD_TICKS: u32 = 60;
const FADE_STEP: f32 = 0.02;
/// Inner fill of the frame
const PAPER: Color = Color::new(0.961, 0.961, 0.961, 1.0);

/// Reason reported when the intro is over
pub const LOGO_DONE: FinishReason = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogoPhase {
    Blink,
    GrowTopLeft,
    GrowBottomRight,
    Letters,
    FadeOut,
}

pub struct LogoScreen {
    phase: LogoPhase,
    frames_counter: u32,
    top_width: f32,
    left_height: f32,
    bottom_width: f32,
    right_height: f32,
    letters: usize,
    alpha: f32,
    finish: FinishReason,
}

impl LogoScreen {
    pub fn new() -> Self {
        Self {
            phase: LogoPhase::Blink,
            frames_counter: 0,
            top_width: BAR_THICKNESS,
            left_height: BAR_THICKNESS,
            bottom_width: BAR_THICKNESS,
            right_height: BAR_THICKNESS,
            letters: 0,
            alpha: 1.0,
            finish: NOT_FINISHED,
        }
    }

    fn advance(&mut self, name_len: usize) {
        match self.phase {
            LogoPhase::Blink => {
                self.frames_counter += 1;
                if self.frames_counter >= BLINK_TICKS {
                    self.phase = LogoPhase::GrowTopLeft;
                    self.frames_counter = 0;
                }
            }
            LogoPhase::GrowTopLeft => {
                self.top_width = (self.top_width + BAR_GROWTH).min(LOGO_SIZE);
                self.left_height = (self.left_height + BAR_GROWTH).min(LOGO_SIZE);
                if self.top_width >= LOGO_SIZE {
                    self.phase = LogoPhase::GrowBottomRight;
                }
            }
            LogoPhase::GrowBottomRight => {
                self.bottom_width = (self.bottom_width + BAR_GROWTH).min(LOGO_SIZE);
                self.right_height = (self.right_height + BAR_GROWTH).min(LOGO_SIZE);
                if self.bottom_width >= LOGO_SIZE {
                    self.phase = LogoPhase::Letters;
                }
            }
            LogoPhase::Letters => {
                self.frames_counter += 1;
                if self.letters < name_len {
                    if self.frames_counter >= LETTER_TICKS {
                        self.letters += 1;
                        self.frames_counter = 0;
                    }
                } else if self.frames_counter > HOLD_TICKS {
                    self.phase = LogoPhase::FadeOut;
                }
            }
            LogoPhase::FadeOut => {
                self.alpha -= FADE_STEP;
                if self.alpha <= 0.0 {
                    self.alpha = 0.0;
                    self.finish = LOGO_DONE;
                }
            }
        }
    }

    fn origin(viewport: Vec2) -> Vec2 {
        viewport / 2.0 - Vec2::splat(LOGO_SIZE / 2.0)
    }
}

impl Default for LogoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for LogoScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Logo
    }

    fn init(&mut self, _ctx: &mut GameContext) {
        *self = Self::new();
    }

    fn update(&mut self, ctx: &mut GameContext) {
        if self.finish != NOT_FINISHED {
            return;
        }
        if ctx.input.pressed(Action::Confirm) {
            log::debug!("Logo skipped");
            self.finish = LOGO_DONE;
            return;
        }
        self.advance(ctx.config.window_title.chars().count());
    }

    fn draw(&self, ctx: &GameContext, renderer: &mut dyn Renderer) {
        let o = Self::origin(renderer.viewport());
        let ink = Color::new(BLACK.r, BLACK.g, BLACK.b, self.alpha);

        let top = Rect::new(o.x, o.y, self.top_width, BAR_THICKNESS);
        let left = Rect::new(o.x, o.y, BAR_THICKNESS, self.left_height);
        let right = Rect::new(o.x + LOGO_SIZE - BAR_THICKNESS, o.y, BAR_THICKNESS, self.right_height);
        let bottom = Rect::new(o.x, o.y + LOGO_SIZE - BAR_THICKNESS, self.bottom_width, BAR_THICKNESS);

        match self.phase {
            LogoPhase::Blink => {
                if (self.frames_counter / BLINK_HALF_PERIOD) % 2 == 0 {
                    renderer.rect(Rect::new(o.x, o.y, BAR_THICKNESS, BAR_THICKNESS), ink);
                }
            }
            LogoPhase::GrowTopLeft => {
                renderer.rect(top, ink);
                renderer.rect(left, ink);
            }
            LogoPhase::GrowBottomRight => {
                renderer.rect(top, ink);
                renderer.rect(left, ink);
                renderer.rect(right, ink);
                renderer.rect(bottom, ink);
            }
            LogoPhase::Letters | LogoPhase::FadeOut => {
                renderer.rect(top, ink);
                renderer.rect(left, ink);
                renderer.rect(right, ink);
                renderer.rect(bottom, ink);

                let inner = Rect::new(
                    o.x + BAR_THICKNESS,
                    o.y + BAR_THICKNESS,
                    LOGO_SIZE - BAR_THICKNESS * 2.0,
                    LOGO_SIZE - BAR_THICKNESS * 2.0,
                );
                renderer.rect(inner, Color::new(PAPER.r, PAPER.g, PAPER.b, self.alpha));

                let shown: String = ctx.config.window_title.chars().take(self.letters).collect();
                if !shown.is_empty() {
                    let pos = Vec2::new(o.x + LOGO_SIZE / 2.0 - 44.0, o.y + LOGO_SIZE - 82.0);
                    renderer.text(&shown, pos, 50.0, ink);
                }
            }
        }
    }

    fn finish_reason(&self) -> FinishReason {
        self.finish
    }
}
