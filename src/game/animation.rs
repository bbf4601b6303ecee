//! Sprite strip animation
//!
//! Each clip is a horizontal strip of fixed-size frames. The animator counts
//! ticks and steps to the next frame every `interval + 1` ticks, which keeps
//! playback speed independent of the logical tick rate.

use macroquad::prelude::Rect;

use crate::render::SpriteSheet;

/// Width of one frame in every player strip (pixels)
pub const FRAME_WIDTH: f32 = 96.0;
/// Height of one frame in every player strip (pixels)
pub const FRAME_HEIGHT: f32 = 64.0;

/// Player animation clips
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    /// Loaded and drawable, but no movement logic selects it yet
    Jump,
}

impl AnimationState {
    pub const ALL: [AnimationState; 3] = [AnimationState::Idle, AnimationState::Run, AnimationState::Jump];

    /// Number of frames in this clip's strip
    pub fn frame_count(&self) -> u32 {
        match self {
            AnimationState::Idle => 9,
            AnimationState::Run => 8,
            AnimationState::Jump => 9,
        }
    }

    pub fn sheet(&self) -> SpriteSheet {
        match self {
            AnimationState::Idle => SpriteSheet::PlayerIdle,
            AnimationState::Run => SpriteSheet::PlayerRun,
            AnimationState::Jump => SpriteSheet::PlayerJump,
        }
    }
}

/// Frame stepping for the active clip
#[derive(Debug, Clone)]
pub struct Animator {
    state: AnimationState,
    /// Ticks since the last frame step
    frame_counter: u32,
    frame_index: u32,
    /// Step once the counter exceeds this many ticks
    interval: u32,
}

impl Animator {
    pub fn new(interval: u32) -> Self {
        Self {
            state: AnimationState::Idle,
            frame_counter: 0,
            frame_index: 0,
            interval,
        }
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    #[cfg(test)]
    pub fn frame_index(&self) -> u32 {
        self.frame_index
    }

    #[cfg(test)]
    pub fn frame_counter(&self) -> u32 {
        self.frame_counter
    }

    /// Select a clip. The frame position carries over unless it is past the
    /// end of the new clip.
    pub fn set_state(&mut self, state: AnimationState) {
        if state == self.state {
            return;
        }
        self.state = state;
        if self.frame_index >= state.frame_count() {
            self.frame_index = 0;
        }
    }

    /// Advance by one tick. Returns true when the frame changed.
    /// Wraps when the index reaches the clip length (not past it), so the
    /// cell after the last frame of a strip is never drawn.
    pub fn tick(&mut self) -> bool {
        self.frame_counter += 1;

        if self.frame_counter <= self.interval {
            return false;
        }

        self.frame_counter = 0;
        self.frame_index += 1;
        if self.frame_index >= self.state.frame_count() {
            self.frame_index = 0;
        }
        true
    }

    /// Source rectangle of the current frame within its strip
    pub fn source_rect(&self) -> Rect {
        Rect::new(self.frame_index as f32 * FRAME_WIDTH, 0.0, FRAME_WIDTH, FRAME_HEIGHT)
    }

    pub fn reset(&mut self) {
        self.state = AnimationState::Idle;
        self.frame_counter = 0;
        self.frame_index = 0;
    }
}
