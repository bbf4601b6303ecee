//! Shared per-session state handed to every screen
//!
//! Replaces process-wide globals: config, this tick's input, viewport size,
//! the outgoing sound queue and the music volume all live here and are
//! passed by reference into screen methods.

use macroquad::prelude::Vec2;

use super::event::{EventQueue, Sfx, SoundEvent};
use crate::config::GameConfig;
use crate::input::InputFrame;

pub struct GameContext {
    pub config: GameConfig,

    /// Input snapshot for the current tick
    pub input: InputFrame,

    /// Viewport size in pixels, refreshed every tick
    pub viewport: Vec2,

    /// Sound requests, drained by the host after each tick
    pub sounds: EventQueue<SoundEvent>,

    /// Current background music volume (0.0 - 1.0)
    music_volume: f32,

    /// Ticks since start
    pub tick: u64,
}

impl GameContext {
    pub fn new(config: GameConfig) -> Self {
        let viewport = Vec2::new(config.screen_width as f32, config.screen_height as f32);
        let music_volume = config.music_volume;
        Self {
            config,
            input: InputFrame::empty(),
            viewport,
            sounds: EventQueue::new(),
            music_volume,
            tick: 0,
        }
    }

    pub fn play_sfx(&mut self, sfx: Sfx) {
        self.sounds.send(SoundEvent::PlaySfx(sfx));
    }

    pub fn music_volume(&self) -> f32 {
        self.music_volume
    }

    /// Clamp to [0, 1] and queue the change for the audio backend
    pub fn set_music_volume(&mut self, volume: f32) {
        let volume = volume.clamp(0.0, 1.0);
        if (volume - self.music_volume).abs() < f32::EPSILON {
            return;
        }
        self.music_volume = volume;
        self.sounds.send(SoundEvent::SetMusicVolume(volume));
    }

    /// Begin a tick with fresh input and viewport
    pub fn begin_tick(&mut self, input: InputFrame, viewport: Vec2) {
        self.input = input;
        self.viewport = viewport;
        self.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_is_clamped_and_queued() {
        let mut ctx = GameContext::new(GameConfig::default());
        ctx.set_music_volume(1.5);
        assert_eq!(ctx.music_volume(), 1.0);
        assert!(ctx.sounds.is_empty(), "unchanged volume should not be queued");

        ctx.set_music_volume(0.4);
        assert_eq!(ctx.music_volume(), 0.4);
        assert_eq!(ctx.sounds.drain().collect::<Vec<_>>(), vec![SoundEvent::SetMusicVolume(0.4)]);
    }

    #[test]
    fn test_viewport_starts_at_window_size() {
        let ctx = GameContext::new(GameConfig::default());
        assert_eq!(ctx.viewport, Vec2::new(800.0, 450.0));
    }
}
