//! Audio playback
//!
//! Game logic never touches the audio device. Screens queue `SoundEvent`s on
//! the context and the host hands them here once per tick.

use macroquad::audio::{play_sound, play_sound_once, set_sound_volume, stop_sound, PlaySoundParams};

use crate::assets::Assets;
use crate::game::{Sfx, SoundEvent};

pub struct AudioSystem<'a> {
    assets: &'a Assets,
    music_volume: f32,
    playing: bool,
}

impl<'a> AudioSystem<'a> {
    pub fn new(assets: &'a Assets, music_volume: f32) -> Self {
        Self {
            assets,
            music_volume: music_volume.clamp(0.0, 1.0),
            playing: false,
        }
    }

    /// Start the looping background track
    pub fn start_music(&mut self) {
        play_sound(
            &self.assets.music,
            PlaySoundParams {
                looped: true,
                volume: self.music_volume,
            },
        );
        self.playing = true;
        log::info!("Music started at volume {:.2}", self.music_volume);
    }

    pub fn apply<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = SoundEvent>,
    {
        for event in events {
            match event {
                SoundEvent::PlaySfx(Sfx::Coin) => play_sound_once(&self.assets.coin),
                SoundEvent::SetMusicVolume(volume) => {
                    self.music_volume = volume.clamp(0.0, 1.0);
                    if self.playing {
                        set_sound_volume(&self.assets.music, self.music_volume);
                    }
                    log::debug!("Music volume {:.2}", self.music_volume);
                }
            }
        }
    }

    pub fn stop(&mut self) {
        if self.playing {
            stop_sound(&self.assets.music);
            self.playing = false;
        }
    }
}
