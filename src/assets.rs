//! Startup asset loading
//!
//! Everything the game draws or plays is loaded once before the first tick.
//! Any missing file is fatal; the caller logs the error and exits.

use std::collections::HashMap;
use std::path::Path;

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::{load_texture, load_ttf_font, FilterMode, Font, Texture2D};

use crate::config::GameConfig;
use crate::game::AnimationState;
use crate::render::SpriteSheet;

pub const DISPLAY_FONT: &str = "mecha.ttf";
pub const MUSIC_TRACK: &str = "ambient.ogg";
pub const COIN_SOUND: &str = "coin.wav";

/// Sprite strip file under the resources directory
pub fn sprite_path(sheet: SpriteSheet) -> &'static str {
    match sheet {
        SpriteSheet::PlayerIdle => "characters/human/idle/base_idle_strip9.png",
        SpriteSheet::PlayerRun => "characters/human/run/base_run_strip8.png",
        SpriteSheet::PlayerJump => "characters/human/jump/base_jump_strip9.png",
    }
}

pub struct Assets {
    pub font: Font,
    pub music: Sound,
    pub coin: Sound,
    sprites: HashMap<SpriteSheet, Texture2D>,
}

impl Assets {
    pub async fn load(config: &GameConfig) -> Result<Self, String> {
        let font_path = config.resource(DISPLAY_FONT);
        let font = load_ttf_font(&path_str(&font_path)?)
            .await
            .map_err(|e| format!("Failed to load font {}: {}", font_path.display(), e))?;

        let music = load_audio(&config.resource(MUSIC_TRACK)).await?;
        let coin = load_audio(&config.resource(COIN_SOUND)).await?;

        let mut sprites = HashMap::new();
        for state in AnimationState::ALL {
            let sheet = state.sheet();
            let path = config.resource(sprite_path(sheet));
            let texture = load_texture(&path_str(&path)?)
                .await
                .map_err(|e| format!("Failed to load sprite {}: {}", path.display(), e))?;
            // Pixel art: no smoothing when zoomed
            texture.set_filter(FilterMode::Nearest);
            sprites.insert(sheet, texture);
        }

        log::info!(
            "Loaded {} sprite sheets, font and 2 sounds from {}",
            sprites.len(),
            config.resources_dir.display()
        );

        Ok(Self { font, music, coin, sprites })
    }

    pub fn sprite(&self, sheet: SpriteSheet) -> Option<&Texture2D> {
        self.sprites.get(&sheet)
    }
}

async fn load_audio(path: &Path) -> Result<Sound, String> {
    load_sound(&path_str(path)?)
        .await
        .map_err(|e| format!("Failed to load sound {}: {}", path.display(), e))
}

fn path_str(path: &Path) -> Result<String, String> {
    path.to_str()
        .map(str::to_string)
        .ok_or_else(|| format!("Non UTF-8 asset path: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_clip_has_a_strip() {
        let config = GameConfig::default();
        for state in AnimationState::ALL {
            let path = config.resource(sprite_path(state.sheet()));
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default().to_string();
            assert!(name.ends_with(&format!("strip{}.png", state.frame_count())), "{}", name);
            assert!(path.starts_with("resources"));
        }
    }
}
