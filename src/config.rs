//! Game configuration
//!
//! Loaded once at startup from a RON file. Every field is optional, missing
//! fields fall back to the defaults below.
//!
//! Lookup order:
//! 1. `./hollie.ron`
//! 2. `<config dir>/hollie/config.ron` (native only)
//! 3. built-in defaults

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::screens::ScreenId;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "hollie.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window_title: String,
    pub screen_width: i32,
    pub screen_height: i32,

    /// Logical ticks per second (one update + one draw per tick)
    pub target_fps: u32,
    /// Sprite animation playback rate
    pub anim_fps: u32,

    /// Screen selected when the game starts
    pub initial_screen: ScreenId,
    /// Fade through black between screens (false = instant swap)
    pub fade_transitions: bool,

    pub camera_zoom: f32,
    /// Player speed in distance units per tick
    pub move_speed: f32,

    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    pub show_fps: bool,

    /// Root directory for fonts, sounds and sprite strips
    pub resources_dir: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window_title: "hollie".to_string(),
            screen_width: 800,
            screen_height: 450,
            target_fps: 60,
            anim_fps: 24,
            initial_screen: ScreenId::Gameplay,
            fade_transitions: true,
            camera_zoom: 2.0,
            move_speed: 2.0,
            music_volume: 1.0,
            show_fps: true,
            resources_dir: PathBuf::from("resources"),
        }
    }
}

impl GameConfig {
    /// Ticks between animation frames, `target_fps / anim_fps` (at least 1)
    pub fn anim_interval(&self) -> u32 {
        (self.target_fps / self.anim_fps.max(1)).max(1)
    }

    /// Target duration of one tick in seconds
    pub fn frame_time(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }

    /// Resolve a path relative to the resources directory
    pub fn resource(&self, relative: &str) -> PathBuf {
        self.resources_dir.join(relative)
    }

    /// Load a config from a RON file
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

        Self::from_ron(&contents)
    }

    /// Parse a config from a RON string
    pub fn from_ron(contents: &str) -> Result<Self, String> {
        let mut config: GameConfig =
            ron::from_str(contents).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.sanitize();
        Ok(config)
    }

    /// Save a config to a file in RON format
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());

        let contents = ron::ser::to_string_pretty(self, pretty)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        fs::write(path, contents).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
    }

    /// Candidate config files, highest priority first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("hollie").join("config.ron"));
        }

        paths
    }

    /// Load the first config file found on the search path, or defaults
    pub fn load_or_default() -> Self {
        Self::load_first(&Self::search_paths())
    }

    /// Load the first of `paths` that exists and parses.
    /// A broken file is reported and skipped, never fatal.
    pub fn load_first(paths: &[PathBuf]) -> Self {
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load_from(path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("{}, ignoring", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Clamp values that would break the tick loop
    fn sanitize(&mut self) {
        if self.target_fps == 0 {
            log::warn!("target_fps must be positive, using 60");
            self.target_fps = 60;
        }
        if self.anim_fps == 0 {
            log::warn!("anim_fps must be positive, using 24");
            self.anim_fps = 24;
        }
        if self.camera_zoom <= 0.0 {
            log::warn!("camera_zoom must be positive, using 1.0");
            self.camera_zoom = 1.0;
        }
        if self.initial_screen == ScreenId::Unknown {
            log::warn!("initial_screen cannot be Unknown, using Gameplay");
            self.initial_screen = ScreenId::Gameplay;
        }
        self.music_volume = self.music_volume.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_match_original_tuning() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 800);
        assert_eq!(config.screen_height, 450);
        assert_eq!(config.anim_interval(), 2);
        assert_eq!(config.initial_screen, ScreenId::Gameplay);
        assert_eq!(config.camera_zoom, 2.0);
        assert_eq!(config.move_speed, 2.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = GameConfig::from_ron("(initial_screen: Title, show_fps: false)").unwrap();
        assert_eq!(config.initial_screen, ScreenId::Title);
        assert!(!config.show_fps);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.window_title, "hollie");
    }

    #[test]
    fn test_invalid_values_are_sanitized() {
        let config =
            GameConfig::from_ron("(target_fps: 0, camera_zoom: -1.0, music_volume: 3.0, initial_screen: Unknown)")
                .unwrap();
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.camera_zoom, 1.0);
        assert_eq!(config.music_volume, 1.0);
        assert_eq!(config.initial_screen, ScreenId::Gameplay);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = GameConfig::from_ron("(target_fps: \"fast\")").unwrap_err();
        assert!(err.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_save_and_load_config() {
        let mut config = GameConfig::default();
        config.camera_zoom = 1.0;
        config.fade_transitions = false;

        let temp_file = NamedTempFile::new().unwrap();
        config.save_to(temp_file.path()).unwrap();

        let loaded = GameConfig::load_from(temp_file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = GameConfig::load_from(&dir.path().join("nope.ron")).unwrap_err();
        assert!(err.starts_with("Failed to read"));
    }

    #[test]
    fn test_first_existing_file_wins() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.ron");
        let second = dir.path().join("second.ron");
        GameConfig {
            window_title: "first".to_string(),
            ..GameConfig::default()
        }
        .save_to(&first)
        .unwrap();
        GameConfig {
            window_title: "second".to_string(),
            ..GameConfig::default()
        }
        .save_to(&second)
        .unwrap();

        let paths = vec![dir.path().join("missing.ron"), first, second];
        assert_eq!(GameConfig::load_first(&paths).window_title, "first");
    }

    #[test]
    fn test_broken_file_falls_through() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.ron");
        let good = dir.path().join("good.ron");
        fs::write(&broken, "(target_fps: \"fast\"").unwrap();
        GameConfig {
            initial_screen: ScreenId::Title,
            ..GameConfig::default()
        }
        .save_to(&good)
        .unwrap();

        let config = GameConfig::load_first(&[broken, good]);
        assert_eq!(config.initial_screen, ScreenId::Title);
    }

    #[test]
    fn test_no_files_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("a.ron"), dir.path().join("b.ron")];
        assert_eq!(GameConfig::load_first(&paths), GameConfig::default());
        assert_eq!(GameConfig::load_first(&[]), GameConfig::default());
    }

    #[test]
    fn test_anim_interval_never_zero() {
        let mut config = GameConfig::default();
        config.target_fps = 30;
        config.anim_fps = 60;
        assert_eq!(config.anim_interval(), 1);
    }
}
