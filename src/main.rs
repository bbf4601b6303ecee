//! hollie: a small 2D game skeleton
//!
//! Logo, title, options, gameplay and ending screens with fades in between.
//! Gameplay is a walking character and a camera that keeps it centred.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod assets;
mod audio;
mod config;
mod game;
mod input;
mod render;
mod screens;

use macroquad::prelude::*;

use app::App;
use assets::Assets;
use audio::AudioSystem;
use config::GameConfig;
use input::InputState;
use render::MacroquadRenderer;

fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.window_title.clone(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: true,
        high_dpi: false,
        ..Default::default()
    }
}

fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    #[cfg(not(target_arch = "wasm32"))]
    if std::env::args().any(|a| a == "--write-config") {
        let path = std::path::Path::new(config::LOCAL_CONFIG_FILE);
        match GameConfig::default().save_to(path) {
            Ok(()) => log::info!("Wrote default config to {}", path.display()),
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    let config = GameConfig::load_or_default();
    log::info!("hollie v{}", VERSION);

    macroquad::Window::from_config(window_conf(&config), run(config));
}

async fn run(config: GameConfig) {
    // Closing the window goes through the loop so screens get unloaded
    prevent_quit();

    let assets = match Assets::load(&config).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut input = InputState::new();
    if input.has_gamepad() {
        log::info!("Gamepad detected");
    }
    let mut audio = AudioSystem::new(&assets, config.music_volume);
    audio.start_music();

    let target_frame_time = config.frame_time();
    let show_fps = config.show_fps;

    let mut app = App::new(config);
    app.init();

    loop {
        // Track frame start time for FPS limiting
        let frame_start = get_time();

        if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
            break;
        }

        let frame = input.poll();
        let mut renderer = MacroquadRenderer::new(&assets);
        app.tick(frame, &mut renderer);
        audio.apply(app.drain_sounds());

        if show_fps {
            draw_text(&format!("{} FPS", get_fps()), 10.0, 30.0, 20.0, DARKGRAY);
        }

        let elapsed = get_time() - frame_start;
        if elapsed < target_frame_time {
            // Native: use sleep for bulk, then spin-wait for precision
            #[cfg(not(target_arch = "wasm32"))]
            {
                let spin_margin = 0.002; // 2ms
                while get_time() - frame_start + spin_margin < target_frame_time {
                    std::thread::sleep(std::time::Duration::from_millis(1));
                }
                while get_time() - frame_start < target_frame_time {
                    std::hint::spin_loop();
                }
            }
            // WASM: the browser paces frames
        }

        next_frame().await;
    }

    app.shutdown();
    audio.stop();
}
