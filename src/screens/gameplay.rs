//! Gameplay screen
//!
//! Hosts the player and a camera that keeps it centred. `P` pauses the
//! simulation; Confirm ends the run.

use macroquad::prelude::{Color, Rect, Vec2, DARKGRAY, WHITE};

use super::{FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::config::GameConfig;
use crate::game::{FollowCamera, GameContext, Player};
use crate::input::{Action, MoveIntent};
use crate::render::Renderer;

/// Leave for the ending screen
pub const GAMEPLAY_DONE: FinishReason = 1;

/// Reference grid drawn over the world from the spawn point
const GRID_CELLS: i32 = 10;
const GRID_CELL_SIZE: f32 = 16.0;

const PAUSE_OVERLAY: Color = Color::new(0.0, 0.0, 0.0, 0.75);
const PAUSED_TEXT_SIZE: f32 = 20.0;

pub struct GameplayScreen {
    player: Player,
    camera: FollowCamera,
    paused: bool,
    frames_counter: u32,
    finish: FinishReason,
}

impl GameplayScreen {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::new(config.move_speed, config.anim_interval()),
            camera: FollowCamera::new(config.camera_zoom),
            paused: false,
            frames_counter: 0,
            finish: NOT_FINISHED,
        }
    }

    #[cfg(test)]
    pub fn player(&self) -> &Player {
        &self.player
    }

    #[cfg(test)]
    pub fn camera(&self) -> &FollowCamera {
        &self.camera
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    fn draw_grid(renderer: &mut dyn Renderer) {
        for y in 0..GRID_CELLS {
            for x in 0..GRID_CELLS {
                let cell = Rect::new(
                    x as f32 * GRID_CELL_SIZE,
                    y as f32 * GRID_CELL_SIZE,
                    GRID_CELL_SIZE,
                    GRID_CELL_SIZE,
                );
                renderer.rect_lines(cell, 1.0, DARKGRAY);
            }
        }
    }
}

impl Screen for GameplayScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Gameplay
    }

    fn init(&mut self, ctx: &mut GameContext) {
        self.player.respawn(Vec2::ZERO);
        self.camera.follow(self.player.position(), ctx.viewport);
        self.paused = false;
        self.frames_counter = 0;
        self.finish = NOT_FINISHED;
    }

    fn update(&mut self, ctx: &mut GameContext) {
        if ctx.input.pressed(Action::Pause) {
            self.paused = !self.paused;
            log::debug!("Gameplay {}", if self.paused { "paused" } else { "resumed" });
        }
        if self.paused {
            return;
        }

        self.frames_counter += 1;
        self.player.update(MoveIntent::from_input(&ctx.input));
        // Camera reads the post-move position
        self.camera.follow(self.player.position(), ctx.viewport);

        if ctx.input.pressed(Action::Confirm) {
            self.finish = GAMEPLAY_DONE;
        }
    }

    fn draw(&self, _ctx: &GameContext, renderer: &mut dyn Renderer) {
        renderer.begin_world(&self.camera);
        self.player.draw(renderer);
        Self::draw_grid(renderer);
        renderer.end_world();

        if self.paused {
            let viewport = renderer.viewport();
            renderer.rect(Rect::new(0.0, 0.0, viewport.x, viewport.y), PAUSE_OVERLAY);
            renderer.text(
                "PAUSED",
                Vec2::new(viewport.x / 2.0 - 60.0, viewport.y / 2.0 - 30.0),
                PAUSED_TEXT_SIZE,
                WHITE,
            );
        }
    }

    fn unload(&mut self, _ctx: &mut GameContext) {
        log::debug!("Gameplay unloaded after {} ticks", self.frames_counter);
    }

    fn finish_reason(&self) -> FinishReason {
        self.finish
    }
}
