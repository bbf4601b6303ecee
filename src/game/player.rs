//! Player entity
//!
//! Velocity is rebuilt from input every tick (no momentum). The update order
//! is fixed: velocity, then animation state, then position, then frame step.

use macroquad::prelude::{Color, Rect, Vec2, WHITE};

use super::animation::{AnimationState, Animator, FRAME_HEIGHT, FRAME_WIDTH};
use crate::input::MoveIntent;
use crate::render::Renderer;

/// Default speed in distance units per tick
pub const MOVE_SPEED: f32 = 2.0;

/// Hitbox outline size
const HITBOX_SIZE: f32 = 20.0;

const PLAYER_TINT: Color = WHITE;

#[derive(Debug, Clone)]
pub struct Player {
    position: Vec2,
    velocity: Vec2,
    /// Sprite mirrored horizontally (last horizontal motion was leftwards)
    facing_flipped: bool,
    animator: Animator,
    move_speed: f32,
}

impl Player {
    pub fn new(move_speed: f32, anim_interval: u32) -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            facing_flipped: false,
            animator: Animator::new(anim_interval),
            move_speed,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    #[cfg(test)]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    #[cfg(test)]
    pub fn facing_flipped(&self) -> bool {
        self.facing_flipped
    }

    #[cfg(test)]
    pub fn animation_state(&self) -> AnimationState {
        self.animator.state()
    }

    #[cfg(test)]
    pub fn frame_index(&self) -> u32 {
        self.animator.frame_index()
    }

    /// Back to spawn: origin, at rest, idle clip
    pub fn respawn(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.facing_flipped = false;
        self.animator.reset();
    }

    /// Unit direction from input scaled to move speed, so diagonals are
    /// not faster than straight lines
    pub fn set_velocity_from_input(&mut self, intent: MoveIntent) {
        let (x, y) = intent.direction();
        let direction = Vec2::new(x, y);

        self.velocity = if direction.length_squared() > 0.0 {
            direction.normalize() * self.move_speed
        } else {
            Vec2::ZERO
        };
    }

    /// Pick the clip from the current velocity. Facing only changes while
    /// moving, so it survives stopping.
    pub fn update_state(&mut self) {
        if self.velocity != Vec2::ZERO {
            self.animator.set_state(AnimationState::Run);
            self.facing_flipped = self.velocity.x < 0.0;
        } else {
            self.animator.set_state(AnimationState::Idle);
        }
    }

    /// One Euler step, one tick per frame
    pub fn integrate(&mut self) {
        self.position += self.velocity;
    }

    pub fn advance_animation(&mut self) {
        self.animator.tick();
    }

    /// Full per-tick update
    pub fn update(&mut self, intent: MoveIntent) {
        self.set_velocity_from_input(intent);
        self.update_state();
        self.integrate();
        self.advance_animation();
    }

    /// Hitbox centred on the position
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.position.x - HITBOX_SIZE / 2.0,
            self.position.y - HITBOX_SIZE / 2.0,
            HITBOX_SIZE,
            HITBOX_SIZE,
        )
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.rect_lines(self.hitbox(), 1.0, WHITE);

        let top_left = self.position - Vec2::new(FRAME_WIDTH / 2.0, FRAME_HEIGHT / 2.0);
        renderer.sprite(
            self.animator.state().sheet(),
            self.animator.source_rect(),
            top_left,
            self.facing_flipped,
            PLAYER_TINT,
        );
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new(MOVE_SPEED, 2)
    }
}
