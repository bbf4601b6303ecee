//! Game Foundation Module
//!
//! Gameplay building blocks shared by the screens:
//! - Player: input to velocity, movement, sprite animation
//! - FollowCamera: keeps the player centred
//! - GameContext: session state passed to every screen
//! - Events: sound requests from screens to the host

pub mod animation;
pub mod camera;
pub mod context;
pub mod event;
pub mod player;

// Re-export main types
pub use animation::AnimationState;
pub use camera::FollowCamera;
pub use context::GameContext;
pub use event::{Sfx, SoundEvent};
pub use player::Player;
#[cfg(test)]
pub use player::MOVE_SPEED;
