//! Game action definitions
//!
//! Screens never look at raw keys. The backend folds keyboard, mouse/touch
//! and gamepad state into actions once per tick.

use std::collections::HashSet;

/// All possible game actions that can be triggered by input
///
/// Keyboard / gamepad mappings:
/// - WASD or arrows / d-pad, left stick = Move*
/// - Enter, tap or click / South (A) = Confirm
/// - P / Start = Pause
/// - O = OpenOptions
/// - Left / Right arrows = VolumeDown / VolumeUp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement (held)
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Menus
    Confirm,
    Pause,
    OpenOptions,

    // Options screen
    VolumeUp,
    VolumeDown,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::MoveUp,
        Action::MoveDown,
        Action::MoveLeft,
        Action::MoveRight,
        Action::Confirm,
        Action::Pause,
        Action::OpenOptions,
        Action::VolumeUp,
        Action::VolumeDown,
    ];
}

/// Snapshot of input for a single tick.
///
/// `held` is level-triggered (key is down), `pressed` is edge-triggered
/// (went down this tick).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    held: HashSet<Action>,
    pressed: HashSet<Action>,
}

impl InputFrame {
    /// No input at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a held action (builder)
    #[cfg(test)]
    pub fn with_held(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    /// Add a just-pressed action (builder). A pressed action is also held.
    #[cfg(test)]
    pub fn with_pressed(mut self, action: Action) -> Self {
        self.pressed.insert(action);
        self.held.insert(action);
        self
    }

    pub fn set_held(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn set_pressed(&mut self, action: Action) {
        self.pressed.insert(action);
        self.held.insert(action);
    }

    /// Check if action is currently held down
    pub fn down(&self, action: Action) -> bool {
        self.held.contains(&action)
    }

    /// Check if action was just pressed this tick
    pub fn pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }
}

/// Directional movement intent, one flag per direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl MoveIntent {
    pub fn from_input(input: &InputFrame) -> Self {
        Self {
            left: input.down(Action::MoveLeft),
            right: input.down(Action::MoveRight),
            up: input.down(Action::MoveUp),
            down: input.down(Action::MoveDown),
        }
    }

    /// Raw direction `(right - left, down - up)`, not normalized
    pub fn direction(&self) -> (f32, f32) {
        let axis = |neg: bool, pos: bool| (pos as i32 - neg as i32) as f32;
        (axis(self.left, self.right), axis(self.up, self.down))
    }
}
