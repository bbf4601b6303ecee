//! Input state management
//!
//! Polls keyboard, mouse/touch (macroquad) and gamepad input once per tick,
//! folding them into an `InputFrame` of actions.

use macroquad::prelude::*;
use super::{button, Action, Gamepad, InputFrame};

/// Stick deflection (after deadzone) that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// Unified input state that handles both keyboard/mouse and gamepad
pub struct InputState {
    gamepad: Gamepad,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            gamepad: Gamepad::new(),
        }
    }

    /// Call once per tick. Returns the snapshot the game logic consumes.
    pub fn poll(&mut self) -> InputFrame {
        self.gamepad.poll();

        let mut frame = InputFrame::empty();
        for action in Action::ALL {
            if self.keyboard_pressed(action) || self.gamepad_pressed(action) {
                frame.set_pressed(action);
            } else if self.keyboard_down(action) || self.gamepad_down(action) {
                frame.set_held(action);
            }
        }

        if tap_detected() {
            frame.set_pressed(Action::Confirm);
        }

        frame
    }

    fn keyboard_down(&self, action: Action) -> bool {
        match action {
            Action::MoveUp => is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
            Action::MoveDown => is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
            Action::MoveLeft => is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            Action::MoveRight => is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            Action::Confirm => is_key_down(KeyCode::Enter),
            Action::Pause => is_key_down(KeyCode::P),
            Action::OpenOptions => is_key_down(KeyCode::O),
            Action::VolumeUp => is_key_down(KeyCode::Right),
            Action::VolumeDown => is_key_down(KeyCode::Left),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        match action {
            Action::Confirm => is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter),
            Action::Pause => is_key_pressed(KeyCode::P),
            Action::OpenOptions => is_key_pressed(KeyCode::O),
            Action::VolumeUp => is_key_pressed(KeyCode::Right),
            Action::VolumeDown => is_key_pressed(KeyCode::Left),
            _ => false,
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        if !self.gamepad.has_gamepad() {
            return false;
        }
        let stick = self.gamepad.left_stick();

        match action {
            Action::MoveUp => self.gamepad.is_button_down(button::DPAD_UP) || stick.y < -STICK_THRESHOLD,
            Action::MoveDown => self.gamepad.is_button_down(button::DPAD_DOWN) || stick.y > STICK_THRESHOLD,
            Action::MoveLeft => self.gamepad.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD,
            Action::MoveRight => self.gamepad.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD,
            Action::Confirm => self.gamepad.is_button_down(button::SOUTH),
            Action::Pause => self.gamepad.is_button_down(button::START),
            _ => false,
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        match action {
            Action::Confirm => self.gamepad.is_button_pressed(button::SOUTH),
            Action::Pause => self.gamepad.is_button_pressed(button::START),
            Action::VolumeUp => self.gamepad.is_button_pressed(button::DPAD_RIGHT),
            Action::VolumeDown => self.gamepad.is_button_pressed(button::DPAD_LEFT),
            _ => false,
        }
    }

    /// Check if any gamepad is connected
    pub fn has_gamepad(&self) -> bool {
        self.gamepad.has_gamepad()
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

/// Tap gesture: a left click, or a touch that began this frame
fn tap_detected() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
        || touches().iter().any(|t| t.phase == TouchPhase::Started)
}
