//! Screens and screen flow
//!
//! Fixed set of screens, each with its own private state. Exactly one is
//! current; the manager drives it and fades through black when it reports
//! that it finished.

mod ending;
mod gameplay;
mod logo;
mod manager;
mod options;
mod title;
mod transition;

pub use ending::EndingScreen;
pub use gameplay::GameplayScreen;
pub use logo::LogoScreen;
pub use manager::ScreenManager;
pub use options::OptionsScreen;
pub use title::TitleScreen;
#[cfg(test)]
pub use transition::TransitionPhase;

use serde::{Deserialize, Serialize};

use crate::game::GameContext;
use crate::render::Renderer;

/// The available screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenId {
    /// No screen; only used as the empty end of a transition
    #[default]
    Unknown,
    Logo,
    Title,
    Options,
    Gameplay,
    Ending,
}

impl ScreenId {
    #[cfg(test)]
    pub const ALL: [ScreenId; 5] = [
        ScreenId::Logo,
        ScreenId::Title,
        ScreenId::Options,
        ScreenId::Gameplay,
        ScreenId::Ending,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScreenId::Unknown => "Unknown",
            ScreenId::Logo => "Logo",
            ScreenId::Title => "Title",
            ScreenId::Options => "Options",
            ScreenId::Gameplay => "Gameplay",
            ScreenId::Ending => "Ending",
        }
    }
}

/// Screen-specific exit code. Zero means "keep running".
pub type FinishReason = u32;

/// Reported by a screen that hasn't finished
pub const NOT_FINISHED: FinishReason = 0;

/// Lifecycle shared by all screens.
///
/// `init` runs when the screen becomes current, `unload` when it stops being
/// current. Between them the manager calls `update` once per tick (except
/// during a fade) and `draw` once per frame.
pub trait Screen {
    fn id(&self) -> ScreenId;

    fn init(&mut self, ctx: &mut GameContext);

    fn update(&mut self, ctx: &mut GameContext);

    fn draw(&self, ctx: &GameContext, renderer: &mut dyn Renderer);

    fn unload(&mut self, _ctx: &mut GameContext) {}

    /// `NOT_FINISHED`, or a code the route table maps to the next screen
    fn finish_reason(&self) -> FinishReason;
}

/// Ticks per half-period of blinking "press a key" prompts
const PROMPT_BLINK_TICKS: u32 = 40;

/// Whether a blinking prompt is shown after `frames` ticks on screen
fn prompt_visible(frames: u32) -> bool {
    (frames / PROMPT_BLINK_TICKS) % 2 == 0
}

/// The standard screen set, in `ScreenId::ALL` order
pub fn default_screens(ctx: &GameContext) -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(LogoScreen::new()),
        Box::new(TitleScreen::new()),
        Box::new(OptionsScreen::new()),
        Box::new(GameplayScreen::new(&ctx.config)),
        Box::new(EndingScreen::new()),
    ]
}
