//! Fade transition between two screens
//!
//! Idle -> FadingIn (to black) -> FadingOut (reveal) -> Idle.
//!
//! The old screen is swapped for the new one at the moment the overlay is
//! fully opaque. Fading in is faster than fading out.

use super::ScreenId;

/// Alpha added per tick while fading to black
pub const FADE_IN_STEP: f32 = 0.05;
/// Alpha removed per tick while revealing the new screen
pub const FADE_OUT_STEP: f32 = 0.02;
/// Fade-in completes once alpha is past this. Comparing against 1.0 could
/// stall a frame when the float sum lands just under it.
pub const FADE_IN_GUARD: f32 = 1.01;
/// Fade-out completes once alpha is below this
pub const FADE_OUT_GUARD: f32 = -0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    FadingIn,
    FadingOut,
}

/// What the manager has to do after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// Nothing in flight
    Idle,
    /// Still fading, no screen change
    Fading,
    /// Overlay just became opaque: unload `from`, init `to`, make `to` current
    Swap { from: ScreenId, to: ScreenId },
    /// Fade-out finished, back to idle
    Finished,
}

#[derive(Debug, Clone)]
pub struct Transition {
    active: bool,
    fading_out: bool,
    alpha: f32,
    from: ScreenId,
    to: ScreenId,
}

impl Transition {
    pub fn new() -> Self {
        Self {
            active: false,
            fading_out: false,
            alpha: 0.0,
            from: ScreenId::Unknown,
            to: ScreenId::Unknown,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Overlay opacity, 0.0 - 1.0
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[cfg(test)]
    pub fn from(&self) -> ScreenId {
        self.from
    }

    #[cfg(test)]
    pub fn to(&self) -> ScreenId {
        self.to
    }

    pub fn phase(&self) -> TransitionPhase {
        match (self.active, self.fading_out) {
            (false, _) => TransitionPhase::Idle,
            (true, false) => TransitionPhase::FadingIn,
            (true, true) => TransitionPhase::FadingOut,
        }
    }

    /// Start fading from `from` to `to`. Refused while another transition
    /// is in flight.
    pub fn begin(&mut self, from: ScreenId, to: ScreenId) -> bool {
        if self.active {
            log::warn!(
                "Transition to {} requested while {} -> {} is running, ignoring",
                to.label(),
                self.from.label(),
                self.to.label()
            );
            return false;
        }

        log::info!("Transition {} -> {}", from.label(), to.label());
        self.active = true;
        self.fading_out = false;
        self.alpha = 0.0;
        self.from = from;
        self.to = to;
        true
    }

    /// Advance by one tick
    pub fn step(&mut self) -> TransitionStep {
        if !self.active {
            return TransitionStep::Idle;
        }

        if !self.fading_out {
            self.alpha += FADE_IN_STEP;

            if self.alpha > FADE_IN_GUARD {
                self.alpha = 1.0;
                self.fading_out = true;
                return TransitionStep::Swap { from: self.from, to: self.to };
            }
        } else {
            self.alpha -= FADE_OUT_STEP;

            if self.alpha < FADE_OUT_GUARD {
                log::debug!("Transition into {} finished", self.to.label());
                *self = Self::new();
                return TransitionStep::Finished;
            }
        }

        TransitionStep::Fading
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::new()
    }
}
