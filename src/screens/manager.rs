//! Screen manager
//!
//! Owns every screen, knows which one is current and runs the fade between
//! them. Screens only report a finish reason; the route table turns
//! (screen, reason) into the next screen.

use std::collections::HashMap;

use macroquad::prelude::{Color, Rect, SKYBLUE};

use super::transition::{Transition, TransitionPhase, TransitionStep};
use super::{default_screens, FinishReason, Screen, ScreenId, NOT_FINISHED};
use crate::game::GameContext;
use crate::render::Renderer;

/// Maps a finished screen and its reason code to the next screen
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<(ScreenId, FinishReason), ScreenId>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The game's screen flow
    pub fn standard() -> Self {
        Self::new()
            .with(ScreenId::Logo, 1, ScreenId::Title)
            .with(ScreenId::Title, 1, ScreenId::Options)
            .with(ScreenId::Title, 2, ScreenId::Gameplay)
            .with(ScreenId::Options, 1, ScreenId::Title)
            .with(ScreenId::Gameplay, 1, ScreenId::Ending)
            .with(ScreenId::Ending, 1, ScreenId::Title)
    }

    pub fn with(mut self, from: ScreenId, reason: FinishReason, to: ScreenId) -> Self {
        self.routes.insert((from, reason), to);
        self
    }

    pub fn next(&self, from: ScreenId, reason: FinishReason) -> Option<ScreenId> {
        self.routes.get(&(from, reason)).copied()
    }
}

pub struct ScreenManager {
    screens: Vec<Box<dyn Screen>>,
    routes: RouteTable,
    current: ScreenId,
    transition: Transition,
    /// Fade between screens, or swap instantly
    fade: bool,
}

impl ScreenManager {
    /// Standard screens and routes
    pub fn new(ctx: &GameContext) -> Self {
        Self::with_screens(default_screens(ctx), RouteTable::standard(), ctx.config.fade_transitions)
    }

    pub fn with_screens(screens: Vec<Box<dyn Screen>>, routes: RouteTable, fade: bool) -> Self {
        Self {
            screens,
            routes,
            current: ScreenId::Unknown,
            transition: Transition::new(),
            fade,
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    #[cfg(test)]
    pub fn transition(&self) -> &Transition {
        &self.transition
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_active()
    }

    fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Box<dyn Screen>> {
        self.screens.iter_mut().find(|s| s.id() == id)
    }

    fn screen(&self, id: ScreenId) -> Option<&dyn Screen> {
        self.screens.iter().find(|s| s.id() == id).map(|s| &**s)
    }

    fn init_screen(&mut self, id: ScreenId, ctx: &mut GameContext) {
        match self.screen_mut(id) {
            Some(screen) => {
                log::debug!("Init {} screen", id.label());
                screen.init(ctx);
            }
            None => log::warn!("No {} screen registered", id.label()),
        }
    }

    fn unload_screen(&mut self, id: ScreenId, ctx: &mut GameContext) {
        if let Some(screen) = self.screen_mut(id) {
            log::debug!("Unload {} screen", id.label());
            screen.unload(ctx);
        }
    }

    /// Make `initial` current and initialise it
    pub fn start(&mut self, initial: ScreenId, ctx: &mut GameContext) {
        log::info!("Starting on {} screen", initial.label());
        self.current = initial;
        self.init_screen(initial, ctx);
    }

    /// Switch immediately, no fade
    pub fn change_to(&mut self, to: ScreenId, ctx: &mut GameContext) {
        log::info!("Switching {} -> {}", self.current.label(), to.label());
        let from = self.current;
        self.unload_screen(from, ctx);
        self.init_screen(to, ctx);
        self.current = to;
    }

    /// Ask for a fade to `to`. Ignored while a fade is already running.
    pub fn request_transition(&mut self, to: ScreenId) -> bool {
        self.transition.begin(self.current, to)
    }

    /// One logical tick
    pub fn advance_frame(&mut self, ctx: &mut GameContext) {
        if self.is_transitioning() {
            self.update_transition(ctx);
            return;
        }

        let current = self.current;
        let Some(screen) = self.screen_mut(current) else { return };
        screen.update(ctx);
        let reason = screen.finish_reason();

        if reason == NOT_FINISHED {
            return;
        }

        match self.routes.next(current, reason) {
            Some(next) if self.fade => {
                self.request_transition(next);
            }
            Some(next) => self.change_to(next, ctx),
            None => log::warn!(
                "{} screen finished with unmapped reason {}, staying",
                current.label(),
                reason
            ),
        }
    }

    fn update_transition(&mut self, ctx: &mut GameContext) {
        if let TransitionStep::Swap { from, to } = self.transition.step() {
            // Old screen fully released before the new one initialises
            self.unload_screen(from, ctx);
            self.init_screen(to, ctx);
            self.current = to;
        }
    }

    /// Draw the current screen, plus the fade overlay while transitioning
    pub fn render_frame(&self, ctx: &GameContext, renderer: &mut dyn Renderer) {
        renderer.clear(SKYBLUE);

        if let Some(screen) = self.screen(self.current) {
            screen.draw(ctx, renderer);
        }

        match self.transition.phase() {
            TransitionPhase::Idle => {}
            TransitionPhase::FadingIn | TransitionPhase::FadingOut => {
                let viewport = renderer.viewport();
                renderer.rect(
                    Rect::new(0.0, 0.0, viewport.x, viewport.y),
                    Color::new(0.0, 0.0, 0.0, self.transition.alpha()),
                );
            }
        }
    }

    pub fn shutdown(&mut self, ctx: &mut GameContext) {
        let current = self.current;
        self.unload_screen(current, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::{Action, InputFrame};
    use crate::render::RecordingRenderer;
    use macroquad::prelude::Vec2;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Log = Rc<RefCell<Vec<String>>>;

    /// Screen that logs lifecycle calls and finishes on demand
    struct ScriptedScreen {
        id: ScreenId,
        log: Log,
        finish_after: Option<u32>,
        reason: FinishReason,
        updates: u32,
        finished: FinishReason,
    }

    impl ScriptedScreen {
        fn new(id: ScreenId, log: &Log) -> Self {
            Self { id, log: log.clone(), finish_after: None, reason: 1, updates: 0, finished: 0 }
        }

        fn finishing(mut self, after: u32, reason: FinishReason) -> Self {
            self.finish_after = Some(after);
            self.reason = reason;
            self
        }
    }

    impl Screen for ScriptedScreen {
        fn id(&self) -> ScreenId {
            self.id
        }

        fn init(&mut self, _ctx: &mut GameContext) {
            self.updates = 0;
            self.finished = 0;
            self.log.borrow_mut().push(format!("init {}", self.id.label()));
        }

        fn update(&mut self, _ctx: &mut GameContext) {
            self.updates += 1;
            self.log.borrow_mut().push(format!("update {}", self.id.label()));
            if Some(self.updates) == self.finish_after {
                self.finished = self.reason;
            }
        }

        fn draw(&self, _ctx: &GameContext, renderer: &mut dyn Renderer) {
            renderer.text(self.id.label(), Vec2::ZERO, 10.0, SKYBLUE);
        }

        fn unload(&mut self, _ctx: &mut GameContext) {
            self.log.borrow_mut().push(format!("unload {}", self.id.label()));
        }

        fn finish_reason(&self) -> FinishReason {
            self.finished
        }
    }

    fn ctx() -> GameContext {
        GameContext::new(GameConfig::default())
    }

    fn scripted(log: &Log, title_reason: FinishReason) -> ScreenManager {
        ScreenManager::with_screens(
            vec![
                Box::new(ScriptedScreen::new(ScreenId::Title, log).finishing(1, title_reason)),
                Box::new(ScriptedScreen::new(ScreenId::Gameplay, log)),
                Box::new(ScriptedScreen::new(ScreenId::Options, log)),
            ],
            RouteTable::standard(),
            true,
        )
    }

    #[test]
    fn test_standard_routes() {
        let routes = RouteTable::standard();
        assert_eq!(routes.next(ScreenId::Logo, 1), Some(ScreenId::Title));
        assert_eq!(routes.next(ScreenId::Title, 1), Some(ScreenId::Options));
        assert_eq!(routes.next(ScreenId::Title, 2), Some(ScreenId::Gameplay));
        assert_eq!(routes.next(ScreenId::Options, 1), Some(ScreenId::Title));
        assert_eq!(routes.next(ScreenId::Gameplay, 1), Some(ScreenId::Ending));
        assert_eq!(routes.next(ScreenId::Ending, 1), Some(ScreenId::Title));
        assert_eq!(routes.next(ScreenId::Gameplay, 7), None);
    }

    #[test]
    fn test_title_to_gameplay_scenario() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 2);
        manager.start(ScreenId::Title, &mut ctx);

        // Title finishes on its first update and requests the fade
        manager.advance_frame(&mut ctx);
        assert!(manager.is_transitioning());
        assert_eq!(manager.transition().to(), ScreenId::Gameplay);
        assert_eq!(manager.current(), ScreenId::Title);

        for _ in 0..20 {
            manager.advance_frame(&mut ctx);
        }
        assert_eq!(manager.current(), ScreenId::Title);

        manager.advance_frame(&mut ctx);
        assert_eq!(manager.current(), ScreenId::Gameplay);
        assert_eq!(manager.transition().phase(), TransitionPhase::FadingOut);

        for _ in 0..50 {
            manager.advance_frame(&mut ctx);
        }
        assert!(manager.is_transitioning());
        manager.advance_frame(&mut ctx);
        assert!(!manager.is_transitioning());

        // Screens were suspended for the whole fade
        let updates: Vec<String> =
            log.borrow().iter().filter(|l| l.starts_with("update")).cloned().collect();
        assert_eq!(updates, vec!["update Title"]);

        manager.advance_frame(&mut ctx);
        assert_eq!(log.borrow().last().map(String::as_str), Some("update Gameplay"));
    }

    #[test]
    fn test_unload_before_init_on_swap() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 1);
        manager.start(ScreenId::Title, &mut ctx);

        while manager.current() == ScreenId::Title {
            manager.advance_frame(&mut ctx);
        }

        let log = log.borrow();
        let unload = log.iter().position(|l| l == "unload Title").unwrap();
        let init = log.iter().position(|l| l == "init Options").unwrap();
        assert!(unload < init);
        assert_eq!(init, log.len() - 1);
    }

    #[test]
    fn test_unmapped_reason_is_ignored() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 9);
        manager.start(ScreenId::Title, &mut ctx);

        manager.advance_frame(&mut ctx);
        assert!(!manager.is_transitioning());
        assert_eq!(manager.current(), ScreenId::Title);
    }

    #[test]
    fn test_second_request_is_ignored() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 2);
        manager.start(ScreenId::Title, &mut ctx);
        manager.advance_frame(&mut ctx);

        assert!(!manager.request_transition(ScreenId::Options));
        assert_eq!(manager.transition().to(), ScreenId::Gameplay);
    }

    #[test]
    fn test_instant_change_without_fade() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = ScreenManager::with_screens(
            vec![
                Box::new(ScriptedScreen::new(ScreenId::Title, &log).finishing(1, 2)),
                Box::new(ScriptedScreen::new(ScreenId::Gameplay, &log)),
            ],
            RouteTable::standard(),
            false,
        );
        manager.start(ScreenId::Title, &mut ctx);
        manager.advance_frame(&mut ctx);

        assert!(!manager.is_transitioning());
        assert_eq!(manager.current(), ScreenId::Gameplay);
        assert_eq!(
            *log.borrow(),
            vec!["init Title", "update Title", "unload Title", "init Gameplay"]
        );
    }

    #[test]
    fn test_overlay_drawn_only_while_transitioning() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 2);
        manager.start(ScreenId::Title, &mut ctx);

        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        manager.render_frame(&ctx, &mut renderer);
        assert!(renderer.last_rect().is_none());
        assert_eq!(renderer.texts(), vec!["Title"]);

        manager.advance_frame(&mut ctx);
        manager.advance_frame(&mut ctx);

        let mut renderer = RecordingRenderer::new(800.0, 450.0);
        manager.render_frame(&ctx, &mut renderer);
        let (rect, color) = renderer.last_rect().unwrap();
        assert_eq!(rect, Rect::new(0.0, 0.0, 800.0, 450.0));
        assert_eq!(color.a, manager.transition().alpha());
        assert!(color.a > 0.0);
    }

    #[test]
    fn test_shutdown_unloads_current() {
        let log = Log::default();
        let mut ctx = ctx();
        let mut manager = scripted(&log, 0);
        manager.start(ScreenId::Gameplay, &mut ctx);
        manager.shutdown(&mut ctx);
        assert_eq!(log.borrow().last().map(String::as_str), Some("unload Gameplay"));
    }

    #[test]
    fn test_standard_flow_from_title() {
        let mut ctx = ctx();
        let mut manager = ScreenManager::new(&ctx);
        manager.start(ScreenId::Title, &mut ctx);

        ctx.begin_tick(InputFrame::empty().with_pressed(Action::Confirm), ctx.viewport);
        manager.advance_frame(&mut ctx);
        assert_eq!(manager.transition().to(), ScreenId::Gameplay);

        ctx.begin_tick(InputFrame::empty(), ctx.viewport);
        while manager.is_transitioning() {
            manager.advance_frame(&mut ctx);
        }
        assert_eq!(manager.current(), ScreenId::Gameplay);
    }
}
