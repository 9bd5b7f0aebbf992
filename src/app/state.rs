//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling).
//! The engine is owned here and only ever touched from the main loop.

use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::core::{OverscrollEngine, PullConfig};
use crate::ui::easing::OffsetEase;

use super::document::Document;
use super::scroll::PageScroll;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Page,
    SettingsMenu,
}

/// Top-level application state.
pub struct AppState {
    pub document: Document,
    pub scroll: PageScroll,
    /// Pull engine for the current mount.
    pub engine: OverscrollEngine,
    /// Time origin for the current engine mount.
    pub epoch: Instant,
    /// Content offset actually drawn (eased toward the engine's output).
    pub displayed: OffsetEase,
    pub config: AppConfig,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// An optional status message shown in the bottom bar.
    pub status_message: Option<String>,
    pub active_view: ActiveView,
    pub settings_selected: usize,
    /// Row of the last drag sample, for native drag-scrolling.
    pub drag_row: Option<u16>,
}

impl AppState {
    pub fn new(document: Document, config: AppConfig, pull: PullConfig) -> Self {
        let scroll = PageScroll::new(document.len(), config.px_per_row);
        Self {
            document,
            scroll,
            engine: OverscrollEngine::mount(pull),
            epoch: Instant::now(),
            displayed: OffsetEase::default(),
            config,
            should_quit: false,
            status_message: None,
            active_view: ActiveView::default(),
            settings_selected: 0,
            drag_row: None,
        }
    }

    /// Engine time: elapsed since this mount.
    pub fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    /// Tear down the current engine and mount a fresh one.  Configuration is
    /// immutable per mount, so this is the only way to change it.
    pub fn remount(&mut self, pull: PullConfig) {
        self.engine.unmount();
        self.engine = OverscrollEngine::mount(pull);
        self.epoch = Instant::now();
        self.displayed = OffsetEase::default();
        self.drag_row = None;
    }

    /// Fire due timers.  Called at the top of every loop iteration.
    pub fn advance(&mut self) {
        let now = self.now();
        self.engine.advance(now);
    }

    /// One animation frame: engine decay, then display easing.
    pub fn on_frame(&mut self) {
        let now = self.now();
        self.engine.advance(now);
        self.engine.on_frame(now);
        let surface = self.engine.surface();
        self.displayed.tick(surface.offset, surface.transition);
    }

    /// True while anything on screen is still moving.
    pub fn needs_frames(&self) -> bool {
        self.engine.wants_frame() || self.displayed.is_animating(self.engine.surface().offset)
    }
}
