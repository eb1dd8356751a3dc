// SPDX-License-Identifier: MPL-2.0
//! Mounted application state.
//!
//! A [`Session`] exists once boot succeeded. It owns the theme store, the
//! viewport classifier, the section slots with their reveal observers and the
//! animator, and applies every input (ticks, frames, scroll, resize, pointer)
//! in a fixed order: layout class first, then section renders, then reveal.
//!
//! Nothing here touches the iced runtime, so the whole flow can be driven
//! from tests.

use super::persisted_state::Storage;
use super::Screen;
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::motion::{Animator, InteractionTracker, MotionKey, MotionScope};
use crate::ui::navbar;
use crate::ui::render::Scene;
use crate::ui::sections::catalog::Catalog;
use crate::ui::sections::{all_presenters, PageGeometry, SectionSlot};
use crate::ui::splash::{SplashSequencer, TickOutcome};
use crate::ui::state::{RevealRegistry, ThemeStore, ViewportClassifier, ViewportState};
use crate::ui::theme_toggle;
use crate::ui::theming::{AppTheme, ThemeMode};
use crate::ui::widgets::orbit_scene::SceneClock;
use crate::ui::widgets::PointerEvent;
use iced::Size;
use std::fmt;
use std::path::PathBuf;
use std::time::Instant;

/// Everything a session is built from.
#[derive(Debug)]
pub struct SessionOptions {
    pub storage: Box<dyn Storage>,
    pub window: Size,
    pub catalog: Catalog,
    /// Base directory for catalog image paths.
    pub assets: PathBuf,
    /// Per-mount seed for jittered decoration.
    pub seed: u64,
}

pub struct Session {
    screen: Screen,
    theme_store: ThemeStore,
    theme: AppTheme,
    classifier: ViewportClassifier,
    viewport: ViewportState,
    catalog: Catalog,
    assets: PathBuf,
    seed: u64,
    slots: Vec<SectionSlot>,
    reveal: RevealRegistry,
    animator: Animator,
    interactions: InteractionTracker,
    splash: SplashSequencer,
    mounted_at: Instant,
    now: Instant,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("screen", &self.screen)
            .field("theme", &self.theme.mode)
            .field("layout", &self.classifier.class())
            .field("offset_y", &self.viewport.offset_y)
            .finish()
    }
}

impl Session {
    /// Builds the session and starts the splash.
    ///
    /// The layout class is computed from the initial window width before
    /// anything renders.
    #[must_use]
    pub fn new(options: SessionOptions, now: Instant) -> Self {
        let theme_store = ThemeStore::load(options.storage);
        let theme = AppTheme::new(theme_store.get());
        let classifier = ViewportClassifier::new(options.window.width);
        let slots = all_presenters()
            .into_iter()
            .map(|presenter| {
                SectionSlot::new(presenter, theme_store.subscribe(), classifier.subscribe())
            })
            .collect();

        let mut session = Self {
            screen: Screen::Splash,
            theme_store,
            theme,
            classifier,
            viewport: ViewportState::new(options.window),
            catalog: options.catalog,
            assets: options.assets,
            seed: options.seed,
            slots,
            reveal: RevealRegistry::new(SectionId::ALL),
            animator: Animator::new(),
            interactions: InteractionTracker::new(),
            splash: SplashSequencer::new(),
            mounted_at: now,
            now,
        };
        session.sync_splash(now);
        log::debug!(
            "session mounted: theme={} compact={}",
            session.theme.mode,
            session.layout().compact
        );
        session
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.mode
    }

    #[must_use]
    pub fn theme(&self) -> &AppTheme {
        &self.theme
    }

    #[must_use]
    pub fn layout(&self) -> LayoutClass {
        self.classifier.class()
    }

    #[must_use]
    pub fn splash(&self) -> &SplashSequencer {
        &self.splash
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn slots(&self) -> &[SectionSlot] {
        &self.slots
    }

    #[must_use]
    pub fn slot(&self, section: SectionId) -> Option<&SectionSlot> {
        self.slots.iter().find(|slot| slot.id() == section)
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.reveal.is_revealed(section)
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    #[must_use]
    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    /// Section placement for the current viewport.
    #[must_use]
    pub fn geometry(&self) -> PageGeometry {
        let viewport_height = self.viewport.size.height;
        PageGeometry::from_heights(self.slots.iter().map(|slot| slot.height(viewport_height)))
    }

    /// Section highlighted in the navigation rail.
    #[must_use]
    pub fn active_section(&self) -> SectionId {
        self.geometry().active_section(self.viewport.offset_y)
    }

    /// Relative scroll offset that puts `section` at the viewport top.
    #[must_use]
    pub fn scroll_target(&self, section: SectionId) -> f32 {
        let geometry = self.geometry();
        let range = geometry.total_height() - self.viewport.size.height;
        if range <= 0.0 {
            return 0.0;
        }
        (geometry.top(section) / range).clamp(0.0, 1.0)
    }

    /// Render inputs for the current frame.
    #[must_use]
    pub fn scene(&self) -> Scene<'_> {
        let clock = SceneClock {
            elapsed: self
                .now
                .saturating_duration_since(self.mounted_at)
                .as_secs_f32(),
            scroll: self
                .viewport
                .scroll_fraction(self.geometry().total_height()),
        };
        Scene {
            animator: &self.animator,
            theme: &self.theme,
            now: self.now,
            clock,
        }
    }

    /// Whether frames are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating(self.now)
    }

    // -------------------------------------------------------------------------
    // Splash
    // -------------------------------------------------------------------------

    fn sync_splash(&mut self, now: Instant) {
        let motions = self.splash.motions(self.layout());
        self.animator.sync(MotionScope::Splash, &motions, true, now);
    }

    /// One splash tick.
    pub fn splash_tick(&mut self, now: Instant) -> TickOutcome {
        let outcome = self.splash.tick();
        if outcome == TickOutcome::Finished {
            self.sync_splash(now);
        }
        outcome
    }

    /// Grace delay elapsed; swaps in the portfolio. Returns true the one time
    /// the swap happens.
    pub fn finish_splash(&mut self, now: Instant) -> bool {
        if !self.splash.grace_elapsed() {
            return false;
        }
        self.animator.retire_scope(MotionScope::Splash);
        self.interactions.clear();
        self.screen = Screen::Portfolio;
        self.mounted_at = now;
        self.now = now;

        let mut chrome = navbar::motions();
        chrome.extend(theme_toggle::motions());
        self.animator
            .sync(MotionScope::Navigation, &chrome, true, now);
        self.refresh(now);
        log::debug!("splash complete, portfolio shown");
        true
    }

    /// Unmounts the splash early.
    pub fn cancel_splash(&mut self) {
        self.splash.cancel();
        self.animator.retire_scope(MotionScope::Splash);
        self.interactions.clear();
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    /// Animation frame.
    pub fn frame(&mut self, now: Instant) {
        self.animator.advance(now);
        self.now = now;
    }

    /// Flips and persists the theme; subscribed sections re-render.
    pub fn toggle_theme(&mut self, now: Instant) -> ThemeMode {
        self.now = now;
        let mode = self.theme_store.toggle();
        self.theme = AppTheme::new(mode);
        if self.screen == Screen::Portfolio {
            self.refresh(now);
        }
        mode
    }

    /// Window resized. The classifier updates before any section renders.
    pub fn resize(&mut self, size: Size, now: Instant) {
        self.now = now;
        self.classifier.on_resize(size.width);
        self.viewport.resize(size);
        match self.screen {
            Screen::Splash => self.sync_splash(now),
            Screen::Portfolio => self.refresh(now),
        }
    }

    /// Page scrolled to `offset_y`.
    pub fn scroll(&mut self, offset_y: f32, now: Instant) {
        self.now = now;
        self.viewport.scroll_to(offset_y);
        if self.screen == Screen::Portfolio {
            self.observe(now);
        }
    }

    /// Pointer activity over an interactive element.
    pub fn pointer(&mut self, key: MotionKey, event: PointerEvent, now: Instant) {
        self.now = now;
        let change = match event {
            PointerEvent::Entered => self.interactions.enter(key),
            PointerEvent::Exited => {
                self.animator.point_at(key, None);
                self.interactions.exit(key)
            }
            PointerEvent::Pressed => self.interactions.press(key),
            PointerEvent::Released => self.interactions.release(key),
            PointerEvent::Moved { x, y } => {
                if self.animator.accepts_tilt(key) {
                    self.animator.point_at(key, Some((x, y)));
                }
                None
            }
        };
        if let Some(state) = change {
            self.animator.set_pointer(key, state, now);
        }
    }

    // -------------------------------------------------------------------------
    // Sections
    // -------------------------------------------------------------------------

    /// Re-renders stale sections and re-runs reveal.
    fn refresh(&mut self, now: Instant) {
        self.render_sections(now);
        self.observe(now);
    }

    fn render_sections(&mut self, now: Instant) {
        for slot in &mut self.slots {
            if !slot.refresh(&self.catalog, &self.assets, self.seed) {
                continue;
            }
            if let Some(render) = slot.rendered() {
                self.animator.sync(
                    MotionScope::Section(slot.id()),
                    &render.motions,
                    slot.is_revealed(),
                    now,
                );
            }
        }
    }

    fn observe(&mut self, now: Instant) {
        let geometry = self.geometry();
        let width = self.viewport.size.width;
        let revealed = self
            .reveal
            .observe_all(self.viewport.visible_rect(), |section| {
                geometry.bounds(section, width)
            });
        if revealed.is_empty() {
            return;
        }
        for section in revealed {
            if let Some(slot) = self.slots.iter_mut().find(|slot| slot.id() == section) {
                slot.reveal();
            }
            log::debug!("section {section} revealed");
        }
        self.render_sections(now);
    }
}
