// SPDX-License-Identifier: MPL-2.0
//! Portfolio sections.
//!
//! Every section is a [`SectionPresenter`]: a pure function of the current
//! theme, layout class and reveal flag (plus the static catalog) that returns
//! a layout tree and the motions animating it. A [`SectionSlot`] owns one
//! presenter, subscribes to the theme and layout broadcasts and re-renders
//! only when one of its inputs changes.
//!
//! Section heights are fixed per layout class, so the page geometry used for
//! reveal and navigation is known without measuring widgets.

pub mod about;
pub mod catalog;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod layout;
pub mod projects;
pub mod skills;

use crate::config::NAV_ACTIVE_THRESHOLD;
use crate::domain::ui::{LayoutClass, SectionId};
use crate::ui::motion::{suppress_for_layout, MotionDescriptor, MotionKey, MotionState};
use crate::ui::theming::ThemeMode;
use catalog::{resolve_asset, Catalog};
use iced::Rectangle;
use layout::Node;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::watch;

/// Inputs of one section render. Nothing else may influence the output.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: ThemeMode,
    pub layout: LayoutClass,
    pub revealed: bool,
    pub content: &'a Catalog,
    /// Base directory catalog image paths resolve against.
    pub assets: &'a Path,
    /// Per-mount seed for jittered decoration.
    pub seed: u64,
}

impl RenderContext<'_> {
    /// Resolves a catalog image path.
    #[must_use]
    pub fn asset(&self, relative: &str) -> PathBuf {
        resolve_asset(self.assets, relative)
    }

    #[must_use]
    pub fn compact(&self) -> bool {
        self.layout.compact
    }
}

/// Output of one section render.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionRender {
    pub layout: Node,
    pub motions: Vec<MotionDescriptor>,
}

/// A portfolio section.
pub trait SectionPresenter: fmt::Debug {
    fn id(&self) -> SectionId;

    /// Height the section occupies on the page.
    fn min_height(&self, layout: LayoutClass, viewport_height: f32) -> f32;

    fn render(&self, ctx: &RenderContext<'_>) -> SectionRender;
}

/// Deterministic generator for a section's jittered decoration.
///
/// The same seed and section always give the same sequence, so re-renders
/// (theme toggle, resize) keep every random offset in place.
#[must_use]
pub fn jitter_rng(seed: u64, section: SectionId) -> StdRng {
    StdRng::seed_from_u64(seed ^ ((section.index() as u64 + 1) << 32))
}

/// Fade in while sliding `distance` pixels up, easing out.
#[must_use]
pub fn fade_up(key: MotionKey, distance: f32, duration: Duration) -> MotionDescriptor {
    MotionDescriptor::entrance(
        key,
        MotionState::HIDDEN.offset(0.0, distance),
        MotionState::REST,
        duration,
    )
}

/// Element name of the whole-section entrance.
pub const REVEAL_KEY: &str = "reveal";

/// Whole-section entrance: every section but the hero starts hidden 50px low
/// and fades up once revealed.
const REVEAL_DISTANCE: f32 = 50.0;
const REVEAL_DURATION: Duration = Duration::from_millis(600);

/// Wraps a section's layout in its reveal entrance.
///
/// The hero is on screen at mount and is left as rendered.
#[must_use]
pub fn with_reveal_entrance(section: SectionId, render: SectionRender) -> SectionRender {
    if section == SectionId::Hero {
        return render;
    }
    let key = MotionKey::section(section, REVEAL_KEY);
    let mut motions = Vec::with_capacity(render.motions.len() + 1);
    motions.push(fade_up(key, REVEAL_DISTANCE, REVEAL_DURATION));
    motions.extend(render.motions);
    SectionRender {
        layout: Node::animated(key, render.layout),
        motions,
    }
}

/// One presenter per section, in page order.
#[must_use]
pub fn all_presenters() -> Vec<Box<dyn SectionPresenter>> {
    vec![
        Box::new(hero::HeroSection),
        Box::new(about::AboutSection),
        Box::new(skills::SkillsSection),
        Box::new(education::EducationSection),
        Box::new(experience::ExperienceSection),
        Box::new(projects::ProjectsSection),
        Box::new(contact::ContactSection),
    ]
}

// =============================================================================
// SectionSlot
// =============================================================================

/// Mounted section with its input subscriptions and render cache.
#[derive(Debug)]
pub struct SectionSlot {
    presenter: Box<dyn SectionPresenter>,
    theme: watch::Receiver<ThemeMode>,
    layout: watch::Receiver<LayoutClass>,
    revealed: bool,
    cached: Option<SectionRender>,
}

impl SectionSlot {
    #[must_use]
    pub fn new(
        presenter: Box<dyn SectionPresenter>,
        theme: watch::Receiver<ThemeMode>,
        layout: watch::Receiver<LayoutClass>,
    ) -> Self {
        Self {
            presenter,
            theme,
            layout,
            revealed: false,
            cached: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> SectionId {
        self.presenter.id()
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Marks the section revealed. The flag never goes back to false.
    pub fn reveal(&mut self) -> bool {
        if self.revealed {
            return false;
        }
        self.revealed = true;
        self.cached = None;
        true
    }

    /// Layout class last seen by this slot.
    #[must_use]
    pub fn layout(&self) -> LayoutClass {
        *self.layout.borrow()
    }

    #[must_use]
    pub fn height(&self, viewport_height: f32) -> f32 {
        self.presenter.min_height(self.layout(), viewport_height)
    }

    /// Re-renders if the theme, layout or reveal flag changed since the last
    /// render. Returns true when a new render was produced.
    pub fn refresh(&mut self, content: &Catalog, assets: &Path, seed: u64) -> bool {
        let theme_changed = self.theme.has_changed().unwrap_or(false);
        let layout_changed = self.layout.has_changed().unwrap_or(false);
        if self.cached.is_some() && !theme_changed && !layout_changed {
            return false;
        }

        let ctx = RenderContext {
            theme: *self.theme.borrow_and_update(),
            layout: *self.layout.borrow_and_update(),
            revealed: self.revealed,
            content,
            assets,
            seed,
        };
        let mut render = with_reveal_entrance(self.id(), self.presenter.render(&ctx));
        suppress_for_layout(&mut render.motions, ctx.layout);
        self.cached = Some(render);
        true
    }

    /// Last render, if any.
    #[must_use]
    pub fn rendered(&self) -> Option<&SectionRender> {
        self.cached.as_ref()
    }
}

// =============================================================================
// Page geometry
// =============================================================================

/// Vertical placement of the sections on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageGeometry {
    tops: Vec<f32>,
    heights: Vec<f32>,
}

impl PageGeometry {
    /// Builds the geometry from section heights in page order.
    #[must_use]
    pub fn from_heights(heights: impl IntoIterator<Item = f32>) -> Self {
        let heights: Vec<f32> = heights.into_iter().map(|h| h.max(0.0)).collect();
        let tops = heights
            .iter()
            .scan(0.0, |top, height| {
                let current = *top;
                *top += height;
                Some(current)
            })
            .collect();
        Self { tops, heights }
    }

    #[must_use]
    pub fn top(&self, section: SectionId) -> f32 {
        self.tops.get(section.index()).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.heights.iter().sum()
    }

    /// Section rectangle in page coordinates.
    #[must_use]
    pub fn bounds(&self, section: SectionId, width: f32) -> Option<Rectangle> {
        let index = section.index();
        Some(Rectangle {
            x: 0.0,
            y: *self.tops.get(index)?,
            width,
            height: *self.heights.get(index)?,
        })
    }

    /// Section highlighted in the navigation rail at scroll offset
    /// `offset_y`.
    ///
    /// Finds the first section whose top is more than
    /// [`NAV_ACTIVE_THRESHOLD`] below the viewport top; the active one is
    /// the section before it. When every top is above the threshold the last
    /// section is active.
    #[must_use]
    pub fn active_section(&self, offset_y: f32) -> SectionId {
        let first_below = self
            .tops
            .iter()
            .position(|top| top - offset_y > NAV_ACTIVE_THRESHOLD);
        let index = match first_below {
            None => self.tops.len().saturating_sub(1),
            Some(index) => index.saturating_sub(1),
        };
        SectionId::ALL
            .get(index)
            .copied()
            .unwrap_or(SectionId::Hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, render_context};
    use crate::ui::motion::{Animator, MotionClass, MotionScope};
    use std::time::Instant;

    fn geometry() -> PageGeometry {
        PageGeometry::from_heights([800.0, 900.0, 900.0, 1200.0, 2000.0, 900.0, 800.0])
    }

    #[test]
    fn tops_are_prefix_sums() {
        let page = geometry();
        assert_abs_diff_eq!(page.top(SectionId::Hero), 0.0);
        assert_abs_diff_eq!(page.top(SectionId::About), 800.0);
        assert_abs_diff_eq!(page.top(SectionId::Skills), 1700.0);
        assert_abs_diff_eq!(page.total_height(), 7500.0);
        let bounds = page.bounds(SectionId::Skills, 1180.0).expect("bounds");
        assert_abs_diff_eq!(bounds.height, 900.0);
    }

    #[test]
    fn active_section_follows_threshold() {
        let page = geometry();
        assert_eq!(page.active_section(0.0), SectionId::Hero);
        // About's top is 61px below the viewport top: still hero.
        assert_eq!(page.active_section(739.0), SectionId::Hero);
        // Exactly 60px below counts as reached.
        assert_eq!(page.active_section(740.0), SectionId::About);
        assert_eq!(page.active_section(1_000_000.0), SectionId::Contact);
    }

    #[test]
    fn every_section_has_a_presenter_in_order() {
        let ids: Vec<SectionId> = all_presenters().iter().map(|p| p.id()).collect();
        assert_eq!(ids, SectionId::ALL.to_vec());
    }

    #[test]
    fn presenters_render_in_every_mode() {
        let catalog = Catalog::embedded().0;
        for presenter in all_presenters() {
            for theme in [ThemeMode::Light, ThemeMode::Dark] {
                for compact in [false, true] {
                    for revealed in [false, true] {
                        let ctx = render_context(&catalog, theme, compact, revealed);
                        let render = presenter.render(&ctx);
                        assert!(
                            !render.layout.texts().is_empty(),
                            "{} rendered no text",
                            presenter.id()
                        );
                        for motion in &render.motions {
                            assert!(motion.duration() > std::time::Duration::ZERO);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn presenters_survive_empty_catalog() {
        let catalog = Catalog::default();
        for presenter in all_presenters() {
            let ctx = render_context(&catalog, ThemeMode::Dark, true, true);
            let _ = presenter.render(&ctx);
        }
    }

    #[test]
    fn presenter_output_is_deterministic() {
        let catalog = Catalog::embedded().0;
        for presenter in all_presenters() {
            let ctx = render_context(&catalog, ThemeMode::Light, false, true);
            assert_eq!(presenter.render(&ctx), presenter.render(&ctx));
        }
    }

    #[test]
    fn theme_toggle_changes_no_motion() {
        let catalog = Catalog::embedded().0;
        for presenter in all_presenters() {
            let light = presenter.render(&render_context(&catalog, ThemeMode::Light, false, true));
            let dark = presenter.render(&render_context(&catalog, ThemeMode::Dark, false, true));
            assert_eq!(light.motions, dark.motions, "{}", presenter.id());
        }
    }

    #[test]
    fn slot_rerenders_only_on_input_change() {
        let catalog = Catalog::embedded().0;
        let assets = Path::new("assets/public");
        let (theme_tx, theme_rx) = watch::channel(ThemeMode::Light);
        let (layout_tx, layout_rx) = watch::channel(LayoutClass::WIDE);
        let mut slot = SectionSlot::new(Box::new(about::AboutSection), theme_rx, layout_rx);

        assert!(slot.refresh(&catalog, assets, 1));
        assert!(!slot.refresh(&catalog, assets, 1));

        theme_tx.send_replace(ThemeMode::Dark);
        assert!(slot.refresh(&catalog, assets, 1));
        assert!(!slot.refresh(&catalog, assets, 1));

        layout_tx.send_replace(LayoutClass::COMPACT);
        assert!(slot.refresh(&catalog, assets, 1));
        let render = slot.rendered().expect("rendered");
        assert!(render.motions.iter().all(|m| !m.is_pointer_tilt()));

        assert!(slot.reveal());
        assert!(!slot.reveal());
        assert!(slot.refresh(&catalog, assets, 1));
        assert!(slot.is_revealed());
    }

    #[test]
    fn unrevealed_sections_stay_hidden() {
        let catalog = Catalog::embedded().0;
        let assets = Path::new("assets/public");
        let start = Instant::now();
        let later = start + Duration::from_secs(5);

        for presenter in all_presenters() {
            let id = presenter.id();
            let (_theme_tx, theme_rx) = watch::channel(ThemeMode::Light);
            let (_layout_tx, layout_rx) = watch::channel(LayoutClass::WIDE);
            let mut slot = SectionSlot::new(presenter, theme_rx, layout_rx);
            slot.refresh(&catalog, assets, 1);
            let render = slot.rendered().expect("rendered");

            let mut animator = Animator::new();
            animator.sync(MotionScope::Section(id), &render.motions, false, start);
            let key = MotionKey::section(id, REVEAL_KEY);

            if id == SectionId::Hero {
                assert!(animator.sample(key, later).is_none());
                continue;
            }
            assert!(matches!(&render.layout, Node::Motion { key: wrapper, .. } if *wrapper == key));
            let hidden = animator.sample(key, later).expect("reveal track");
            assert_abs_diff_eq!(hidden.opacity, 0.0);
            assert_abs_diff_eq!(hidden.y, REVEAL_DISTANCE);

            slot.reveal();
            slot.refresh(&catalog, assets, 1);
            let render = slot.rendered().expect("rendered");
            animator.sync(MotionScope::Section(id), &render.motions, true, start);
            let shown = animator.sample(key, later).expect("reveal track");
            assert_abs_diff_eq!(shown.opacity, 1.0);
            assert_abs_diff_eq!(shown.y, 0.0);
        }
    }

    #[test]
    fn wide_slot_keeps_tilt() {
        let catalog = Catalog::embedded().0;
        let (_theme_tx, theme_rx) = watch::channel(ThemeMode::Light);
        let (_layout_tx, layout_rx) = watch::channel(LayoutClass::WIDE);
        let mut slot = SectionSlot::new(Box::new(about::AboutSection), theme_rx, layout_rx);
        slot.refresh(&catalog, Path::new("assets/public"), 1);
        let render = slot.rendered().expect("rendered");
        assert!(render
            .motions
            .iter()
            .any(|m| m.class() == MotionClass::Interaction(crate::ui::motion::Trigger::Tilt)));
    }
}
