// SPDX-License-Identifier: MPL-2.0
//! One-shot viewport reveal tracking.
//!
//! Each section owns a [`RevealController`]: `Watching` until the section's
//! bounds first intersect the viewport (shrunk by the root margin), then
//! `Triggered` for good. [`RevealRegistry`] holds the observers that are still
//! watching and drops each one as soon as it triggers.

use crate::config::REVEAL_ROOT_MARGIN;
use crate::domain::ui::SectionId;
use iced::Rectangle;
use std::collections::BTreeMap;

/// Observer options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealOptions {
    /// Once triggered, stay revealed and stop observing.
    pub trigger_once: bool,
    /// Margin added to every side of the viewport before testing. Negative
    /// values shrink it.
    pub root_margin: f32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            trigger_once: true,
            root_margin: REVEAL_ROOT_MARGIN,
        }
    }
}

/// Reveal flag for one section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionVisibility {
    pub section: SectionId,
    pub revealed: bool,
}

/// Observer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Watching,
    Triggered,
}

/// Visibility tracker for a single element.
#[derive(Debug, Clone)]
pub struct RevealController {
    section: SectionId,
    options: RevealOptions,
    state: RevealState,
    /// Live intersection, only meaningful when `trigger_once` is false.
    intersecting: bool,
}

impl RevealController {
    #[must_use]
    pub fn new(section: SectionId, options: RevealOptions) -> Self {
        Self {
            section,
            options,
            state: RevealState::Watching,
            intersecting: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> RevealState {
        self.state
    }

    /// True once the observer needs no more geometry updates.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.options.trigger_once && self.state == RevealState::Triggered
    }

    /// Tests `element` against `viewport` and returns the resulting flag.
    pub fn observe(&mut self, element: Rectangle, viewport: Rectangle) -> SectionVisibility {
        if self.is_detached() {
            return self.visibility();
        }

        let hit = intersects(element, shrink(viewport, self.options.root_margin));
        if self.options.trigger_once {
            if hit {
                self.state = RevealState::Triggered;
                log::debug!("Section {} revealed", self.section);
            }
        } else {
            self.intersecting = hit;
            if hit {
                self.state = RevealState::Triggered;
            }
        }
        self.visibility()
    }

    #[must_use]
    pub fn visibility(&self) -> SectionVisibility {
        let revealed = if self.options.trigger_once {
            self.state == RevealState::Triggered
        } else {
            self.intersecting
        };
        SectionVisibility {
            section: self.section,
            revealed,
        }
    }
}

/// Applies a root margin to every side of `rect`.
///
/// A margin that shrinks past zero yields an empty rectangle centred on the
/// original.
#[must_use]
pub fn shrink(rect: Rectangle, margin: f32) -> Rectangle {
    let width = (rect.width + 2.0 * margin).max(0.0);
    let height = (rect.height + 2.0 * margin).max(0.0);
    Rectangle {
        x: rect.x + (rect.width - width) / 2.0,
        y: rect.y + (rect.height - height) / 2.0,
        width,
        height,
    }
}

/// Strict overlap test; touching edges and empty rectangles do not count.
#[must_use]
pub fn intersects(a: Rectangle, b: Rectangle) -> bool {
    if a.width <= 0.0 || a.height <= 0.0 || b.width <= 0.0 || b.height <= 0.0 {
        return false;
    }
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

/// Active observers for every section that has not yet been revealed.
#[derive(Debug, Clone)]
pub struct RevealRegistry {
    watching: BTreeMap<SectionId, RevealController>,
    revealed: BTreeMap<SectionId, bool>,
}

impl RevealRegistry {
    /// Starts watching every given section with default options.
    #[must_use]
    pub fn new(sections: impl IntoIterator<Item = SectionId>) -> Self {
        let mut watching = BTreeMap::new();
        let mut revealed = BTreeMap::new();
        for section in sections {
            watching.insert(
                section,
                RevealController::new(section, RevealOptions::default()),
            );
            revealed.insert(section, false);
        }
        Self { watching, revealed }
    }

    /// Runs one layout/scroll pass and returns the sections revealed by it.
    ///
    /// `bounds` yields each section's rectangle in the same coordinate space
    /// as `viewport`. Triggered observers are removed.
    pub fn observe_all(
        &mut self,
        viewport: Rectangle,
        bounds: impl Fn(SectionId) -> Option<Rectangle>,
    ) -> Vec<SectionId> {
        let mut newly_revealed = Vec::new();
        for (section, controller) in &mut self.watching {
            let Some(rect) = bounds(*section) else {
                continue;
            };
            if controller.observe(rect, viewport).revealed {
                newly_revealed.push(*section);
            }
        }
        for section in &newly_revealed {
            self.watching.remove(section);
            self.revealed.insert(*section, true);
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.get(&section).copied().unwrap_or(false)
    }

    /// Number of observers still attached.
    #[must_use]
    pub fn watching_count(&self) -> usize {
        self.watching.len()
    }

    #[must_use]
    pub fn visibility(&self, section: SectionId) -> SectionVisibility {
        SectionVisibility {
            section,
            revealed: self.is_revealed(section),
        }
    }
}
