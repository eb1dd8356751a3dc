// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! [`ViewportClassifier`] turns window widths into a [`LayoutClass`] and
//! broadcasts changes; [`ViewportState`] tracks the scrollable page's size
//! and offset for reveal and navigation.

use crate::domain::ui::{classify, LayoutClass};
use iced::{Rectangle, Size};
use tokio::sync::watch;

/// Recomputes the layout class on every resize.
#[derive(Debug)]
pub struct ViewportClassifier {
    width: f32,
    sender: watch::Sender<LayoutClass>,
}

impl ViewportClassifier {
    /// Classifies once at mount so the first paint already uses the right
    /// layout.
    #[must_use]
    pub fn new(initial_width: f32) -> Self {
        let (sender, _) = watch::channel(classify(initial_width));
        Self {
            width: initial_width,
            sender,
        }
    }

    /// Current classification.
    #[must_use]
    pub fn class(&self) -> LayoutClass {
        *self.sender.borrow()
    }

    /// Last width seen.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Handles a resize. Subscribers are only notified when the class flips.
    ///
    /// Returns true if the class changed.
    pub fn on_resize(&mut self, width: f32) -> bool {
        self.width = width;
        let next = classify(width);
        let changed = self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
        if changed {
            log::debug!("Layout class changed: compact={}", next.compact);
        }
        changed
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<LayoutClass> {
        self.sender.subscribe()
    }
}

/// Size and vertical scroll position of the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    /// Visible area size.
    pub size: Size,
    /// Vertical scroll offset in pixels.
    pub offset_y: f32,
}

impl ViewportState {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self { size, offset_y: 0.0 }
    }

    /// Visible region in page coordinates.
    #[must_use]
    pub fn visible_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: self.offset_y,
            width: self.size.width,
            height: self.size.height,
        }
    }

    /// Records a new scroll offset. Negative offsets (overscroll) clamp to 0.
    pub fn scroll_to(&mut self, offset_y: f32) {
        self.offset_y = offset_y.max(0.0);
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Scroll position as a fraction of the scrollable range.
    #[must_use]
    pub fn scroll_fraction(&self, content_height: f32) -> f32 {
        let range = content_height - self.size.height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.offset_y / range).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn classifier_classifies_at_mount() {
        assert!(ViewportClassifier::new(400.0).class().compact);
        assert!(!ViewportClassifier::new(1024.0).class().compact);
    }

    #[test]
    fn resize_notifies_only_on_class_change() {
        let mut classifier = ViewportClassifier::new(1024.0);
        let mut rx = classifier.subscribe();

        assert!(!classifier.on_resize(900.0));
        assert!(!rx.has_changed().expect("sender alive"));

        assert!(classifier.on_resize(767.0));
        assert!(rx.has_changed().expect("sender alive"));
        assert!(rx.borrow_and_update().compact);

        assert!(classifier.on_resize(768.0));
        assert!(!rx.borrow_and_update().compact);
    }

    #[test]
    fn settled_class_matches_direct_classification() {
        let mut classifier = ViewportClassifier::new(1280.0);
        for width in [1000.0, 500.0, 800.0, 700.0, 768.0, 767.0] {
            classifier.on_resize(width);
        }
        assert_eq!(classifier.class(), classify(767.0));
        assert_abs_diff_eq!(classifier.width(), 767.0);
    }

    #[test]
    fn visible_rect_follows_scroll() {
        let mut viewport = ViewportState::new(Size::new(1024.0, 768.0));
        viewport.scroll_to(500.0);
        let rect = viewport.visible_rect();
        assert_abs_diff_eq!(rect.y, 500.0);
        assert_abs_diff_eq!(rect.height, 768.0);

        viewport.scroll_to(-20.0);
        assert_abs_diff_eq!(viewport.offset_y, 0.0);
    }

    #[test]
    fn scroll_fraction_handles_short_content() {
        let mut viewport = ViewportState::new(Size::new(800.0, 600.0));
        assert_abs_diff_eq!(viewport.scroll_fraction(400.0), 0.0);
        viewport.scroll_to(700.0);
        assert_abs_diff_eq!(viewport.scroll_fraction(2000.0), 0.5);
    }
}
