// SPDX-License-Identifier: MPL-2.0
//! Light/dark toggle button pinned to the top-right corner.

use crate::ui::design_tokens::{spacing, typography};
use crate::ui::motion::{MotionDescriptor, MotionKey, MotionScope, MotionState, Trigger};
use crate::ui::render::{frame_transform, Scene};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::{motion_frame, pointer_area, PointerEvent};
use iced::widget::{button, text};
use iced::{font, Element, Font};

const TOGGLE: MotionKey = MotionKey::new(MotionScope::Navigation, "theme-toggle");

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Toggle,
    Pointer { key: MotionKey, event: PointerEvent },
}

/// Button caption; names the mode the button switches to.
#[must_use]
pub fn label(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "🌙 Dark Mode",
        ThemeMode::Dark => "🌞 Light Mode",
    }
}

#[must_use]
pub fn motions() -> Vec<MotionDescriptor> {
    vec![
        MotionDescriptor::interaction(TOGGLE, Trigger::Hover, MotionState::REST.scaled(1.05)),
        MotionDescriptor::interaction(TOGGLE, Trigger::Press, MotionState::REST.scaled(0.95)),
    ]
}

pub fn view(scene: &Scene<'_>) -> Element<'static, Message> {
    let state = scene.animator.sample_or_rest(TOGGLE, scene.now);
    let (offset, scale) = frame_transform(&state);

    let toggle = button(text(label(scene.theme.mode)).size(typography::BODY).font(Font {
        weight: font::Weight::Semibold,
        ..Font::default()
    }))
    .padding([spacing::SM, spacing::LG - 4.0])
    .on_press(Message::Toggle)
    .style(styles::button::outlined(&scene.theme.colors));

    pointer_area(motion_frame(toggle).offset(offset).scale(scale), |event| {
        Message::Pointer {
            key: TOGGLE,
            event,
        }
    })
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_the_other_mode() {
        assert_eq!(label(ThemeMode::Light), "🌙 Dark Mode");
        assert_eq!(label(ThemeMode::Dark), "🌞 Light Mode");
    }

    #[test]
    fn hover_grows_and_press_shrinks() {
        let motions = motions();
        assert_eq!(motions.len(), 2);
        assert!(motions.iter().all(|m| m.key() == TOGGLE));
    }
}
