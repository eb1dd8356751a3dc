// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! Styles take the resolved [`ColorScheme`] instead of reading the iced
//! theme, so a button fading in with its section can carry that opacity.

use crate::ui::design_tokens::{border, faded, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Solid pill used for contact links.
pub fn pill(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    let base = faded(colors.heading, opacity);
    let hover = faded(colors.accent, opacity);
    let text_color = faded(colors.background, opacity);
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => hover,
            _ => base,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Navigation rail entry; the active entry gets a wash and strong text.
pub fn nav_link(colors: &ColorScheme, active: bool, opacity: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    let wash = faded(colors.nav_active_wash, opacity);
    let strong = faded(colors.nav_active, opacity);
    let weak = faded(colors.nav_inactive, opacity);
    move |_theme: &Theme, status: button::Status| {
        let hovered = matches!(status, button::Status::Hovered | button::Status::Pressed);
        button::Style {
            background: (active || hovered).then_some(Background::Color(wash)),
            text_color: if active || hovered { strong } else { weak },
            border: Border {
                radius: radius::MD.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Outlined button on the page background (theme toggle, reload).
pub fn outlined(colors: &ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    let surface = colors.nav_background;
    let line = colors.nav_border;
    let text_color = colors.heading;
    let hover_line = colors.accent;
    move |_theme: &Theme, status: button::Status| {
        let (border_color, drop) = match status {
            button::Status::Hovered => (hover_line, shadow::MD),
            button::Status::Pressed => (hover_line, shadow::SM),
            _ => (line, shadow::SM),
        };
        button::Style {
            background: Some(Background::Color(surface)),
            text_color,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            shadow: iced::Shadow {
                color: Color { a: 0.12, ..drop.color },
                ..drop
            },
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    #[test]
    fn pill_uses_accent_on_hover() {
        let colors = ColorScheme::for_mode(ThemeMode::Light);
        let style_fn = pill(&colors, 1.0);
        let idle = style_fn(&Theme::Light, button::Status::Active);
        let hover = style_fn(&Theme::Light, button::Status::Hovered);
        assert_eq!(idle.background, Some(Background::Color(colors.heading)));
        assert_eq!(hover.background, Some(Background::Color(colors.accent)));
    }

    #[test]
    fn pill_fades_with_opacity() {
        let colors = ColorScheme::for_mode(ThemeMode::Dark);
        let style = pill(&colors, 0.5)(&Theme::Dark, button::Status::Active);
        assert!((style.text_color.a - colors.background.a * 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn only_active_nav_link_is_washed() {
        let colors = ColorScheme::for_mode(ThemeMode::Light);
        let active = nav_link(&colors, true, 1.0)(&Theme::Light, button::Status::Active);
        let inactive = nav_link(&colors, false, 1.0)(&Theme::Light, button::Status::Active);
        assert!(active.background.is_some());
        assert!(inactive.background.is_none());
        assert_eq!(active.text_color, colors.nav_active);
        assert_eq!(inactive.text_color, colors.nav_inactive);
    }
}
