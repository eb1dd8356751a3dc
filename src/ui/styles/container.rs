// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, faded, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Page background.
pub fn page(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.background;
    let text_color = colors.body;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..Default::default()
    }
}

/// Rounded card surface, faded by `opacity`; `glow` in `0.0..=1.0` adds an
/// accent halo.
pub fn card(
    background: Color,
    border_color: Color,
    corner: f32,
    opacity: f32,
    glow: (Color, f32),
) -> impl Fn(&Theme) -> container::Style {
    let (glow_color, strength) = glow;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(background, opacity))),
        border: Border {
            color: faded(border_color, opacity),
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: iced::Shadow {
            color: faded(glow_color, strength * opacity),
            blur_radius: 30.0 * strength,
            ..shadow::NONE
        },
        ..Default::default()
    }
}

/// Fixed navigation rail.
pub fn nav_rail(colors: &ColorScheme, opacity: f32) -> impl Fn(&Theme) -> container::Style {
    let background = faded(colors.nav_background, opacity);
    let line = faded(colors.nav_border, opacity);
    let drop = colors.shadow;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: line,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: iced::Shadow {
            color: drop,
            ..shadow::SM
        },
        ..Default::default()
    }
}

/// Filled bar segment, used by the splash progress bar.
pub fn bar(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral panel used for the boot error screen.
pub fn panel(colors: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = colors.surface;
    let line = colors.card_border;
    let text_color = colors.body;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: line,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        text_color: Some(text_color),
        ..Default::default()
    }
}
