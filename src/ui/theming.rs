// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.
//!
//! Presenters describe colors by [`ColorRole`]; [`ColorScheme::for_mode`] is
//! the one lookup table that turns a mode into concrete colors, so no section
//! derives a palette of its own.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The current visual palette selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Returns true for the dark palette.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Value written to durable storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything but `"light"`/`"dark"` is rejected.
    #[must_use]
    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The built-in iced theme matching this mode, used for widget defaults.
    #[must_use]
    pub fn iced_theme(self) -> iced::Theme {
        match self {
            ThemeMode::Light => iced::Theme::Light,
            ThemeMode::Dark => iced::Theme::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semantic color names used by section presenters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Page background.
    Background,
    /// Alternate band background (every other section).
    Surface,
    Heading,
    Body,
    Muted,
    /// Decorative icon strokes.
    Icon,
    Accent,
    /// Hover highlight (skill labels, orbit icons).
    Highlight,
    CardBackground,
    CardBorder,
    NavBackground,
    NavBorder,
    NavActive,
    NavInactive,
    NavActiveWash,
    Shadow,
    /// Blurred ambient blobs.
    Glow,
    Error,
}

/// Color palette for one theme mode.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub surface: Color,
    pub heading: Color,
    pub body: Color,
    pub muted: Color,
    pub icon: Color,
    pub accent: Color,
    pub highlight: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub nav_background: Color,
    pub nav_border: Color,
    pub nav_active: Color,
    pub nav_inactive: Color,
    pub nav_active_wash: Color,
    pub shadow: Color,
    pub glow: Color,
    pub error: Color,
}

impl ColorScheme {
    /// Light palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            surface: palette::GRAY_100,
            heading: palette::SLATE_900,
            body: palette::SLATE_700,
            muted: palette::GRAY_500,
            icon: palette::GRAY_600,
            accent: palette::INDIGO_500,
            highlight: palette::AMBER_400,
            card_background: palette::SLATE_200,
            card_border: Color {
                a: opacity::HAIRLINE,
                ..palette::BLACK
            },
            nav_background: Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            nav_border: Color {
                a: opacity::HAIRLINE,
                ..palette::BLACK
            },
            nav_active: palette::INK_800,
            nav_inactive: palette::GRAY_500,
            nav_active_wash: Color {
                a: opacity::WASH,
                ..palette::BLACK
            },
            shadow: Color {
                a: opacity::WASH,
                ..palette::BLACK
            },
            glow: Color {
                a: opacity::GLOW,
                ..palette::INDIGO_400
            },
            error: palette::ERROR_500,
        }
    }

    /// Dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::INK_950,
            surface: palette::INK_900,
            heading: palette::SLATE_50,
            body: palette::SLATE_300,
            muted: palette::GRAY_600,
            icon: palette::GRAY_300,
            accent: palette::INDIGO_400,
            highlight: palette::AMBER_400,
            card_background: palette::SLATE_900,
            card_border: Color {
                a: opacity::BORDER_DARK,
                ..palette::WHITE
            },
            nav_background: Color {
                a: opacity::SURFACE,
                ..palette::INK_850
            },
            nav_border: Color {
                a: opacity::BORDER_DARK,
                ..palette::WHITE
            },
            nav_active: palette::WHITE,
            nav_inactive: palette::GRAY_600,
            nav_active_wash: Color {
                a: opacity::HAIRLINE,
                ..palette::WHITE
            },
            shadow: Color {
                a: opacity::SHADOW_DARK,
                ..palette::BLACK
            },
            glow: Color {
                a: opacity::GLOW,
                ..palette::INDIGO_500
            },
            error: palette::ERROR_500,
        }
    }

    /// The lookup table: one scheme per mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Resolves a semantic role to a concrete color.
    #[must_use]
    pub fn resolve(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Surface => self.surface,
            ColorRole::Heading => self.heading,
            ColorRole::Body => self.body,
            ColorRole::Muted => self.muted,
            ColorRole::Icon => self.icon,
            ColorRole::Accent => self.accent,
            ColorRole::Highlight => self.highlight,
            ColorRole::CardBackground => self.card_background,
            ColorRole::CardBorder => self.card_border,
            ColorRole::NavBackground => self.nav_background,
            ColorRole::NavBorder => self.nav_border,
            ColorRole::NavActive => self.nav_active,
            ColorRole::NavInactive => self.nav_inactive,
            ColorRole::NavActiveWash => self.nav_active_wash,
            ColorRole::Shadow => self.shadow,
            ColorRole::Glow => self.glow,
            ColorRole::Error => self.error,
        }
    }
}

/// Resolved theme handed to the view layer.
#[derive(Debug, Clone, PartialEq)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            colors: ColorScheme::for_mode(mode),
            mode,
        }
    }

    /// Shorthand for `self.colors.resolve(role)`.
    #[must_use]
    pub fn color(&self, role: ColorRole) -> Color {
        self.colors.resolve(role)
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_background() {
        assert!(ColorScheme::light().background.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_background() {
        assert!(ColorScheme::dark().background.r < 0.1);
    }

    #[test]
    fn heading_contrasts_with_background_in_both_modes() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let scheme = ColorScheme::for_mode(mode);
            let delta = (scheme.heading.r - scheme.background.r).abs();
            assert!(delta > 0.7, "{mode}: heading too close to background");
        }
    }

    #[test]
    fn resolve_reads_the_matching_field() {
        let scheme = ColorScheme::dark();
        assert_eq!(scheme.resolve(ColorRole::Accent), scheme.accent);
        assert_eq!(scheme.resolve(ColorRole::NavActive), palette::WHITE);
    }

    #[test]
    fn theme_mode_defaults_to_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(AppTheme::default().mode, ThemeMode::Light);
    }

    #[test]
    fn stored_values_parse_strictly() {
        assert_eq!(ThemeMode::from_stored("dark"), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::from_stored("light"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_stored("Dark"), None);
        assert_eq!(ThemeMode::from_stored(""), None);
    }

    #[test]
    fn toggled_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_ne!(mode.toggled(), mode);
            assert_eq!(mode.toggled().toggled(), mode);
        }
    }
}
