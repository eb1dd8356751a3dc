// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

All of the portfolio's design tokens in one place.

## Organization

- **Palette**: Base colors (neutrals for both modes plus the accent hues)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

Sections never reference the palette directly; they name a
[`ColorRole`](crate::ui::theming::ColorRole) and the theme resolves it.

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let glass = Color {
    a: opacity::SURFACE,
    ..palette::WHITE
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use iced::Color;

    // Neutrals
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const INK_950: Color = Color::from_rgb8(0x05, 0x05, 0x05);
    pub const INK_900: Color = Color::from_rgb8(0x0a, 0x0a, 0x0a);
    pub const INK_850: Color = Color::from_rgb8(0x0f, 0x0f, 0x0f);
    pub const INK_800: Color = Color::from_rgb8(0x1a, 0x1a, 0x1a);
    pub const SLATE_900: Color = Color::from_rgb8(0x11, 0x18, 0x27);
    pub const SLATE_800: Color = Color::from_rgb8(0x1f, 0x29, 0x37);
    pub const SLATE_700: Color = Color::from_rgb8(0x37, 0x41, 0x51);
    pub const SLATE_300: Color = Color::from_rgb8(0xd1, 0xd5, 0xdb);
    pub const SLATE_200: Color = Color::from_rgb8(0xe5, 0xe7, 0xeb);
    pub const SLATE_50: Color = Color::from_rgb8(0xf9, 0xfa, 0xfb);
    pub const GRAY_600: Color = Color::from_rgb8(0x66, 0x66, 0x66);
    pub const GRAY_500: Color = Color::from_rgb8(0x88, 0x88, 0x88);
    pub const GRAY_300: Color = Color::from_rgb8(0xbd, 0xbd, 0xbd);
    pub const GRAY_100: Color = Color::from_rgb8(0xf5, 0xf5, 0xf5);

    // Accents
    pub const INDIGO_500: Color = Color::from_rgb8(0x63, 0x66, 0xf1);
    pub const INDIGO_400: Color = Color::from_rgb8(0x81, 0x8c, 0xf8);
    pub const AMBER_400: Color = Color::from_rgb8(0xfb, 0xbf, 0x24);

    // Semantic
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Hover wash behind the active navigation link.
    pub const WASH: f32 = 0.05;
    /// Hairline borders.
    pub const HAIRLINE: f32 = 0.1;
    pub const BORDER_DARK: f32 = 0.15;
    pub const GLOW: f32 = 0.35;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const SHADOW_DARK: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;

    /// Frosted rail and toggle surfaces.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
    pub const XXXL: f32 = 80.0; // 10 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icons
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    // Media
    pub const PHOTO_SM: f32 = 110.0;
    pub const PHOTO_MD: f32 = 160.0;
    pub const PHOTO_LG: f32 = 220.0;
    pub const CERTIFICATE_WIDTH: f32 = 320.0;

    // Content column
    pub const CONTENT_MAX_WIDTH: f32 = 1100.0;
    pub const CARD_MIN_WIDTH: f32 = 240.0;

    // Splash
    pub const PROGRESS_BAR_WIDTH: f32 = 320.0;
    pub const PROGRESS_BAR_HEIGHT: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.
    //!
    //! - Display: splash lettering and the hero name
    //! - Titles: section headings and card titles
    //! - Body: primary content text
    //! - Caption: tags, dates, percentages

    /// Splash "PORTFOLIO" lettering
    pub const DISPLAY_LG: f32 = 72.0;

    /// Hero name
    pub const DISPLAY_MD: f32 = 48.0;

    /// Section headings
    pub const TITLE_LG: f32 = 36.0;

    /// Card titles
    pub const TITLE_MD: f32 = 22.0;

    /// Sub-headings, roles
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - taglines
    pub const BODY_LG: f32 = 17.0;

    /// Standard body
    pub const BODY: f32 = 15.0;

    /// Navigation links, small labels
    pub const BODY_SM: f32 = 13.0;

    /// Dates, tags, percentages
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 6.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 2.0, y: 0.0 },
        blur_radius: 12.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 24.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 16.0 },
        blur_radius: 40.0,
    };
}

/// Returns `color` with its alpha multiplied by `factor`.
#[must_use]
pub fn faded(color: Color, factor: f32) -> Color {
    Color {
        a: (color.a * factor).clamp(0.0, 1.0),
        ..color
    }
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::PHOTO_LG > sizing::PHOTO_MD);
    assert!(sizing::PHOTO_MD > sizing::PHOTO_SM);

    assert!(typography::DISPLAY_LG > typography::DISPLAY_MD);
    assert!(typography::DISPLAY_MD > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::INDIGO_500, 0.5);
        assert_eq!(color.r, palette::INDIGO_500.r);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
        assert!((faded(palette::WHITE, 3.0).a - 1.0).abs() < f32::EPSILON);
    }
}
