// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

// =============================================================================
// Progress Bounds
// =============================================================================

/// Splash progress bounds and deceleration thresholds.
pub mod progress_bounds {
    /// Starting value.
    pub const MIN: f32 = 0.0;
    /// Terminal value.
    pub const MAX: f32 = 100.0;
    /// Below this value progress advances at full speed.
    pub const FAST_UNTIL: f32 = 60.0;
    /// Below this value (and at or above `FAST_UNTIL`) progress advances at
    /// medium speed.
    pub const MEDIUM_UNTIL: f32 = 85.0;
    /// Increment below `FAST_UNTIL`.
    pub const FAST_STEP: f32 = 2.0;
    /// Increment between `FAST_UNTIL` and `MEDIUM_UNTIL`.
    pub const MEDIUM_STEP: f32 = 1.0;
    /// Increment from `MEDIUM_UNTIL` upwards.
    pub const SLOW_STEP: f32 = 0.6;
}

// =============================================================================
// Progress
// =============================================================================

/// Startup progress percentage, guaranteed to be within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// Creates a progress value, clamping to the valid range.
    ///
    /// NaN is treated as zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self(progress_bounds::MIN);
        }
        Self(value.clamp(progress_bounds::MIN, progress_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the progress as a fraction in `0.0..=1.0`.
    #[must_use]
    pub fn as_fraction(self) -> f32 {
        self.0 / progress_bounds::MAX
    }

    /// Returns whether the terminal value has been reached.
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 >= progress_bounds::MAX
    }

    /// Increment applied by the next tick from this value.
    #[must_use]
    pub fn increment(self) -> f32 {
        use progress_bounds::{FAST_STEP, FAST_UNTIL, MEDIUM_STEP, MEDIUM_UNTIL, SLOW_STEP};
        if self.0 < FAST_UNTIL {
            FAST_STEP
        } else if self.0 < MEDIUM_UNTIL {
            MEDIUM_STEP
        } else {
            SLOW_STEP
        }
    }

    /// Advances by one tick, saturating at 100.
    #[must_use]
    pub fn advanced(self) -> Self {
        Self::new((self.0 + self.increment()).min(progress_bounds::MAX))
    }

    /// Rounded percentage for display.
    #[must_use]
    pub fn percent_label(self) -> u8 {
        // Clamped to 0..=100 so the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.0.round() as u8;
        rounded
    }
}

// =============================================================================
// LayoutClass
// =============================================================================

/// Width below which the compact layout is used.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Responsive layout classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LayoutClass {
    pub compact: bool,
}

impl LayoutClass {
    pub const COMPACT: Self = Self { compact: true };
    pub const WIDE: Self = Self { compact: false };
}

/// Classifies a viewport width.
///
/// Pure; compact iff `width < 768`.
#[must_use]
pub fn classify(width: f32) -> LayoutClass {
    LayoutClass {
        compact: width < COMPACT_BREAKPOINT,
    }
}
