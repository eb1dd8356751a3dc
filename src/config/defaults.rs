// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Initial and minimum window dimensions
//! - **Layout**: Responsive breakpoint and navigation rail geometry
//! - **Reveal**: Viewport margin used by section reveal
//! - **Splash**: Startup progress cadence and exit grace delay

use std::time::Duration;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Minimum window width (narrow enough to exercise the compact layout).
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height.
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Widths strictly below this value use the compact layout.
pub use crate::domain::ui::newtypes::COMPACT_BREAKPOINT;

/// Width of the fixed navigation rail.
pub const NAV_RAIL_WIDTH: f32 = 90.0;

/// Left offset of the section column (rail width plus gutter).
pub const CONTENT_LEFT_OFFSET: f32 = 100.0;

/// A section becomes "active" in the rail once its top is within this
/// distance of the viewport top.
pub const NAV_ACTIVE_THRESHOLD: f32 = 60.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Root margin applied to the viewport when testing section intersection.
/// Negative values shrink the viewport.
pub const REVEAL_ROOT_MARGIN: f32 = -100.0;

// ==========================================================================
// Splash Defaults
// ==========================================================================

/// Interval between splash progress ticks.
pub const SPLASH_TICK_INTERVAL: Duration = Duration::from_millis(30);

/// Delay between reaching 100% and handing over to the portfolio.
pub const SPLASH_GRACE_DELAY: Duration = Duration::from_millis(400);

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Interval between certificate slides in the experience section.
pub const CERTIFICATE_SLIDE_INTERVAL: Duration = Duration::from_secs(5);

/// Shortest duration a motion descriptor may declare.
pub const MIN_MOTION_DURATION: Duration = Duration::from_millis(1);
