// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

// Re-export approx macros for convenient use in tests
pub use approx::{assert_abs_diff_eq, assert_relative_eq};

use crate::domain::ui::LayoutClass;
use crate::ui::sections::{catalog::Catalog, RenderContext};
use crate::ui::theming::ThemeMode;
use std::path::Path;

/// Fixed seed so jittered layouts are reproducible in tests.
pub const TEST_SEED: u64 = 0x5eed;

/// Builds a render context over the embedded catalog.
pub fn render_context<'a>(
    catalog: &'a Catalog,
    theme: ThemeMode,
    compact: bool,
    revealed: bool,
) -> RenderContext<'a> {
    RenderContext {
        theme,
        layout: LayoutClass { compact },
        revealed,
        content: catalog,
        assets: Path::new("assets/public"),
        seed: TEST_SEED,
    }
}
