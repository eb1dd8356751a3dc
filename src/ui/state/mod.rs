// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! State that outlives a single view pass: the theme store, the responsive
//! classifier, scroll position, and the per-section reveal observers.

pub mod reveal;
pub mod theme_store;
pub mod viewport;

// Re-export commonly used types for convenience
pub use reveal::{RevealController, RevealOptions, RevealRegistry, RevealState, SectionVisibility};
pub use theme_store::ThemeStore;
pub use viewport::{ViewportClassifier, ViewportState};
