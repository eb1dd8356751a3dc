// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across screens.
//!
//! # Components
//!
//! - [`error_display`] - Error panel with optional details and an action
//!   button, used for boot failures

pub mod error_display;
