// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Sections are described as plain layout trees plus motion descriptors;
//! [`render`] turns them into iced widgets once per frame, sampling the
//! [`motion::Animator`] for every animated node.
//!
//! # Screens
//!
//! - [`splash`] - Startup progress screen
//! - [`sections`] - The portfolio sections and their page geometry
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Theme store, viewport classification and reveal observers
//! - [`motion`] - Motion descriptors, easing, pointer interaction and the animator
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (motion frame, pointer area, ornaments)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and color roles
//! - [`navbar`] - Navigation rail
//! - [`theme_toggle`] - Light/dark switch
//! - [`typewriter`] - Character-by-character text reveal

pub mod components;
pub mod design_tokens;
pub mod motion;
pub mod navbar;
pub mod render;
pub mod sections;
pub mod splash;
pub mod state;
pub mod styles;
pub mod theme_toggle;
pub mod theming;
pub mod typewriter;
pub mod widgets;
