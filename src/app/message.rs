// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::render;
use crate::ui::theme_toggle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Splash progress step.
    SplashTick,
    /// The pause after the splash reached 100% is over.
    SplashGraceElapsed,
    /// Animation frame.
    Frame(Instant),
    Resized(iced::Size),
    /// Page scrolled to this vertical offset.
    Scrolled(f32),
    Section(render::Message),
    Navbar(navbar::Message),
    ThemeToggle(theme_toggle::Message),
    /// The user asked to close the window; the session unmounts first.
    WindowCloseRequested(iced::window::Id),
    /// Re-run boot after a failure.
    Reload,
    ToggleErrorDetails,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Mount point to attach to; `root` when not given.
    pub mount: Option<String>,
    /// Optional data directory override (for the theme state file).
    /// Takes precedence over `ICED_FOLIO_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional asset base path override.
    pub base_path: Option<String>,
}
