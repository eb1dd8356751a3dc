// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for a mounted session.

/// What the mounted session shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Startup splash; replaced once and never shown again.
    Splash,
    Portfolio,
}
