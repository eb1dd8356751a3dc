// SPDX-License-Identifier: MPL-2.0
//! Process-wide theme state.
//!
//! [`ThemeStore`] is the single writer of the current [`ThemeMode`]: it is
//! built once at boot from durable storage and injected into the app. Every
//! section slot holds a [`watch::Receiver`] and re-renders when it observes a
//! change.

use crate::app::persisted_state::Storage;
use crate::ui::theming::ThemeMode;
use tokio::sync::watch;

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";

/// Owns the current theme and broadcasts changes.
#[derive(Debug)]
pub struct ThemeStore {
    storage: Box<dyn Storage>,
    sender: watch::Sender<ThemeMode>,
}

impl ThemeStore {
    /// Reads the stored theme once.
    ///
    /// A missing value, an unknown value, or a storage error all yield
    /// [`ThemeMode::Light`]; errors are logged and never propagate.
    pub fn load(storage: Box<dyn Storage>) -> Self {
        let mode = match storage.get(THEME_KEY) {
            Ok(Some(value)) => ThemeMode::from_stored(&value).unwrap_or_else(|| {
                log::warn!("Ignoring unknown stored theme {value:?}");
                ThemeMode::default()
            }),
            Ok(None) => ThemeMode::default(),
            Err(err) => {
                log::warn!("Failed to read stored theme: {err}");
                ThemeMode::default()
            }
        };
        let (sender, _) = watch::channel(mode);
        Self { storage, sender }
    }

    /// Current theme.
    #[must_use]
    pub fn get(&self) -> ThemeMode {
        *self.sender.borrow()
    }

    /// Flips the theme, persists it, and notifies every subscriber.
    ///
    /// A failed write is logged; the in-memory theme still flips.
    pub fn toggle(&mut self) -> ThemeMode {
        let next = self.get().toggled();
        if let Err(err) = self.storage.set(THEME_KEY, next.as_str()) {
            log::warn!("Failed to persist theme {next}: {err}");
        }
        // send_replace succeeds even with no live receivers
        self.sender.send_replace(next);
        log::debug!("Theme toggled to {next}");
        next
    }

    /// New receiver observing every future toggle.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.sender.subscribe()
    }

    /// Backing storage, for inspection.
    #[must_use]
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}
