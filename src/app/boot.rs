// SPDX-License-Identifier: MPL-2.0
//! Mounting the portfolio.
//!
//! Boot resolves the requested mount point, loads configuration and content,
//! and builds the [`Session`]. A missing mount point or a panic while
//! building never takes the process down: both come back as a
//! [`MountError`] that the shell renders in place of the page.

use super::persisted_state::{FileStorage, Storage};
use super::session::{Session, SessionOptions};
use super::Flags;
use crate::config;
use crate::error::MountError;
use crate::ui::sections::catalog::Catalog;
use iced::Size;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Mount point used when none is requested.
pub const DEFAULT_MOUNT: &str = "root";

/// Mount points the shell exposes.
pub const MOUNT_POINTS: &[&str] = &[DEFAULT_MOUNT];

/// Looks up a mount point by name.
pub fn find_mount(name: &str) -> Result<&'static str, MountError> {
    MOUNT_POINTS
        .iter()
        .copied()
        .find(|mount| *mount == name)
        .ok_or_else(|| MountError::RootNotFound(name.to_string()))
}

/// Session inputs from configuration, durable storage and the embedded
/// catalog. Load problems are logged and replaced by defaults.
pub fn session_options() -> SessionOptions {
    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        log::warn!("Using default settings: {warning}");
    }
    let (catalog, catalog_warning) = Catalog::embedded();
    if let Some(warning) = catalog_warning {
        log::warn!("Content catalog incomplete: {warning}");
    }
    let (width, height) = config.display.window_size();

    SessionOptions {
        storage: Box::new(FileStorage::new()) as Box<dyn Storage>,
        window: Size::new(width, height),
        catalog,
        assets: config.assets.effective_base_path(),
        seed: rand::random(),
    }
}

/// Mounts on `flags.mount` and builds the session from `options`.
pub fn boot_with(
    flags: &Flags,
    options: impl FnOnce() -> SessionOptions,
    now: Instant,
) -> Result<Session, MountError> {
    let requested = flags.mount.as_deref().unwrap_or(DEFAULT_MOUNT);
    let mount = find_mount(requested).inspect_err(|_| {
        log::error!("Mount point {requested:?} not found");
    })?;
    log::debug!("mounting on {mount}");

    panic::catch_unwind(AssertUnwindSafe(|| Session::new(options(), now))).map_err(|payload| {
        let reason = panic_message(payload.as_ref());
        log::error!("Initialization panicked: {reason}");
        MountError::InitPanicked(reason)
    })
}

/// Boots with the configured session options.
pub fn boot(flags: &Flags, now: Instant) -> Result<Session, MountError> {
    boot_with(flags, session_options, now)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::persisted_state::MemoryStorage;
    use crate::app::Screen;
    use std::path::PathBuf;

    fn options() -> SessionOptions {
        SessionOptions {
            storage: Box::new(MemoryStorage::new()),
            window: Size::new(1024.0, 768.0),
            catalog: Catalog::default(),
            assets: PathBuf::from("assets/public"),
            seed: 1,
        }
    }

    #[test]
    fn root_is_the_default_mount() {
        assert_eq!(find_mount("root"), Ok("root"));
        let session = boot_with(&Flags::default(), options, Instant::now()).expect("mounted");
        assert_eq!(session.screen(), Screen::Splash);
    }

    #[test]
    fn unknown_mount_is_reported() {
        let flags = Flags {
            mount: Some("app".into()),
            ..Flags::default()
        };
        let err = boot_with(&flags, options, Instant::now()).unwrap_err();
        assert_eq!(err, MountError::RootNotFound("app".into()));
        assert_eq!(err.to_string(), "Root element not found");
    }

    #[test]
    fn panic_during_init_is_caught() {
        let err = boot_with(
            &Flags::default(),
            || panic!("catalog exploded"),
            Instant::now(),
        )
        .unwrap_err();
        assert_eq!(err, MountError::InitPanicked("catalog exploded".into()));
    }
}
