// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--data-dir`, `--config-dir`, `--base-path`) - set via
//!    [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_FOLIO_DATA_DIR`, `ICED_FOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(CliOverrides { data_dir, config_dir, base_path });
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the data directory.
pub const ENV_DATA_DIR: &str = "ICED_FOLIO_DATA_DIR";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// Directory overrides passed on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub data_dir: Option<String>,
    pub config_dir: Option<String>,
    /// Asset base path; wins over both `[assets] base_path` and the
    /// environment.
    pub base_path: Option<String>,
}

static CLI_OVERRIDES: OnceLock<CliOverrides> = OnceLock::new();

/// Records CLI overrides for the lifetime of the process.
///
/// Returns `false` if overrides were already recorded; the first call wins.
pub fn init_cli_overrides(overrides: CliOverrides) -> bool {
    let accepted = CLI_OVERRIDES.set(overrides).is_ok();
    if !accepted {
        log::debug!("CLI path overrides already initialized, ignoring");
    }
    accepted
}

fn cli_override(select: impl Fn(&CliOverrides) -> &Option<String>) -> Option<PathBuf> {
    CLI_OVERRIDES
        .get()
        .and_then(|overrides| select(overrides).as_ref().map(PathBuf::from))
}

fn env_override(var: &str) -> Option<PathBuf> {
    std::env::var(var)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn resolve(
    override_path: Option<PathBuf>,
    cli: Option<PathBuf>,
    env_var: &str,
    platform: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .or(cli)
        .or_else(|| env_override(env_var))
        .or_else(|| {
            platform.map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the directory holding durable application state (`state.cbor`).
///
/// - Linux: `~/.local/share/IcedFolio/`
/// - macOS: `~/Library/Application Support/IcedFolio/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedFolio\`
pub fn get_app_data_dir() -> Option<PathBuf> {
    get_app_data_dir_with_override(None)
}

/// Returns the data directory path with an optional override.
pub fn get_app_data_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        cli_override(|o| &o.data_dir),
        ENV_DATA_DIR,
        dirs::data_dir(),
    )
}

/// Returns the directory holding `settings.toml`.
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    resolve(
        override_path,
        cli_override(|o| &o.config_dir),
        ENV_CONFIG_DIR,
        dirs::config_dir(),
    )
}

/// Returns the asset base path given with `--base-path`, if any.
pub fn cli_base_path() -> Option<PathBuf> {
    cli_override(|o| &o.base_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes tests that touch process environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_data_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = get_app_data_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn override_path_takes_precedence_for_both_dirs() {
        let data = PathBuf::from("/custom/data/path");
        let config = PathBuf::from("/custom/config/path");
        assert_eq!(
            get_app_data_dir_with_override(Some(data.clone())),
            Some(data)
        );
        assert_eq!(
            get_app_config_dir_with_override(Some(config.clone())),
            Some(config)
        );
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/test/config/dir");

        let result = get_app_config_dir();
        std::env::remove_var(ENV_CONFIG_DIR);

        assert_eq!(result, Some(PathBuf::from("/test/config/dir")));
    }

    #[test]
    fn empty_env_var_falls_through_to_platform_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "");

        let result = get_app_data_dir();
        std::env::remove_var(ENV_DATA_DIR);

        if let Some(path) = result {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }
    }

    #[test]
    fn resolve_prefers_cli_over_env() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_DATA_DIR, "/env/path");

        let result = resolve(
            None,
            Some(PathBuf::from("/cli/path")),
            ENV_DATA_DIR,
            Some(PathBuf::from("/platform")),
        );
        std::env::remove_var(ENV_DATA_DIR);

        assert_eq!(result, Some(PathBuf::from("/cli/path")));
    }

    #[test]
    fn resolve_appends_app_name_to_platform_dir() {
        let result = resolve(None, None, "ICED_FOLIO_UNSET_TEST_VAR", Some("/base".into()));
        assert_eq!(result, Some(PathBuf::from("/base").join(APP_NAME)));
    }
}
