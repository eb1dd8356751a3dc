// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage for state that survives restarts.
//!
//! The only key the application writes is `theme`, but the store is a plain
//! string map so it stays independent of the theme types. The file backend
//! keeps the map in CBOR, separate from the user-editable `settings.toml`.
//!
//! # Path Resolution
//!
//! 1. Use [`FileStorage::at`] with an explicit directory
//! 2. Set `ICED_FOLIO_DATA_DIR` environment variable (or `--data-dir`)
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
const STATE_FILE: &str = "state.cbor";

/// Durable string storage.
///
/// Implementations report failures; callers decide whether they are fatal.
/// For the theme flag they never are.
pub trait Storage: std::fmt::Debug {
    /// Reads a value. `Ok(None)` means the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes a value, replacing any previous one.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// CBOR-file backed storage in the application data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: Option<PathBuf>,
}

impl FileStorage {
    /// Storage at the default data directory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_override(None)
    }

    /// Storage inside `base_dir` instead of the resolved data directory.
    #[must_use]
    pub fn at(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_override(Some(base_dir.into()))
    }

    fn with_override(base_dir: Option<PathBuf>) -> Self {
        let path = paths::get_app_data_dir_with_override(base_dir).map(|mut path| {
            path.push(STATE_FILE);
            path
        });
        Self { path }
    }

    /// Full path of the state file, if a data directory could be resolved.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn require_path(&self) -> Result<&Path> {
        self.path
            .as_deref()
            .ok_or_else(|| Error::Storage("no data directory available".to_string()))
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        let path = self.require_path()?;
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let reader = BufReader::new(fs::File::open(path)?);
        Ok(ciborium::from_reader(reader)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        let path = self.require_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let writer = BufWriter::new(fs::File::create(path)?);
        ciborium::into_writer(map, writer)?;
        Ok(())
    }
}

impl Default for FileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        // A corrupted file is replaced rather than blocking every future write
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }
}

/// In-process storage, used in tests and when no data directory exists.
///
/// A storage built with [`MemoryStorage::unavailable`] fails every access,
/// standing in for a locked-down or read-only environment.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    values: BTreeMap<String, String>,
    unavailable: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::default();
        storage.values.insert(key.to_string(), value.to_string());
        storage
    }

    /// Storage whose every read and write fails.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            values: BTreeMap::new(),
            unavailable: true,
        }
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        if self.unavailable {
            return Err(Error::Storage("storage unavailable".to_string()));
        }
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if self.unavailable {
            return Err(Error::Storage("storage unavailable".to_string()));
        }
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp_dir = tempdir().expect("create temp dir");
        let storage = FileStorage::at(temp_dir.path());
        assert_eq!(storage.get("theme").expect("read"), None);
    }

    #[test]
    fn set_then_get_through_file() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::at(temp_dir.path());

        storage.set("theme", "dark").expect("write");
        assert!(temp_dir.path().join(STATE_FILE).exists());

        let reopened = FileStorage::at(temp_dir.path());
        assert_eq!(reopened.get("theme").expect("read"), Some("dark".into()));
    }

    #[test]
    fn set_preserves_other_keys() {
        let temp_dir = tempdir().expect("create temp dir");
        let mut storage = FileStorage::at(temp_dir.path());

        storage.set("other", "kept").expect("write");
        storage.set("theme", "light").expect("write");

        assert_eq!(storage.get("other").expect("read"), Some("kept".into()));
    }

    #[test]
    fn corrupted_file_is_an_error_on_read() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write");

        let storage = FileStorage::at(temp_dir.path());
        assert!(matches!(storage.get("theme"), Err(Error::Storage(_))));
    }

    #[test]
    fn corrupted_file_is_replaced_on_write() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STATE_FILE), "not valid cbor data").expect("write");

        let mut storage = FileStorage::at(temp_dir.path());
        storage.set("theme", "dark").expect("write over corruption");
        assert_eq!(storage.get("theme").expect("read"), Some("dark".into()));
    }

    #[test]
    fn write_creates_parent_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let mut storage = FileStorage::at(&nested);
        storage.set("theme", "light").expect("write");
        assert!(nested.join(STATE_FILE).exists());
    }

    #[test]
    fn unavailable_memory_storage_fails_both_ways() {
        let mut storage = MemoryStorage::unavailable();
        assert!(storage.get("theme").is_err());
        assert!(storage.set("theme", "dark").is_err());
    }

    #[test]
    fn memory_storage_with_entry() {
        let storage = MemoryStorage::with_entry("theme", "dark");
        assert_eq!(storage.get("theme").expect("read"), Some("dark".into()));
    }
}
