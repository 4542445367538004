//! Key-value preference storage.
//!
//! Preferences live in a flat TOML table in the platform config directory:
//! - Linux: ~/.config/swatchtui/
//! - macOS: ~/Library/Application Support/dev.swatchtui.swatchtui/
//! - Windows: %APPDATA%/swatchtui/swatchtui/config/

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

const APP_QUALIFIER: &str = "dev";
const APP_ORG: &str = "swatchtui";
const APP_NAME: &str = "swatchtui";
const PREFERENCES_FILENAME: &str = "preferences.toml";

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("failed to write preferences to {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode preferences")]
    Encode(#[from] toml::ser::Error),
}

/// A string key-value store.
pub trait PreferenceStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

/// Default location of the preferences file.
///
/// `None` when the platform has no home/config directory.
pub fn preferences_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(PREFERENCES_FILENAME))
}

/// Preferences persisted to a TOML file. Every `set` rewrites the file.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Opens the store at `path`.
    ///
    /// A missing or unreadable file starts out empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = read_values(&path);
        Self { path, values }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_values(path: &Path) -> BTreeMap<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(values) => {
                tracing::debug!(path = %path.display(), "loaded preferences");
                values
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to parse preferences, starting empty");
                BTreeMap::new()
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read preferences, starting empty");
            BTreeMap::new()
        }
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PrefsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string(&self.values)?;
        fs::write(&self.path, content).map_err(|source| PrefsError::Io {
            path: self.path.clone(),
            source,
        })?;

        tracing::debug!(key, value, path = %self.path.display(), "saved preference");
        Ok(())
    }
}

/// Preferences that only live for the session.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Opens the file store at the default path, or a memory store when the
/// platform has no config directory.
pub fn open_default() -> Box<dyn PreferenceStore> {
    match preferences_path() {
        Some(path) => {
            let store = FilePreferences::open(path);
            tracing::debug!(path = %store.path().display(), "using preference file");
            Box::new(store)
        }
        None => {
            tracing::warn!("could not determine preferences path, theme will not persist");
            Box::new(MemoryPreferences::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryPreferences::default();
        assert_eq!(store.get("theme"), None);
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferences::open(dir.path().join("preferences.toml"));
        assert_eq!(store.get("theme"), None);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.toml");

        let mut store = FilePreferences::open(&path);
        store.set("theme", "light").unwrap();
        store.set("theme", "dark").unwrap();

        let reopened = FilePreferences::open(&path);
        assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
        assert_eq!(reopened.path(), path.as_path());
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.toml");
        fs::write(&path, "this is = = not toml").unwrap();

        let mut store = FilePreferences::open(&path);
        assert_eq!(store.get("theme"), None);

        // Writing replaces the corrupt file.
        store.set("theme", "dark").unwrap();
        assert_eq!(FilePreferences::open(&path).get("theme").as_deref(), Some("dark"));
    }
}
