//! Dark mode preference.
//!
//! The preference is a single flag stored under [`DARK_MODE_KEY`] as the
//! literal string `"true"` or `"false"`. When nothing is stored the
//! terminal's own light/dark background decides.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::BiteBlitzError;

/// Key the dark mode flag is stored under.
pub const DARK_MODE_KEY: &str = "darkMode";

/// String key/value storage for user preferences.
pub trait PreferenceStore {
    /// Reads the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> crate::Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> crate::Result<()>;
}

/// Preferences persisted as a flat JSON object in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> crate::Result<BTreeMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(BiteBlitzError::Io(format!(
                "failed to read {}: {e}",
                self.path.display()
            ))),
        }
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                BiteBlitzError::Io(format!("failed to create {}: {e}", parent.display()))
            })?;
        }

        let contents = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, contents).map_err(|e| {
            BiteBlitzError::Io(format!("failed to write {}: {e}", self.path.display()))
        })?;
        debug!(key, value, path = %self.path.display(), "Preference saved");
        Ok(())
    }
}

/// Preferences held only for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Reads the stored dark mode flag, falling back to `system_default`.
///
/// A stored value other than `"true"` reads as light mode. Storage errors
/// are logged and treated as "nothing stored".
pub fn load_dark_mode(store: &dyn PreferenceStore, system_default: bool) -> bool {
    match store.get(DARK_MODE_KEY) {
        Ok(Some(value)) => value == "true",
        Ok(None) => system_default,
        Err(e) => {
            warn!(error = %e, "Could not read theme preference");
            system_default
        }
    }
}

/// Persists the dark mode flag.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn save_dark_mode(store: &dyn PreferenceStore, dark: bool) -> crate::Result<()> {
    store.set(DARK_MODE_KEY, if dark { "true" } else { "false" })
}

/// Returns whether the terminal reports a dark background.
pub fn system_prefers_dark() -> bool {
    std::env::var("COLORFGBG")
        .ok()
        .is_some_and(|value| colorfgbg_is_dark(&value))
}

/// Interprets a `COLORFGBG` value (`"fg;bg"` or `"fg;default;bg"`).
///
/// Background indices 0 through 6 and 8 are the dark ANSI colors.
pub fn colorfgbg_is_dark(value: &str) -> bool {
    value
        .rsplit(';')
        .next()
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .is_some_and(|bg| bg <= 6 || bg == 8)
}
