/// Key-value persistence collaborator
///
/// The store persists the whole collection as one string blob under a
/// fixed key. This module provides that key-value surface: a file-backed
/// implementation holding a single JSON object map in the user's data
/// directory, plus an in-memory implementation for tests.

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the key-value layer.
///
/// Callers above the store boundary never see these; the store logs
/// them and keeps its in-memory collection authoritative.
#[derive(Error, Debug)]
pub enum PrefsError {
    #[error("no user data directory available")]
    NoDataDir,

    #[error("failed to read prefs file: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write prefs file: {0}")]
    Write(#[source] std::io::Error),

    #[error("prefs file is not a JSON object: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A string store addressable by a fixed key.
pub trait KeyValue {
    /// Fetch the value stored under `key`, if any
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite the value stored under `key`
    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError>;
}

impl<K: KeyValue + ?Sized> KeyValue for Box<K> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}

/// File-backed key-value store.
///
/// All keys live in one JSON object map; `set` rewrites the whole file.
/// The file is created in the user's data directory:
/// - Linux: ~/.local/share/toy-garage/prefs.json
/// - macOS: ~/Library/Application Support/toy-garage/prefs.json
/// - Windows: %APPDATA%\toy-garage\prefs.json
#[derive(Debug)]
pub struct PrefsFile {
    path: PathBuf,
}

impl PrefsFile {
    /// Open the prefs file at the default per-user location.
    ///
    /// The parent directory is created if missing. The file itself is
    /// only created on the first `set`.
    pub fn open_default() -> Result<Self, PrefsError> {
        let path = Self::default_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(PrefsError::Write)?;
        }

        println!("📁 Prefs file at: {}", path.display());

        Ok(Self { path })
    }

    /// Open a prefs file at an explicit path (used by tests)
    pub fn open_at(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> Result<PathBuf, PrefsError> {
        let mut path = dirs::data_dir()
            .or_else(dirs::home_dir)
            .ok_or(PrefsError::NoDataDir)?;

        path.push("toy-garage");
        path.push("prefs.json");
        Ok(path)
    }

    /// Read the whole map from disk; a missing file is an empty map
    fn read_map(&self) -> Result<Map<String, Value>, PrefsError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(PrefsError::Read(e)),
        };

        // A file holding something other than an object is treated as
        // empty rather than fatal; the next set() rewrites it.
        let value: Value = serde_json::from_str(&text)?;
        Ok(value.as_object().cloned().unwrap_or_default())
    }
}

impl KeyValue for PrefsFile {
    fn get(&self, key: &str) -> Option<String> {
        let map = self.read_map().ok()?;
        match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        // Best effort: if the existing file is unreadable, start over
        // from an empty map rather than refusing to save.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(key.to_string(), Value::String(value));

        let text = serde_json::to_string(&Value::Object(map))?;

        // Write to a sibling temp file and rename, so a crash mid-write
        // cannot leave a half-written blob behind.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).map_err(PrefsError::Write)?;
        fs::rename(&tmp, &self.path).map_err(PrefsError::Write)?;
        Ok(())
    }
}

/// In-memory key-value store for tests and as a fallback when no data
/// directory exists.
#[derive(Debug, Default)]
pub struct MemoryPrefs {
    values: HashMap<String, String>,
}

impl MemoryPrefs {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PrefsError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_prefs(name: &str) -> PrefsFile {
        let mut path = std::env::temp_dir();
        path.push(format!("toy-garage-test-{}-{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        PrefsFile::open_at(path)
    }

    #[test]
    fn test_get_on_missing_file_is_none() {
        let prefs = temp_prefs("missing");
        assert_eq!(prefs.get("cars"), None);
    }

    #[test]
    fn test_set_then_get_round_trips_through_disk() {
        let mut prefs = temp_prefs("roundtrip");

        prefs.set("cars", "[]".to_string()).unwrap();
        assert_eq!(prefs.get("cars"), Some("[]".to_string()));

        // Overwrite replaces the value
        prefs.set("cars", "[1,2]".to_string()).unwrap();
        assert_eq!(prefs.get("cars"), Some("[1,2]".to_string()));
    }

    #[test]
    fn test_set_leaves_no_temp_file_behind() {
        let mut prefs = temp_prefs("tempfile");

        prefs.set("cars", "[]".to_string()).unwrap();

        let tmp = {
            // Mirror the path the writer uses
            let mut path = std::env::temp_dir();
            path.push(format!("toy-garage-test-tempfile-{}.json", std::process::id()));
            path.with_extension("json.tmp")
        };
        assert!(!tmp.exists());
        assert_eq!(prefs.get("cars"), Some("[]".to_string()));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut prefs = temp_prefs("keys");

        prefs.set("cars", "a".to_string()).unwrap();
        prefs.set("theme", "dark".to_string()).unwrap();

        assert_eq!(prefs.get("cars"), Some("a".to_string()));
        assert_eq!(prefs.get("theme"), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_prefs_round_trip() {
        let mut prefs = MemoryPrefs::new();
        assert_eq!(prefs.get("cars"), None);

        prefs.set("cars", "[]".to_string()).unwrap();
        assert_eq!(prefs.get("cars"), Some("[]".to_string()));
    }
}
