//! Preference storage for the Hollow client.
//!
//! This module provides functionality for storing and loading persisted
//! flags from `~/.hollow/prefs.json`. The session gate's auth flag is the
//! only key the app currently writes; everything else about the client is
//! process-memory only.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

/// The preferences directory name.
const PREFS_DIR: &str = ".hollow";

/// The preferences file name.
const PREFS_FILE: &str = "prefs.json";

/// Persisted preference flags.
///
/// Serialized as a flat JSON object mapping keys to string values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Prefs {
    /// Flag values by key.
    #[serde(flatten)]
    flags: HashMap<String, String>,
}

impl Prefs {
    /// Create new empty prefs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a flag value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.flags.get(key).map(String::as_str)
    }

    /// Set a flag value, replacing any previous value.
    pub fn set(&mut self, key: &str, value: &str) {
        self.flags.insert(key.to_string(), value.to_string());
    }

    /// Whether no flags are set.
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

/// Manages preference storage and retrieval.
#[derive(Debug)]
pub struct PrefsManager {
    /// Path to the preferences file.
    prefs_path: PathBuf,
}

impl PrefsManager {
    /// Create a new PrefsManager.
    ///
    /// Returns `None` if the home directory cannot be determined.
    pub fn new() -> Option<Self> {
        let home = dirs::home_dir()?;
        let prefs_path = home.join(PREFS_DIR).join(PREFS_FILE);
        Some(Self { prefs_path })
    }

    /// Create a PrefsManager backed by an explicit file path.
    pub fn with_path(prefs_path: PathBuf) -> Self {
        Self { prefs_path }
    }

    /// Get the path to the preferences file.
    pub fn prefs_path(&self) -> &PathBuf {
        &self.prefs_path
    }

    /// Load prefs from the preferences file.
    ///
    /// Returns default prefs if the file doesn't exist or can't be read.
    pub fn load(&self) -> Prefs {
        if !self.prefs_path.exists() {
            return Prefs::default();
        }

        let file = match File::open(&self.prefs_path) {
            Ok(f) => f,
            Err(_) => return Prefs::default(),
        };

        let reader = BufReader::new(file);
        match serde_json::from_reader(reader) {
            Ok(prefs) => prefs,
            Err(_) => Prefs::default(),
        }
    }

    /// Save prefs to the preferences file.
    ///
    /// Creates the parent directory if it doesn't exist.
    /// Returns `true` if successful, `false` otherwise.
    pub fn save(&self, prefs: &Prefs) -> bool {
        // Ensure the parent directory exists
        if let Some(parent) = self.prefs_path.parent() {
            if !parent.exists() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        let file = match File::create(&self.prefs_path) {
            Ok(f) => f,
            Err(_) => return false,
        };

        let mut writer = BufWriter::new(file);
        if serde_json::to_writer_pretty(&mut writer, prefs).is_err() {
            return false;
        }

        writer.flush().is_ok()
    }

    /// Clear all stored prefs.
    ///
    /// Removes the preferences file if it exists. This is what `--reset`
    /// runs; with the auth flag gone the next launch lands on login.
    /// Returns `true` if successful or the file didn't exist.
    pub fn clear(&self) -> bool {
        if !self.prefs_path.exists() {
            return true;
        }

        fs::remove_file(&self.prefs_path).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // Helper to create a PrefsManager with a custom path
    fn create_test_manager(temp_dir: &TempDir) -> PrefsManager {
        let prefs_path = temp_dir.path().join(PREFS_DIR).join(PREFS_FILE);
        PrefsManager { prefs_path }
    }

    #[test]
    fn test_prefs_default_empty() {
        let prefs = Prefs::default();
        assert!(prefs.is_empty());
        assert!(prefs.get("hollow_auth").is_none());
    }

    #[test]
    fn test_prefs_set_and_get() {
        let mut prefs = Prefs::new();
        prefs.set("hollow_auth", "true");
        assert_eq!(prefs.get("hollow_auth"), Some("true"));

        prefs.set("hollow_auth", "false");
        assert_eq!(prefs.get("hollow_auth"), Some("false"));
    }

    #[test]
    fn test_prefs_serializes_flat() {
        let mut prefs = Prefs::new();
        prefs.set("hollow_auth", "true");
        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(json, r#"{"hollow_auth":"true"}"#);

        let parsed: Prefs = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, prefs);
    }

    #[test]
    fn test_manager_load_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        let prefs = manager.load();
        assert_eq!(prefs, Prefs::default());
    }

    #[test]
    fn test_manager_load_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        fs::create_dir_all(manager.prefs_path().parent().unwrap()).unwrap();
        fs::write(manager.prefs_path(), "not json{{").unwrap();

        assert_eq!(manager.load(), Prefs::default());
    }

    #[test]
    fn test_manager_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut prefs = Prefs::new();
        prefs.set("hollow_auth", "true");

        assert!(manager.save(&prefs));

        let loaded = manager.load();
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.get("hollow_auth"), Some("true"));
    }

    #[test]
    fn test_manager_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(!manager.prefs_path().parent().unwrap().exists());
        assert!(manager.save(&Prefs::new()));
        assert!(manager.prefs_path().exists());
    }

    #[test]
    fn test_manager_clear() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let mut prefs = Prefs::new();
        prefs.set("hollow_auth", "true");
        assert!(manager.save(&prefs));
        assert!(manager.prefs_path().exists());

        assert!(manager.clear());
        assert!(!manager.prefs_path().exists());

        // Clearing again is still ok.
        assert!(manager.clear());
    }

    #[test]
    fn test_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.json");
        let manager = PrefsManager::with_path(path.clone());
        assert_eq!(manager.prefs_path(), &path);
    }
}
