//! File-based flag store adapter.
//!
//! This module provides a flag store implementation that uses the existing
//! [`PrefsManager`] for file-based storage.

use async_trait::async_trait;

use crate::auth::prefs::PrefsManager;
use crate::traits::{FlagStore, FlagStoreError};

/// File-based flag store.
///
/// This adapter wraps the existing [`PrefsManager`] and implements the
/// [`FlagStore`] trait, giving async access to the flags persisted in
/// `~/.hollow/prefs.json`.
///
/// Reads never error: a missing or unreadable prefs file reads as an empty
/// flag set, so callers see `Ok(None)` for every key.
#[derive(Debug)]
pub struct FilePrefsStore {
    manager: PrefsManager,
}

impl FilePrefsStore {
    /// Create a new file-based flag store.
    ///
    /// # Returns
    /// The store, or an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FlagStoreError> {
        PrefsManager::new()
            .map(|manager| Self { manager })
            .ok_or_else(|| FlagStoreError::Io("Failed to determine home directory".to_string()))
    }

    /// Create a flag store over an explicit prefs manager.
    pub fn with_manager(manager: PrefsManager) -> Self {
        Self { manager }
    }

    /// Get a reference to the underlying prefs manager.
    pub fn manager(&self) -> &PrefsManager {
        &self.manager
    }

    /// Get the path to the preferences file.
    pub fn prefs_path(&self) -> &std::path::PathBuf {
        self.manager.prefs_path()
    }
}

#[async_trait]
impl FlagStore for FilePrefsStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        // PrefsManager::load() returns default Prefs if the file is missing
        // or unreadable, which reads as the flag being unset.
        let prefs = self.manager.load();
        Ok(prefs.get(key).map(String::from))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let mut prefs = self.manager.load();
        prefs.set(key, value);

        if self.manager.save(&prefs) {
            Ok(())
        } else {
            Err(FlagStoreError::WriteFailed(
                "Failed to write preferences file".to_string(),
            ))
        }
    }
}
