//! In-memory flag store for testing.
//!
//! Provides a flag store that keeps its flags in memory, suitable for
//! testing without file system access.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::traits::{FlagStore, FlagStoreError};

/// In-memory flag store for testing.
///
/// This store keeps flags in memory, allowing tests to verify session
/// resolution and login persistence without touching the file system.
/// Reads and writes can each be switched to fail to exercise the
/// fail-closed and retry paths.
#[derive(Debug, Clone)]
pub struct MemoryFlagStore {
    /// Stored flags
    flags: Arc<Mutex<HashMap<String, String>>>,
    /// Whether get should fail
    read_should_fail: Arc<Mutex<bool>>,
    /// Whether set should fail
    write_should_fail: Arc<Mutex<bool>>,
}

impl MemoryFlagStore {
    /// Create a new empty in-memory flag store.
    pub fn new() -> Self {
        Self {
            flags: Arc::new(Mutex::new(HashMap::new())),
            read_should_fail: Arc::new(Mutex::new(false)),
            write_should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Create a store with a single flag already set.
    pub fn with_flag(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.insert(key, value);
        store
    }

    /// Configure whether reads should fail.
    pub fn set_read_should_fail(&self, should_fail: bool) {
        *self.read_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether writes should fail.
    pub fn set_write_should_fail(&self, should_fail: bool) {
        *self.write_should_fail.lock().unwrap() = should_fail;
    }

    /// Get a flag value synchronously (for testing).
    pub fn value(&self, key: &str) -> Option<String> {
        self.flags.lock().unwrap().get(key).cloned()
    }

    /// Set a flag value synchronously (for testing).
    pub fn insert(&self, key: &str, value: &str) {
        self.flags
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl Default for MemoryFlagStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlagStore for MemoryFlagStore {
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        if *self.read_should_fail.lock().unwrap() {
            return Err(FlagStoreError::ReadFailed("Mock read failure".to_string()));
        }

        Ok(self.flags.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        if *self.write_should_fail.lock().unwrap() {
            return Err(FlagStoreError::WriteFailed(
                "Mock write failure".to_string(),
            ));
        }

        self.flags
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_flag_store_new() {
        let store = MemoryFlagStore::new();
        assert!(store.value("hollow_auth").is_none());
    }

    #[test]
    fn test_with_flag() {
        let store = MemoryFlagStore::with_flag("hollow_auth", "true");
        assert_eq!(store.value("hollow_auth"), Some("true".to_string()));
    }

    #[tokio::test]
    async fn test_get_missing_flag() {
        let store = MemoryFlagStore::new();
        let value = store.get("hollow_auth").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryFlagStore::new();

        store.set("hollow_auth", "true").await.unwrap();

        let value = store.get("hollow_auth").await.unwrap();
        assert_eq!(value, Some("true".to_string()));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = MemoryFlagStore::new();

        store.set("hollow_auth", "false").await.unwrap();
        store.set("hollow_auth", "true").await.unwrap();

        let value = store.get("hollow_auth").await.unwrap();
        assert_eq!(value, Some("true".to_string()));
    }

    #[tokio::test]
    async fn test_read_failure() {
        let store = MemoryFlagStore::with_flag("hollow_auth", "true");
        store.set_read_should_fail(true);

        let result = store.get("hollow_auth").await;
        assert!(matches!(result, Err(FlagStoreError::ReadFailed(_))));
    }

    #[tokio::test]
    async fn test_write_failure() {
        let store = MemoryFlagStore::new();
        store.set_write_should_fail(true);

        let result = store.set("hollow_auth", "true").await;
        assert!(matches!(result, Err(FlagStoreError::WriteFailed(_))));

        // Nothing was stored.
        assert!(store.value("hollow_auth").is_none());
    }

    #[tokio::test]
    async fn test_write_failure_recovers() {
        let store = MemoryFlagStore::new();
        store.set_write_should_fail(true);
        assert!(store.set("hollow_auth", "true").await.is_err());

        store.set_write_should_fail(false);
        store.set("hollow_auth", "true").await.unwrap();
        assert_eq!(store.value("hollow_auth"), Some("true".to_string()));
    }

    #[test]
    fn test_clone_shares_state() {
        let store = MemoryFlagStore::new();
        let cloned = store.clone();

        store.insert("hollow_auth", "true");

        // Both handles see the same flags.
        assert_eq!(cloned.value("hollow_auth"), Some("true".to_string()));
    }

    #[tokio::test]
    async fn test_store_isolation() {
        // Different stores don't share state
        let store1 = MemoryFlagStore::new();
        let store2 = MemoryFlagStore::new();

        store1.set("hollow_auth", "true").await.unwrap();

        assert!(store2.get("hollow_auth").await.unwrap().is_none());
    }
}
