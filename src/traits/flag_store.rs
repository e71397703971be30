//! Flag storage trait abstraction.
//!
//! Provides a trait-based abstraction for the persisted key-value flags the
//! session gate depends on, enabling dependency injection and mocking in
//! tests.

use async_trait::async_trait;

/// Flag storage operation errors.
#[derive(Debug, Clone)]
pub enum FlagStoreError {
    /// Failed to read a flag
    ReadFailed(String),
    /// Failed to write a flag
    WriteFailed(String),
    /// IO error
    Io(String),
    /// Serialization/deserialization error
    Serialization(String),
}

impl std::fmt::Display for FlagStoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlagStoreError::ReadFailed(msg) => write!(f, "Failed to read flag: {}", msg),
            FlagStoreError::WriteFailed(msg) => write!(f, "Failed to write flag: {}", msg),
            FlagStoreError::Io(msg) => write!(f, "IO error: {}", msg),
            FlagStoreError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FlagStoreError {}

/// Trait for persisted string flags.
///
/// The session gate reads and writes its auth flag through this trait so
/// production code can use the prefs file while tests inject an in-memory
/// store, including ones that fail on demand.
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Read a flag value.
    ///
    /// # Returns
    /// - `Ok(Some(value))` if the flag is set
    /// - `Ok(None)` if the flag has never been written
    /// - `Err(error)` if reading failed
    async fn get(&self, key: &str) -> Result<Option<String>, FlagStoreError>;

    /// Write a flag value, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_store_error_display() {
        assert_eq!(
            FlagStoreError::ReadFailed("file gone".to_string()).to_string(),
            "Failed to read flag: file gone"
        );
        assert_eq!(
            FlagStoreError::WriteFailed("disk full".to_string()).to_string(),
            "Failed to write flag: disk full"
        );
        assert_eq!(
            FlagStoreError::Io("permission denied".to_string()).to_string(),
            "IO error: permission denied"
        );
        assert_eq!(
            FlagStoreError::Serialization("bad json".to_string()).to_string(),
            "Serialization error: bad json"
        );
    }

    #[test]
    fn test_flag_store_error_implements_error_trait() {
        let err = FlagStoreError::Io("oops".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
