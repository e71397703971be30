//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that wrap existing code
//! and implement the traits defined in `crate::traits`. These adapters enable
//! dependency injection and testability while maintaining the same functionality.
//!
//! # Adapters
//!
//! - [`FilePrefsStore`] - File-based flag storage over the prefs file
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MemoryFlagStore`] - In-memory flag storage

pub mod file_prefs;
pub mod mock;

pub use file_prefs::FilePrefsStore;
pub use mock::MemoryFlagStore;
