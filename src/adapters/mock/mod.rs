//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without file system access.
//!
//! # Available Mocks
//!
//! - [`MemoryFlagStore`] - In-memory flag storage with failure injection

pub mod flag_store;

pub use flag_store::MemoryFlagStore;
