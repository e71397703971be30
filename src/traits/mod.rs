//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`FlagStore`] - Persisted key-value flag storage (the auth flag)

pub mod flag_store;

pub use flag_store::{FlagStore, FlagStoreError};
