//! Session handling for Hollow.
//!
//! This module provides:
//! - Preference file storage for the persisted session flag
//! - The session gate state machine behind the login wall

pub mod gate;
pub mod prefs;

pub use gate::{
    persist_login, resolve_session, AuthState, SessionGate, AUTH_FLAG_KEY, AUTH_FLAG_TRUE,
};
pub use prefs::{Prefs, PrefsManager};
