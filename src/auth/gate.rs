//! Session gate for the login wall.
//!
//! The gate decides which side of the login wall the user is on. It starts
//! out `Unknown` while the persisted flag is read, settles exactly once to
//! `Authenticated` or `Unauthenticated`, and afterwards only moves through
//! a confirmed login. There is no logout edge; `--reset` removes the prefs
//! file out of process instead.

use crate::traits::{FlagStore, FlagStoreError};

/// Preference key holding the session flag.
pub const AUTH_FLAG_KEY: &str = "hollow_auth";

/// Flag value meaning "authenticated". Anything else counts as signed out.
pub const AUTH_FLAG_TRUE: &str = "true";

/// Where the session stands relative to the login wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Startup resolution has not completed yet. No redirects happen here.
    #[default]
    Unknown,
    /// The persisted flag was present, or a login succeeded this session.
    Authenticated,
    /// The flag was absent, unreadable, or not `"true"`.
    Unauthenticated,
}

impl AuthState {
    /// Whether startup resolution has completed.
    pub fn is_resolved(&self) -> bool {
        *self != AuthState::Unknown
    }
}

/// Tracks the session state across resolution and login.
#[derive(Debug, Default)]
pub struct SessionGate {
    state: AuthState,
}

impl SessionGate {
    /// Create a gate in the `Unknown` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session state.
    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Whether the session is on the authenticated side of the wall.
    pub fn is_authenticated(&self) -> bool {
        self.state == AuthState::Authenticated
    }

    /// Apply the startup resolution result.
    ///
    /// Only transitions out of `Unknown`; once the gate has settled a late
    /// or duplicate resolution changes nothing. Returns whether the state
    /// changed.
    pub fn apply_resolution(&mut self, authenticated: bool) -> bool {
        if self.state != AuthState::Unknown {
            return false;
        }

        self.state = if authenticated {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        tracing::info!("Session resolved: {:?}", self.state);
        true
    }

    /// Apply a confirmed login.
    ///
    /// Callers must have persisted the flag first; the gate itself never
    /// writes. No-op unless the gate is `Unauthenticated`. Returns whether
    /// the state changed.
    pub fn apply_login_success(&mut self) -> bool {
        if self.state != AuthState::Unauthenticated {
            return false;
        }

        self.state = AuthState::Authenticated;
        tracing::info!("Session authenticated");
        true
    }
}

/// Read the persisted flag and decide which side of the wall the session
/// starts on.
///
/// Fails closed: a missing flag, an unexpected value, or a read error all
/// land on the login side.
pub async fn resolve_session(flags: &dyn FlagStore) -> bool {
    match flags.get(AUTH_FLAG_KEY).await {
        Ok(Some(value)) => value == AUTH_FLAG_TRUE,
        Ok(None) => false,
        Err(e) => {
            tracing::warn!("Auth flag read failed, treating as signed out: {}", e);
            false
        }
    }
}

/// Persist the session flag for future launches.
///
/// Callers transition the gate only after this returns `Ok`; a failed
/// write leaves the session signed out and the login retryable.
pub async fn persist_login(flags: &dyn FlagStore) -> Result<(), FlagStoreError> {
    flags.set(AUTH_FLAG_KEY, AUTH_FLAG_TRUE).await?;
    tracing::info!("Auth flag persisted");
    Ok(())
}
