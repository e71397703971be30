//! End-to-end tests for the session gate lifecycle.
//!
//! These tests drive the app the way the event loop does: spawn the
//! background session tasks, receive their messages off the channel, and
//! feed them to `App::handle_message`. They verify:
//! - Cold start resolution (flag absent, present, unreadable)
//! - The login write and its persisted flag
//! - Retryable login failure
//! - The route guard across gate transitions

mod common;

use std::sync::Arc;

use common::{fresh_app, pump_message, resolve_startup};
use hollow::adapters::mock::MemoryFlagStore;
use hollow::adapters::FilePrefsStore;
use hollow::app::{App, AppMessage, Route, Tab};
use hollow::auth::{AuthState, PrefsManager, AUTH_FLAG_KEY, AUTH_FLAG_TRUE};
use tempfile::TempDir;

#[tokio::test]
async fn test_cold_start_without_flag_lands_on_login() {
    let mut app = fresh_app();
    assert_eq!(app.gate.state(), AuthState::Unknown);

    resolve_startup(&mut app).await;

    assert_eq!(app.gate.state(), AuthState::Unauthenticated);
    assert_eq!(app.current_route(), &Route::Login);
}

#[tokio::test]
async fn test_cold_start_with_flag_skips_login() {
    let flags = MemoryFlagStore::with_flag(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
    let mut app = App::new(Arc::new(flags));

    resolve_startup(&mut app).await;

    assert_eq!(app.gate.state(), AuthState::Authenticated);
    assert_eq!(app.current_route(), &Route::Tabs(Tab::Feed));
}

#[tokio::test]
async fn test_unreadable_flag_fails_closed() {
    let flags = MemoryFlagStore::with_flag(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
    flags.set_read_should_fail(true);
    let mut app = App::new(Arc::new(flags));

    resolve_startup(&mut app).await;

    assert_eq!(app.gate.state(), AuthState::Unauthenticated);
    assert_eq!(app.current_route(), &Route::Login);
}

#[tokio::test]
async fn test_login_persists_flag_and_crosses_wall() {
    let flags = MemoryFlagStore::new();
    let mut app = App::new(Arc::new(flags.clone()));
    resolve_startup(&mut app).await;
    assert_eq!(app.current_route(), &Route::Login);

    app.start_login();
    assert!(app.login_pending, "latch engages while the write runs");

    let msg = pump_message(&mut app).await;
    assert!(matches!(msg, AppMessage::LoginSucceeded));

    assert!(!app.login_pending);
    assert_eq!(app.gate.state(), AuthState::Authenticated);
    assert_eq!(app.current_route(), &Route::Tabs(Tab::Feed));
    // The flag is persisted for the next launch.
    assert_eq!(flags.value(AUTH_FLAG_KEY), Some(AUTH_FLAG_TRUE.to_string()));
}

#[tokio::test]
async fn test_failed_login_write_stays_retryable() {
    let flags = MemoryFlagStore::new();
    flags.set_write_should_fail(true);
    let mut app = App::new(Arc::new(flags.clone()));
    resolve_startup(&mut app).await;

    app.start_login();
    let msg = pump_message(&mut app).await;
    assert!(matches!(msg, AppMessage::LoginFailed(_)));

    // Still walled off, with the error surfaced and the latch released.
    assert_eq!(app.gate.state(), AuthState::Unauthenticated);
    assert_eq!(app.current_route(), &Route::Login);
    assert!(app.login_error.is_some());
    assert!(!app.login_pending);
    assert!(flags.value(AUTH_FLAG_KEY).is_none());

    // Retry succeeds once the store recovers.
    flags.set_write_should_fail(false);
    app.start_login();
    let msg = pump_message(&mut app).await;
    assert!(matches!(msg, AppMessage::LoginSucceeded));

    assert_eq!(app.gate.state(), AuthState::Authenticated);
    assert!(app.login_error.is_none());
    assert_eq!(flags.value(AUTH_FLAG_KEY), Some(AUTH_FLAG_TRUE.to_string()));
}

#[tokio::test]
async fn test_login_latch_blocks_double_submit() {
    let mut app = fresh_app();
    resolve_startup(&mut app).await;

    app.start_login();
    // A second Enter while the write is in flight does nothing.
    app.start_login();

    pump_message(&mut app).await;

    // Exactly one outcome message was produced.
    let mut rx = app.message_rx.take().expect("message receiver");
    assert!(rx.try_recv().is_err());
    app.message_rx = Some(rx);
    assert_eq!(app.gate.state(), AuthState::Authenticated);

    // Once authenticated, further logins are no-ops too.
    app.start_login();
    assert!(!app.login_pending);
}

#[tokio::test]
async fn test_guard_walls_off_content_until_login() {
    let mut app = fresh_app();
    resolve_startup(&mut app).await;

    // Signed out: navigation attempts bounce back to the wall.
    app.navigate(Route::PostDetail("p1".to_string()));
    assert_eq!(app.current_route(), &Route::Login);
    app.navigate(Route::Tabs(Tab::Messages));
    assert_eq!(app.current_route(), &Route::Login);
}

#[tokio::test]
async fn test_flag_round_trip_through_prefs_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".hollow").join("prefs.json");

    // First launch: no prefs file, resolution lands on login.
    let store = FilePrefsStore::with_manager(PrefsManager::with_path(path.clone()));
    let mut app = App::new(Arc::new(store));
    resolve_startup(&mut app).await;
    assert_eq!(app.current_route(), &Route::Login);

    // Sign in; the flag is written through to the file.
    app.start_login();
    pump_message(&mut app).await;
    assert_eq!(app.gate.state(), AuthState::Authenticated);
    assert!(path.exists());

    // Second launch over the same file starts signed in.
    let store = FilePrefsStore::with_manager(PrefsManager::with_path(path.clone()));
    let mut relaunched = App::new(Arc::new(store));
    resolve_startup(&mut relaunched).await;
    assert_eq!(relaunched.gate.state(), AuthState::Authenticated);
    assert_eq!(relaunched.current_route(), &Route::Tabs(Tab::Feed));

    // Clearing the prefs (what --reset does) signs the next launch out.
    assert!(PrefsManager::with_path(path.clone()).clear());
    let store = FilePrefsStore::with_manager(PrefsManager::with_path(path));
    let mut reset = App::new(Arc::new(store));
    resolve_startup(&mut reset).await;
    assert_eq!(reset.current_route(), &Route::Login);
}
