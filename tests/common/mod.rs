//! Common test utilities for integration tests.
//!
//! Builders and drivers shared by the session, feed and chat flow tests:
//! apps over the in-memory flag store, a pump that delivers async session
//! messages the way the event loop does, and typing helpers for the input
//! fields.

use std::sync::Arc;

use hollow::adapters::mock::MemoryFlagStore;
use hollow::app::{App, AppMessage, Tab};

/// App over the seeded demo store and an empty in-memory flag store, with
/// the session still unresolved.
#[allow(dead_code)]
pub fn fresh_app() -> App {
    App::new(Arc::new(MemoryFlagStore::new()))
}

/// App with the session already resolved as signed in.
#[allow(dead_code)]
pub fn signed_in_app() -> App {
    let mut app = fresh_app();
    app.handle_message(AppMessage::AuthResolved(true));
    app
}

/// App signed in and sitting on the Messages tab.
#[allow(dead_code)]
pub fn messages_app() -> App {
    let mut app = signed_in_app();
    app.switch_tab(Tab::Messages);
    app
}

/// Receive the next async message and feed it to the app, the way the
/// event loop does. Returns the message so tests can assert on it.
#[allow(dead_code)]
pub async fn pump_message(app: &mut App) -> AppMessage {
    let mut rx = app.message_rx.take().expect("message receiver");
    let msg = rx.recv().await.expect("async message");
    app.message_rx = Some(rx);
    app.handle_message(msg.clone());
    msg
}

/// Drive the startup session resolution to completion.
#[allow(dead_code)]
pub async fn resolve_startup(app: &mut App) {
    app.start_auth_resolution();
    pump_message(app).await;
}

/// Type text into the open compose overlay.
#[allow(dead_code)]
pub fn type_into_compose(app: &mut App, text: &str) {
    if let Some(compose) = app.compose.as_mut() {
        for ch in text.chars() {
            compose.input.insert_char(ch);
        }
    }
}

/// Type text into the chat input line.
#[allow(dead_code)]
pub fn type_into_chat(app: &mut App, text: &str) {
    for ch in text.chars() {
        app.chat_input.insert_char(ch);
    }
}
