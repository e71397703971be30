//! Integration tests for the chat flow.
//!
//! Covers opening a chat (unread zeroing, badge), sending messages
//! (denormalized preview and timestamp, list reordering), the empty-send
//! rejection, and the draft lifecycle across open/close.

mod common;

use common::{messages_app, type_into_chat};

#[test]
fn test_open_chat_zeroes_unread_and_badge() {
    let mut app = messages_app();
    assert_eq!(app.store.unread_total(), 2);

    // The most recently active chat sits first.
    app.open_selected_chat();
    assert_eq!(app.open_chat_id.as_deref(), Some("c1"));
    assert_eq!(app.store.chat("c1").unwrap().unread, 0);
    assert_eq!(app.store.unread_total(), 0);

    let bar = app.tab_bar_view();
    assert_eq!(bar.entries[1].badge, None, "messages badge clears");
}

#[test]
fn test_send_message_denormalizes_and_reorders() {
    let mut app = messages_app();
    // Open the older chat.
    app.move_down();
    app.open_selected_chat();
    assert_eq!(app.open_chat_id.as_deref(), Some("c2"));

    type_into_chat(&mut app, "PC, mostly");
    app.send_chat_message();

    assert!(app.chat_input.is_empty(), "input clears after a send");
    let chat = app.store.chat("c2").unwrap();
    let last = chat.messages.last().unwrap();
    assert_eq!(chat.last_message, "PC, mostly");
    assert_eq!(last.sender_id, app.store.identity().id);
    assert_eq!(chat.timestamp, last.timestamp);

    // Activity moved the chat to the front, and the selection follows.
    assert_eq!(app.store.chats()[0].id, "c2");
    assert_eq!(app.chats_index, 0);
}

#[test]
fn test_empty_send_is_ignored() {
    let mut app = messages_app();
    app.open_selected_chat();
    let before = app.store.chat("c1").unwrap().messages.len();

    app.send_chat_message();
    assert_eq!(app.store.chat("c1").unwrap().messages.len(), before);

    type_into_chat(&mut app, "   ");
    app.send_chat_message();
    assert_eq!(app.store.chat("c1").unwrap().messages.len(), before);
    // Whitespace stays in the field for the user to fix.
    assert_eq!(app.chat_input.value(), "   ");
}

#[test]
fn test_messages_stay_chronological() {
    let mut app = messages_app();
    app.open_selected_chat();

    for text in ["one", "two", "three"] {
        type_into_chat(&mut app, text);
        app.send_chat_message();
    }

    let chat = app.store.chat("c1").unwrap();
    let tail: Vec<&str> = chat
        .messages
        .iter()
        .rev()
        .take(3)
        .rev()
        .map(|m| m.content.as_str())
        .collect();
    assert_eq!(tail, vec!["one", "two", "three"]);
    assert!(chat
        .messages
        .windows(2)
        .all(|w| w[0].timestamp <= w[1].timestamp));
}

#[test]
fn test_close_chat_drops_the_draft() {
    let mut app = messages_app();
    app.open_selected_chat();
    type_into_chat(&mut app, "half a thought");

    app.close_chat();
    assert!(app.open_chat_id.is_none());

    // The draft does not leak into the next chat.
    app.open_selected_chat();
    assert!(app.chat_input.is_empty());
}
