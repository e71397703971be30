//! Domain actions for the App.
//!
//! Compose, likes, chat sending, the feed filter, and the two async
//! session tasks (startup resolution and login).

use std::sync::Arc;

use crate::models::{Category, MessageKind, Post};
use crate::store::PostDraft;

use super::{App, AppMessage, ComposeState};

/// Placeholder photo attached by the compose overlay.
const COMPOSE_PHOTO_URL: &str = "https://picsum.photos/seed/fresh/800/600";

impl App {
    /// Spawn the startup session resolution task.
    ///
    /// Reads the persisted flag off the event loop and reports back through
    /// the message channel; the UI stays on the loading screen until the
    /// result lands.
    pub fn start_auth_resolution(&self) {
        let flags = Arc::clone(&self.flags);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let authenticated = crate::auth::resolve_session(flags.as_ref()).await;
            let _ = tx.send(AppMessage::AuthResolved(authenticated));
        });
    }

    /// Start the async login write, unless one is already in flight.
    ///
    /// The gate transitions only when the write is confirmed; a failure
    /// comes back as a retryable [`AppMessage::LoginFailed`].
    pub fn start_login(&mut self) {
        if self.login_pending || self.gate.is_authenticated() {
            return;
        }

        self.login_pending = true;
        self.login_error = None;
        self.mark_dirty();

        let flags = Arc::clone(&self.flags);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            match crate::auth::persist_login(flags.as_ref()).await {
                Ok(()) => {
                    let _ = tx.send(AppMessage::LoginSucceeded);
                }
                Err(e) => {
                    let _ = tx.send(AppMessage::LoginFailed(e.to_string()));
                }
            }
        });
    }

    /// Posts the feed shows under the active category filter, store order.
    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.feed_filter {
            None => self.store.posts(),
            Some(category) => self
                .store
                .posts()
                .into_iter()
                .filter(|post| post.category == category)
                .collect(),
        }
    }

    /// Id of the post the feed selection sits on.
    pub fn selected_feed_post_id(&self) -> Option<String> {
        self.visible_posts()
            .get(self.feed_index)
            .map(|post| post.id.clone())
    }

    /// Id of the post the profile selection sits on.
    pub fn selected_profile_post_id(&self) -> Option<String> {
        self.store
            .posts_by_user(self.store.identity().id.as_str())
            .get(self.profile_index)
            .map(|post| post.id.clone())
    }

    /// Toggle the viewer's like on a post.
    ///
    /// The like lives in this process only; the store's count is never
    /// written back. Unknown ids are ignored.
    pub fn toggle_like(&mut self, post_id: &str) {
        if self.store.post(post_id).is_none() {
            return;
        }

        if !self.liked.remove(post_id) {
            self.liked.insert(post_id.to_string());
        }
        self.mark_dirty();
    }

    /// Like count to display: the stored count plus the viewer's toggle.
    pub fn displayed_likes(&self, post: &Post) -> u32 {
        post.likes + u32::from(self.liked.contains(&post.id))
    }

    /// Whether the viewer has liked the post this run.
    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    /// Open the compose overlay.
    pub fn open_compose(&mut self) {
        self.compose = Some(ComposeState::default());
        self.mark_dirty();
    }

    /// Discard the compose overlay.
    pub fn close_compose(&mut self) {
        self.compose = None;
        self.mark_dirty();
    }

    /// Move the compose category picker forward.
    pub fn compose_next_category(&mut self) {
        if let Some(compose) = self.compose.as_mut() {
            compose.next_category();
            self.mark_dirty();
        }
    }

    /// Move the compose category picker backward.
    pub fn compose_prev_category(&mut self) {
        if let Some(compose) = self.compose.as_mut() {
            compose.prev_category();
            self.mark_dirty();
        }
    }

    /// Toggle the compose photo attachment.
    pub fn compose_toggle_photo(&mut self) {
        if let Some(compose) = self.compose.as_mut() {
            compose.attach_photo = !compose.attach_photo;
            self.mark_dirty();
        }
    }

    /// Toggle the compose live badge. Only lands on the post when a photo
    /// is attached.
    pub fn compose_toggle_live(&mut self) {
        if let Some(compose) = self.compose.as_mut() {
            compose.live_photo = !compose.live_photo;
            self.mark_dirty();
        }
    }

    /// Submit the compose overlay to the store.
    ///
    /// On success the overlay closes and the feed selection jumps to the
    /// fresh post; a rejection stays inline in the overlay.
    pub fn submit_compose(&mut self) {
        let draft = match self.compose.as_ref() {
            Some(compose) => PostDraft {
                category: compose.selected_category(),
                content: compose.input.value().to_string(),
                images: if compose.attach_photo {
                    vec![COMPOSE_PHOTO_URL.to_string()]
                } else {
                    Vec::new()
                },
                is_live_photo: compose.attach_photo && compose.live_photo,
            },
            None => return,
        };

        match self.store.create_post(draft) {
            Ok(_) => {
                self.compose = None;
                self.feed_filter = None;
                self.feed_index = 0;
            }
            Err(e) => {
                if let Some(compose) = self.compose.as_mut() {
                    compose.error = Some(e.user_message().to_string());
                }
            }
        }
        self.mark_dirty();
    }

    /// Send the chat input as a text message to the open chat.
    ///
    /// Empty input is rejected by the store and simply stays in the field.
    pub fn send_chat_message(&mut self) {
        let chat_id = match self.open_chat_id.clone() {
            Some(id) => id,
            None => return,
        };

        let content = self.chat_input.value().to_string();
        if self
            .store
            .append_message(&chat_id, MessageKind::Text, &content)
            .is_ok()
        {
            self.chat_input.clear();
            // The chat moved to the front of the list.
            self.chats_index = 0;
        }
        self.mark_dirty();
    }

    /// Cycle the feed category filter forward: all, then each category.
    pub fn cycle_filter_next(&mut self) {
        self.feed_filter = match self.feed_filter {
            None => Some(Category::ALL[0]),
            Some(current) => {
                let idx = Category::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or(0);
                if idx + 1 < Category::ALL.len() {
                    Some(Category::ALL[idx + 1])
                } else {
                    None
                }
            }
        };
        self.feed_index = 0;
        self.mark_dirty();
    }

    /// Cycle the feed category filter backward.
    pub fn cycle_filter_prev(&mut self) {
        self.feed_filter = match self.feed_filter {
            None => Some(Category::ALL[Category::ALL.len() - 1]),
            Some(current) => {
                let idx = Category::ALL
                    .iter()
                    .position(|c| *c == current)
                    .unwrap_or(0);
                if idx > 0 {
                    Some(Category::ALL[idx - 1])
                } else {
                    None
                }
            }
        };
        self.feed_index = 0;
        self.mark_dirty();
    }

    /// Whether a text input currently owns printable keys.
    pub fn input_active(&self) -> bool {
        self.compose.is_some() || self.open_chat_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;
    use crate::app::Tab;

    #[test]
    fn test_displayed_likes_round_trip() {
        let mut app = test_app();
        let stored = app.store.post("p1").unwrap().likes;

        app.toggle_like("p1");
        let post = app.store.post("p1").unwrap();
        assert_eq!(app.displayed_likes(post), stored + 1);
        assert!(app.is_liked("p1"));

        app.toggle_like("p1");
        let post = app.store.post("p1").unwrap();
        assert_eq!(app.displayed_likes(post), stored);
        assert!(!app.is_liked("p1"));

        // The stored count never moved.
        assert_eq!(app.store.post("p1").unwrap().likes, stored);
    }

    #[test]
    fn test_toggle_like_unknown_post_ignored() {
        let mut app = test_app();
        app.toggle_like("nonexistent");
        assert!(app.liked.is_empty());
    }

    #[test]
    fn test_submit_compose_creates_post() {
        let mut app = test_app();
        app.open_compose();
        for c in "A fresh confession".chars() {
            if let Some(compose) = app.compose.as_mut() {
                compose.input.insert_char(c);
            }
        }

        app.submit_compose();

        assert!(app.compose.is_none());
        assert_eq!(app.feed_index, 0);
        let first = app.visible_posts()[0];
        assert_eq!(first.content, "A fresh confession");
        assert_eq!(first.user_id, app.store.identity().id);
    }

    #[test]
    fn test_submit_compose_empty_shows_inline_error() {
        let mut app = test_app();
        let posts_before = app.store.post_count();
        app.open_compose();

        app.submit_compose();

        let compose = app.compose.as_ref().expect("overlay stays open");
        assert!(compose.error.is_some());
        assert_eq!(app.store.post_count(), posts_before);
    }

    #[test]
    fn test_submit_compose_with_photo_attaches_image() {
        let mut app = test_app();
        app.open_compose();
        if let Some(compose) = app.compose.as_mut() {
            compose.input.insert_char('x');
            compose.attach_photo = true;
            compose.live_photo = true;
        }

        app.submit_compose();

        let first = app.visible_posts()[0];
        assert_eq!(first.images.len(), 1);
        assert!(first.is_live_photo);
    }

    #[test]
    fn test_live_badge_needs_photo() {
        let mut app = test_app();
        app.open_compose();
        if let Some(compose) = app.compose.as_mut() {
            compose.input.insert_char('x');
            compose.live_photo = true;
        }

        app.submit_compose();

        let first = app.visible_posts()[0];
        assert!(first.images.is_empty());
        assert!(!first.is_live_photo);
    }

    #[test]
    fn test_cycle_filter_full_loop() {
        let mut app = test_app();
        assert_eq!(app.feed_filter, None);

        for category in Category::ALL {
            app.cycle_filter_next();
            assert_eq!(app.feed_filter, Some(category));
        }
        app.cycle_filter_next();
        assert_eq!(app.feed_filter, None);

        app.cycle_filter_prev();
        assert_eq!(
            app.feed_filter,
            Some(Category::ALL[Category::ALL.len() - 1])
        );
    }

    #[test]
    fn test_visible_posts_respects_filter() {
        let mut app = test_app();
        app.cycle_filter_next();
        let category = app.feed_filter.unwrap();

        for post in app.visible_posts() {
            assert_eq!(post.category, category);
        }
    }

    #[test]
    fn test_send_chat_message_updates_preview() {
        let mut app = test_app();
        app.gate.apply_resolution(true);
        app.switch_tab(Tab::Messages);
        app.open_selected_chat();

        for c in "hey there".chars() {
            app.chat_input.insert_char(c);
        }
        app.send_chat_message();

        assert!(app.chat_input.is_empty());
        let chat_id = app.open_chat_id.clone().unwrap();
        let chat = app.store.chat(&chat_id).unwrap();
        assert_eq!(chat.last_message, "hey there");
        assert_eq!(
            chat.messages.last().unwrap().sender_id,
            app.store.identity().id
        );
    }

    #[test]
    fn test_send_empty_chat_message_keeps_store() {
        let mut app = test_app();
        app.gate.apply_resolution(true);
        app.switch_tab(Tab::Messages);
        app.open_selected_chat();

        let chat_id = app.open_chat_id.clone().unwrap();
        let before = app.store.chat(&chat_id).unwrap().messages.len();

        app.send_chat_message();

        assert_eq!(app.store.chat(&chat_id).unwrap().messages.len(), before);
    }

    #[test]
    fn test_input_active_tracks_overlays() {
        let mut app = test_app();
        assert!(!app.input_active());

        app.open_compose();
        assert!(app.input_active());
        app.close_compose();
        assert!(!app.input_active());

        app.gate.apply_resolution(true);
        app.switch_tab(Tab::Messages);
        app.open_selected_chat();
        assert!(app.input_active());
        app.close_chat();
        assert!(!app.input_active());
    }
}
