use std::collections::HashMap;

use chrono::{Duration, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Category, Chat, Comment, Message, MessageKind, Post, UserIdentity};

/// Errors from content store writes.
///
/// Lookups signal absence with `Option`; these cover the write paths only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Post or message content was empty or whitespace-only.
    #[error("content cannot be empty")]
    EmptyContent,
    /// A message was addressed to a chat that does not exist.
    #[error("no chat with id {0}")]
    ChatNotFound(String),
}

impl StoreError {
    /// Short message suitable for inline display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            StoreError::EmptyContent => "Say something first",
            StoreError::ChatNotFound(_) => "That conversation no longer exists",
        }
    }
}

/// Input for creating a post. Author, id, timestamp and counters are filled
/// in by the store.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub category: Category,
    pub content: String,
    pub images: Vec<String>,
    pub is_live_photo: bool,
}

impl PostDraft {
    /// A text-only draft in the given category.
    pub fn text(category: Category, content: impl Into<String>) -> Self {
        Self {
            category,
            content: content.into(),
            images: Vec::new(),
            is_live_photo: false,
        }
    }
}

/// In-memory store for posts and chats.
///
/// Owns all content for the lifetime of the process; nothing here is
/// persisted. Constructed once and passed by reference to consumers. Every
/// write is stamped with the session [`UserIdentity`] given at construction.
///
/// Order is newest-first: seed data is loaded newest-first and writes insert
/// at the front.
#[derive(Debug)]
pub struct ContentStore {
    /// Identity stamped on every write.
    identity: UserIdentity,
    /// Posts indexed by post id.
    posts: HashMap<String, Post>,
    /// Order of post ids (most recent first).
    post_order: Vec<String>,
    /// Chats indexed by chat id.
    chats: HashMap<String, Chat>,
    /// Order of chat ids (most recent activity first).
    chat_order: Vec<String>,
}

impl ContentStore {
    /// Create an empty store writing as `identity`.
    pub fn new(identity: UserIdentity) -> Self {
        Self {
            identity,
            posts: HashMap::new(),
            post_order: Vec::new(),
            chats: HashMap::new(),
            chat_order: Vec::new(),
        }
    }

    /// Create a store populated with the demo dataset.
    pub fn with_seed_data(identity: UserIdentity) -> Self {
        let mut store = Self::new(identity);
        store.populate_seed_data();
        store
    }

    /// The identity this store writes as.
    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    /// All posts, newest first.
    pub fn posts(&self) -> Vec<&Post> {
        self.post_order
            .iter()
            .filter_map(|id| self.posts.get(id))
            .collect()
    }

    /// Look up a post by id.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    /// Posts authored by `user_id`, strictly descending by timestamp.
    ///
    /// The sort is stable: posts with equal timestamps keep their store
    /// order relative to each other.
    pub fn posts_by_user(&self, user_id: &str) -> Vec<&Post> {
        let mut posts: Vec<&Post> = self
            .post_order
            .iter()
            .filter_map(|id| self.posts.get(id))
            .filter(|p| p.user_id == user_id)
            .collect();
        posts.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        posts
    }

    /// All chats, most recent activity first.
    pub fn chats(&self) -> Vec<&Chat> {
        self.chat_order
            .iter()
            .filter_map(|id| self.chats.get(id))
            .collect()
    }

    /// Look up a chat by id.
    pub fn chat(&self, id: &str) -> Option<&Chat> {
        self.chats.get(id)
    }

    /// Total unread count across all chats (messages tab badge).
    pub fn unread_total(&self) -> u32 {
        self.chats.values().map(|c| c.unread).sum()
    }

    /// Number of stored posts.
    pub fn post_count(&self) -> usize {
        self.posts.len()
    }

    /// Number of stored chats.
    pub fn chat_count(&self) -> usize {
        self.chats.len()
    }

    /// Create a post from `draft`, authored by the session identity.
    ///
    /// Content that is empty or whitespace-only is rejected here, not just
    /// in the compose UI. The new post starts with zero likes, no comments
    /// and the current timestamp, and becomes the first post in [`posts`].
    ///
    /// [`posts`]: ContentStore::posts
    pub fn create_post(&mut self, draft: PostDraft) -> Result<&Post, StoreError> {
        if draft.content.trim().is_empty() {
            return Err(StoreError::EmptyContent);
        }

        let post = Post {
            id: Uuid::new_v4().to_string(),
            user_id: self.identity.id.clone(),
            user_nickname: self.identity.nickname.clone(),
            user_avatar: self.identity.avatar.clone(),
            category: draft.category,
            content: draft.content,
            images: draft.images,
            audio: None,
            is_live_photo: draft.is_live_photo,
            likes: 0,
            comments: Vec::new(),
            timestamp: Utc::now(),
            location: None,
        };

        tracing::info!(
            "Created post {} in category {}",
            post.id,
            post.category.label()
        );

        let id = post.id.clone();
        self.post_order.insert(0, id.clone());
        Ok(self.posts.entry(id).or_insert(post))
    }

    /// Start a new chat with the given counterparty.
    ///
    /// The chat begins with no messages, an unread count of zero and the
    /// placeholder preview "Started a conversation".
    pub fn create_chat(&mut self, user_id: &str, user_name: &str, user_avatar: &str) -> &Chat {
        let chat = Chat {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            user_name: user_name.to_string(),
            user_avatar: user_avatar.to_string(),
            last_message: "Started a conversation".to_string(),
            timestamp: Utc::now(),
            unread: 0,
            messages: Vec::new(),
        };

        tracing::info!("Created chat {} with {}", chat.id, chat.user_name);

        let id = chat.id.clone();
        self.chat_order.insert(0, id.clone());
        self.chats.entry(id).or_insert(chat)
    }

    /// Append a message from the session identity to a chat.
    ///
    /// Maintains the chat's denormalized `last_message` and `timestamp` and
    /// moves the chat to the front of the list. Text messages with empty or
    /// whitespace-only content are rejected.
    pub fn append_message(
        &mut self,
        chat_id: &str,
        kind: MessageKind,
        content: &str,
    ) -> Result<&Message, StoreError> {
        if kind == MessageKind::Text && content.trim().is_empty() {
            return Err(StoreError::EmptyContent);
        }
        if !self.chats.contains_key(chat_id) {
            return Err(StoreError::ChatNotFound(chat_id.to_string()));
        }

        // Most recent activity moves to the front.
        self.chat_order.retain(|id| id != chat_id);
        self.chat_order.insert(0, chat_id.to_string());

        let chat = self
            .chats
            .get_mut(chat_id)
            .ok_or_else(|| StoreError::ChatNotFound(chat_id.to_string()))?;

        let message = Message {
            id: Uuid::new_v4().to_string(),
            sender_id: self.identity.id.clone(),
            kind,
            content: content.to_string(),
            timestamp: Utc::now(),
        };

        tracing::debug!("Appending message {} to chat {}", message.id, chat_id);

        chat.last_message = message.preview();
        chat.timestamp = message.timestamp;

        let idx = chat.messages.len();
        chat.messages.push(message);
        Ok(&chat.messages[idx])
    }

    /// Zero the unread counter of a chat. Unknown ids are a no-op.
    pub fn mark_chat_read(&mut self, chat_id: &str) {
        if let Some(chat) = self.chats.get_mut(chat_id) {
            if chat.unread > 0 {
                tracing::debug!("Marking chat {} read ({} unread)", chat_id, chat.unread);
                chat.unread = 0;
            }
        }
    }

    /// Insert a post at the front of the order.
    fn insert_post(&mut self, post: Post) {
        let id = post.id.clone();
        self.post_order.retain(|existing| existing != &id);
        self.post_order.insert(0, id.clone());
        self.posts.insert(id, post);
    }

    /// Insert a chat at the front of the order.
    fn insert_chat(&mut self, chat: Chat) {
        let id = chat.id.clone();
        self.chat_order.retain(|existing| existing != &id);
        self.chat_order.insert(0, id.clone());
        self.chats.insert(id, chat);
    }

    /// Populate with the demo dataset.
    ///
    /// Timestamps are offsets from "now" so relative times render sensibly
    /// whenever the app starts.
    fn populate_seed_data(&mut self) {
        let now = Utc::now();
        let me = self.identity.clone();

        let p1 = Post {
            id: "p1".to_string(),
            user_id: "u1".to_string(),
            user_nickname: "Secret Squirrel".to_string(),
            user_avatar: "emerald".to_string(),
            category: Category::Moment,
            content: "Sometimes I just want to sit under a tree and forget the world exists for a while. 🌳 #peace".to_string(),
            images: vec!["https://picsum.photos/600/400".to_string()],
            audio: None,
            is_live_photo: true,
            likes: 12,
            comments: vec![Comment {
                id: "cm1".to_string(),
                user_id: "u99".to_string(),
                nickname: "Forest Spirit".to_string(),
                user_avatar: "green".to_string(),
                content: "Take a deep breath.".to_string(),
                timestamp: now - Duration::minutes(50),
            }],
            timestamp: now - Duration::hours(1),
            location: None,
        };

        let p2 = Post {
            id: "p2".to_string(),
            user_id: "u2".to_string(),
            user_nickname: "Retro Gamer".to_string(),
            user_avatar: "indigo".to_string(),
            category: Category::Game,
            content: "Anyone else excited for the new RPG release next week? Looking for teammates!"
                .to_string(),
            images: Vec::new(),
            audio: None,
            is_live_photo: false,
            likes: 45,
            comments: Vec::new(),
            timestamp: now - Duration::hours(2),
            location: None,
        };

        let p3 = Post {
            id: "p3".to_string(),
            user_id: "u3".to_string(),
            user_nickname: "Melody Maker".to_string(),
            user_avatar: "rose".to_string(),
            category: Category::Music,
            content: "Just wrote this little melody, what do you think? (Imaginary Audio)"
                .to_string(),
            images: Vec::new(),
            audio: Some("0:45".to_string()),
            is_live_photo: false,
            likes: 8,
            comments: Vec::new(),
            timestamp: now - Duration::minutes(250),
            location: None,
        };

        let p4 = Post {
            id: "p4".to_string(),
            user_id: "u4".to_string(),
            user_nickname: "Cinephile".to_string(),
            user_avatar: "stone".to_string(),
            category: Category::Movie,
            content: "That plot twist at the end... I am still recovering. No spoilers but wow."
                .to_string(),
            images: Vec::new(),
            audio: None,
            is_live_photo: false,
            likes: 23,
            comments: Vec::new(),
            timestamp: now - Duration::days(1),
            location: None,
        };

        let p_me_1 = Post {
            id: "p_me_1".to_string(),
            user_id: me.id.clone(),
            user_nickname: me.nickname.clone(),
            user_avatar: me.avatar.clone(),
            category: Category::Love,
            content: "Thinking about sending a letter to my future self. What should I say?"
                .to_string(),
            images: Vec::new(),
            audio: None,
            is_live_photo: false,
            likes: 5,
            comments: Vec::new(),
            timestamp: now - Duration::hours(28),
            location: None,
        };

        let p_me_2 = Post {
            id: "p_me_2".to_string(),
            user_id: me.id.clone(),
            user_nickname: me.nickname.clone(),
            user_avatar: me.avatar.clone(),
            category: Category::Moment,
            content: "The sunset today was absolutely breathtaking. 🌅".to_string(),
            images: vec!["https://picsum.photos/id/10/600/400".to_string()],
            audio: None,
            is_live_photo: false,
            likes: 18,
            comments: Vec::new(),
            timestamp: now - Duration::hours(56),
            location: None,
        };

        // Insert oldest first so the most recent ends up at the front.
        self.insert_post(p_me_2);
        self.insert_post(p_me_1);
        self.insert_post(p4);
        self.insert_post(p3);
        self.insert_post(p2);
        self.insert_post(p1);

        let c1 = Chat {
            id: "c1".to_string(),
            user_id: "u5".to_string(),
            user_name: "Quiet Tree".to_string(),
            user_avatar: "amber".to_string(),
            last_message: "Hey, I saw your post about the movie!".to_string(),
            timestamp: now - Duration::minutes(2),
            unread: 2,
            messages: vec![
                Message {
                    id: "m1".to_string(),
                    sender_id: "u5".to_string(),
                    kind: MessageKind::Text,
                    content: "Hi there!".to_string(),
                    timestamp: now - Duration::hours(1),
                },
                Message {
                    id: "m2".to_string(),
                    sender_id: me.id.clone(),
                    kind: MessageKind::Text,
                    content: "Hello! How are you?".to_string(),
                    timestamp: now - Duration::minutes(58),
                },
                Message {
                    id: "m3".to_string(),
                    sender_id: "u5".to_string(),
                    kind: MessageKind::Text,
                    content: "Hey, I saw your post about the movie!".to_string(),
                    timestamp: now - Duration::minutes(2),
                },
            ],
        };

        let c2 = Chat {
            id: "c2".to_string(),
            user_id: "u6".to_string(),
            user_name: "Blue Whale".to_string(),
            user_avatar: "sky".to_string(),
            last_message: "Do you play on PC or Console?".to_string(),
            timestamp: now - Duration::minutes(83),
            unread: 0,
            messages: vec![Message {
                id: "m4".to_string(),
                sender_id: "u6".to_string(),
                kind: MessageKind::Text,
                content: "Do you play on PC or Console?".to_string(),
                timestamp: now - Duration::minutes(83),
            }],
        };

        self.insert_chat(c2);
        self.insert_chat(c1);
    }
}
