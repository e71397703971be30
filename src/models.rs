use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category a post is filed under.
///
/// The order of [`Category::ALL`] is the order the category picker and the
/// feed filter present them in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Moment,
    Love,
    Game,
    Music,
    Movie,
    Friend,
}

impl Category {
    /// All categories in presentation order.
    pub const ALL: [Category; 6] = [
        Category::Moment,
        Category::Love,
        Category::Game,
        Category::Music,
        Category::Movie,
        Category::Friend,
    ];

    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Moment => "Moment",
            Category::Love => "Love",
            Category::Game => "Game",
            Category::Music => "Music",
            Category::Movie => "Movie",
            Category::Friend => "Friend",
        }
    }

    /// Glyph shown next to the label in the filter header and picker.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Moment => "🕓",
            Category::Love => "💌",
            Category::Game => "🎮",
            Category::Music => "🎵",
            Category::Movie => "🎬",
            Category::Friend => "🤝",
        }
    }

    /// Parse a lowercase category name.
    pub fn from_name(name: &str) -> Option<Category> {
        match name {
            "moment" => Some(Category::Moment),
            "love" => Some(Category::Love),
            "game" => Some(Category::Game),
            "music" => Some(Category::Music),
            "movie" => Some(Category::Movie),
            "friend" => Some(Category::Friend),
            _ => None,
        }
    }
}

/// The identity a client writes content as.
///
/// Constructed once at startup and handed to the [`ContentStore`] so every
/// write is stamped with the same author. Nothing else in the crate hardcodes
/// the current user's id.
///
/// [`ContentStore`]: crate::store::ContentStore
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserIdentity {
    /// Stable id for this user within the store.
    pub id: String,
    /// Nickname shown on posts and messages.
    pub nickname: String,
    /// Avatar tint name (rendered as a colored initial block).
    pub avatar: String,
    /// Whether this identity is an anonymous persona.
    pub is_anonymous: bool,
}

impl UserIdentity {
    /// The demo build's anonymous persona.
    pub fn anonymous() -> Self {
        Self {
            id: "me".to_string(),
            nickname: "Anonymous Fox".to_string(),
            avatar: "emerald".to_string(),
            is_anonymous: true,
        }
    }
}

/// A comment on a post. Owned by its parent [`Post`], immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: String,
    pub user_id: String,
    pub nickname: String,
    pub user_avatar: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// An anonymous post in the feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Unique identifier (seed literals or UUID v4 for created posts).
    pub id: String,
    /// Author id.
    pub user_id: String,
    /// Author nickname at time of posting.
    pub user_nickname: String,
    /// Author avatar tint at time of posting.
    pub user_avatar: String,
    /// Category the post is filed under.
    pub category: Category,
    /// Post body. Never empty or whitespace-only once stored.
    pub content: String,
    /// Attached image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Attached audio clip, as a duration string like "0:45".
    #[serde(default)]
    pub audio: Option<String>,
    /// Whether the first image is a live photo.
    #[serde(default)]
    pub is_live_photo: bool,
    /// Stored like count. Viewer-local toggles never write this back.
    pub likes: u32,
    /// Comments in insertion order. Append-only.
    #[serde(default)]
    pub comments: Vec<Comment>,
    /// When the post was created.
    pub timestamp: DateTime<Utc>,
    /// Optional free-form location tag.
    #[serde(default)]
    pub location: Option<String>,
}

impl Post {
    /// Number of comments on this post.
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Whether the post carries any media attachment.
    pub fn has_media(&self) -> bool {
        !self.images.is_empty() || self.audio.is_some()
    }
}

/// What a chat message's `content` field holds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    /// `content` is the literal text.
    Text,
    /// `content` is an image URL.
    Image,
    /// `content` is a duration string like "0:45".
    Audio,
    /// `content` is a sticker identifier.
    Sticker,
}

/// A single message inside a chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: String,
    /// Id of the sender. The current user's own id for outgoing messages.
    pub sender_id: String,
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// One-line preview for chat list rows and the chat's `last_message`.
    pub fn preview(&self) -> String {
        match self.kind {
            MessageKind::Text => self.content.clone(),
            MessageKind::Image => "[Image]".to_string(),
            MessageKind::Audio => format!("[Audio {}]", self.content),
            MessageKind::Sticker => "[Sticker]".to_string(),
        }
    }
}

/// A direct-message conversation with one counterparty.
///
/// `last_message` and `timestamp` are denormalized from the newest entry of
/// `messages`; every store write that appends a message maintains them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chat {
    pub id: String,
    /// Counterparty user id.
    pub user_id: String,
    pub user_name: String,
    pub user_avatar: String,
    /// Preview of the most recent message.
    pub last_message: String,
    /// Timestamp of the most recent message.
    pub timestamp: DateTime<Utc>,
    /// Messages not yet seen by the current user.
    pub unread: u32,
    /// Messages in chronological order. Append-only.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Chat {
    /// Whether the chat has unseen messages.
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}
