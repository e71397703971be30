//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Route`] - Which screen the router points at
//! - [`Tab`] - Which tab of the main screen is active
//! - [`TabBarView`] - Render-ready projection of the bottom tab bar
//! - [`ComposeState`] - Compose overlay state

use crate::models::Category;
use crate::widgets::InputField;

/// A navigable screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The login wall.
    Login,
    /// The main screen, showing one of the three tabs.
    Tabs(Tab),
    /// A full post with its comments.
    PostDetail(String),
}

/// Tabs of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Feed,
    Messages,
    Profile,
}

impl Tab {
    /// All tabs in bar order.
    pub const ALL: [Tab; 3] = [Tab::Feed, Tab::Messages, Tab::Profile];

    /// Display label for the tab bar.
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Feed => "Feed",
            Tab::Messages => "Messages",
            Tab::Profile => "Profile",
        }
    }
}

/// One slot of the bottom tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabEntry {
    /// The tab this slot switches to
    pub tab: Tab,
    /// Display label
    pub label: &'static str,
    /// Unread count shown as a badge, when nonzero
    pub badge: Option<u32>,
}

/// Render-ready projection of the bottom tab bar.
///
/// Lists exactly what the widget consumes: the ordered entries and which
/// tab is active. Built fresh for each frame by the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabBarView {
    /// Slots in bar order
    pub entries: Vec<TabEntry>,
    /// The active tab
    pub active: Tab,
}

/// Compose overlay state, present while the overlay is open.
#[derive(Debug, Clone, Default)]
pub struct ComposeState {
    /// Post body under edit
    pub input: InputField,
    /// Index into [`Category::ALL`] the picker sits on
    pub category_index: usize,
    /// Whether a photo attachment is toggled on
    pub attach_photo: bool,
    /// Whether the attached photo carries the live badge
    pub live_photo: bool,
    /// Inline validation error from the last submit attempt
    pub error: Option<String>,
}

impl ComposeState {
    /// The category the picker currently sits on.
    pub fn selected_category(&self) -> Category {
        Category::ALL[self.category_index % Category::ALL.len()]
    }

    /// Move the category picker forward, wrapping.
    pub fn next_category(&mut self) {
        self.category_index = (self.category_index + 1) % Category::ALL.len();
    }

    /// Move the category picker backward, wrapping.
    pub fn prev_category(&mut self) {
        self.category_index = (self.category_index + Category::ALL.len() - 1) % Category::ALL.len();
    }
}
