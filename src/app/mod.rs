//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Route`] / [`Tab`] - Where the router points
//! - [`TabBarView`] - Render-ready projection of the bottom tab bar
//! - [`AppMessage`] - Messages for async communication
//! - [`ComposeState`] - Compose overlay state

mod actions;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::redirect_for;
pub use types::{ComposeState, Route, Tab, TabBarView, TabEntry};

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::auth::SessionGate;
use crate::models::{Category, UserIdentity};
use crate::store::ContentStore;
use crate::traits::FlagStore;
use crate::widgets::InputField;

/// Main application state
pub struct App {
    /// Post and chat content for this session
    pub store: ContentStore,
    /// Session gate behind the login wall
    pub gate: SessionGate,
    /// Persisted flag storage, shared with the async session tasks
    pub flags: Arc<dyn FlagStore>,
    /// Route currently on screen
    pub route: Route,
    /// Routes to return to with back, most recent last
    pub back_stack: Vec<Route>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Selected index in the feed list
    pub feed_index: usize,
    /// Selected index in the chat list
    pub chats_index: usize,
    /// Selected index in the profile post list
    pub profile_index: usize,
    /// Active category filter on the feed (None = all)
    pub feed_filter: Option<Category>,
    /// Post ids the viewer liked this run; never written to the store
    pub liked: HashSet<String>,
    /// Compose overlay state, present while the overlay is open
    pub compose: Option<ComposeState>,
    /// Chat open inside the Messages tab, if any
    pub open_chat_id: Option<String>,
    /// Input line for the open chat
    pub chat_input: InputField,
    /// True while a login write is in flight
    pub login_pending: bool,
    /// Retryable login failure shown on the login screen
    pub login_error: Option<String>,
    /// Receiver for async messages (session resolution, login outcome)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Tick counter for animations (spinner)
    pub tick_count: u64,
    /// Current terminal width in columns
    pub terminal_width: u16,
    /// Current terminal height in rows
    pub terminal_height: u16,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
}

impl App {
    /// Create a new App instance backed by the given flag store.
    ///
    /// The store carries the seeded demo content; the session gate starts
    /// `Unknown` until [`App::start_auth_resolution`] reports back.
    pub fn new(flags: Arc<dyn FlagStore>) -> Self {
        Self::with_store(
            ContentStore::with_seed_data(UserIdentity::anonymous()),
            flags,
        )
    }

    /// Create a new App instance over an explicit content store.
    pub fn with_store(store: ContentStore, flags: Arc<dyn FlagStore>) -> Self {
        // Create the message channel for async communication
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            store,
            gate: SessionGate::new(),
            flags,
            route: Route::Tabs(Tab::Feed),
            back_stack: Vec::new(),
            should_quit: false,
            feed_index: 0,
            chats_index: 0,
            profile_index: 0,
            feed_filter: None,
            liked: HashSet::new(),
            compose: None,
            open_chat_id: None,
            chat_input: InputField::new(),
            login_pending: false,
            login_error: None,
            message_rx: Some(message_rx),
            message_tx,
            tick_count: 0,
            terminal_width: 80,  // Default, will be updated on first render
            terminal_height: 24, // Default, will be updated on first render
            needs_redraw: true,  // Start with redraw needed
        }
    }

    /// Get a clone of the message sender for passing to async tasks
    pub fn message_sender(&self) -> mpsc::UnboundedSender<AppMessage> {
        self.message_tx.clone()
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Increment the tick counter for animations
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Update the cached terminal dimensions
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Handle an incoming async message.
    ///
    /// All message handlers mark the app as dirty since they update visible
    /// state; gate transitions re-run the route guard.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::AuthResolved(authenticated) => {
                if self.gate.apply_resolution(authenticated) {
                    self.apply_route_guard();
                }
            }
            AppMessage::LoginSucceeded => {
                self.login_pending = false;
                self.login_error = None;
                self.gate.apply_login_success();
                self.apply_route_guard();
            }
            AppMessage::LoginFailed(error) => {
                tracing::warn!("Login failed: {}", error);
                self.login_pending = false;
                self.login_error = Some(error);
            }
        }
    }

    /// Build the render-ready projection of the bottom tab bar.
    pub fn tab_bar_view(&self) -> TabBarView {
        let unread = self.store.unread_total();
        let entries = Tab::ALL
            .iter()
            .map(|tab| TabEntry {
                tab: *tab,
                label: tab.label(),
                badge: match tab {
                    Tab::Messages if unread > 0 => Some(unread),
                    _ => None,
                },
            })
            .collect();

        TabBarView {
            entries,
            active: self.active_tab().unwrap_or_default(),
        }
    }
}

/// App over the seeded store and an in-memory flag store.
#[cfg(test)]
pub(crate) fn test_app() -> App {
    use crate::adapters::mock::MemoryFlagStore;
    App::new(Arc::new(MemoryFlagStore::new()))
}
