//! UI rendering for Hollow
//!
//! Pure functions from `&App` to the frame. `render` dispatches on the auth
//! gate first (boot spinner until the persisted session resolves), then on
//! the current route:
//!
//! - `Login` - logo, tagline, and the one-tap sign-in dialog
//! - `Tabs` - the active tab's screen above the bottom tab bar
//! - `PostDetail` - full post card plus comments
//!
//! The compose overlay draws on top of whatever screen is beneath it.

mod bottom_nav;
mod chat_detail;
mod chats;
mod compose;
mod feed;
pub mod helpers;
mod loading;
mod login;
mod post_detail;
mod profile;
pub mod theme;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, Route, Tab};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on auth state and current route
pub fn render(frame: &mut Frame, app: &App) {
    if !app.gate.state().is_resolved() {
        loading::render_loading_screen(frame, app);
        return;
    }

    match &app.route {
        Route::Login => login::render_login_screen(frame, app),
        Route::Tabs(tab) => render_tabs(frame, *tab, app),
        Route::PostDetail(post_id) => post_detail::render_post_detail(frame, app, post_id),
    }

    // Compose overlay (if open)
    compose::render_compose_modal(frame, app);
}

fn render_tabs(frame: &mut Frame, tab: Tab, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // tab content
            Constraint::Length(2), // bottom tab bar
        ])
        .split(frame.area());

    match tab {
        Tab::Feed => feed::render_feed(frame, chunks[0], app),
        Tab::Messages => {
            if app.open_chat_id.is_some() {
                chat_detail::render_chat_detail(frame, chunks[0], app);
            } else {
                chats::render_chat_list(frame, chunks[0], app);
            }
        }
        Tab::Profile => profile::render_profile(frame, chunks[0], app),
    }

    bottom_nav::render_bottom_nav(frame, chunks[1], app);
}
