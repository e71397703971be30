//! Navigation methods for the App.

use crate::auth::AuthState;

use super::{App, Route, Tab};

/// Decide whether the router must leave the given route for the given
/// session state.
///
/// Pure; re-evaluated after every auth-state change and every route change.
/// `Unknown` never redirects: the loading screen owns that phase.
pub fn redirect_for(state: AuthState, route: &Route) -> Option<Route> {
    match state {
        AuthState::Unknown => None,
        AuthState::Unauthenticated if *route != Route::Login => Some(Route::Login),
        AuthState::Authenticated if *route == Route::Login => Some(Route::Tabs(Tab::Feed)),
        _ => None,
    }
}

impl App {
    /// The route currently on screen.
    pub fn current_route(&self) -> &Route {
        &self.route
    }

    /// The active tab, when the router sits on the main screen.
    pub fn active_tab(&self) -> Option<Tab> {
        match &self.route {
            Route::Tabs(tab) => Some(*tab),
            _ => None,
        }
    }

    /// Push a new route, remembering the current one for back.
    ///
    /// Navigating to the route already on screen is a no-op. The guard runs
    /// after the change and may bounce the router elsewhere.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        let previous = std::mem::replace(&mut self.route, route);
        self.back_stack.push(previous);
        self.mark_dirty();
        self.apply_route_guard();
    }

    /// Swap the current route without touching the back stack.
    pub fn replace(&mut self, route: Route) {
        if route == self.route {
            return;
        }

        self.route = route;
        self.mark_dirty();
        self.apply_route_guard();
    }

    /// Pop back to the previous route, if there is one.
    pub fn back(&mut self) {
        if let Some(previous) = self.back_stack.pop() {
            self.route = previous;
            self.mark_dirty();
            self.apply_route_guard();
        }
    }

    /// Re-run the route guard against the current session state.
    ///
    /// A redirect replaces the current route and drops the back stack, so
    /// back cannot cross the login wall afterwards.
    pub fn apply_route_guard(&mut self) {
        if let Some(target) = redirect_for(self.gate.state(), &self.route) {
            tracing::debug!("Route guard redirect: {:?} -> {:?}", self.route, target);
            self.back_stack.clear();
            self.route = target;
            self.mark_dirty();
        }
    }

    /// Switch to another tab of the main screen.
    ///
    /// Only meaningful while the router sits on the tabs; tab switches
    /// replace rather than push, so back never walks tab to tab.
    pub fn switch_tab(&mut self, tab: Tab) {
        if matches!(self.route, Route::Tabs(_)) {
            self.replace(Route::Tabs(tab));
        }
    }

    /// Move the selection up in the list the current screen shows.
    pub fn move_up(&mut self) {
        match self.active_tab() {
            Some(Tab::Feed) => {
                if self.feed_index > 0 {
                    self.feed_index -= 1;
                    self.mark_dirty();
                }
            }
            Some(Tab::Messages) => {
                if self.chats_index > 0 {
                    self.chats_index -= 1;
                    self.mark_dirty();
                }
            }
            Some(Tab::Profile) => {
                if self.profile_index > 0 {
                    self.profile_index -= 1;
                    self.mark_dirty();
                }
            }
            None => {}
        }
    }

    /// Move the selection down in the list the current screen shows.
    pub fn move_down(&mut self) {
        match self.active_tab() {
            Some(Tab::Feed) => {
                let max = self.visible_posts().len();
                if max > 0 && self.feed_index < max - 1 {
                    self.feed_index += 1;
                    self.mark_dirty();
                }
            }
            Some(Tab::Messages) => {
                let max = self.store.chat_count();
                if max > 0 && self.chats_index < max - 1 {
                    self.chats_index += 1;
                    self.mark_dirty();
                }
            }
            Some(Tab::Profile) => {
                let max = self.store.posts_by_user(self.store.identity().id.as_str()).len();
                if max > 0 && self.profile_index < max - 1 {
                    self.profile_index += 1;
                    self.mark_dirty();
                }
            }
            None => {}
        }
    }

    /// Open the post detail for the feed selection.
    pub fn open_selected_post(&mut self) {
        let id = match self.visible_posts().get(self.feed_index) {
            Some(post) => post.id.clone(),
            None => return,
        };
        self.navigate(Route::PostDetail(id));
    }

    /// Open the post detail for the profile selection.
    pub fn open_selected_profile_post(&mut self) {
        let me = self.store.identity().id.clone();
        let id = match self.store.posts_by_user(&me).get(self.profile_index) {
            Some(post) => post.id.clone(),
            None => return,
        };
        self.navigate(Route::PostDetail(id));
    }

    /// Open the chat detail for the chat list selection.
    pub fn open_selected_chat(&mut self) {
        let id = match self.store.chats().get(self.chats_index) {
            Some(chat) => chat.id.clone(),
            None => return,
        };
        self.open_chat(id);
    }

    /// Open a chat inside the Messages tab and zero its unread counter.
    ///
    /// Unknown ids are ignored.
    pub fn open_chat(&mut self, chat_id: String) {
        if self.store.chat(&chat_id).is_none() {
            return;
        }

        self.store.mark_chat_read(&chat_id);
        self.chat_input.clear();
        self.open_chat_id = Some(chat_id);
        self.mark_dirty();
    }

    /// Leave the chat detail, back to the chat list.
    pub fn close_chat(&mut self) {
        self.open_chat_id = None;
        self.chat_input.clear();
        self.mark_dirty();
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_app;

    #[test]
    fn test_redirect_unknown_never_redirects() {
        assert_eq!(redirect_for(AuthState::Unknown, &Route::Login), None);
        assert_eq!(redirect_for(AuthState::Unknown, &Route::Tabs(Tab::Feed)), None);
        assert_eq!(
            redirect_for(AuthState::Unknown, &Route::PostDetail("p1".to_string())),
            None
        );
    }

    #[test]
    fn test_redirect_unauthenticated_walls_off_content() {
        assert_eq!(
            redirect_for(AuthState::Unauthenticated, &Route::Tabs(Tab::Feed)),
            Some(Route::Login)
        );
        assert_eq!(
            redirect_for(
                AuthState::Unauthenticated,
                &Route::PostDetail("p1".to_string())
            ),
            Some(Route::Login)
        );
        assert_eq!(redirect_for(AuthState::Unauthenticated, &Route::Login), None);
    }

    #[test]
    fn test_redirect_authenticated_leaves_login() {
        assert_eq!(
            redirect_for(AuthState::Authenticated, &Route::Login),
            Some(Route::Tabs(Tab::Feed))
        );
        assert_eq!(
            redirect_for(AuthState::Authenticated, &Route::Tabs(Tab::Messages)),
            None
        );
        assert_eq!(
            redirect_for(
                AuthState::Authenticated,
                &Route::PostDetail("p1".to_string())
            ),
            None
        );
    }

    #[test]
    fn test_navigate_pushes_and_back_pops() {
        let mut app = test_app();
        app.gate.apply_resolution(true);

        app.navigate(Route::PostDetail("p1".to_string()));
        assert_eq!(app.current_route(), &Route::PostDetail("p1".to_string()));

        app.back();
        assert_eq!(app.current_route(), &Route::Tabs(Tab::Feed));

        // Back with an empty stack stays put.
        app.back();
        assert_eq!(app.current_route(), &Route::Tabs(Tab::Feed));
    }

    #[test]
    fn test_guard_bounces_deep_link_when_signed_out() {
        let mut app = test_app();
        app.gate.apply_resolution(false);
        app.apply_route_guard();
        assert_eq!(app.current_route(), &Route::Login);

        app.navigate(Route::PostDetail("p1".to_string()));
        assert_eq!(app.current_route(), &Route::Login);
        // The bounce drops the stack; back cannot reach the detail.
        app.back();
        assert_eq!(app.current_route(), &Route::Login);
    }

    #[test]
    fn test_guard_bounces_login_when_signed_in() {
        let mut app = test_app();
        app.gate.apply_resolution(true);

        app.navigate(Route::Login);
        assert_eq!(app.current_route(), &Route::Tabs(Tab::Feed));
    }

    #[test]
    fn test_switch_tab_replaces() {
        let mut app = test_app();
        app.gate.apply_resolution(true);

        app.switch_tab(Tab::Messages);
        assert_eq!(app.current_route(), &Route::Tabs(Tab::Messages));

        // Tab switches don't grow the back stack.
        app.back();
        assert_eq!(app.current_route(), &Route::Tabs(Tab::Messages));
    }

    #[test]
    fn test_switch_tab_ignored_off_tabs() {
        let mut app = test_app();
        app.gate.apply_resolution(true);
        app.navigate(Route::PostDetail("p1".to_string()));

        app.switch_tab(Tab::Profile);
        assert_eq!(app.current_route(), &Route::PostDetail("p1".to_string()));
    }

    #[test]
    fn test_move_selection_clamps() {
        let mut app = test_app();
        app.gate.apply_resolution(true);

        app.move_up();
        assert_eq!(app.feed_index, 0);

        let max = app.visible_posts().len();
        for _ in 0..max + 5 {
            app.move_down();
        }
        assert_eq!(app.feed_index, max - 1);
    }

    #[test]
    fn test_open_selected_post_navigates() {
        let mut app = test_app();
        app.gate.apply_resolution(true);

        let first_id = app.visible_posts()[0].id.clone();
        app.open_selected_post();
        assert_eq!(app.current_route(), &Route::PostDetail(first_id));
    }

    #[test]
    fn test_open_chat_zeroes_unread() {
        let mut app = test_app();
        app.gate.apply_resolution(true);
        app.switch_tab(Tab::Messages);

        let chat_id = app.store.chats()[0].id.clone();
        let had_unread = app.store.chats()[0].unread > 0;
        assert!(had_unread);

        app.open_selected_chat();
        assert_eq!(app.open_chat_id.as_deref(), Some(chat_id.as_str()));
        assert_eq!(app.store.chat(&chat_id).unwrap().unread, 0);

        app.close_chat();
        assert!(app.open_chat_id.is_none());
    }

    #[test]
    fn test_open_chat_unknown_id_is_noop() {
        let mut app = test_app();
        app.open_chat("nope".to_string());
        assert!(app.open_chat_id.is_none());
    }
}
