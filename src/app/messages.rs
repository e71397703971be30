//! AppMessage enum for async communication within the application.

/// Messages received from async operations (session resolution, login).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// Startup session resolution finished
    AuthResolved(bool),
    /// Login flag write confirmed
    LoginSucceeded,
    /// Login flag write failed; the login screen offers a retry
    LoginFailed(String),
}
