//! Color theme constants for the Hollow UI
//!
//! Defines the emerald-accent dark palette used throughout the UI.

use ratatui::style::Color;

// ============================================================================
// Emerald Dark Color Theme
// ============================================================================

/// Primary accent - emerald green, used for highlights and the active tab
pub const COLOR_ACCENT: Color = Color::Rgb(5, 150, 105); // emerald #059669

/// Primary border color - dark gray for the minimal dark aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Header text color - white for titles and the logo
pub const COLOR_HEADER: Color = Color::White;

/// Body text color
pub const COLOR_TEXT: Color = Color::Rgb(229, 231, 235); // gray #E5E7EB

/// Dim text for timestamps and less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background color, used behind block cursors and avatar initials
pub const COLOR_BG: Color = Color::Rgb(16, 20, 18);

// ============================================================================
// Content Colors
// ============================================================================

/// Heart color for posts the viewer has liked
pub const COLOR_LIKE: Color = Color::Rgb(244, 63, 94); // rose #F43F5E

/// Unread badge color on the chat list and tab bar
pub const COLOR_UNREAD: Color = Color::Rgb(239, 68, 68); // red #EF4444

/// LIVE photo marker color
pub const COLOR_LIVE: Color = Color::Rgb(245, 158, 11); // amber #F59E0B

/// Background for incoming chat bubbles
pub const COLOR_BUBBLE: Color = Color::Rgb(38, 42, 40);

/// Inline error text (login failures, compose validation)
pub const COLOR_ERROR: Color = Color::Red;
