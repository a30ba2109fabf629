//! Color theme constants for the ragdeck UI
//!
//! Defines the minimal dark color palette used throughout the UI.

use ratatui::style::Color;

/// Primary border color - dark gray for minimal aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important elements
pub const COLOR_ACCENT: Color = Color::White;

/// Header text color - white for the title
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Connected status - green
pub const COLOR_STATUS_OK: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Disconnected status - red
pub const COLOR_STATUS_ERR: Color = Color::Red;

/// Checking status - yellow
pub const COLOR_STATUS_WAIT: Color = Color::Yellow;
