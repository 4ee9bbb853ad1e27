//! Color palette for the TUI
//!
//! Muted colors on a dark surface; accents only where something needs attention

use ratatui::style::Color;

// UI Chrome
pub const BORDER: Color = Color::Rgb(100, 110, 130);
pub const BRAND: Color = Color::Rgb(100, 180, 220);
pub const SURFACE: Color = Color::Rgb(30, 32, 40);
pub const SURFACE_HIGHLIGHT: Color = Color::Rgb(50, 55, 70);

// Text
pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 230);
pub const TEXT_DIM: Color = Color::Rgb(130, 135, 150);
pub const TEXT_MUTED: Color = Color::Rgb(90, 95, 110);

// Branches
pub const CURRENT_BRANCH: Color = Color::Rgb(120, 180, 120);
pub const COMMIT_HASH: Color = Color::Rgb(100, 140, 200);

// Status (semantic)
pub const STATUS_OK: Color = Color::Rgb(120, 180, 120);
pub const ERROR: Color = Color::Rgb(200, 100, 100);
pub const WARNING: Color = Color::Rgb(200, 160, 80);
