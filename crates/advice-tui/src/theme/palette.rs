//! Color palette: a dark slate card with a neon green accent.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Rgb(3, 7, 18); // Terminal background
pub const CARD_BG: Color = Color::Rgb(17, 24, 39); // Advice card

// --- Borders ---
pub const BORDER_DIM: Color = Color::Rgb(55, 65, 81);

// --- Accent ---
pub const ACCENT: Color = Color::Rgb(82, 255, 168); // Heading, dice button
pub const ACCENT_DIM: Color = Color::Rgb(41, 128, 84); // Dice button while loading

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::Rgb(209, 213, 219); // Advice text
pub const TEXT_MUTED: Color = Color::Rgb(107, 114, 128); // Placeholder, hints
pub const DIVIDER: Color = Color::Rgb(79, 91, 114);

/// Foreground on top of the accent (dice glyph)
pub const CONTRAST_FG: Color = Color::Rgb(17, 24, 39);

// --- Key hints ---
pub const KEY: Color = Color::Yellow;
