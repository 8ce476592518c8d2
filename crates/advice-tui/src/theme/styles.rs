//! Semantic style builders for the advice card.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

pub fn placeholder() -> Style {
    text_muted().add_modifier(Modifier::ITALIC)
}

// --- Accent styles ---
pub fn heading() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn divider() -> Style {
    Style::default().fg(palette::DIVIDER)
}

// --- Dice button ---
pub fn dice_button(enabled: bool) -> Style {
    if enabled {
        Style::default()
            .fg(palette::CONTRAST_FG)
            .bg(palette::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(palette::CARD_BG)
            .bg(palette::ACCENT_DIM)
            .add_modifier(Modifier::DIM)
    }
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::KEY)
}

// --- Block builders ---
pub fn card_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette::BORDER_DIM))
        .padding(Padding::horizontal(2))
        .style(Style::default().bg(palette::CARD_BG))
}
