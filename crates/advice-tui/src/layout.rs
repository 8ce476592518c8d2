//! Screen layout definitions for the TUI
//!
//! The advice card is centered on screen and grows with the advice text;
//! a single key-hint row sits at the bottom.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// Widest the card gets on large terminals
pub const CARD_MAX_WIDTH: u16 = 56;

/// Horizontal space taken by borders (2) and padding (4)
const CARD_H_CHROME: u16 = 6;

/// Rows of the card besides the advice text: top border, spacer, heading,
/// blank, blank, divider, blank, bottom border (where the dice sits)
const CARD_V_CHROME: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Advice card (heading, text, divider)
    pub card: Rect,

    /// Key hints footer
    pub hints: Rect,
}

/// Create the main screen layout for the given advice text
pub fn create(area: Rect, text: &str) -> ScreenAreas {
    let hints_height = u16::from(area.height > 1);
    let hints = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(hints_height),
        width: area.width,
        height: hints_height,
    };

    let available_height = area.height.saturating_sub(hints_height);
    let width = CARD_MAX_WIDTH.min(area.width.saturating_sub(4));
    let text_width = width.saturating_sub(CARD_H_CHROME);
    let height = (wrapped_height(text, text_width) + CARD_V_CHROME).min(available_height);

    let card = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (available_height - height) / 2,
        width,
        height,
    };

    ScreenAreas { card, hints }
}

/// One-row area centered on the card's bottom border
pub fn dice_button_area(card: Rect, button_width: u16) -> Rect {
    if card.height == 0 {
        return Rect::default();
    }
    let width = button_width.min(card.width);
    Rect {
        x: card.x + (card.width - width) / 2,
        y: card.bottom() - 1,
        width,
        height: 1,
    }
}

/// Rows needed to show `text` word-wrapped at `width` columns
pub fn wrapped_height(text: &str, width: u16) -> u16 {
    let width = usize::from(width);
    if width == 0 {
        return 1;
    }

    let mut lines = 1usize;
    let mut line_width = 0usize;
    for word in text.split_whitespace() {
        let word_width = word.width();
        if line_width == 0 {
            line_width = word_width;
        } else if line_width + 1 + word_width <= width {
            line_width += 1 + word_width;
        } else {
            lines += 1;
            line_width = word_width;
        }
        // Words longer than a line are broken across rows
        if line_width > width {
            lines += (line_width - 1) / width;
            line_width = (line_width - 1) % width + 1;
        }
    }

    u16::try_from(lines).unwrap_or(u16::MAX)
}
