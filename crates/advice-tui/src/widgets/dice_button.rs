//! Round dice button that sits on the card's bottom border

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Dice trigger; dimmed and inert while a request is in flight
#[derive(Debug, Clone, Copy)]
pub struct DiceButton {
    glyph: &'static str,
    enabled: bool,
}

impl DiceButton {
    pub fn new(glyph: &'static str, enabled: bool) -> Self {
        Self { glyph, enabled }
    }

    /// Columns taken by the button: the glyph plus two cells either side
    pub fn width(&self) -> u16 {
        u16::try_from(self.glyph.width() + 4).unwrap_or(u16::MAX)
    }
}

impl Widget for DiceButton {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.height == 0 || area.width == 0 {
            return;
        }
        let style = styles::dice_button(self.enabled);
        buf.set_style(area, style);
        buf.set_stringn(
            area.x,
            area.y,
            format!("  {}  ", self.glyph),
            usize::from(area.width),
            style,
        );
    }
}
