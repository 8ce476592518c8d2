//! Horizontal divider with a centered ornament

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{icons::IconSet, styles};

/// `──── ❚❚ ────` across the full width of its area
pub struct Divider {
    icons: IconSet,
}

impl Divider {
    pub fn new(icons: IconSet) -> Self {
        Self { icons }
    }

    fn line(&self, width: u16) -> String {
        let ornament = self.icons.pause();
        let width = usize::from(width);
        let ornament_width = ornament.width() + 2;
        if width < ornament_width + 2 {
            return "─".repeat(width);
        }
        let side = (width - ornament_width) / 2;
        format!("{} {} {}", "─".repeat(side), ornament, "─".repeat(side))
    }
}

impl Widget for Divider {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        Line::styled(self.line(area.width), styles::divider())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
