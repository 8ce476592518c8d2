//! Key hints footer

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// `[space] Roll  [q] Quit`, with the roll hint muted while loading
pub struct KeyHints {
    loading: bool,
}

impl KeyHints {
    pub fn new(loading: bool) -> Self {
        Self { loading }
    }
}

impl Widget for KeyHints {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let roll = if self.loading {
            vec![
                Span::styled("[space]", styles::text_muted()),
                Span::styled(" Rolling...", styles::text_muted()),
            ]
        } else {
            vec![
                Span::styled("[space]", styles::keybinding()),
                Span::styled(" Roll", styles::text_muted()),
            ]
        };

        let mut spans = roll;
        spans.push(Span::raw("  "));
        spans.push(Span::styled("[q]", styles::keybinding()));
        spans.push(Span::styled(" Quit", styles::text_muted()));

        Line::from(spans)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}
