//! The advice card: heading, advice text and divider inside a rounded panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{icons::IconSet, styles};

use super::Divider;

/// Card showing `Advice #<id>` above the advice text
pub struct AdviceCard<'a> {
    id: u64,
    text: &'a str,
    placeholder: bool,
    icons: IconSet,
}

impl<'a> AdviceCard<'a> {
    pub fn new(id: u64, text: &'a str, icons: IconSet) -> Self {
        Self {
            id,
            text,
            placeholder: false,
            icons,
        }
    }

    /// Render the text as the muted placeholder prompt
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn heading(&self) -> String {
        format!("Advice #{}", self.id)
    }
}

impl Widget for AdviceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block();
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let [_, heading, _, text, _, divider, _] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Line::styled(self.heading(), styles::heading())
            .alignment(Alignment::Center)
            .render(heading, buf);

        let text_style = if self.placeholder {
            styles::placeholder()
        } else {
            styles::text_primary()
        };
        Paragraph::new(self.text)
            .style(text_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(text, buf);

        Divider::new(self.icons).render(divider, buf);
    }
}
