//! Main render/view function (View in TEA pattern)


use advice_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::{icons::IconSet, palette};
use crate::widgets::{AdviceCard, DiceButton, KeyHints};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`: the same state always draws the same frame,
/// apart from the dice face which the update loop animates.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let icons = IconSet::new(state.settings.ui.icons);
    let text = state.display_text();
    let areas = layout::create(area, text);

    let card = AdviceCard::new(state.display_id(), text, icons)
        .placeholder(state.current_advice.is_none());
    frame.render_widget(card, areas.card);

    let button = DiceButton::new(icons.dice(state.dice.face), state.trigger_enabled());
    let button_area = layout::dice_button_area(areas.card, button.width());
    frame.render_widget(button, button_area);

    frame.render_widget(KeyHints::new(state.is_loading()), areas.hints);
}
