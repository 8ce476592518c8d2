//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
///
/// Roll keys are mapped even while loading; the update function decides
/// whether the request is accepted.
pub fn handle_key(_state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Roll the dice
        InputKey::Char(' ') | InputKey::Enter => Some(Message::RequestAdvice),
        InputKey::Char('d') | InputKey::Char('r') => Some(Message::RequestAdvice),

        _ => None,
    }
}
