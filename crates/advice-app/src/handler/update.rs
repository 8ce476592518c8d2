//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{advice, keys::handle_key, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.is_loading() {
                state.dice.tick();
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Advice Messages
        // ─────────────────────────────────────────────────────────
        Message::RequestAdvice => advice::handle_request_advice(state),

        Message::AdviceReceived { request_id, advice } => {
            advice::handle_advice_received(state, request_id, advice)
        }

        Message::AdviceFetchFailed {
            request_id,
            kind,
            error,
        } => advice::handle_advice_fetch_failed(state, request_id, kind, error),
    }
}
