//! Tests for handler module

use super::*;
use crate::input_key::InputKey;
use crate::message::{Message, RequestId};
use crate::state::{AppState, PLACEHOLDER_TEXT};
use advice_core::{Advice, FetchFailureKind, WidgetPhase};

fn advice(id: u64, text: &str) -> Advice {
    Advice::new(id, text).unwrap()
}

/// Send RequestAdvice and return the id of the issued fetch
fn start_request(state: &mut AppState) -> RequestId {
    let result = update(state, Message::RequestAdvice);
    match result.action {
        Some(UpdateAction::FetchAdvice { request_id }) => request_id,
        other => panic!("expected FetchAdvice action, got {:?}", other),
    }
}

fn fail(request_id: RequestId, code: u16) -> Message {
    Message::AdviceFetchFailed {
        request_id,
        kind: FetchFailureKind::Status(code),
        error: format!("expected HTTP 200, got {}", code),
    }
}

// ─────────────────────────────────────────────────────────
// Quit
// ─────────────────────────────────────────────────────────

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = AppState::new();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, WidgetPhase::Quitting);
    assert!(state.should_quit());
}

#[test]
fn test_q_and_escape_keys_produce_quit() {
    let state = AppState::new();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
    assert!(matches!(handle_key(&state, InputKey::Esc), Some(Message::Quit)));
    assert!(matches!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_roll_keys_produce_request_advice() {
    let state = AppState::new();
    for key in [
        InputKey::Char(' '),
        InputKey::Enter,
        InputKey::Char('d'),
        InputKey::Char('r'),
    ] {
        assert!(matches!(
            handle_key(&state, key),
            Some(Message::RequestAdvice)
        ));
    }
}

#[test]
fn test_unmapped_key_is_ignored() {
    let state = AppState::new();
    assert!(handle_key(&state, InputKey::Char('x')).is_none());
}

#[test]
fn test_key_message_is_followed_up() {
    let mut state = AppState::new();
    let result = update(&mut state, Message::Key(InputKey::Char(' ')));
    assert!(matches!(result.message, Some(Message::RequestAdvice)));
    // The key itself does not change state; the follow-up does
    assert!(!state.is_loading());
}

// ─────────────────────────────────────────────────────────
// Request lifecycle
// ─────────────────────────────────────────────────────────

#[test]
fn test_request_advice_enters_loading() {
    let mut state = AppState::new();

    let request_id = start_request(&mut state);

    assert!(state.is_loading());
    assert!(!state.trigger_enabled());
    assert_eq!(state.in_flight, Some(request_id));
}

#[test]
fn test_success_sets_advice_and_returns_to_idle() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);

    update(
        &mut state,
        Message::AdviceReceived {
            request_id,
            advice: advice(7, "Test."),
        },
    );

    assert_eq!(state.phase, WidgetPhase::Idle);
    assert!(state.trigger_enabled());
    assert_eq!(state.display_id(), 7);
    assert_eq!(state.display_text(), "Test.");
}

#[test]
fn test_repeated_slip_counts_as_success() {
    let mut state = AppState::new();
    for _ in 0..2 {
        let request_id = start_request(&mut state);
        update(
            &mut state,
            Message::AdviceReceived {
                request_id,
                advice: advice(42, "Do it."),
            },
        );
    }

    assert_eq!(state.succeeded_requests, 2);
    assert_eq!(state.failed_requests, 0);
    assert_eq!(state.display_id(), 42);
}

#[test]
fn test_failure_keeps_previous_advice() {
    let mut state = AppState::new();
    state.current_advice = Some(advice(3, "Keep calm."));
    let request_id = start_request(&mut state);

    update(&mut state, fail(request_id, 500));

    assert_eq!(state.phase, WidgetPhase::Idle);
    assert_eq!(state.display_id(), 3);
    assert_eq!(state.display_text(), "Keep calm.");
}

#[test]
fn test_failure_before_first_advice_keeps_placeholder() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);

    update(&mut state, fail(request_id, 503));

    assert!(state.trigger_enabled());
    assert_eq!(state.display_id(), 0);
    assert_eq!(state.display_text(), PLACEHOLDER_TEXT);
}

#[test]
fn test_failure_records_one_diagnostic_error() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);

    update(&mut state, fail(request_id, 503));

    assert_eq!(state.diagnostics.error_count(), 1);
    let entry = state.diagnostics.last_error().unwrap();
    assert!(entry.message.contains("status 503"));
}

#[test]
fn test_network_failure_is_swallowed() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);

    let result = update(
        &mut state,
        Message::AdviceFetchFailed {
            request_id,
            kind: FetchFailureKind::Network,
            error: "connection refused".to_string(),
        },
    );

    assert!(result.action.is_none());
    assert!(result.message.is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_sequential_requests_show_only_second_response() {
    let mut state = AppState::new();

    let first = start_request(&mut state);
    update(
        &mut state,
        Message::AdviceReceived {
            request_id: first,
            advice: advice(1, "First."),
        },
    );

    let second = start_request(&mut state);
    update(
        &mut state,
        Message::AdviceReceived {
            request_id: second,
            advice: advice(2, "Second."),
        },
    );

    assert_eq!(state.display_id(), 2);
    assert_eq!(state.display_text(), "Second.");
}

// ─────────────────────────────────────────────────────────
// Overlap policy
// ─────────────────────────────────────────────────────────

#[test]
fn test_request_while_loading_is_rejected() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);

    let result = update(&mut state, Message::RequestAdvice);

    assert!(result.action.is_none());
    assert_eq!(state.in_flight, Some(request_id));
    assert_eq!(state.rejected_requests, 1);
    // A rejection is a debug diagnostic, not an error
    assert_eq!(state.diagnostics.error_count(), 0);
    assert_eq!(state.diagnostics.len(), 1);
}

#[test]
fn test_stale_completion_is_ignored() {
    let mut state = AppState::new();
    let first = start_request(&mut state);
    update(&mut state, fail(first, 500));
    let second = start_request(&mut state);

    // A late answer for the first request must not resolve the second
    update(
        &mut state,
        Message::AdviceReceived {
            request_id: first,
            advice: advice(9, "Late."),
        },
    );

    assert!(state.is_loading());
    assert_eq!(state.in_flight, Some(second));
    assert!(state.current_advice.is_none());
}

#[test]
fn test_completion_without_request_is_ignored() {
    let mut state = AppState::new();

    update(
        &mut state,
        Message::AdviceReceived {
            request_id: RequestId(42),
            advice: advice(42, "Unasked."),
        },
    );

    assert!(state.current_advice.is_none());
    assert_eq!(state.phase, WidgetPhase::Idle);
}

#[test]
fn test_request_after_quit_is_ignored() {
    let mut state = AppState::new();
    update(&mut state, Message::Quit);

    let result = update(&mut state, Message::RequestAdvice);

    assert!(result.action.is_none());
    assert!(state.should_quit());
}

#[test]
fn test_completion_after_quit_keeps_quitting() {
    let mut state = AppState::new();
    let request_id = start_request(&mut state);
    update(&mut state, Message::Quit);

    update(
        &mut state,
        Message::AdviceReceived {
            request_id,
            advice: advice(5, "Bye."),
        },
    );

    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Tick
// ─────────────────────────────────────────────────────────

#[test]
fn test_tick_animates_dice_only_while_loading() {
    let mut state = AppState::new();
    update(&mut state, Message::Tick);
    assert_eq!(state.dice.animation_frame, 0);

    start_request(&mut state);
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.dice.animation_frame, 2);
}
