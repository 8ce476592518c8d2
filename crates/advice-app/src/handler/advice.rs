//! Advice request lifecycle
//!
//! `Idle --RequestAdvice--> Loading --(AdviceReceived | AdviceFetchFailed)--> Idle`
//!
//! Only one request may be in flight. A trigger while loading is rejected here,
//! not merely hidden behind the disabled dice, so no second request is ever
//! issued and completions can never race.

use advice_core::{Advice, FetchFailureKind, LogEntry, WidgetPhase};
use tracing::{debug, error, info, warn};

use crate::message::RequestId;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub(crate) fn handle_request_advice(state: &mut AppState) -> UpdateResult {
    match state.phase {
        WidgetPhase::Quitting => UpdateResult::none(),
        WidgetPhase::Loading => {
            state.rejected_requests += 1;
            let in_flight = state
                .in_flight
                .map(|id| id.to_string())
                .unwrap_or_default();
            debug!("Rejected advice request: {} still in flight", in_flight);
            state.diagnostics.push(LogEntry::debug(format!(
                "Rejected advice request: {} still in flight",
                in_flight
            )));
            UpdateResult::none()
        }
        WidgetPhase::Idle => {
            let request_id = state.begin_request();
            info!("Requesting advice {}", request_id);
            UpdateResult::action(UpdateAction::FetchAdvice { request_id })
        }
    }
}

pub(crate) fn handle_advice_received(
    state: &mut AppState,
    request_id: RequestId,
    advice: Advice,
) -> UpdateResult {
    if !state.is_current_request(request_id) {
        warn!("Dropping stale advice for request {}", request_id);
        return UpdateResult::none();
    }

    info!("Advice {} resolved: #{}", request_id, advice.id());
    state.finish_request();
    state.succeeded_requests += 1;
    // Replaced even when the same slip comes back
    state.current_advice = Some(advice);
    UpdateResult::none()
}

pub(crate) fn handle_advice_fetch_failed(
    state: &mut AppState,
    request_id: RequestId,
    kind: FetchFailureKind,
    error: String,
) -> UpdateResult {
    if !state.is_current_request(request_id) {
        warn!("Dropping stale failure for request {}", request_id);
        return UpdateResult::none();
    }

    // Swallowed: the previous advice (or placeholder) stays on screen
    error!("Failed to fetch advice ({}): {}", kind, error);
    state.diagnostics.push(LogEntry::error(format!(
        "Failed to fetch advice ({}): {}",
        kind, error
    )));
    state.failed_requests += 1;
    state.finish_request();
    UpdateResult::none()
}
