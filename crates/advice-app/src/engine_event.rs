//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON lines.

use advice_core::Advice;

use crate::message::RequestId;

/// Domain events emitted by the Engine.
///
/// Subscribers see a consistent view of state changes: an event is only
/// emitted once the update that caused it has been applied.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // Request Lifecycle
    // ─────────────────────────────────────────────────────────
    /// A fetch was issued; the dice is disabled until it completes
    FetchStarted { request_id: RequestId },

    /// A fetch succeeded; carries the advice now displayed
    AdviceUpdated { advice: Advice },

    /// A fetch failed; the displayed advice is unchanged
    FetchFailed { message: String },

    /// A trigger arrived while a fetch was in flight and was dropped
    RequestRejected,

    // ─────────────────────────────────────────────────────────
    // Engine Lifecycle
    // ─────────────────────────────────────────────────────────
    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short label for logging and filtering
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::FetchStarted { .. } => "fetch_started",
            EngineEvent::AdviceUpdated { .. } => "advice_updated",
            EngineEvent::FetchFailed { .. } => "fetch_failed",
            EngineEvent::RequestRejected => "request_rejected",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}
