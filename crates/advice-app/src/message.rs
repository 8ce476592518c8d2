//! Message types for the application (TEA pattern)

use advice_core::{Advice, FetchFailureKind};

use crate::input_key::InputKey;

/// Identifies one advice request from trigger to completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (dice animation)
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Advice Messages
    // ─────────────────────────────────────────────────────────
    /// The dice was rolled: fetch a new advice
    RequestAdvice,

    /// Fetch completed with a valid advice (from background task)
    AdviceReceived {
        request_id: RequestId,
        advice: Advice,
    },

    /// Fetch failed: network error, non-200 status, or bad body
    AdviceFetchFailed {
        request_id: RequestId,
        kind: FetchFailureKind,
        error: String,
    },
}
