//! Headless mode - NDJSON event output instead of the TUI
//!
//! Rolls the dice a fixed number of times and prints one JSON object per
//! line for every engine event, so scripts can consume advice without
//! parsing terminal output.
//!
//! # Example Output
//!
//! ```json
//! {"event":"fetch_started","request_id":1,"timestamp":1704700001000}
//! {"event":"advice","id":42,"advice":"Do it.","timestamp":1704700001200}
//! ```

pub mod runner;

use std::io::{self, Write};

use advice_app::EngineEvent;
use chrono::Utc;
use serde::Serialize;
use tracing::{debug, error};

/// Events emitted in headless mode
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// A request was sent to the advice endpoint
    FetchStarted { request_id: u64, timestamp: i64 },

    /// A request succeeded
    Advice {
        id: u64,
        advice: String,
        timestamp: i64,
    },

    /// A request failed; nothing was retried
    FetchFailed { message: String, timestamp: i64 },

    /// The runner could not start or stopped early
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless event: {}", e);
                return;
            }
        };

        debug!("Emitting headless event: {}", self.event_type());

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    /// Map an engine event to its NDJSON line, if it has one
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::FetchStarted { request_id } => Some(Self::FetchStarted {
                request_id: request_id.0,
                timestamp: Self::now(),
            }),
            EngineEvent::AdviceUpdated { advice } => Some(Self::Advice {
                id: advice.id(),
                advice: advice.text().to_string(),
                timestamp: Self::now(),
            }),
            EngineEvent::FetchFailed { message } => Some(Self::FetchFailed {
                message: message.clone(),
                timestamp: Self::now(),
            }),
            // Sequential rolls never overlap; shutdown is implied by EOF
            EngineEvent::RequestRejected | EngineEvent::Shutdown => None,
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Value of the `event` tag
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::FetchStarted { .. } => "fetch_started",
            Self::Advice { .. } => "advice",
            Self::FetchFailed { .. } => "fetch_failed",
            Self::Error { .. } => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advice_app::RequestId;
    use advice_core::Advice;

    fn to_value(event: &HeadlessEvent) -> serde_json::Value {
        let json = serde_json::to_string(event).expect("serialization failed");
        serde_json::from_str(&json).expect("invalid JSON")
    }

    #[test]
    fn test_fetch_started_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::FetchStarted {
            request_id: RequestId(4),
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "fetch_started");
        assert_eq!(value["request_id"], 4);
        assert!(value["timestamp"].is_number());
    }

    #[test]
    fn test_advice_serialization() {
        let advice = Advice::new(42, "Do it.").unwrap();
        let event = HeadlessEvent::from_engine_event(&EngineEvent::AdviceUpdated { advice })
            .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "advice");
        assert_eq!(value["id"], 42);
        assert_eq!(value["advice"], "Do it.");
    }

    #[test]
    fn test_fetch_failed_serialization() {
        let event = HeadlessEvent::from_engine_event(&EngineEvent::FetchFailed {
            message: "status 503".into(),
        })
        .unwrap();
        let value = to_value(&event);

        assert_eq!(value["event"], "fetch_failed");
        assert_eq!(value["message"], "status 503");
    }

    #[test]
    fn test_error_serialization() {
        let value = to_value(&HeadlessEvent::error("bad endpoint".into(), true));

        assert_eq!(value["event"], "error");
        assert_eq!(value["fatal"], true);
    }

    #[test]
    fn test_silent_engine_events() {
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::RequestRejected).is_none());
        assert!(HeadlessEvent::from_engine_event(&EngineEvent::Shutdown).is_none());
    }

    #[test]
    fn test_event_type_matches_tag() {
        let event = HeadlessEvent::error("x".into(), false);
        assert_eq!(to_value(&event)["event"], event.event_type());
    }
}
