//! Core domain type definitions

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::error::{Error, Result};

/// One piece of advice as returned by the advice API.
///
/// Immutable once received; the widget replaces it wholesale on every
/// successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Advice {
    id: u64,
    text: String,
}

impl Advice {
    /// Build an advice, enforcing `id > 0` and non-blank text.
    ///
    /// Id 0 is reserved for "no advice yet" in the heading.
    pub fn new(id: u64, text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if id == 0 {
            return Err(Error::bad_body("advice id must be positive"));
        }
        if text.trim().is_empty() {
            return Err(Error::bad_body("advice text is empty"));
        }
        Ok(Self { id, text })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Lifecycle of the advice widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetPhase {
    /// Waiting for a trigger; the dice is enabled
    #[default]
    Idle,
    /// One request is in flight; the dice is disabled
    Loading,
    /// Application is shutting down
    Quitting,
}

impl WidgetPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, WidgetPhase::Loading)
    }
}

/// Counter for generating unique log entry IDs
static LOG_ENTRY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Severity of a diagnostic log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

/// Represents a diagnostic log entry with timestamp
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
    /// Unique ID for this entry
    pub id: u64,
}

impl LogEntry {
    /// Create a new log entry with current timestamp
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            id: LOG_ENTRY_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Debug, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn is_error(&self) -> bool {
        self.level == LogLevel::Error
    }
}
