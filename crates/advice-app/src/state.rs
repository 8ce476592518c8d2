//! Application state (Model in TEA pattern)

use std::collections::VecDeque;

use rand::Rng;

use advice_core::{Advice, LogEntry, WidgetPhase};

use crate::config::Settings;
use crate::message::RequestId;

/// Shown in place of the advice text until the first successful fetch
pub const PLACEHOLDER_TEXT: &str = "Click the dice to get some advice!";

/// Maximum entries kept in the diagnostic log
pub const DIAGNOSTIC_CAPACITY: usize = 100;

/// Ticks between dice face changes while loading (~100ms at 50ms ticks)
const DICE_ROLL_EVERY: u64 = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Diagnostics
// ─────────────────────────────────────────────────────────────────────────────

/// Bounded log of diagnostics the widget produced.
///
/// Never rendered: fetch failures land here (and in the tracing log) instead of
/// reaching the user.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticLog {
    entries: VecDeque<LogEntry>,
}

impl DiagnosticLog {
    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == DIAGNOSTIC_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_error()).count()
    }

    pub fn last_error(&self) -> Option<&LogEntry> {
        self.entries.iter().rev().find(|e| e.is_error())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dice Animation
// ─────────────────────────────────────────────────────────────────────────────

/// Face shown on the dice button; tumbles while a request is in flight
#[derive(Debug, Clone)]
pub struct DiceState {
    /// Current face, 1..=6
    pub face: u8,
    /// Animation frame counter
    pub animation_frame: u64,
}

impl Default for DiceState {
    fn default() -> Self {
        Self {
            face: 5,
            animation_frame: 0,
        }
    }
}

impl DiceState {
    /// Advance the animation, landing on a random face every few frames
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        if self.animation_frame % DICE_ROLL_EVERY == 0 {
            self.face = rand::thread_rng().gen_range(1..=6);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
/// Complete application state (the Model in TEA)
#[derive(Debug, Default)]
pub struct AppState {
    /// Idle / Loading / Quitting
    pub phase: WidgetPhase,

    /// Last successfully fetched advice; `None` until the first success
    pub current_advice: Option<Advice>,

    /// Request currently awaited; completions for any other id are dropped
    pub in_flight: Option<RequestId>,

    /// Last issued request id
    last_request_id: u64,

    /// Number of requests rejected because one was already in flight
    pub rejected_requests: u64,

    /// Number of awaited requests that resolved with advice
    pub succeeded_requests: u64,

    /// Number of awaited requests that ended in a fetch failure
    pub failed_requests: u64,

    /// Diagnostic channel (fetch failures, rejected triggers)
    pub diagnostics: DiagnosticLog,

    /// Dice button animation
    pub dice: DiceState,

    /// Loaded settings
    pub settings: Settings,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// True exactly while a request is in flight; the dice is disabled then
    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == WidgetPhase::Quitting
    }

    /// Trigger control is enabled only when idle
    pub fn trigger_enabled(&self) -> bool {
        self.phase == WidgetPhase::Idle
    }

    /// Id shown in the heading, 0 before the first advice
    pub fn display_id(&self) -> u64 {
        self.current_advice.as_ref().map(Advice::id).unwrap_or(0)
    }

    /// Text shown in the card, the placeholder before the first advice
    pub fn display_text(&self) -> &str {
        self.current_advice
            .as_ref()
            .map(Advice::text)
            .unwrap_or(PLACEHOLDER_TEXT)
    }

    /// Enter Loading and allocate the id of the new request
    pub(crate) fn begin_request(&mut self) -> RequestId {
        self.last_request_id += 1;
        let id = RequestId(self.last_request_id);
        self.in_flight = Some(id);
        self.phase = WidgetPhase::Loading;
        id
    }

    /// Whether a completion belongs to the request being awaited
    pub fn is_current_request(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    /// Leave Loading; keeps Quitting if shutdown began meanwhile
    pub(crate) fn finish_request(&mut self) {
        self.in_flight = None;
        if self.phase == WidgetPhase::Loading {
            self.phase = WidgetPhase::Idle;
        }
    }

    pub fn quit(&mut self) {
        self.phase = WidgetPhase::Quitting;
    }
}
