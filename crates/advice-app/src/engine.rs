//! Engine - shared orchestration state for TUI and headless runners
//!
//! The Engine owns the message channel, the HTTP client, the settings and the
//! TEA state. Both runners feed it messages and read state back from it; the
//! headless runner additionally subscribes to its events.

use tokio::sync::{broadcast, mpsc};

use advice_client::AdviceClient;
use advice_core::prelude::*;
use advice_core::{Advice, WidgetPhase};

use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::{Message, RequestId};
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone)]
struct StateSnapshot {
    phase: WidgetPhase,
    in_flight: Option<RequestId>,
    advice: Option<Advice>,
    succeeded_requests: u64,
    failed_requests: u64,
    rejected_requests: u64,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            phase: state.phase,
            in_flight: state.in_flight,
            advice: state.current_advice.clone(),
            succeeded_requests: state.succeeded_requests,
            failed_requests: state.failed_requests,
            rejected_requests: state.rejected_requests,
        }
    }
}

/// Orchestration engine for Advice Dice.
///
/// Encapsulates all shared state between TUI and headless runners:
/// - TEA state management
/// - Message channel
/// - HTTP client for the advice endpoint
/// - Settings
/// - Event broadcasting for external consumers
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources (signal handler, fetch tasks).
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// Client used by every fetch task
    client: AdviceClient,

    /// Loaded settings (cached from config)
    pub settings: Settings,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create a new Engine from loaded settings.
    ///
    /// Fails only if the configured endpoint is invalid or the HTTP client
    /// cannot be built. Must be called inside a tokio runtime.
    pub fn new(settings: Settings) -> Result<Self> {
        let client = AdviceClient::new(settings.api.client_config()?)?;
        let engine = Self::with_client(settings, client);
        signals::spawn_signal_handler(engine.msg_tx.clone());
        Ok(engine)
    }

    /// Create an Engine around an existing client without installing the
    /// signal handler
    pub fn with_client(settings: Settings, client: AdviceClient) -> Self {
        info!("Advice endpoint: {}", client.endpoint());

        let state = AppState::with_settings(settings.clone());
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (event_tx, _) = broadcast::channel(256);

        Self {
            state,
            msg_tx,
            msg_rx,
            client,
            settings,
            event_tx,
        }
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// events for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &self.client);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed. Used by the TUI runner
    /// which needs to drain all pending messages before rendering.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the in-flight request, if any, to complete.
    ///
    /// Messages that arrive meanwhile are processed in order. Returns early
    /// if the engine starts quitting.
    pub async fn settle(&mut self) {
        while self.state.is_loading() {
            match self.msg_rx.recv().await {
                Some(msg) => self.process_message(msg),
                None => break,
            }
        }
    }

    /// Roll the dice and wait until the resulting state update is applied.
    ///
    /// If a request is already in flight, the trigger is rejected and this
    /// waits for the existing request instead.
    pub async fn request_new_advice(&mut self) {
        self.process_message(Message::RequestAdvice);
        self.settle().await;
    }

    /// Get a clone of the message sender for spawning input sources.
    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    /// Check if the application should quit.
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    pub fn client(&self) -> &AdviceClient {
        &self.client
    }

    /// Announce shutdown to subscribers.
    ///
    /// An in-flight fetch is not awaited; its task ends when it finds the
    /// channel closed.
    pub fn shutdown(&mut self) {
        if self.state.in_flight.is_some() {
            debug!("Shutting down with a request in flight");
        }
        self.emit(EngineEvent::Shutdown);
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.rejected_requests < post.rejected_requests {
            self.emit(EngineEvent::RequestRejected);
        }

        // Every success counts, even when the slip repeats
        if pre.succeeded_requests < post.succeeded_requests {
            if let Some(ref advice) = post.advice {
                self.emit(EngineEvent::AdviceUpdated {
                    advice: advice.clone(),
                });
            }
        }

        if pre.failed_requests < post.failed_requests {
            let message = self
                .state
                .diagnostics
                .last_error()
                .map(|e| e.message.clone())
                .unwrap_or_default();
            self.emit(EngineEvent::FetchFailed { message });
        }

        // A completion and a new trigger can land in one cycle
        if post.in_flight.is_some() && post.in_flight != pre.in_flight {
            if let Some(request_id) = post.in_flight {
                self.emit(EngineEvent::FetchStarted { request_id });
            }
        }

        if pre.phase != post.phase {
            debug!("Phase changed: {:?} -> {:?}", pre.phase, post.phase);
        }
    }

    fn emit(&self, event: EngineEvent) {
        // No subscribers is fine
        let _ = self.event_tx.send(event);
    }
}
