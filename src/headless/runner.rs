//! Headless mode runner - sequential dice rolls without the TUI

use tokio::sync::broadcast::{self, error::TryRecvError};

use advice_app::config::Settings;
use advice_app::{Engine, EngineEvent};
use advice_core::prelude::*;

use super::HeadlessEvent;

/// Run in headless mode - roll `count` times, emitting NDJSON events
///
/// Fetch failures are reported as events, not errors; only a bad endpoint
/// or client setup makes this return `Err`.
pub async fn run_headless(settings: Settings, count: u32) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Advice Dice starting in HEADLESS mode ({} rolls)", count);
    info!("═══════════════════════════════════════════════════════");

    let mut engine = match Engine::new(settings) {
        Ok(engine) => engine,
        Err(e) => {
            HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            return Err(e);
        }
    };
    let mut events = engine.subscribe();

    for round in 1..=count {
        if engine.should_quit() {
            info!("Quit requested after {} of {} rolls", round - 1, count);
            break;
        }

        for event in roll(&mut engine, &mut events).await {
            event.emit();
        }
    }

    engine.shutdown();

    info!("Advice Dice headless mode exiting");
    Ok(())
}

/// Roll once, wait for the outcome, and collect the resulting events
async fn roll(
    engine: &mut Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
) -> Vec<HeadlessEvent> {
    engine.request_new_advice().await;

    let mut collected = Vec::new();
    loop {
        match events.try_recv() {
            Ok(event) => collected.extend(HeadlessEvent::from_engine_event(&event)),
            Err(TryRecvError::Lagged(skipped)) => {
                warn!("Headless event receiver lagged, {} events lost", skipped);
            }
            Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
        }
    }
    collected
}
