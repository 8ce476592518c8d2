//! Main TUI runner - entry point and event loop
//!
//! Creates an Engine, takes over the terminal, and alternates between
//! draining engine messages, drawing, and polling the keyboard until the
//! user quits or a termination signal arrives.

use advice_app::config::Settings;
use advice_app::message::Message;
use advice_app::Engine;
use advice_core::prelude::*;

use crate::{event, render};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Build the engine first so a bad endpoint fails before the screen switches
    let mut engine = Engine::new(settings)?;

    // Also installs the panic hook that restores the terminal
    let mut term = ratatui::try_init()?;
    info!("Terminal initialized (icons: {})", engine.settings.ui.icons);

    if engine.settings.ui.fetch_on_start {
        engine.process_message(Message::RequestAdvice);
    }

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();

    // Restore terminal
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Fetch completions and signal-handler messages
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &engine.state))?;

        // Handle terminal events (blocks for at most one poll interval)
        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
