//! advice-app - Application state and orchestration for Advice Dice
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the advice
//! widget: the state model, messages, the update function, the actions that
//! perform the HTTP fetch in the background, and the Engine shared by the TUI
//! and headless runners. Configuration loading lives here too.

pub mod actions;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RequestId};
pub use state::{AppState, PLACEHOLDER_TEXT};
