//! advice-tui - Terminal UI for Advice Dice
//!
//! This crate provides the ratatui-based terminal interface. It creates an Engine
//! from advice-app and adds terminal rendering, event polling, and the advice
//! card widgets.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
