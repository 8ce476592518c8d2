//! Configuration file parsing for Advice Dice
//!
//! Supports:
//! - `<config_dir>/advice-dice/config.toml` - Global settings
//! - `--config <PATH>` - Explicit settings file

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
