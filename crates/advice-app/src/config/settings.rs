//! Settings parser for config.toml

use std::path::{Path, PathBuf};

use super::types::Settings;
use advice_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "advice-dice";

const DEFAULT_CONFIG: &str = r#"# Advice Dice Configuration

[api]
# Advice resource; must answer GET with {"slip": {"id": .., "advice": ".."}}
endpoint = "https://api.adviceslip.com/advice"
# Request timeout in seconds (0 = wait forever)
timeout_secs = 0
# user_agent = "advice-dice"

[ui]
# "unicode" or "nerd_fonts"
icons = "unicode"
# Roll the dice once at startup
fetch_on_start = false
"#;

/// `<config_dir>/advice-dice/config.toml`, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file, falling back to defaults
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write a commented default config file if none exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}
