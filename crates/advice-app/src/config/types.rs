//! Configuration type definitions

use std::time::Duration;

use advice_client::{AdviceEndpoint, ClientConfig, DEFAULT_ENDPOINT};
use advice_core::prelude::*;
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Advice API settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    /// URL of the advice resource
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds (0 = wait forever)
    #[serde(default)]
    pub timeout_secs: u64,

    /// Overrides the `advice-dice/<version>` user agent
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: 0,
            user_agent: None,
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }

    /// Build the HTTP client configuration, validating the endpoint
    pub fn client_config(&self) -> Result<ClientConfig> {
        let endpoint = AdviceEndpoint::parse(&self.endpoint)?;
        let mut config = ClientConfig::default()
            .with_endpoint(endpoint)
            .with_timeout(self.timeout());
        if let Some(ref agent) = self.user_agent {
            config.user_agent = agent.clone();
        }
        Ok(config)
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

/// Icon rendering mode for the TUI.
///
/// Controls whether icons use safe Unicode characters (default) or Nerd Font
/// glyphs (requires a Nerd Font installed in the terminal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    /// Safe Unicode characters that work in all terminals
    #[default]
    Unicode,
    /// Nerd Font glyphs
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

/// UI settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UiSettings {
    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,

    /// Roll the dice once at startup
    #[serde(default)]
    pub fetch_on_start: bool,
}
