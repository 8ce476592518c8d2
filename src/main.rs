//! Advice Dice - roll a dice, get a random piece of advice
//!
//! This is the binary entry point. Application logic lives in the workspace
//! crates; this file parses arguments, loads settings and picks a runner.

mod headless;

use std::path::PathBuf;

use clap::Parser;

use advice_app::config::{self, Settings};
use advice_core::logging;
use advice_core::prelude::*;

/// Advice Dice - roll a dice, get a random piece of advice
#[derive(Parser, Debug)]
#[command(name = "advice")]
#[command(about = "Roll a dice for a random piece of advice", long_about = None)]
struct Args {
    /// Advice endpoint URL (overrides `api.endpoint` from the config file)
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Run in headless mode (NDJSON output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Number of advice requests to make in headless mode
    #[arg(long, default_value_t = 1, requires = "headless")]
    count: u32,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    logging::init()?;

    let config_path = args.config.clone().or_else(config::default_config_path);

    if args.init_config {
        let path = config_path
            .ok_or_else(|| Error::config("no config directory on this platform"))?;
        config::init_config_file(&path)?;
        eprintln!("Config file: {}", path.display());
        return Ok(());
    }

    let settings = load_settings(config_path.as_deref(), args.endpoint);

    let result = if args.headless {
        headless::runner::run_headless(settings, args.count).await
    } else {
        advice_tui::run(settings).await
    };

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        eprintln!(
            "Logs: {}",
            logging::get_current_log_file().display()
        );
    }

    info!("Advice Dice exiting");
    result
}

/// Load the config file and apply command-line overrides
fn load_settings(config_path: Option<&std::path::Path>, endpoint: Option<String>) -> Settings {
    let mut settings = config_path.map(config::load_settings).unwrap_or_default();

    if let Some(endpoint) = endpoint {
        info!("Endpoint overridden from command line: {}", endpoint);
        settings.api.endpoint = endpoint;
    }

    settings
}
