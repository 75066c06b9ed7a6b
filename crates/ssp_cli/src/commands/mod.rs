//! Command dispatch.

pub mod chat;
pub mod config;
pub mod reveal;

use anyhow::Result;
use ssp_constant::app;
use ssp_observability::{ObservabilityConfig, init};

use crate::cli::{Cli, Command};
use crate::output;

/// Console logging (stderr) for the non-interactive commands. `chat` sets up its own sink.
fn init_console_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env().with_version(app::VERSION);
    if verbose {
        config = config.with_log_level("debug");
    } else if config.log_level.is_none() {
        config = config.with_log_level("warn");
    }
    if let Err(e) = init(config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }
}

pub async fn handle(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Chat {
            theme,
            latency_ms,
            skip_landing,
        } => chat::handle(theme, latency_ms, skip_landing, cli.verbose).await,
        Command::Reveal { text, instant } => {
            init_console_logging(cli.verbose);
            reveal::handle(text, instant).await
        }
        Command::Config => {
            init_console_logging(cli.verbose);
            config::handle()
        }
    }
}
