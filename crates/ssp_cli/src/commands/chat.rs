//! `ssp-chat chat`: run the interactive chat UI against the mock responder.

use std::io::IsTerminal;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Result, bail};
use ssp_constant::app;
use ssp_core::{ChatConfig, MockResponder, serve};
use ssp_observability::{LogSink, ObservabilityConfig, init};
use ssp_tui::{ChatChannels, TuiOptions, run_tui};
use tokio::sync::mpsc;

use crate::cli::ThemeArg;
use crate::output;

/// At most one request is in flight; a little slack for a failure racing a quit.
const CHANNEL_CAPACITY: usize = 4;

pub async fn handle(
    theme: Option<ThemeArg>,
    latency_ms: Option<u64>,
    skip_landing: bool,
    verbose: bool,
) -> Result<()> {
    if !std::io::stdin().is_terminal() || !std::io::stdout().is_terminal() {
        bail!("chat requires an interactive terminal (TTY); stdin or stdout is not a TTY");
    }

    // Log lines go to the debug view (Ctrl+D); the console layer would corrupt the screen.
    let (log_tx, log_rx) = mpsc::channel::<String>(512);
    let log_sink: LogSink = Arc::new(move |line| {
        let _ = log_tx.try_send(line);
    });
    let mut obs_config = ObservabilityConfig::from_env()
        .with_version(app::VERSION)
        .with_console(false)
        .with_log_sink(log_sink);
    if obs_config.log_level.is_none() {
        obs_config = obs_config.with_log_level(if verbose { "debug" } else { "info" });
    }
    if let Err(e) = init(obs_config) {
        output::warning(&format!("Observability init failed (continuing): {}", e));
    }

    let mut config = ChatConfig::from_env();
    if let Some(theme) = theme {
        config = config.with_appearance(theme.into());
    }
    if let Some(ms) = latency_ms {
        config = config.with_reply_latency(Duration::from_millis(ms));
    }
    tracing::info!(
        theme = config.appearance.as_str(),
        latency_ms = config.reply_latency.as_millis() as u64,
        "starting chat"
    );

    let (request_tx, request_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let responder = Arc::new(MockResponder::from_config(&config));
    tokio::spawn(serve(responder, request_rx, event_tx));

    let channels = ChatChannels {
        requests: request_tx,
        events: event_rx,
        logs: Some(log_rx),
    };
    let options = TuiOptions {
        appearance: config.appearance,
        skip_landing,
    };
    tokio::task::spawn_blocking(move || run_tui(channels, options)).await??;
    Ok(())
}
