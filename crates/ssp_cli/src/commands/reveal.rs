//! `ssp-chat reveal`: play the typewriter reveal of a text without the UI.
//!
//! On a terminal the growing prefix is drawn on a progress bar; when piped (or with
//! `--output json`) each tick is printed on its own line.

use std::io::IsTerminal;
use std::time::Instant;

use anyhow::{Result, anyhow};
use serde::Serialize;
use ssp_constant::text::transcript::MOCK_REPLY;
use ssp_core::{AnimateKey, MessageId, RevealEngine};

use crate::output;

#[derive(Debug, Serialize)]
struct Tick<'a> {
    tick: usize,
    revealed: &'a str,
    progress: u8,
}

pub async fn handle(text: Option<String>, instant: bool) -> Result<()> {
    let text = text.unwrap_or_else(|| MOCK_REPLY.to_string());
    let id = MessageId::new("reveal");
    let mut engine = RevealEngine::new();
    engine.observe(&id, &text, &AnimateKey::fresh(), Instant::now());

    let run = engine.run(&id).ok_or_else(|| anyhow!("reveal run was not started"))?;
    let total = run.total_chars();
    let cadence = run.cadence();

    let bar = (!output::is_json() && !instant && std::io::stdout().is_terminal())
        .then(|| output::reveal_bar(total as u64));

    let mut ticks = 0;
    while let Some(deadline) = engine.next_deadline() {
        if !instant {
            tokio::time::sleep_until(deadline.into()).await;
        }
        let now = if instant { deadline } else { Instant::now() };
        ticks += engine.advance(now);

        let run = engine.run(&id).ok_or_else(|| anyhow!("reveal run disappeared"))?;
        let tick = Tick {
            tick: ticks,
            revealed: run.revealed_prefix(),
            progress: run.progress_percent(),
        };
        if let Some(bar) = &bar {
            bar.set_position(run.revealed_chars() as u64);
            bar.set_message(tick.revealed.to_string());
        } else if output::is_json() {
            output::data("tick", &tick);
        } else {
            println!("{:>3}% {}", tick.progress, tick.revealed);
        }
    }
    if let Some(bar) = bar {
        bar.finish();
    }

    tracing::debug!(chars = total, ticks, "reveal finished");
    output::success(&format!(
        "revealed {} chars in {} ticks ({} ms cadence)",
        total,
        ticks,
        cadence.as_millis()
    ));
    Ok(())
}
