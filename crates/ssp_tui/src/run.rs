//! TUI run loop: terminal setup, event handling, reveal timers, draw.
//!
//! Terminal events are read in a dedicated thread so the main loop never blocks on
//! input. The loop sleeps until the next terminal event, the next reveal deadline,
//! or the housekeeping tick, whichever comes first.

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use chrono::Local;
use crossterm::event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, Event};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ssp_core::{Appearance, ChatEvent, ReplyRequest};
use tokio::sync::mpsc as tokio_mpsc;

use crate::keys::{KeyOutcome, handle_key, handle_mouse};
use crate::state::{Screen, TuiState};
use crate::view;

/// Upper bound on one wait, so logs, replies and animations are picked up promptly.
const HOUSEKEEPING_TICK: Duration = Duration::from_millis(50);

/// Channels between the UI and the responder task.
pub struct ChatChannels {
    /// Accepted submissions go out here.
    pub requests: tokio_mpsc::Sender<ReplyRequest>,
    /// Replies and failures come back here.
    pub events: tokio_mpsc::Receiver<ChatEvent>,
    /// Formatted tracing lines for the debug view.
    pub logs: Option<tokio_mpsc::Receiver<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    pub appearance: Appearance,
    /// Open straight into the chat view.
    pub skip_landing: bool,
}

/// Run the TUI: alternate screen, raw mode, event loop. Restores the terminal on exit,
/// including when the loop fails.
pub fn run_tui(channels: ChatChannels, options: TuiOptions) -> anyhow::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut state = TuiState::with_appearance(options.appearance);
    if options.skip_landing {
        state.open_chat(Instant::now());
    }
    tracing::info!(
        appearance = options.appearance.as_str(),
        skip_landing = options.skip_landing,
        "tui started"
    );
    let result = run_loop(&mut terminal, &mut state, channels);
    state.teardown();

    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    disable_raw_mode()?;

    tracing::info!(messages = state.session.messages().len(), "tui stopped");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut TuiState,
    mut channels: ChatChannels,
) -> anyhow::Result<()> {
    let (term_tx, term_rx) = mpsc::channel();
    let _reader = std::thread::spawn(move || {
        loop {
            if event::poll(HOUSEKEEPING_TICK).unwrap_or(false)
                && let Ok(ev) = event::read()
                && term_tx.send(ev).is_err()
            {
                break;
            }
        }
    });

    loop {
        // Drain runtime log lines into the debug view (multi-line logs split into separate lines)
        if let Some(ref mut rx) = channels.logs {
            while let Ok(line) = rx.try_recv() {
                for l in line.split('\n') {
                    state.push_trace_line(l.to_string());
                }
            }
        }
        while let Ok(event) = channels.events.try_recv() {
            state.apply_event(event, Local::now(), Instant::now());
        }

        let now = Instant::now();
        state.advance_reveals(now);
        state.tick_animations(now);

        if state.needs_redraw {
            state.frame_count = state.frame_count.wrapping_add(1);
            terminal.draw(|f| view::draw(f, state, f.area()))?;
            state.needs_redraw = false;
        }

        let wait = state
            .next_deadline()
            .map(|at| at.saturating_duration_since(Instant::now()))
            .unwrap_or(HOUSEKEEPING_TICK)
            .min(HOUSEKEEPING_TICK);

        let ev = match term_rx.recv_timeout(wait) {
            Ok(ev) => ev,
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => anyhow::bail!("terminal event reader stopped"),
        };
        match ev {
            Event::Key(key) => match handle_key(state, key, Instant::now()) {
                KeyOutcome::Continue => {}
                KeyOutcome::Quit => break,
                KeyOutcome::Send(request) => {
                    if let Err(e) = channels.requests.try_send(request) {
                        tracing::warn!(error = %e, "reply request not delivered");
                        state.apply_event(
                            ChatEvent::failed(format!("responder unavailable: {}", e)),
                            Local::now(),
                            Instant::now(),
                        );
                    }
                }
            },
            Event::Mouse(mouse) => handle_mouse(state, mouse),
            Event::Paste(text) if state.screen == Screen::Chat => state.input_insert_str(&text),
            Event::Resize(_, _) => state.needs_redraw = true,
            _ => {}
        }
    }
    Ok(())
}
