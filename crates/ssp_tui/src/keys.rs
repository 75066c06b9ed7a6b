//! Map terminal input to [TuiState] updates.
//!
//! Kept apart from the run loop so key handling is testable without a terminal.

use std::time::Instant;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind};
use ssp_core::ReplyRequest;

use crate::state::{Screen, TuiState};

const WHEEL_LINES: usize = 3;

/// What the run loop must do after a key.
#[derive(Debug)]
pub enum KeyOutcome {
    Continue,
    Quit,
    /// Hand this request to the responder.
    Send(ReplyRequest),
}

pub fn handle_key(state: &mut TuiState, key: KeyEvent, now: Instant) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return KeyOutcome::Quit,
        KeyCode::Char('d') if ctrl => {
            state.toggle_debug();
            return KeyOutcome::Continue;
        }
        _ => {}
    }
    match state.screen {
        Screen::Landing => landing_key(state, key, now),
        Screen::Chat => chat_key(state, key, now),
        Screen::DebugTraces => {
            debug_key(state, key);
            KeyOutcome::Continue
        }
    }
}

fn landing_key(state: &mut TuiState, key: KeyEvent, now: Instant) -> KeyOutcome {
    match key.code {
        KeyCode::Enter | KeyCode::Char('c') => state.open_chat(now),
        KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
        _ => {}
    }
    KeyOutcome::Continue
}

fn chat_key(state: &mut TuiState, key: KeyEvent, now: Instant) -> KeyOutcome {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let newline = key.modifiers.intersects(KeyModifiers::SHIFT | KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter if newline => state.input_newline(),
        KeyCode::Char('j') if ctrl => state.input_newline(),
        KeyCode::Enter => {
            if let Some(request) = state.submit(Local::now(), now) {
                return KeyOutcome::Send(request);
            }
        }
        KeyCode::Esc => state.leave_chat(),
        KeyCode::Char('u') if ctrl => state.input_clear_line(),
        KeyCode::Char('k') if ctrl => state.input_kill_to_end(),
        KeyCode::Char(_) if ctrl => {}
        KeyCode::Char(c) => state.input_insert(c),
        KeyCode::Backspace => state.input_backspace(),
        KeyCode::Delete => state.input_delete(),
        KeyCode::Left => state.input_cursor_left(),
        KeyCode::Right => state.input_cursor_right(),
        KeyCode::Home => state.input_cursor_home(),
        KeyCode::End => state.input_cursor_end(),
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => {
            let page = state.page_size();
            state.scroll_up(page);
        }
        KeyCode::PageDown => {
            let page = state.page_size();
            state.scroll_down(page);
        }
        _ => {}
    }
    KeyOutcome::Continue
}

fn debug_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => state.toggle_debug(),
        KeyCode::Up => state.trace_scroll_up(1),
        KeyCode::Down => state.trace_scroll_down(1),
        KeyCode::PageUp => state.trace_scroll_up(10),
        KeyCode::PageDown => state.trace_scroll_down(10),
        _ => {}
    }
}

/// Mouse wheel scrolls the transcript or the log view.
pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    match (mouse.kind, state.screen) {
        (MouseEventKind::ScrollUp, Screen::DebugTraces) => state.trace_scroll_up(WHEEL_LINES),
        (MouseEventKind::ScrollDown, Screen::DebugTraces) => state.trace_scroll_down(WHEEL_LINES),
        (MouseEventKind::ScrollUp, Screen::Chat) => state.scroll_up(WHEEL_LINES),
        (MouseEventKind::ScrollDown, Screen::Chat) => state.scroll_down(WHEEL_LINES),
        _ => {}
    }
}
