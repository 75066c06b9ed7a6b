//! TUI state: current screen, chat session, reveal runs, input buffer, scroll, theme.
//!
//! [TuiState] holds everything the view needs to render. The transcript itself
//! lives in the [ChatSession]; the reveal engine owns one run per assistant message.

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use ssp_constant::text::chat::{STATUS_FAILED, STATUS_READY, STATUS_SENDING};
use ssp_core::{
    Appearance, ChatError, ChatEvent, ChatSession, MessageId, ReplyRequest, RevealEngine, SubmitOutcome,
};
use tokio_util::sync::CancellationToken;

use crate::animation::Shimmer;
use crate::layouts::{HeaderStatus, ShortcutContext};
use crate::theme::SspPalette;

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Landing,
    Chat,
    DebugTraces,
}

/// Max trace lines to keep (older lines dropped).
const MAX_TRACE_LINES: usize = 2000;

/// Half period of the typing cursor blink.
pub const CURSOR_BLINK: Duration = Duration::from_millis(530);

/// Reply failure shown inline, after the first `after` messages of the transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    pub after: usize,
    pub text: String,
    pub timestamp: String,
}

/// TUI application state.
#[derive(Debug)]
pub struct TuiState {
    pub screen: Screen,
    /// Screen to return to when the debug view closes.
    pub previous_screen: Screen,
    /// Transcript and submission state.
    pub session: ChatSession,
    /// Reveal runs for assistant messages of the current session.
    pub reveals: RevealEngine,
    /// Current input text (footer). May contain newlines.
    pub input_buffer: String,
    /// Cursor position within input_buffer (byte offset, 0..=len).
    pub input_cursor: usize,
    /// Vertical scroll offset (number of lines scrolled up).
    pub scroll: usize,
    /// When true, keep scroll at bottom on new content; when false, user scrolled up.
    pub auto_scroll: bool,
    /// Theme palette (dark/light).
    pub palette: SspPalette,
    /// Incremented each run_loop iteration.
    pub frame_count: u64,
    /// When true, next draw should run; cleared after draw.
    pub needs_redraw: bool,
    /// Blink phase of the typing cursor.
    pub cursor_visible: bool,
    last_blink: Option<Instant>,
    /// Highlight sweep over the typing indicator while a reply is pending.
    pub typing_shimmer: Shimmer,
    /// Debug trace lines (tracing output). Newest at end.
    pub trace_lines: Vec<String>,
    /// Scroll offset for debug trace view (lines scrolled up).
    pub trace_scroll: usize,
    /// Reply failures of the current session.
    pub notices: Vec<ErrorNotice>,
    /// Cancels the request of the current session while it waits for a reply.
    in_flight: Option<CancellationToken>,
    /// Events still owed to sessions that were closed while waiting.
    stale_replies: usize,
    /// Last content height from previous draw (for scroll clamp).
    pub last_content_height: usize,
    /// Last viewport height from previous draw (for scroll clamp).
    pub last_viewport_height: usize,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::with_appearance(Appearance::default())
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_appearance(appearance: Appearance) -> Self {
        Self {
            screen: Screen::Landing,
            previous_screen: Screen::Landing,
            session: ChatSession::new(Local::now()),
            reveals: RevealEngine::new(),
            input_buffer: String::new(),
            input_cursor: 0,
            scroll: 0,
            auto_scroll: true,
            palette: SspPalette::for_appearance(appearance),
            frame_count: 0,
            needs_redraw: true,
            cursor_visible: true,
            last_blink: None,
            typing_shimmer: Shimmer::new(),
            trace_lines: Vec::new(),
            trace_scroll: 0,
            notices: Vec::new(),
            in_flight: None,
            stale_replies: 0,
            last_content_height: 0,
            last_viewport_height: 0,
        }
    }

    /// Show the chat view and start reveal runs for the transcript already there.
    pub fn open_chat(&mut self, now: Instant) {
        self.screen = Screen::Chat;
        self.auto_scroll = true;
        self.scroll = 0;
        self.sync_reveals(now);
        self.needs_redraw = true;
        tracing::debug!(messages = self.session.messages().len(), "chat view opened");
    }

    /// Back to the landing view. Cancels every reveal timer and the pending request,
    /// then drops the session; the next [open_chat](Self::open_chat) starts from the
    /// seeded greeting.
    pub fn leave_chat(&mut self) {
        self.reveals.teardown();
        if self.session.is_submitting() {
            self.cancel_in_flight();
            self.stale_replies += 1;
        }
        self.session = ChatSession::new(Local::now());
        self.notices.clear();
        self.input_clear_line();
        self.scroll = 0;
        self.auto_scroll = true;
        self.screen = Screen::Landing;
        self.needs_redraw = true;
        tracing::debug!("chat view closed");
    }

    /// Show or hide the debug log view.
    pub fn toggle_debug(&mut self) {
        if self.screen == Screen::DebugTraces {
            self.screen = self.previous_screen;
        } else {
            self.previous_screen = self.screen;
            self.screen = Screen::DebugTraces;
            self.trace_scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Send the input. The input is cleared only when the session accepts it;
    /// blank input and sends while a reply is pending leave everything as is.
    /// Also held back while a closed chat's request has not answered yet, so the
    /// responder never has two requests at once.
    pub fn submit(&mut self, at: DateTime<Local>, now: Instant) -> Option<ReplyRequest> {
        if self.stale_replies > 0 {
            tracing::debug!(stale = self.stale_replies, "send held: closed chat still awaiting its reply");
            return None;
        }
        match self.session.submit(&self.input_buffer, at) {
            Ok(SubmitOutcome::Accepted(request)) => {
                self.in_flight = Some(request.cancel.clone());
                self.input_take();
                self.auto_scroll = true;
                self.scroll = 0;
                self.typing_shimmer = Shimmer::starting_at(now);
                Some(request)
            }
            Ok(SubmitOutcome::Ignored) | Ok(SubmitOutcome::Busy) => None,
            Err(e) => {
                tracing::warn!(error = %e, "submit failed");
                None
            }
        }
    }

    /// Apply a responder event: append the reply and start its reveal, or record the failure.
    pub fn apply_event(&mut self, event: ChatEvent, at: DateTime<Local>, now: Instant) {
        if self.stale_replies > 0 {
            self.stale_replies -= 1;
            tracing::debug!(?event, "dropped reply for a closed chat");
            return;
        }
        let failed = matches!(event, ChatEvent::Failed { .. });
        match self.session.apply(event, at) {
            Ok(Some(reply)) => {
                self.in_flight = None;
                self.reveals.observe_message(&reply, now);
            }
            Ok(None) if !failed => self.in_flight = None,
            Ok(None) => {
                self.in_flight = None;
                let text = self.session.last_error().unwrap_or_default().to_string();
                self.notices.push(ErrorNotice {
                    after: self.session.messages().len(),
                    text,
                    timestamp: at.format("%H:%M").to_string(),
                });
            }
            Err(ChatError::NotSubmitting) => {
                tracing::debug!("reply arrived with no submission in flight");
                return;
            }
            Err(e) => {
                tracing::warn!(error = %e, "reply could not be applied");
                return;
            }
        }
        if self.auto_scroll {
            self.scroll = 0;
        }
        self.needs_redraw = true;
    }

    /// Make sure every assistant message in the transcript has a reveal run, and
    /// drop runs whose message is no longer in it.
    pub fn sync_reveals(&mut self, now: Instant) {
        let messages = self.session.messages();
        let gone: Vec<MessageId> = self
            .reveals
            .ids()
            .filter(|id| !messages.iter().any(|m| m.id() == *id))
            .cloned()
            .collect();
        for id in &gone {
            self.reveals.forget(id);
        }
        for message in messages {
            self.reveals.observe_message(message, now);
        }
    }

    /// Fire due reveal ticks. Returns true when any text grew.
    pub fn advance_reveals(&mut self, now: Instant) -> bool {
        let ticks = self.reveals.advance(now);
        if ticks > 0 {
            self.needs_redraw = true;
        }
        ticks > 0
    }

    /// Earliest reveal deadline, for the run loop's wait.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.reveals.next_deadline()
    }

    /// Animations that need frames: reveal runs and the typing indicator.
    pub fn is_animating(&self) -> bool {
        self.screen == Screen::Chat && (self.reveals.is_animating() || self.session.is_submitting())
    }

    /// Toggle the cursor blink and move the shimmer. Redraws only while animating.
    pub fn tick_animations(&mut self, now: Instant) {
        if !self.is_animating() {
            self.last_blink = None;
            self.cursor_visible = true;
            return;
        }
        match self.last_blink {
            Some(at) if now.saturating_duration_since(at) >= CURSOR_BLINK => {
                self.cursor_visible = !self.cursor_visible;
                self.last_blink = Some(now);
                self.needs_redraw = true;
            }
            Some(_) => {}
            None => self.last_blink = Some(now),
        }
        if self.session.is_submitting() {
            self.typing_shimmer.tick_at(now);
            self.needs_redraw = true;
        }
    }

    /// Cancel every timer and the pending request; call before exit.
    pub fn teardown(&mut self) {
        self.reveals.teardown();
        self.cancel_in_flight();
    }

    fn cancel_in_flight(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
    }

    /// A closed chat's request has not answered yet.
    pub fn awaiting_stale_reply(&self) -> bool {
        self.stale_replies > 0
    }

    /// Header status dot and label, from the submission state.
    pub fn header_status(&self) -> (HeaderStatus, &'static str) {
        if self.session.is_submitting() || self.awaiting_stale_reply() {
            (HeaderStatus::Busy, STATUS_SENDING)
        } else if self.session.last_error().is_some() {
            (HeaderStatus::Error, STATUS_FAILED)
        } else {
            (HeaderStatus::Ready, STATUS_READY)
        }
    }

    pub fn shortcut_context(&self) -> ShortcutContext {
        match self.screen {
            Screen::Landing => ShortcutContext::Landing,
            _ if self.session.is_submitting() => ShortcutContext::Submitting,
            _ if !self.input_buffer.is_empty() => ShortcutContext::Typing,
            _ => ShortcutContext::Idle,
        }
    }

    /// Input buffer: insert character at cursor.
    pub fn input_insert(&mut self, c: char) {
        self.input_buffer.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.needs_redraw = true;
    }

    /// Insert a literal line break (Shift+Enter / Alt+Enter).
    pub fn input_newline(&mut self) {
        self.input_insert('\n');
    }

    /// Input buffer: insert pasted text at cursor.
    pub fn input_insert_str(&mut self, s: &str) {
        let s = s.replace("\r\n", "\n").replace('\r', "\n");
        self.input_buffer.insert_str(self.input_cursor, &s);
        self.input_cursor += s.len();
        self.needs_redraw = true;
    }

    fn prev_boundary(&self) -> usize {
        self.input_buffer[..self.input_cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.input_buffer[self.input_cursor..]
            .chars()
            .next()
            .map(|c| self.input_cursor + c.len_utf8())
            .unwrap_or(self.input_cursor)
    }

    /// Move the cursor to `to`, dropping the chars between it and the old position
    /// when `remove` is set. No-op (and no redraw) when nothing changes.
    fn edit_to(&mut self, to: usize, remove: bool) {
        if to == self.input_cursor {
            return;
        }
        if remove {
            let (lo, hi) = (to.min(self.input_cursor), to.max(self.input_cursor));
            self.input_buffer.drain(lo..hi);
            self.input_cursor = lo;
        } else {
            self.input_cursor = to;
        }
        self.needs_redraw = true;
    }

    pub fn input_backspace(&mut self) {
        self.edit_to(self.prev_boundary(), true);
    }

    pub fn input_delete(&mut self) {
        self.edit_to(self.next_boundary(), true);
    }

    pub fn input_cursor_left(&mut self) {
        self.edit_to(self.prev_boundary(), false);
    }

    pub fn input_cursor_right(&mut self) {
        self.edit_to(self.next_boundary(), false);
    }

    pub fn input_cursor_home(&mut self) {
        self.edit_to(0, false);
    }

    /// End of input. On an empty buffer this also jumps the transcript back to the bottom.
    pub fn input_cursor_end(&mut self) {
        if self.input_buffer.is_empty() && !self.auto_scroll {
            self.auto_scroll = true;
            self.scroll = 0;
            self.needs_redraw = true;
        }
        self.edit_to(self.input_buffer.len(), false);
    }

    /// Clear entire input buffer (Ctrl+U).
    pub fn input_clear_line(&mut self) {
        self.input_buffer.clear();
        self.input_cursor = 0;
        self.needs_redraw = true;
    }

    /// Delete from cursor to end of input (Ctrl+K).
    pub fn input_kill_to_end(&mut self) {
        self.input_buffer.truncate(self.input_cursor);
        self.needs_redraw = true;
    }

    /// Input buffer: clear and return current text.
    pub fn input_take(&mut self) -> String {
        let text = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        self.needs_redraw = true;
        text
    }

    /// Scroll up (increase offset); disables auto_scroll.
    pub fn scroll_up(&mut self, delta: usize) {
        self.auto_scroll = false;
        self.scroll = self.scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    /// Scroll down (decrease offset); re-enables auto_scroll when at bottom.
    pub fn scroll_down(&mut self, delta: usize) {
        self.scroll = self.scroll.saturating_sub(delta);
        if self.scroll == 0 {
            self.auto_scroll = true;
        }
        self.needs_redraw = true;
    }

    /// Lines per PgUp/PgDn.
    pub fn page_size(&self) -> usize {
        self.last_viewport_height.saturating_sub(1).max(1)
    }

    /// Append a line to the debug trace buffer. Drops oldest if over capacity.
    pub fn push_trace_line(&mut self, line: String) {
        self.trace_lines.push(line);
        if self.trace_lines.len() > MAX_TRACE_LINES {
            self.trace_lines.drain(0..self.trace_lines.len() - MAX_TRACE_LINES);
        }
        if self.screen == Screen::DebugTraces {
            self.needs_redraw = true;
        }
    }

    pub fn trace_scroll_up(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_add(delta);
        self.needs_redraw = true;
    }

    pub fn trace_scroll_down(&mut self, delta: usize) {
        self.trace_scroll = self.trace_scroll.saturating_sub(delta);
        self.needs_redraw = true;
    }
}
