//! Assistant message rendering.
//!
//! While a reply is being revealed the body shows the revealed prefix and a
//! blinking block cursor after the last character. The progress bar below stays
//! on every assistant message and rests at 100% once the run completes.

use ratatui::text::{Line, Span};
use ssp_constant::text::chat::{AVATAR_ASSISTANT, ROLE_ASSISTANT};
use ssp_core::{Message, RevealRun};

use super::{BODY_INDENT, border_span, meta_line};
use crate::layouts::{text_muted_style, text_style};
use crate::theme::SspPalette;
use crate::utils::{LEFT_PADDING, PROGRESS_BAR_MAX_WIDTH, wrap_lines};

/// Cursor glyph appended while typing.
pub const TYPING_CURSOR: &str = "▌";
const BAR_GLYPH: &str = "━";

/// Assistant message for display.
#[derive(Debug, Clone)]
pub struct AssistantMessage {
    /// Text visible right now (revealed prefix while typing).
    pub text: String,
    pub timestamp: Option<String>,
    /// Reveal still in progress.
    pub typing: bool,
    /// 0..=100
    pub progress: u8,
}

impl AssistantMessage {
    /// View of `message` through its reveal run. Without a run the message is shown in full.
    pub fn from_reveal(message: &Message, run: Option<&RevealRun>) -> Self {
        let timestamp = Some(message.timestamp());
        match run {
            Some(run) => Self {
                text: run.revealed_prefix().to_string(),
                timestamp,
                typing: run.is_typing(),
                progress: run.progress_percent(),
            },
            None => Self {
                text: message.content().to_string(),
                timestamp,
                typing: false,
                progress: 100,
            },
        }
    }
}

/// Bar of at most [PROGRESS_BAR_MAX_WIDTH] columns plus a right-aligned percentage.
pub fn progress_bar_spans(percent: u8, avail: usize, palette: &SspPalette) -> Vec<Span<'static>> {
    let percent = percent.min(100) as usize;
    let bar_width = avail.saturating_sub(5).min(PROGRESS_BAR_MAX_WIDTH);
    let filled = percent * bar_width / 100;
    vec![
        Span::styled(BAR_GLYPH.repeat(filled), text_style(palette.accent)),
        Span::styled(BAR_GLYPH.repeat(bar_width - filled), text_style(palette.progress_track)),
        Span::styled(format!(" {:>3}%", percent), text_muted_style(palette.text_muted)),
    ]
}

pub fn assistant_message_lines(
    msg: &AssistantMessage,
    palette: &SspPalette,
    width: usize,
    cursor_visible: bool,
) -> Vec<Line<'static>> {
    let border = border_span(text_style(palette.border));
    let avail = width.saturating_sub(BODY_INDENT).max(1);
    // one column kept free for the cursor
    let wrap_width = if msg.typing { avail.saturating_sub(1).max(1) } else { avail };

    let mut lines = vec![meta_line(
        &border,
        AVATAR_ASSISTANT,
        palette.success,
        ROLE_ASSISTANT,
        msg.timestamp.as_deref(),
        palette,
    )];

    let mut body = wrap_lines(&msg.text, wrap_width);
    if msg.typing && body.is_empty() {
        body.push(String::new());
    }
    let last = body.len().saturating_sub(1);
    for (i, seg) in body.into_iter().enumerate() {
        let mut spans = vec![
            border.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg, text_style(palette.text)),
        ];
        if msg.typing && i == last {
            let glyph = if cursor_visible { TYPING_CURSOR } else { " " };
            spans.push(Span::styled(glyph, text_style(palette.accent)));
        }
        lines.push(Line::from(spans));
    }

    let mut spans = vec![border.clone(), Span::raw(LEFT_PADDING)];
    spans.extend(progress_bar_spans(msg.progress, avail, palette));
    lines.push(Line::from(spans));
    lines
}
