//! User message rendering.
//!
//! Layout:
//! - First line: accent border, `You` avatar, role label, timestamp
//! - Body: border + 2-space indent, wrapped text (explicit newlines kept)

use ratatui::text::{Line, Span};
use ssp_constant::text::chat::{AVATAR_USER, ROLE_USER};
use ssp_core::Message;

use super::{BODY_INDENT, border_span, meta_line};
use crate::layouts::text_style;
use crate::theme::SspPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

/// User message for display.
#[derive(Debug, Clone)]
pub struct UserMessage {
    pub text: String,
    /// Short creation time (e.g. "10:32").
    pub timestamp: Option<String>,
}

impl From<&Message> for UserMessage {
    fn from(message: &Message) -> Self {
        Self {
            text: message.content().to_string(),
            timestamp: Some(message.timestamp()),
        }
    }
}

pub fn user_message_lines(msg: &UserMessage, palette: &SspPalette, width: usize) -> Vec<Line<'static>> {
    let border = border_span(text_style(palette.accent));
    let wrap_width = width.saturating_sub(BODY_INDENT).max(1);

    let mut lines = vec![meta_line(
        &border,
        AVATAR_USER,
        palette.accent,
        ROLE_USER,
        msg.timestamp.as_deref(),
        palette,
    )];
    for seg in wrap_lines(&msg.text, wrap_width) {
        lines.push(Line::from(vec![
            border.clone(),
            Span::raw(LEFT_PADDING),
            Span::styled(seg, text_style(palette.text)),
        ]));
    }
    lines
}
