//! Send control row: the send button followed by the system note.

use ratatui::text::{Line, Span};
use ssp_constant::text::chat::{SEND, SENDING, SYSTEM_NOTE};
use unicode_width::UnicodeWidthStr;

use super::style::{button_style, text_muted_style};
use crate::theme::SspPalette;
use crate::utils::truncate_ellipsis;

/// Label of the send control; toggles while a reply is pending.
pub fn send_label(submitting: bool) -> &'static str {
    if submitting { SENDING } else { SEND }
}

/// Button, two spaces, then the system note truncated to the remaining width.
pub fn send_control_line(palette: &SspPalette, submitting: bool, width: usize) -> Line<'static> {
    let label = format!(" {} ", send_label(submitting));
    let style = if submitting {
        button_style(palette.text_disabled, palette.button_disabled_background)
    } else {
        button_style(palette.button_text, palette.button_background)
    };
    let rest = width.saturating_sub(label.width() + 2);
    Line::from(vec![
        Span::styled(label, style),
        Span::raw("  "),
        Span::styled(truncate_ellipsis(SYSTEM_NOTE, rest), text_muted_style(palette.text_muted)),
    ])
}
