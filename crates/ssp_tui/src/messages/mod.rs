//! Message rendering for the TUI. Uses crate::theme for colors.
//!
//! - **user**: User message: accent border, role meta line, wrapped body.
//! - **assistant**: Assistant message: revealed prefix, blinking cursor, progress bar.
//! - **error**: Inline reply failure.

pub mod assistant;
pub mod error;
pub mod user;

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::layouts::{strong_style, text_muted_style};
use crate::theme::{Rgb, SspPalette};

/// Left border in front of every message row.
pub(crate) const MESSAGE_BORDER: &str = "│ ";
/// Columns taken by border plus body indent.
pub(crate) const BODY_INDENT: usize = 4;

/// First row of a message: border, bold avatar, role label and optional timestamp.
pub(crate) fn meta_line(
    border: &Span<'static>,
    avatar: &str,
    avatar_color: Rgb,
    role_label: &str,
    timestamp: Option<&str>,
    palette: &SspPalette,
) -> Line<'static> {
    let muted = text_muted_style(palette.text_muted);
    let mut spans = vec![
        border.clone(),
        Span::styled(avatar.to_string(), strong_style(avatar_color)),
        Span::raw("  "),
        Span::styled(role_label.to_string(), muted),
    ];
    if let Some(t) = timestamp {
        spans.push(Span::styled(format!(" ・ {}", t), muted));
    }
    Line::from(spans)
}

pub(crate) fn border_span(style: Style) -> Span<'static> {
    Span::styled(MESSAGE_BORDER, style)
}
