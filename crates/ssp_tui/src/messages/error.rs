//! Inline reply failure (✗ icon, danger style).

use ratatui::text::{Line, Span};
use ssp_constant::text::chat::STATUS_FAILED;

use crate::layouts::{danger_style, text_muted_style};
use crate::theme::SspPalette;
use crate::utils::{LEFT_PADDING, wrap_lines};

const ICON: &str = "✗ ";

/// Failure shown in the transcript after the user message it belongs to.
#[derive(Debug, Clone)]
pub struct ErrorMessage {
    pub text: String,
    pub timestamp: Option<String>,
}

/// `✗ Reply failed ・ HH:MM`, then the error text wrapped and indented.
pub fn error_message_lines(msg: &ErrorMessage, palette: &SspPalette, width: usize) -> Vec<Line<'static>> {
    let style = danger_style(palette.danger);
    let mut head = vec![Span::styled(ICON, style), Span::styled(STATUS_FAILED, style)];
    if let Some(t) = &msg.timestamp {
        head.push(Span::styled(format!(" ・ {}", t), text_muted_style(palette.text_muted)));
    }

    let mut lines = vec![Line::from(head)];
    let wrap_width = width.saturating_sub(LEFT_PADDING.len()).max(1);
    for seg in wrap_lines(msg.text.trim(), wrap_width) {
        lines.push(Line::from(vec![Span::raw(LEFT_PADDING), Span::styled(seg, style)]));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn empty_text_is_header_only() {
        let msg = ErrorMessage {
            text: "  ".into(),
            timestamp: None,
        };
        let lines = error_message_lines(&msg, &SspPalette::dark(), 40);
        assert_eq!(lines.len(), 1);
        assert_eq!(text(&lines[0]), "✗ Reply failed");
    }

    #[test]
    fn header_and_body() {
        let msg = ErrorMessage {
            text: "responder error: backend down".into(),
            timestamp: Some("08:00".into()),
        };
        let lines = error_message_lines(&msg, &SspPalette::dark(), 80);
        assert_eq!(text(&lines[0]), "✗ Reply failed ・ 08:00");
        assert_eq!(text(&lines[1]), "  responder error: backend down");
    }

    #[test]
    fn wraps_long_text() {
        let msg = ErrorMessage {
            text: "Connection refused: could not reach the reply backend after several attempts".into(),
            timestamp: None,
        };
        let lines = error_message_lines(&msg, &SspPalette::dark(), 30);
        assert!(lines.len() > 2);
    }
}
