//! Shortcut hint line (below the controls), context-aware hints.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};

use super::input::INPUT_PADDING_H;
use super::style::text_muted_style;
use crate::theme::SspPalette;

/// Horizontal inset so hints align with the input content (input border + input padding).
const SHORTCUT_INSET_H: u16 = 1 + INPUT_PADDING_H;

/// Which hints to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutContext {
    Landing,
    /// Chat view, reply pending.
    Submitting,
    /// Chat view, input has text.
    Typing,
    /// Chat view, input empty.
    Idle,
}

/// Rect for the hint line, inset to align with the input content above.
pub fn shortcut_inner_rect(area: Rect) -> Rect {
    let inset = SHORTCUT_INSET_H;
    Rect {
        x: area.x.saturating_add(inset),
        y: area.y,
        width: area.width.saturating_sub(inset.saturating_mul(2)),
        height: area.height,
    }
}

pub fn shortcut_line(palette: &SspPalette, context: ShortcutContext) -> Line<'static> {
    let hint = match context {
        ShortcutContext::Landing => "Enter: open chat  ·  Ctrl+D: logs  ·  q: quit",
        ShortcutContext::Submitting => "Waiting for reply…  ·  ↑↓: scroll  ·  Esc: back  ·  Ctrl+C: quit",
        ShortcutContext::Typing => "Enter: send  ·  Alt+Enter: newline  ·  Ctrl+U: clear  ·  Esc: back",
        ShortcutContext::Idle => "↑↓: scroll  ·  Ctrl+D: logs  ·  Esc: back  ·  Ctrl+C: quit",
    };
    Line::from(vec![Span::styled(hint, text_muted_style(palette.text_muted))])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn shortcut_inner_rect_zero_width() {
        let inner = shortcut_inner_rect(Rect::new(0, 0, 0, 1));
        assert_eq!(inner.width, 0);
    }

    #[test]
    fn shortcut_line_per_context() {
        let palette = SspPalette::dark();
        assert!(text(&shortcut_line(&palette, ShortcutContext::Landing)).contains("open chat"));
        assert!(text(&shortcut_line(&palette, ShortcutContext::Submitting)).contains("Waiting"));
        assert!(text(&shortcut_line(&palette, ShortcutContext::Typing)).contains("Enter: send"));
        assert!(text(&shortcut_line(&palette, ShortcutContext::Idle)).contains("scroll"));
    }
}
