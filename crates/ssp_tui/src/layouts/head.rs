//! Header strip layout: title left, right-aligned status with a colored dot.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::style::{
    background_style, border_style, danger_style, strong_style, success_style, text_muted_style, warning_style,
};
use crate::theme::SspPalette;
use crate::utils::horizontal_padding;

/// Color of the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    Ready,
    Busy,
    Error,
}

/// Build the header line: bold title left, then "● status" flush right.
pub fn header_line(
    title: &str,
    status_text: &str,
    status: HeaderStatus,
    palette: &SspPalette,
    width: u16,
) -> Line<'static> {
    let dot_style = match status {
        HeaderStatus::Error => danger_style(palette.danger),
        HeaderStatus::Busy => warning_style(palette.warning),
        HeaderStatus::Ready => success_style(palette.success),
    };
    let right_width = 2 + status_text.width();
    let gap = (width as usize).saturating_sub(title.width() + right_width);
    Line::from(vec![
        Span::styled(title.to_string(), strong_style(palette.text)),
        Span::raw(" ".repeat(gap)),
        Span::styled("● ", dot_style),
        Span::styled(status_text.to_string(), text_muted_style(palette.text_muted)),
    ])
}

/// Block for the header bar: full-width background, bottom border on second line.
pub fn block_for_head(palette: &SspPalette) -> Block<'static> {
    Block::default()
        .borders(Borders::BOTTOM)
        .border_style(border_style(palette.border))
        .style(background_style(palette.status_bar_background))
}

/// Draw the header: title line, then border.
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    palette: &SspPalette,
    title: &str,
    status_text: &str,
    status: HeaderStatus,
) {
    let inner = horizontal_padding(area);
    let line = header_line(title, status_text, status, palette, inner.width);
    frame.render_widget(block_for_head(palette), area);
    frame.render_widget(
        Paragraph::new(line).style(background_style(palette.status_bar_background)),
        Rect { height: inner.height.min(1), ..inner },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn header_line_fills_width() {
        let palette = SspPalette::dark();
        let line = header_line("チャット", "Ready", HeaderStatus::Ready, &palette, 30);
        assert_eq!(text(&line).width(), 30);
        assert!(text(&line).ends_with("● Ready"));
    }

    #[test]
    fn header_line_dot_color_follows_status() {
        let palette = SspPalette::dark();
        let line = header_line("t", "x", HeaderStatus::Error, &palette, 20);
        assert_eq!(line.spans[2].style, danger_style(palette.danger));
        let line = header_line("t", "x", HeaderStatus::Busy, &palette, 20);
        assert_eq!(line.spans[2].style, warning_style(palette.warning));
    }

    #[test]
    fn header_line_narrow_has_no_gap() {
        let palette = SspPalette::dark();
        let line = header_line("title", "status", HeaderStatus::Ready, &palette, 4);
        assert_eq!(line.spans[1].content, "");
    }
}
