//! Input box layout: multi-line textarea with a rounded border.

use ratatui::widgets::{Block, BorderType, Borders, Padding};
use unicode_width::UnicodeWidthChar;

use super::style::{background_style, border_style};
use crate::theme::SspPalette;
use crate::utils::INPUT_MAX_ROWS;

/// Horizontal padding inside the input block (each side).
pub const INPUT_PADDING_H: u16 = 1;

/// Icon shown at the start of the first input row.
pub const INPUT_ICON: &str = "▸ ";

/// Rows the input box needs for `line_count` text lines: border + content + border.
pub fn input_height(line_count: usize) -> u16 {
    let rows = (line_count.max(1) as u16).min(INPUT_MAX_ROWS);
    rows + 2
}

/// Block for the input area with rounded border. Disabled while a reply is pending.
pub fn block_for_input_bordered(palette: &SspPalette, focused: bool) -> Block<'static> {
    let border = if focused {
        border_style(palette.border_focused)
    } else {
        border_style(palette.border)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(background_style(palette.surface_background))
        .padding(Padding::new(INPUT_PADDING_H, INPUT_PADDING_H, 0, 0))
}

/// Input text laid out in rows of at most `width` columns, with the cursor cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRows {
    pub rows: Vec<String>,
    /// (row, column) of the cursor.
    pub cursor: (usize, usize),
}

/// Break `text` at newlines and wherever a row would exceed `width` columns.
/// `cursor` is a byte offset into `text`.
pub fn input_rows(text: &str, cursor: usize, width: usize) -> InputRows {
    let width = width.max(1);
    let mut rows = vec![String::new()];
    let mut col = 0;
    let mut at = None;
    for (i, c) in text.char_indices() {
        if i == cursor {
            at = Some((rows.len() - 1, col));
        }
        if c == '\n' {
            rows.push(String::new());
            col = 0;
            continue;
        }
        let w = c.width().unwrap_or(0);
        if col + w > width {
            rows.push(String::new());
            col = 0;
            if i == cursor {
                at = Some((rows.len() - 1, 0));
            }
        }
        if let Some(row) = rows.last_mut() {
            row.push(c);
        }
        col += w;
    }
    let cursor = at.unwrap_or((rows.len() - 1, col.min(width)));
    InputRows { rows, cursor }
}
