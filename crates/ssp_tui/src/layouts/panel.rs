//! Bordered panel layout: outer area, inner padded content area, and theme-backed block.

use ratatui::layout::Rect;
use ratatui::widgets::{Block, BorderType, Borders};

use super::style::{background_style, border_style};
use crate::theme::SspPalette;
use crate::utils::padding;

/// Bordered panel: computes inner [Rect] and a [Block] to render.
#[derive(Debug, Clone)]
pub struct PanelLayout {
    /// Full area of the panel (including border).
    pub outer: Rect,
    /// Inner area after border and padding (where content goes).
    pub inner: Rect,
}

impl PanelLayout {
    /// Inset by the border (1 on each side), then by `padding_h` / `padding_v`.
    pub fn new(area: Rect, padding_h: u16, padding_v: u16) -> Self {
        let after_border = padding(area, 1, 1);
        Self {
            outer: area,
            inner: padding(after_border, padding_h, padding_v),
        }
    }
}

/// Rounded panel block on the surface background.
pub fn block_for_panel(palette: &SspPalette, focused: bool) -> Block<'static> {
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_inner_inset_by_border_and_padding() {
        let layout = PanelLayout::new(Rect::new(0, 0, 20, 10), 2, 1);
        assert_eq!(layout.outer, Rect::new(0, 0, 20, 10));
        assert_eq!(layout.inner, Rect::new(3, 2, 14, 6));
    }

    #[test]
    fn panel_tiny_area() {
        let layout = PanelLayout::new(Rect::new(0, 0, 1, 1), 2, 1);
        assert_eq!(layout.inner.width, 0);
        assert_eq!(layout.inner.height, 0);
    }
}
