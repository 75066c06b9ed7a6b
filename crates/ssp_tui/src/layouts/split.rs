//! Split the terminal area into header, body, and footer regions.

use ratatui::layout::Rect;

use crate::utils::horizontal_padding;

/// Fixed height for the header (two lines: title + border).
pub const HEADER_HEIGHT: u16 = 2;

/// Regions for a main app layout: header, scrollable body, footer.
#[derive(Debug, Clone)]
pub struct MainSplits {
    /// Top strip (title, status).
    pub header: Rect,
    /// Middle area. May have zero height if area too small.
    pub body: Rect,
    /// Bottom strip (input, controls, hints).
    pub footer: Rect,
}

/// Split `area` into header (fixed top), body (middle), footer of `footer_height` (fixed bottom).
/// The footer wins over the body when space runs out.
pub fn main_splits(area: Rect, footer_height: u16) -> MainSplits {
    let (header, rest) = vertical_split(area, HEADER_HEIGHT);
    let footer_h = footer_height.min(rest.height);
    let (body, footer) = vertical_split(rest, rest.height - footer_h);
    MainSplits { header, body, footer }
}

/// [main_splits] with the body padded horizontally.
pub fn main_splits_with_padding(area: Rect, footer_height: u16) -> MainSplits {
    let mut splits = main_splits(area, footer_height);
    splits.body = horizontal_padding(splits.body);
    splits
}

/// Cut `top_height` rows off the top of `area`; the rest goes below.
pub fn vertical_split(area: Rect, top_height: u16) -> (Rect, Rect) {
    let top_h = top_height.min(area.height);
    let top = Rect::new(area.x, area.y, area.width, top_h);
    let bottom = Rect::new(area.x, area.y + top_h, area.width, area.height - top_h);
    (top, bottom)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_splits_assigns_regions() {
        let s = main_splits(Rect::new(0, 0, 80, 24), 6);
        assert_eq!(s.header.height, 2);
        assert_eq!(s.footer.height, 6);
        assert_eq!(s.body.height, 16);
        assert_eq!(s.body.y, 2);
        assert_eq!(s.footer.y, 18);
    }

    #[test]
    fn main_splits_tiny_terminal() {
        let s = main_splits(Rect::new(0, 0, 80, 5), 6);
        assert_eq!(s.header.height, 2);
        assert_eq!(s.footer.height, 3);
        assert_eq!(s.body.height, 0);
    }

    #[test]
    fn main_splits_zero_height() {
        let s = main_splits(Rect::new(0, 0, 80, 0), 6);
        assert_eq!(s.header.height, 0);
        assert_eq!(s.footer.height, 0);
        assert_eq!(s.body.height, 0);
    }

    #[test]
    fn vertical_split_divides_height() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 10), 3);
        assert_eq!(top.height, 3);
        assert_eq!(bottom.height, 7);
        assert_eq!(bottom.y, 3);
    }

    #[test]
    fn vertical_split_larger_than_area() {
        let (top, bottom) = vertical_split(Rect::new(0, 0, 80, 5), 10);
        assert_eq!(top.height, 5);
        assert_eq!(bottom.height, 0);
    }
}
