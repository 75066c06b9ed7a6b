//! Chat area layout: scrollable transcript region and its scrollbar.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::Block;

use super::style::background_style;
use crate::theme::SspPalette;

/// Layout for the transcript body: description strip on top, scrollable list below.
#[derive(Debug, Clone)]
pub struct ChatsLayout {
    /// Full body area (from [super::split::MainSplits::body]).
    pub area: Rect,
    /// Fixed description rows above the transcript.
    pub description: Rect,
    /// Scrollable transcript rows.
    pub inner: Rect,
}

impl ChatsLayout {
    /// `description_rows` plus one spacer row are taken from the top when the body is tall enough.
    pub fn new(area: Rect, description_rows: u16) -> Self {
        let taken = if area.height > description_rows + 2 {
            description_rows + 1
        } else {
            0
        };
        let description = Rect {
            height: taken.saturating_sub(1),
            ..area
        };
        let inner = Rect {
            y: area.y + taken,
            height: area.height - taken,
            ..area
        };
        Self {
            area,
            description,
            inner,
        }
    }
}

/// Thumb row offset and height for a scrollbar of `viewport` rows.
/// `offset_from_top` is the first visible content line.
pub fn scrollbar_thumb(content: usize, viewport: usize, offset_from_top: usize) -> (u16, u16) {
    if viewport == 0 || content <= viewport {
        return (0, viewport as u16);
    }
    let thumb = ((viewport * viewport) as f64 / content as f64).ceil().max(1.0) as usize;
    let max_offset = content - viewport;
    let ratio = offset_from_top.min(max_offset) as f64 / max_offset as f64;
    let y = (ratio * (viewport - thumb) as f64).round() as u16;
    (y, thumb as u16)
}

/// Draw a one-column scrollbar on the right edge of `area` when content overflows.
pub fn render_scrollbar(
    frame: &mut Frame,
    area: Rect,
    palette: &SspPalette,
    content: usize,
    offset_from_top: usize,
) {
    let viewport = area.height as usize;
    if content <= viewport || area.width == 0 {
        return;
    }
    let track = Rect {
        x: area.x + area.width - 1,
        y: area.y,
        width: 1,
        height: area.height,
    };
    frame.render_widget(
        Block::default().style(background_style(palette.scrollbar_track_background)),
        track,
    );
    let (y, h) = scrollbar_thumb(content, viewport, offset_from_top);
    let thumb = Rect {
        y: track.y + y,
        height: h,
        ..track
    };
    frame.render_widget(
        Block::default().style(background_style(palette.scrollbar_thumb_background)),
        thumb,
    );
}
