//! Shimmer animation: a highlight sweeping left to right over text.
//!
//! Colors come from the palette: `text_muted` (dim) blended toward `accent` (bright).

use std::time::Instant;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

use crate::layouts::rgb_to_color;
use crate::theme::{Rgb, SspPalette};

/// Width of the highlight as a fraction of the text length.
const SHIMMER_WIDTH: f64 = 0.35;

/// How far the highlight center moves per second (fraction of the text length).
const SHIMMER_SPEED: f64 = 0.6;

/// Largest step per tick, so a stalled loop does not jump the highlight.
const MAX_STEP: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct Shimmer {
    /// Highlight center (0.0 = left, 1.0 + width = wraps).
    position: f64,
    last_tick: Instant,
}

impl Shimmer {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(now: Instant) -> Self {
        Self {
            position: 0.0,
            last_tick: now,
        }
    }

    /// Advance by the time since the last tick. Call once per frame.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub fn tick_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        self.position += (elapsed.as_secs_f64() * SHIMMER_SPEED).min(MAX_STEP);
        if self.position > 1.0 + SHIMMER_WIDTH {
            self.position -= 1.0 + SHIMMER_WIDTH;
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// One styled span per char, intensity by distance from the highlight center.
    pub fn styled_spans(&self, text: &str, palette: &SspPalette) -> Vec<Span<'static>> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        let n = chars.len() as f64;
        let half_width = SHIMMER_WIDTH / 2.0;
        let center = self.position * (1.0 + 2.0 * half_width) - half_width;

        chars
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                let distance = ((i as f64 + 0.5) / n - center).abs();
                let intensity = if distance <= half_width {
                    let t = distance / half_width;
                    1.0 - t * t
                } else {
                    0.0
                };
                Span::styled(c.to_string(), shimmer_style(palette.text_muted, palette.accent, intensity))
            })
            .collect()
    }
}

impl Default for Shimmer {
    fn default() -> Self {
        Self::new()
    }
}

fn shimmer_style(dim: Rgb, bright: Rgb, intensity: f64) -> Style {
    Style::default()
        .fg(rgb_to_color(dim.mix(bright, intensity)))
        .add_modifier(Modifier::BOLD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn one_span_per_char() {
        let s = Shimmer::new();
        let spans = s.styled_spans("入力中…", &SspPalette::dark());
        assert_eq!(spans.len(), 4);
        assert!(s.styled_spans("", &SspPalette::dark()).is_empty());
    }

    #[test]
    fn tick_is_capped_and_wraps() {
        let t0 = Instant::now();
        let mut s = Shimmer::starting_at(t0);
        s.tick_at(t0 + Duration::from_secs(10));
        assert!((s.position() - MAX_STEP).abs() < 1e-9);
        let mut now = t0 + Duration::from_secs(10);
        for _ in 0..100 {
            now += Duration::from_millis(100);
            s.tick_at(now);
        }
        assert!(s.position() <= 1.0 + SHIMMER_WIDTH);
    }

    #[test]
    fn highlight_brightens_chars_under_center() {
        let t0 = Instant::now();
        let mut s = Shimmer::starting_at(t0);
        // advance the center to the middle of the text
        while s.position() < 0.5 {
            let next = s.last_tick + Duration::from_millis(100);
            s.tick_at(next);
        }
        let palette = SspPalette::dark();
        let spans = s.styled_spans("abcdefghij", &palette);
        let dim = shimmer_style(palette.text_muted, palette.accent, 0.0);
        assert_eq!(spans[0].style, dim);
        assert!(spans.iter().any(|sp| sp.style != dim));
    }
}
