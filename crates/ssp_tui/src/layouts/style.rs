//! Map theme palette to ratatui styles for use in layout components.
//!
//! All colors come from [SspPalette]; use these helpers so borders,
//! backgrounds and text stay consistent with the theme.
//!
//! [SspPalette]: crate::theme::SspPalette

use ratatui::style::{Color, Modifier, Style};

use crate::theme::Rgb;

/// Convert theme [Rgb] to ratatui [Color].
#[inline]
pub fn rgb_to_color(rgb: Rgb) -> Color {
    let (r, g, b) = rgb.tuple();
    Color::Rgb(r, g, b)
}

/// Style for panel borders (border color, no fill).
pub fn border_style(border_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(border_rgb))
}

/// Style for panel background only.
pub fn background_style(bg_rgb: Rgb) -> Style {
    Style::default().bg(rgb_to_color(bg_rgb))
}

/// Style for primary text.
pub fn text_style(text_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_rgb))
}

/// Style for muted/secondary text.
pub fn text_muted_style(text_muted_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(text_muted_rgb))
}

/// Bold text in the given color (titles, avatars).
pub fn strong_style(rgb: Rgb) -> Style {
    text_style(rgb).add_modifier(Modifier::BOLD)
}

/// Filled control: `fg` text on `bg`, bold.
pub fn button_style(fg: Rgb, bg: Rgb) -> Style {
    Style::default()
        .fg(rgb_to_color(fg))
        .bg(rgb_to_color(bg))
        .add_modifier(Modifier::BOLD)
}

/// Style for success state.
pub fn success_style(success_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(success_rgb))
}

/// Style for error/danger state.
pub fn danger_style(danger_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(danger_rgb))
}

/// Style for warning state (e.g. sending indicator).
pub fn warning_style(warning_rgb: Rgb) -> Style {
    Style::default().fg(rgb_to_color(warning_rgb))
}
