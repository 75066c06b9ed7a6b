//! Chat palette: semantic color roles (surfaces, borders, text, controls, chrome).

use ssp_core::Appearance;

use super::rgb::Rgb;

/// One full palette for an appearance (dark or light). All colors are semantic roles.
#[derive(Clone, Debug, PartialEq)]
pub struct SspPalette {
    // --- Surfaces
    /// App background.
    pub background: Rgb,
    /// Chat panel, landing card.
    pub surface_background: Rgb,

    // --- Borders
    pub border: Rgb,
    pub border_focused: Rgb,

    // --- Text
    pub text: Rgb,
    pub text_muted: Rgb,
    pub text_placeholder: Rgb,
    pub text_disabled: Rgb,

    // --- Semantic
    pub accent: Rgb,
    pub danger: Rgb,
    pub success: Rgb,
    pub warning: Rgb,

    // --- Controls
    pub button_background: Rgb,
    pub button_text: Rgb,
    pub button_disabled_background: Rgb,
    /// Unfilled part of the typing progress bar.
    pub progress_track: Rgb,

    // --- UI chrome
    pub status_bar_background: Rgb,
    pub scrollbar_thumb_background: Rgb,
    pub scrollbar_track_background: Rgb,
}

impl SspPalette {
    pub fn dark() -> Self {
        Self {
            background: Rgb(11, 13, 20),
            surface_background: Rgb(18, 21, 32),
            border: Rgb(36, 41, 60),
            border_focused: Rgb(96, 165, 250),
            text: Rgb(226, 232, 240),
            text_muted: Rgb(100, 116, 139),
            text_placeholder: Rgb(82, 96, 120),
            text_disabled: Rgb(71, 85, 105),
            accent: Rgb(96, 165, 250),
            danger: Rgb(248, 113, 113),
            success: Rgb(74, 222, 128),
            warning: Rgb(251, 191, 36),
            button_background: Rgb(37, 99, 235),
            button_text: Rgb(248, 250, 252),
            button_disabled_background: Rgb(51, 65, 85),
            progress_track: Rgb(30, 41, 59),
            status_bar_background: Rgb(18, 21, 32),
            scrollbar_thumb_background: Rgb(71, 85, 105),
            scrollbar_track_background: Rgb(20, 24, 36),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Rgb(248, 250, 252),
            surface_background: Rgb(255, 255, 255),
            border: Rgb(226, 232, 240),
            border_focused: Rgb(37, 99, 235),
            text: Rgb(15, 23, 42),
            text_muted: Rgb(100, 116, 139),
            text_placeholder: Rgb(148, 163, 184),
            text_disabled: Rgb(203, 213, 225),
            accent: Rgb(37, 99, 235),
            danger: Rgb(220, 38, 38),
            success: Rgb(22, 163, 74),
            warning: Rgb(217, 119, 6),
            button_background: Rgb(37, 99, 235),
            button_text: Rgb(255, 255, 255),
            button_disabled_background: Rgb(148, 163, 184),
            progress_track: Rgb(226, 232, 240),
            status_bar_background: Rgb(255, 255, 255),
            scrollbar_thumb_background: Rgb(203, 213, 225),
            scrollbar_track_background: Rgb(241, 245, 249),
        }
    }

    /// Palette for the given appearance.
    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Dark => Self::dark(),
            Appearance::Light => Self::light(),
        }
    }
}
