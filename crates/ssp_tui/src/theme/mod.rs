//! Chat theme: semantic color palette for the terminal UI.
//!
//! ```ignore
//! use ssp_tui::theme::SspPalette;
//!
//! let palette = SspPalette::for_appearance(ssp_core::Appearance::Light);
//! let text = palette.text.tuple();
//! ```

mod palette;
mod rgb;

pub use palette::SspPalette;
pub use rgb::Rgb;
