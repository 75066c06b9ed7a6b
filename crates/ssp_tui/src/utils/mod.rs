//! Shared utilities for the chat TUI.
//!
//! - **[constants]**: Spacing, padding, and sizing constants.
//! - **[layout]**: Rect padding, centering, scroll clamp.
//! - **[format]**: Width-aware wrapping and truncation.

mod constants;
mod format;
mod layout;

pub use constants::*;
pub use format::{truncate_ellipsis, wrap_lines};
pub use layout::{centered, clamp_scroll, horizontal_padding, horizontal_padding_with, padding};
