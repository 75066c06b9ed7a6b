//! Layout components built from [crate::utils] and [crate::theme].
//!
//! - **[split]**: Split the screen into header, body, footer.
//! - **[panel]**: Bordered panel with inner padded rect (landing card).
//! - **[style]**: Map palette [Rgb](crate::theme::Rgb) to ratatui styles.
//! - **[head]**: Header strip with status dot.
//! - **[chats]**: Transcript area and scrollbar.
//! - **[input]**: Multi-line input box.
//! - **[controls]**: Send button and system note.
//! - **[shortcut]**: Shortcut hint line.

mod chats;
mod controls;
mod head;
mod input;
mod panel;
mod shortcut;
mod split;
mod style;

pub use chats::{ChatsLayout, render_scrollbar, scrollbar_thumb};
pub use controls::{send_control_line, send_label};
pub use head::{HeaderStatus, block_for_head, header_line, render_header};
pub use input::{INPUT_ICON, INPUT_PADDING_H, InputRows, block_for_input_bordered, input_height, input_rows};
pub use panel::{PanelLayout, block_for_panel};
pub use shortcut::{ShortcutContext, shortcut_inner_rect, shortcut_line};
pub use split::{HEADER_HEIGHT, MainSplits, main_splits, main_splits_with_padding, vertical_split};
pub use style::{
    background_style, border_style, button_style, danger_style, rgb_to_color, strong_style, success_style,
    text_muted_style, text_style, warning_style,
};
