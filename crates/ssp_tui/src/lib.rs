//! ssp-tui: terminal chat UI for ssp-chat.
//!
//! Theming in `theme`; layout in `layouts`; message rendering in `messages`;
//! state, key handling and view in [state], [keys] and [view]. Run with [run_tui].

pub mod animation;
pub mod keys;
pub mod layouts;
pub mod messages;
pub mod run;
pub mod state;
pub mod theme;
pub mod utils;
pub mod view;

pub use run::{ChatChannels, TuiOptions, run_tui};
pub use state::{ErrorNotice, Screen, TuiState};
pub use view::draw as draw_view;
