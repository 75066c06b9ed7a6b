//! TUI spacing and sizing constants.

/// Horizontal padding in characters (each side).
pub const HORIZONTAL_PADDING: u16 = 2;

/// Left indent for message bodies (two spaces).
pub const LEFT_PADDING: &str = "  ";

/// Blank lines between message blocks.
pub const MESSAGE_SPACING_LINES: usize = 1;

/// Input rows shown before the input box stops growing.
pub const INPUT_MAX_ROWS: u16 = 5;

/// Widest progress bar drawn under an assistant message.
pub const PROGRESS_BAR_MAX_WIDTH: usize = 24;

/// Rows reserved for the description above the transcript.
pub const DESCRIPTION_MAX_ROWS: usize = 3;
