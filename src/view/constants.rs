//! Fixed text and dimensions used by the view.

/// Height of the status row at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Column where block list rows start.
pub const BLOCK_LIST_INDENT: u16 = 4;

/// Cells used by a block list row before the block name.
///
/// Names are padded to the terminal width minus this, so the highlight of
/// the selected row spans the whole line.
pub const BLOCK_LIST_NAME_MARGIN: u16 = 32;

/// Status row text while the block list is shown.
pub const BLOCK_LIST_STATUS: &str = "Character Blocks";

/// Suffix drawn after blocks that hold no codepoints.
pub const EMPTY_BLOCK_SUFFIX: &str = " [empty]";

/// Hint at the bottom of help overlays.
pub const HELP_DISMISS_HINT: &str = " Press any key to continue ";
