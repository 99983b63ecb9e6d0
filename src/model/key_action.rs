//! Domain-level keyboard commands independent of key bindings.

/// Logical commands for the table and block-list views.
///
/// These represent user intent, not specific keys. Each view decides what a
/// command means for it: [`KeyAction::LeapForward`] moves the table by
/// U+1000 but jumps the block list to its last block. The mapping from
/// crossterm events is handled by [`KeyBindings`](crate::config::KeyBindings).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Movement
    /// One entry forward. Default: ↓
    NextEntry,
    /// One entry back. Default: ↑
    PrevEntry,
    /// One column (a screen height of entries) forward. Default: →
    NextColumn,
    /// One column back. Default: ←
    PrevColumn,
    /// One screenful forward. Default: Space/Page Down
    PageForward,
    /// One screenful back. Default: Backspace/Page Up
    PageBack,
    /// Forward by U+1000 (table) or to the last block (block list). Default: }
    LeapForward,
    /// Back by U+1000 (table) or to the first block (block list). Default: {
    LeapBack,

    // Search and jumps
    /// Prompt for a name substring. Default: /
    Search,
    /// Repeat the last search forward. Default: n
    SearchNext,
    /// Repeat the last search backward. Default: p
    SearchPrev,
    /// Prompt for a hex codepoint. Default: u/s
    GoToCodepoint,
    /// Open the block list. Default: j/b
    SelectBlock,

    // Layout
    /// Add a table column. Default: [
    AddColumn,
    /// Remove a table column. Default: ]
    RemoveColumn,

    // Application
    /// Accept the current selection. Default: Enter
    Confirm,
    /// Leave the current view without changes. Default: Esc/Ctrl+g
    Cancel,
    /// Show the key command summary. Default: ?/h
    Help,
    /// Show the Unicode version of the dataset. Default: v
    ShowVersion,
    /// Repaint the whole screen. Default: Ctrl+l, also produced by terminal resize
    Redraw,
    /// Leave the current view, or the program from the table. Default: q
    Quit,
    /// Exit immediately from anywhere. Default: Ctrl+c
    Interrupt,
}

/// Commands understood by the single-line input prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// A typed character; the prompt decides whether it is permitted.
    Insert(char),
    /// Delete the last character. Default: Backspace/Delete/Ctrl+h
    Erase,
    /// Delete the whole line. Default: Ctrl+u
    Kill,
    /// Accept the input. Default: Enter
    Submit,
    /// Abandon the input. Default: Esc/Ctrl+g
    Abort,
    /// Repaint, produced by terminal resize and Ctrl+l.
    Redraw,
    /// Exit immediately. Default: Ctrl+c
    Interrupt,
}
