//! Windowing of the block list around the selected block.

use super::types::ViewportDimensions;

/// The slice of the block list visible on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    /// Index of the block drawn on the first row.
    pub top: usize,
    /// Number of blocks drawn.
    pub len: usize,
}

impl BlockWindow {
    /// Block indices in the window.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.top..self.top + self.len
    }
}

/// Center the window on `selected` among `len` blocks.
///
/// The window never starts before block 0 and, when the list is long
/// enough to fill the screen, never leaves rows empty at the bottom.
pub fn layout_block_list(selected: usize, len: usize, viewport: ViewportDimensions) -> BlockWindow {
    let rows = viewport.content_rows();
    let mut top = selected.saturating_sub(usize::from(viewport.height) / 2);
    if top + rows > len {
        top = len.saturating_sub(rows);
    }
    BlockWindow {
        top,
        len: rows.min(len - top),
    }
}
