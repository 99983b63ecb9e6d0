//! Geometry shared by the layout functions.

/// Narrowest column, in cells, that still displays entries.
///
/// Columns narrower than this are left blank.
pub const MIN_COLUMN_WIDTH: u16 = 8;

/// Viewport dimensions in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportDimensions {
    /// Width in terminal columns.
    pub width: u16,
    /// Height in terminal rows.
    pub height: u16,
}

impl ViewportDimensions {
    /// Create new viewport dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Rows available for content; the bottom row is reserved for the
    /// status line and input prompt.
    pub fn content_rows(&self) -> usize {
        usize::from(self.height.saturating_sub(1))
    }
}

impl Default for ViewportDimensions {
    fn default() -> Self {
        Self::new(80, 24)
    }
}
