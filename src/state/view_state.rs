//! Display parameters owned by the navigation state machine.

use crate::layout::{clamp_columns, clamp_scroll, page_size, GlyphStyle, ViewportDimensions};

/// Default number of table columns.
pub const DEFAULT_COLUMNS: u16 = 2;

/// Scroll position, column count, glyph options, and terminal geometry.
///
/// # Invariants (after [`normalize`](Self::normalize))
/// - `1 <= column_count <= max_columns(viewport.width)`
/// - `scroll_index <= len - page_size` (or 0 when one page holds everything)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    /// Index of the first visible entry.
    pub scroll_index: usize,
    /// Requested number of table columns.
    pub column_count: u16,
    /// Base character combining marks are composed onto.
    pub accent: char,
    /// Whether combining marks are composed onto the accent.
    pub show_combining: bool,
    /// Current terminal size.
    pub viewport: ViewportDimensions,
}

impl ViewState {
    /// Create a view positioned at `scroll_index`.
    pub fn new(scroll_index: usize, viewport: ViewportDimensions) -> Self {
        let style = GlyphStyle::default();
        Self {
            scroll_index,
            column_count: DEFAULT_COLUMNS,
            accent: style.accent,
            show_combining: style.show_combining,
            viewport,
        }
    }

    /// Glyph options for entry formatting.
    pub fn glyph_style(&self) -> GlyphStyle {
        GlyphStyle {
            accent: self.accent,
            show_combining: self.show_combining,
        }
    }

    /// Entries in one column.
    pub fn rows(&self) -> usize {
        self.viewport.content_rows()
    }

    /// Entries on one screen.
    pub fn page_size(&self) -> usize {
        page_size(self.column_count, self.viewport)
    }

    /// Re-derive the bounds that depend on terminal geometry.
    ///
    /// Column count is clamped first since the scroll limit depends on it.
    pub fn normalize(&mut self, len: usize) {
        self.column_count = clamp_columns(self.column_count, self.viewport.width);
        self.scroll_index = clamp_scroll(self.scroll_index, len, self.page_size());
    }
}
