//! Mapping a scroll position and terminal geometry onto the table grid.
//!
//! The table is `columns` equal-width columns filled top to bottom, left to
//! right, with consecutive entries. Each column keeps its last cell blank
//! as a separator, so an entry gets `column_width - 1` cells.

use super::types::{ViewportDimensions, MIN_COLUMN_WIDTH};

/// An entry's position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCell {
    /// Index of the entry in the dataset.
    pub index: usize,
    /// Leftmost cell of the entry.
    pub x: u16,
    /// Row of the entry.
    pub y: u16,
    /// Cells available to the entry.
    pub width: u16,
}

/// Entries visible for one scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    /// Width of each column including its separator.
    pub column_width: u16,
    /// Rows per column.
    pub rows: usize,
    /// Placed entries in dataset order.
    pub cells: Vec<TableCell>,
}

impl TableLayout {
    /// Index of the first entry shown, if any.
    pub fn first(&self) -> Option<usize> {
        self.cells.first().map(|c| c.index)
    }

    /// Index of the last entry shown, if any.
    pub fn last(&self) -> Option<usize> {
        self.cells.last().map(|c| c.index)
    }
}

/// Most columns a terminal `width` cells wide can hold. Never less than 1.
pub fn max_columns(width: u16) -> u16 {
    (width.saturating_sub(1) / (MIN_COLUMN_WIDTH + 1)).max(1)
}

/// `columns` limited to `1..=max_columns(width)`.
pub fn clamp_columns(columns: u16, width: u16) -> u16 {
    columns.clamp(1, max_columns(width))
}

/// Number of entries one screen shows.
pub fn page_size(columns: u16, viewport: ViewportDimensions) -> usize {
    viewport.content_rows() * usize::from(columns)
}

/// Scroll position limited so the last screenful ends at the last entry.
///
/// A page with no rows still counts as one entry, so the result is always
/// a valid index into a non-empty dataset.
pub fn clamp_scroll(scroll: usize, len: usize, page: usize) -> usize {
    scroll.min(len.saturating_sub(page.max(1)))
}

/// Lay out the entries from `start` onwards over `columns` columns.
///
/// Entries past the end of a dataset of `len` entries are not placed.
/// Columns too narrow to show an entry are left empty.
pub fn layout_table(
    start: usize,
    columns: u16,
    viewport: ViewportDimensions,
    len: usize,
) -> TableLayout {
    let columns = columns.max(1);
    let column_width = viewport.width / columns;
    let rows = viewport.content_rows();
    let entry_width = column_width.saturating_sub(1);

    let mut cells = Vec::new();
    if entry_width >= MIN_COLUMN_WIDTH {
        let mut index = start;
        'columns: for column in 0..columns {
            for row in 0..rows {
                if index >= len {
                    break 'columns;
                }
                cells.push(TableCell {
                    index,
                    x: column * column_width,
                    y: row as u16,
                    width: entry_width,
                });
                index += 1;
            }
        }
    }

    TableLayout {
        column_width,
        rows,
        cells,
    }
}
