//! Layout engine (pure).
//!
//! Turns a scroll position and terminal geometry into positioned pieces the
//! view draws. Nothing here touches the terminal.

pub mod block_list;
pub mod entry;
pub mod table;
pub mod types;

pub use block_list::{layout_block_list, BlockWindow};
pub use entry::{format_entry, shorten_name, EntryCells, Glyph, GlyphStyle, ELLIPSIS};
pub use table::{
    clamp_columns, clamp_scroll, layout_table, max_columns, page_size, TableCell, TableLayout,
};
pub use types::{ViewportDimensions, MIN_COLUMN_WIDTH};
