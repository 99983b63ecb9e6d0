//! Block list widget.

use super::constants::{BLOCK_LIST_INDENT, BLOCK_LIST_NAME_MARGIN, EMPTY_BLOCK_SUFFIX};
use super::put_str;
use super::styles::BrowserStyles;
use crate::layout::layout_block_list;
use crate::state::AppState;
use ratatui::{buffer::Buffer, layout::Rect};

/// Draw the window of the block list around `selected` into `area`.
///
/// Each row reads `FROM .. TO  NAME`. The selected row is drawn in
/// reverse video; blocks without codepoints are dimmed and marked.
pub fn render_block_list(
    buf: &mut Buffer,
    area: Rect,
    state: &AppState<'_>,
    selected: usize,
    styles: &BrowserStyles,
) {
    let blocks = state.blocks();
    let viewport = state.view().viewport;
    let window = layout_block_list(selected, blocks.len(), viewport);
    let name_width = usize::from(viewport.width.saturating_sub(BLOCK_LIST_NAME_MARGIN));
    let x = area.x + BLOCK_LIST_INDENT;
    let room = usize::from(area.width.saturating_sub(BLOCK_LIST_INDENT));

    for (row, index) in window.indices().enumerate() {
        let block = &blocks.blocks()[index];
        let empty = blocks.is_empty_block(index);
        let text = format!(
            "{:>6} ..{:>6}  {:<name_width$}",
            format!("{:04X}", block.from()),
            format!("{:04X}", block.to()),
            block.name(),
        );
        let style = if index == selected {
            styles.selected
        } else if empty {
            styles.empty_block
        } else {
            styles.name
        };
        let y = area.y + row as u16;
        let (end, _) = put_str(buf, x, y, &text, room, style);
        if empty {
            let used = usize::from(end - x);
            put_str(buf, end, y, EMPTY_BLOCK_SUFFIX, room.saturating_sub(used), styles.name);
        }
    }
}
