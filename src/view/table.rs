//! Codepoint table widget.

use super::put_str;
use super::styles::BrowserStyles;
use crate::layout::{format_entry, layout_table, TableLayout};
use crate::state::AppState;
use ratatui::{buffer::Buffer, layout::Rect};

/// Draw the visible entries of the table into `area`.
///
/// Returns the layout so the caller can report the visible range.
pub fn render_table(
    buf: &mut Buffer,
    area: Rect,
    state: &AppState<'_>,
    styles: &BrowserStyles,
) -> TableLayout {
    let view = state.view();
    let data = state.data();
    let layout = layout_table(view.scroll_index, view.column_count, view.viewport, data.len());
    let glyph_style = view.glyph_style();

    for cell in &layout.cells {
        let entry = &data.entries()[cell.index];
        let available = usize::from(cell.width);
        let Some(pieces) = format_entry(entry, data.name(entry), available, glyph_style) else {
            continue;
        };
        let x = area.x + cell.x;
        let y = area.y + cell.y;
        put_str(buf, x, y, &pieces.label, available, styles.label);
        if !pieces.name.is_empty() {
            let offset = pieces.name_offset();
            put_str(
                buf,
                x + offset as u16,
                y,
                &pieces.name,
                available - offset,
                styles.name,
            );
        }
        if let Some(glyph) = &pieces.glyph {
            put_str(buf, x + glyph.offset as u16, y, &glyph.text, glyph.width, styles.glyph);
        }
    }

    layout
}

/// Status row text for the table: the first and last values shown.
pub fn table_status(state: &AppState<'_>, layout: &TableLayout) -> String {
    let codepoints = state.codepoints();
    let first = layout.first().unwrap_or(state.view().scroll_index);
    let last = layout.last().unwrap_or(first);
    format!(
        "[{:04X} - {:04X}]",
        codepoints.value_at(first),
        codepoints.value_at(last)
    )
}
