//! Help overlays listing the key commands.
//!
//! The table and the block list each have their own overlay. Both are
//! centered, bordered popups dismissed by any key.

use super::constants::HELP_DISMISS_HINT;
use super::styles::BrowserStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// One help row: up to two key/description pairs side by side.
type HelpRow = &'static [(&'static str, &'static str)];

const KEY_WIDTH: usize = 7;
const DESC_WIDTH: usize = 29;

const TABLE_HELP: &[HelpRow] = &[
    &[("Spc", "Move forward one screenful"), ("Bkspc", "Move back one screenful")],
    &[("Right", "Move forward one column"), ("Left", "Move back one column")],
    &[("Down", "Move forward one row"), ("Up", "Move back one row")],
    &[("}", "Move forward by U+1000"), ("{", "Move back by U+1000")],
    &[("[", "Add another column"), ("]", "Reduce number of columns")],
    &[("U or S", "Go to a specific codepoint"), ("J or B", "Jump to a selected block")],
    &[("/", "Search forward for a codepoint name containing a substring")],
    &[("N", "Repeat the last search"), ("P", "To previous search result")],
    &[("V", "Display Unicode version"), ("?", "Display this help text")],
    &[("^L", "Redraw the screen"), ("Q", "Exit the program")],
];

const BLOCK_LIST_HELP: &[HelpRow] = &[
    &[("Spc", "Move forward one screenful"), ("Bkspc", "Move back one screenful")],
    &[("Down", "Move forward one row"), ("Up", "Move back one row")],
    &[("}", "Move to end of list"), ("{", "Move to top of list")],
    &[("Enter", "View the characters at the selected block")],
    &[("V", "Display Unicode version"), ("?", "Display this help text")],
    &[("^L", "Redraw the screen"), ("Q", "Cancel and return")],
];

/// Which command summary to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    /// Commands of the codepoint table.
    Table,
    /// Commands of the block list.
    BlockList,
}

impl HelpTopic {
    fn rows(self) -> &'static [HelpRow] {
        match self {
            HelpTopic::Table => TABLE_HELP,
            HelpTopic::BlockList => BLOCK_LIST_HELP,
        }
    }

    fn title(self) -> &'static str {
        match self {
            HelpTopic::Table => " Keyboard Commands ",
            HelpTopic::BlockList => " Block List Commands ",
        }
    }
}

/// Render the help overlay for `topic` centered over `area`.
pub fn render_help_overlay(frame: &mut Frame, area: Rect, topic: HelpTopic, styles: &BrowserStyles) {
    let content = build_help_content(topic, styles);
    let content_width = content.iter().map(Line::width).max().unwrap_or(0);
    let popup_area = centered_rect(content_width as u16 + 2, content.len() as u16 + 2, area);
    if popup_area.is_empty() {
        return;
    }

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(topic.title())
                .borders(Borders::ALL)
                .border_style(styles.help_border),
        )
        .alignment(Alignment::Left);
    frame.render_widget(help_paragraph, popup_area);

    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };
    let hint = Paragraph::new(Line::from(Span::styled(
        HELP_DISMISS_HINT,
        styles.help_desc.add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn build_help_content(topic: HelpTopic, styles: &BrowserStyles) -> Vec<Line<'static>> {
    topic
        .rows()
        .iter()
        .map(|row| {
            let last = row.len().saturating_sub(1);
            let spans = row.iter().enumerate().flat_map(|(i, (key, desc))| {
                let desc = if i == last {
                    (*desc).to_string()
                } else {
                    format!("{desc:<DESC_WIDTH$}")
                };
                [
                    Span::styled(format!(" {key:<KEY_WIDTH$}"), styles.help_key),
                    Span::styled(desc, styles.help_desc),
                ]
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::styles::ColorConfig;

    fn plain(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn table_help_pairs_commands_in_two_columns() {
        let styles = BrowserStyles::with_color_config(ColorConfig::with_colors(false));
        let lines = build_help_content(HelpTopic::Table, &styles);
        assert_eq!(lines.len(), 10);
        assert_eq!(
            plain(&lines[0]),
            " Spc    Move forward one screenful    Bkspc  Move back one screenful"
        );
    }

    #[test]
    fn block_list_help_mentions_confirm() {
        let styles = BrowserStyles::with_color_config(ColorConfig::with_colors(false));
        let lines = build_help_content(HelpTopic::BlockList, &styles);
        assert_eq!(lines.len(), 6);
        assert!(plain(&lines[3]).contains("View the characters at the selected block"));
    }

    #[test]
    fn centered_rect_shrinks_to_area() {
        let area = Rect::new(0, 0, 40, 10);
        let rect = centered_rect(70, 14, area);
        assert_eq!(rect, area);
        let rect = centered_rect(20, 4, area);
        assert_eq!(rect, Rect::new(10, 3, 20, 4));
    }
}
