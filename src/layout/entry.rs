//! Formatting of a single table entry into terminal cells.
//!
//! An entry occupies one row of a column:
//!
//! ```text
//!  00E9 latin small letter e with acute é
//! |label| |name ...                    |glyph|
//! ```
//!
//! The label is the hex value right-aligned in five cells, the name follows
//! after a space, and the glyph sits flush against the right edge. Names
//! that do not fit are shortened around an ellipsis.

use super::types::MIN_COLUMN_WIDTH;
use crate::model::CodepointEntry;
use unicode_width::UnicodeWidthChar;

/// Marker inserted where a name was shortened.
pub const ELLIPSIS: char = '\u{2026}';

/// Cells used by the hex label of codepoints up to U+FFFFF.
const LABEL_WIDTH: usize = 5;

/// Below this many cells of name budget only a suffix is kept.
const SPLIT_THRESHOLD: usize = 7;

/// How zero-width combining marks are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    /// Base character a combining mark is composed onto.
    pub accent: char,
    /// Whether combining marks are composed onto `accent` at all.
    pub show_combining: bool,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            accent: '\u{00B7}',
            show_combining: true,
        }
    }
}

/// The glyph part of a formatted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    /// Text to draw: the character, possibly preceded by the accent.
    pub text: String,
    /// Cell offset from the start of the entry.
    pub offset: usize,
    /// Display width in cells.
    pub width: usize,
}

/// A table entry broken into positioned pieces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCells {
    /// Hex codepoint value, right-aligned.
    pub label: String,
    /// Name text, possibly shortened. Empty when there is no room.
    pub name: String,
    /// True when `name` was shortened and carries an ellipsis.
    pub truncated: bool,
    /// The glyph, or `None` for characters with no display width.
    pub glyph: Option<Glyph>,
}

impl EntryCells {
    /// Cell offset of the name from the start of the entry.
    pub fn name_offset(&self) -> usize {
        self.label.len() + 1
    }

    /// Number of cells from the start of the entry to the end of its
    /// rightmost piece.
    pub fn extent(&self) -> usize {
        let name_end = if self.name.is_empty() {
            self.label.len()
        } else {
            self.name_offset() + self.name.chars().count()
        };
        let glyph_end = self.glyph.as_ref().map_or(0, |g| g.offset + g.width);
        name_end.max(glyph_end)
    }
}

/// Format `entry` into at most `available` cells.
///
/// Returns `None` when `available` is below [`MIN_COLUMN_WIDTH`]; such
/// entries are not drawn.
pub fn format_entry(
    entry: &CodepointEntry,
    name: &str,
    available: usize,
    style: GlyphStyle,
) -> Option<EntryCells> {
    if available < usize::from(MIN_COLUMN_WIDTH) {
        return None;
    }

    let label = format!("{:>width$}", format!("{:04X}", entry.value()), width = LABEL_WIDTH);

    let ch = entry.as_char();
    let mut width = ch.and_then(UnicodeWidthChar::width).unwrap_or(0);
    // Spacing marks draw on their own; only zero-width marks need a base.
    let compose = entry.is_combining() && style.show_combining && width == 0;
    if compose {
        width = 1;
    }

    let budget = available.saturating_sub(label.len() + 2 + width);
    let (name, truncated) = shorten_name(name, budget);

    let glyph = ch.filter(|_| width > 0).map(|ch| {
        let mut text = String::with_capacity(8);
        if compose {
            text.push(style.accent);
        }
        text.push(ch);
        Glyph {
            text,
            offset: available - width,
            width,
        }
    });

    Some(EntryCells {
        label,
        name,
        truncated,
        glyph,
    })
}

/// Fit `name` into `budget` cells.
///
/// A name that fits is kept whole. Otherwise, with room to spare the name
/// keeps a prefix and a suffix around the ellipsis; in tighter space only
/// the ellipsis and the tail of the name remain.
pub fn shorten_name(name: &str, budget: usize) -> (String, bool) {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() <= budget {
        return (name.to_string(), false);
    }
    if budget == 0 {
        return (String::new(), false);
    }

    let mut out = String::with_capacity(budget + 2);
    if budget >= SPLIT_THRESHOLD {
        let head = budget / 2;
        let tail = budget - head - 1;
        out.extend(&chars[..head]);
        out.push(ELLIPSIS);
        out.extend(&chars[chars.len() - tail..]);
    } else {
        out.push(ELLIPSIS);
        out.extend(&chars[chars.len() - (budget - 1)..]);
    }
    (out, true)
}
