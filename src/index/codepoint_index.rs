//! Lookup and search over the sorted codepoint list.

use crate::model::{UnicodeData, MAX_CODEPOINT};

/// Direction of a circular name search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward higher indices, wrapping to 0 after the last entry.
    Forward,
    /// Toward lower indices, wrapping to the last entry before 0.
    Backward,
}

impl Direction {
    /// Next position after `pos` in a list of `len` entries, wrapping around.
    fn step(self, pos: usize, len: usize) -> usize {
        match self {
            Direction::Forward if pos + 1 >= len => 0,
            Direction::Forward => pos + 1,
            Direction::Backward if pos == 0 => len - 1,
            Direction::Backward => pos - 1,
        }
    }
}

/// Read-only index over a dataset's codepoints.
///
/// Every method returning an index returns a valid one; the dataset is
/// never empty.
#[derive(Debug, Clone, Copy)]
pub struct CodepointIndex<'a> {
    data: &'a UnicodeData,
}

impl<'a> CodepointIndex<'a> {
    /// Index over `data`.
    pub fn new(data: &'a UnicodeData) -> Self {
        Self { data }
    }

    /// The underlying dataset.
    pub fn data(&self) -> &'a UnicodeData {
        self.data
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Codepoint value of the entry at `index`, clamped to the last entry.
    pub fn value_at(&self, index: usize) -> u32 {
        let entries = self.data.entries();
        entries[index.min(entries.len() - 1)].value()
    }

    /// Index of the entry whose value equals `value`, or is nearest to it.
    ///
    /// When `value` falls between two entries at equal distance, the lower
    /// one wins.
    pub fn lookup(&self, value: u32) -> usize {
        let entries = self.data.entries();
        let above = entries.partition_point(|e| e.value() < value);
        if above == 0 {
            return 0;
        }
        if above == entries.len() {
            return entries.len() - 1;
        }
        if entries[above].value() == value {
            return above;
        }
        let below = above - 1;
        let down = value - entries[below].value();
        let up = entries[above].value() - value;
        if down <= up {
            below
        } else {
            above
        }
    }

    /// Nearest entry to the value `delta` away from the entry at `index`.
    ///
    /// The shift is applied to the codepoint value, not the index, so jumps
    /// land at a consistent magnitude regardless of gaps in the table.
    pub fn offset(&self, index: usize, delta: i64) -> usize {
        let target = (i64::from(self.value_at(index)) + delta).clamp(0, i64::from(MAX_CODEPOINT));
        self.lookup(target as u32)
    }

    /// Next entry after `start`, moving circularly in `direction`, whose
    /// name contains `substring`.
    ///
    /// The entry at `start` is examined last. Returns `None` once the search
    /// wraps back to `start` without a match. Matching is case-sensitive.
    pub fn find_name(&self, substring: &str, start: usize, direction: Direction) -> Option<usize> {
        let len = self.len();
        let start = start.min(len - 1);
        let mut pos = start;
        loop {
            pos = direction.step(pos, len);
            if self.data.name_at(pos).contains(substring) {
                return Some(pos);
            }
            if pos == start {
                return None;
            }
        }
    }

    /// Resolve hex text such as `1F600` or `U+00E9` to the nearest entry.
    ///
    /// Rejects empty input, non-hex characters and values above U+10FFFF.
    pub fn read_hex(&self, text: &str) -> Option<usize> {
        let digits = text.strip_prefix("U+").unwrap_or(text);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        if value > MAX_CODEPOINT {
            return None;
        }
        Some(self.lookup(value))
    }

    /// Resolve text consisting of exactly one character to the nearest entry.
    pub fn read_single_character(&self, text: &str) -> Option<usize> {
        let mut chars = text.chars();
        let ch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(self.lookup(u32::from(ch)))
    }
}

/// Name search that remembers the last successful search string.
#[derive(Debug, Clone, Default)]
pub struct NameSearch {
    last: Option<String>,
}

impl NameSearch {
    /// Create with no search history.
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent search string that found a match.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }

    /// Search for `substring`, or repeat the last successful search when
    /// `substring` is `None` or empty.
    ///
    /// Returns `None` when nothing matches or there is nothing to repeat.
    pub fn find(
        &mut self,
        index: &CodepointIndex<'_>,
        substring: Option<&str>,
        start: usize,
        direction: Direction,
    ) -> Option<usize> {
        match substring.filter(|s| !s.is_empty()) {
            Some(query) => {
                let found = index.find_name(query, start, direction)?;
                self.last = Some(query.to_string());
                Some(found)
            }
            None => {
                let query = self.last.as_deref()?;
                index.find_name(query, start, direction)
            }
        }
    }
}

#[cfg(test)]
#[path = "codepoint_index_tests.rs"]
mod tests;
