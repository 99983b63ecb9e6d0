//! Codepoint records.

/// The highest Unicode scalar value.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Location of a name inside the dataset's shared name buffer.
///
/// Names are never stored per entry; every entry points into one buffer
/// owned by [`UnicodeData`](super::UnicodeData).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NameSpan {
    pub(crate) offset: u32,
    pub(crate) len: u32,
}

impl NameSpan {
    /// Byte range of the name within the shared buffer.
    pub fn range(self) -> std::ops::Range<usize> {
        let start = self.offset as usize;
        start..start + self.len as usize
    }
}

/// One assigned Unicode scalar value.
///
/// # Invariants
/// - `value <= MAX_CODEPOINT`
/// - Within a dataset, entries are strictly increasing by `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodepointEntry {
    value: u32,
    name: NameSpan,
    combining: bool,
}

impl CodepointEntry {
    pub(crate) fn new(value: u32, name: NameSpan, combining: bool) -> Self {
        Self {
            value,
            name,
            combining,
        }
    }

    /// The codepoint value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Span of the official name in the shared name buffer.
    pub fn name_span(&self) -> NameSpan {
        self.name
    }

    /// True for characters that compose with a preceding base character.
    pub fn is_combining(&self) -> bool {
        self.combining
    }

    /// The entry as a `char`.
    ///
    /// Datasets never hold surrogates, so this only returns `None` for
    /// hand-built entries outside the scalar value range.
    pub fn as_char(&self) -> Option<char> {
        char::from_u32(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_span_range_covers_offset_and_len() {
        let span = NameSpan { offset: 10, len: 4 };
        assert_eq!(span.range(), 10..14);
    }

    #[test]
    fn as_char_converts_scalar_values() {
        let entry = CodepointEntry::new(0x41, NameSpan { offset: 0, len: 0 }, false);
        assert_eq!(entry.as_char(), Some('A'));
    }

    #[test]
    fn as_char_rejects_surrogates() {
        let entry = CodepointEntry::new(0xD800, NameSpan { offset: 0, len: 0 }, false);
        assert_eq!(entry.as_char(), None);
    }
}
