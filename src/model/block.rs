//! Named contiguous codepoint ranges.

/// A Unicode block such as "Greek and Coptic".
///
/// Bounds are inclusive. Blocks in a dataset are sorted and do not
/// overlap, but there may be gaps between them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlockRange {
    from: u32,
    to: u32,
    name: String,
}

impl BlockRange {
    /// Create a block. Returns `None` if `from > to`.
    pub fn new(from: u32, to: u32, name: impl Into<String>) -> Option<Self> {
        if from > to {
            return None;
        }
        Some(Self {
            from,
            to,
            name: name.into(),
        })
    }

    /// First codepoint value in the block.
    pub fn from(&self) -> u32 {
        self.from
    }

    /// Last codepoint value in the block.
    pub fn to(&self) -> u32 {
        self.to
    }

    /// Official block name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `value` falls within the block bounds.
    pub fn contains(&self, value: u32) -> bool {
        (self.from..=self.to).contains(&value)
    }
}
