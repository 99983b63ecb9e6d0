//! Block list access with memoized emptiness.

use super::codepoint_index::CodepointIndex;
use crate::model::{BlockRange, UnicodeData};
use std::cell::OnceCell;
use tracing::{debug, warn};

/// Read-only index over a dataset's blocks.
///
/// Which blocks contain no codepoints is computed for every block the first
/// time it is asked for, then cached for the life of the index.
#[derive(Debug)]
pub struct BlockIndex<'a> {
    data: &'a UnicodeData,
    empty: OnceCell<Vec<bool>>,
}

impl<'a> BlockIndex<'a> {
    /// Index over `data`'s block list.
    pub fn new(data: &'a UnicodeData) -> Self {
        Self {
            data,
            empty: OnceCell::new(),
        }
    }

    /// All blocks, ascending.
    pub fn blocks(&self) -> &'a [BlockRange] {
        self.data.blocks()
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.data.blocks().len()
    }

    /// True when the dataset has no block list.
    pub fn is_empty(&self) -> bool {
        self.data.blocks().is_empty()
    }

    /// Emptiness of every block, in block order.
    pub fn emptiness(&self) -> &[bool] {
        self.empty.get_or_init(|| {
            let flags = compute_emptiness(self.data);
            debug!(
                blocks = flags.len(),
                empty = flags.iter().filter(|e| **e).count(),
                "Computed block emptiness"
            );
            flags
        })
    }

    /// Whether the block at `block` holds no codepoints.
    ///
    /// Out-of-range block indices count as empty.
    pub fn is_empty_block(&self, block: usize) -> bool {
        self.emptiness().get(block).copied().unwrap_or(true)
    }

    /// The first block whose upper bound is at or above the value of the
    /// entry at `codepoint_index`, or the last block if there is none.
    ///
    /// Returns `None` only when there are no blocks at all.
    pub fn find_block_containing(&self, codepoint_index: usize) -> Option<usize> {
        let blocks = self.blocks();
        if blocks.is_empty() {
            return None;
        }
        let value = CodepointIndex::new(self.data).value_at(codepoint_index);
        Some(
            blocks
                .iter()
                .position(|b| b.to() >= value)
                .unwrap_or(blocks.len() - 1),
        )
    }

    /// Index of the first codepoint inside the block, or `None` if the
    /// block is empty.
    pub fn first_codepoint(&self, block: usize) -> Option<usize> {
        if self.is_empty_block(block) {
            return None;
        }
        let range = self.blocks().get(block)?;
        let index = CodepointIndex::new(self.data);
        let nearest = index.lookup(range.from());
        let first = if index.value_at(nearest) < range.from() {
            nearest + 1
        } else {
            nearest
        };
        if first < index.len() && range.contains(index.value_at(first)) {
            Some(first)
        } else {
            warn!(block = range.name(), "Block marked non-empty has no codepoint inside");
            None
        }
    }
}

/// For each block, find the entry nearest its start; the block is non-empty
/// when that entry or the one after it lies within the bounds.
fn compute_emptiness(data: &UnicodeData) -> Vec<bool> {
    let index = CodepointIndex::new(data);
    let entries = data.entries();
    data.blocks()
        .iter()
        .map(|block| {
            let n = index.lookup(block.from());
            let hit = |i: usize| entries.get(i).is_some_and(|e| block.contains(e.value()));
            !(hit(n) || hit(n + 1))
        })
        .collect()
}
