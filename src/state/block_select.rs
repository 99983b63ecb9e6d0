//! Selection state for the block list.

use crate::model::KeyAction;

/// Currently highlighted row of the block list.
///
/// # Invariants
/// - `selected < block_count` whenever the list is non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockSelect {
    selected: usize,
}

impl BlockSelect {
    /// Open the list with `selected` highlighted, clamped to the list.
    pub fn new(selected: usize, block_count: usize) -> Self {
        Self {
            selected: selected.min(block_count.saturating_sub(1)),
        }
    }

    /// Index of the highlighted block.
    pub fn selected(&self) -> usize {
        self.selected
    }
}

/// Move the selection in response to a movement command.
///
/// `page` is the number of rows one screen shows. Commands that do not move
/// the selection leave it unchanged.
pub fn handle_block_movement(
    select: BlockSelect,
    action: KeyAction,
    page: usize,
    block_count: usize,
) -> BlockSelect {
    let last = block_count.saturating_sub(1);
    let selected = select.selected;
    let selected = match action {
        KeyAction::NextEntry => selected.saturating_add(1),
        KeyAction::PrevEntry => selected.saturating_sub(1),
        KeyAction::PageForward => selected.saturating_add(page),
        KeyAction::PageBack => selected.saturating_sub(page),
        KeyAction::LeapBack => 0,
        KeyAction::LeapForward => last,
        _ => selected,
    };
    BlockSelect {
        selected: selected.min(last),
    }
}
