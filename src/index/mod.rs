//! Read-only services over the Unicode dataset (pure).
//!
//! Both indices borrow the dataset and never mutate it; any derived data
//! they cache lives inside the index value, not in process globals.

pub mod block_index;
pub mod codepoint_index;

pub use block_index::BlockIndex;
pub use codepoint_index::{CodepointIndex, Direction, NameSearch};
