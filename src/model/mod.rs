//! Domain model types (pure).
//!
//! All types in this module are read-only data with smart constructors.

pub mod block;
pub mod codepoint;
pub mod dataset;
pub mod error;
pub mod key_action;

// Re-export for convenience
pub use block::BlockRange;
pub use codepoint::{CodepointEntry, NameSpan, MAX_CODEPOINT};
pub use dataset::{DatasetBuilder, UnicodeData};
pub use error::{AppError, DatasetError, Rejection, StartupError};
pub use key_action::{KeyAction, TextKey};
