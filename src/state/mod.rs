//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod block_select;
pub mod text_input;
pub mod view_state;

// Re-export for convenience
pub use app_state::{AppState, Mode, Outcome, Overlay, LEAP_DISTANCE};
pub use block_select::{handle_block_movement, BlockSelect};
pub use text_input::{handle_text_key, InputKind, InputStep, TextInput};
pub use view_state::{ViewState, DEFAULT_COLUMNS};
