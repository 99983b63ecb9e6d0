//! Single-line input on the status row (pure state transitions).
//!
//! Used for name searches and hex jumps. The buffer only ever holds
//! characters the prompt permits, and never more than fits on the row.

use crate::model::{Rejection, TextKey};

/// What the input line is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// A name substring.
    Search,
    /// A hexadecimal codepoint value.
    Hex,
}

impl InputKind {
    /// Text drawn in front of the input.
    pub fn prompt(self) -> &'static str {
        match self {
            InputKind::Search => "/",
            InputKind::Hex => "U+",
        }
    }

    /// Hard limit on input length, independent of terminal width.
    pub fn capacity(self) -> usize {
        match self {
            InputKind::Search => 255,
            InputKind::Hex => 6,
        }
    }

    /// Whether `ch` may be typed into this input.
    pub fn permits(self, ch: char) -> bool {
        match self {
            InputKind::Search => ch == ' ' || ch.is_ascii_graphic(),
            InputKind::Hex => ch.is_ascii_hexdigit(),
        }
    }
}

/// The input line being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    kind: InputKind,
    buffer: String,
    max_len: usize,
}

/// Result of feeding one key to a [`TextInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputStep {
    /// Still editing.
    Editing,
    /// The key was refused; the buffer is unchanged.
    Rejected(Rejection),
    /// Input accepted with the given text.
    Submitted(String),
    /// Input abandoned.
    Aborted,
    /// Program interrupt requested.
    Interrupted,
}

impl TextInput {
    /// Empty input of `kind` on a terminal `width` cells wide.
    pub fn new(kind: InputKind, width: u16) -> Self {
        Self {
            kind,
            buffer: String::new(),
            max_len: max_len(kind, width),
        }
    }

    /// What is being collected.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Longest text the input currently accepts.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Recompute the limit for a new terminal width, truncating the buffer
    /// if it no longer fits.
    pub fn fit_to_width(&mut self, width: u16) {
        self.max_len = max_len(self.kind, width);
        // Permitted characters are all ASCII, so byte length is char count.
        self.buffer.truncate(self.max_len);
    }
}

fn max_len(kind: InputKind, width: u16) -> usize {
    usize::from(width)
        .saturating_sub(kind.prompt().len())
        .min(kind.capacity())
}

/// Apply one line-editor command.
///
/// Characters the prompt does not permit are ignored. Typing into a full
/// buffer and erasing an empty one are rejected.
pub fn handle_text_key(input: &mut TextInput, key: TextKey, width: u16) -> InputStep {
    match key {
        TextKey::Insert(ch) if input.kind.permits(ch) => {
            if input.buffer.len() < input.max_len {
                input.buffer.push(ch);
                InputStep::Editing
            } else {
                InputStep::Rejected(Rejection::InputFull)
            }
        }
        TextKey::Insert(_) => InputStep::Editing,
        TextKey::Erase => match input.buffer.pop() {
            Some(_) => InputStep::Editing,
            None => InputStep::Rejected(Rejection::NothingToErase),
        },
        TextKey::Kill => {
            input.buffer.clear();
            InputStep::Editing
        }
        TextKey::Redraw => {
            input.fit_to_width(width);
            InputStep::Editing
        }
        TextKey::Submit => InputStep::Submitted(std::mem::take(&mut input.buffer)),
        TextKey::Abort => InputStep::Aborted,
        TextKey::Interrupt => InputStep::Interrupted,
    }
}
