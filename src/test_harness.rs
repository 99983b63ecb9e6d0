//! Acceptance Test Harness for TUI testing
//!
//! Provides a small fixture dataset and a high-level API for acceptance
//! testing by wrapping TuiApp<TestBackend> with convenient methods for
//! simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::layout::ViewportDimensions;
use crate::model::{BlockRange, UnicodeData};
use crate::state::{AppState, Outcome, ViewState};
use crate::view::{TuiApp, TuiError};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::OnceLock;

/// Twelve codepoints spread over seven blocks, with wide gaps between them.
///
/// | index | value  | name                            |
/// |-------|--------|---------------------------------|
/// | 0     | 0020   | space                           |
/// | 1     | 0041   | latin capital letter a          |
/// | 2     | 0042   | latin capital letter b          |
/// | 3     | 0043   | latin capital letter c          |
/// | 4     | 0061   | latin small letter a            |
/// | 5     | 00E9   | latin small letter e with acute |
/// | 6     | 0300   | combining grave accent (m)      |
/// | 7     | 0301   | combining acute accent (m)      |
/// | 8     | 0391   | greek capital letter alpha      |
/// | 9     | 03B1   | greek small letter alpha        |
/// | 10    | 4E00   | cjk unified ideograph-4e00      |
/// | 11    | 1F600  | grinning face                   |
///
/// Cyrillic (0400..04FF) holds none of them.
pub fn sample_data() -> UnicodeData {
    let block = |from, to, name| BlockRange::new(from, to, name).expect("valid block");
    UnicodeData::builder()
        .version("14.0.0")
        .codepoint(0x20, "space", false)
        .and_then(|b| b.codepoint(0x41, "latin capital letter a", false))
        .and_then(|b| b.codepoint(0x42, "latin capital letter b", false))
        .and_then(|b| b.codepoint(0x43, "latin capital letter c", false))
        .and_then(|b| b.codepoint(0x61, "latin small letter a", false))
        .and_then(|b| b.codepoint(0xE9, "latin small letter e with acute", false))
        .and_then(|b| b.codepoint(0x300, "combining grave accent", true))
        .and_then(|b| b.codepoint(0x301, "combining acute accent", true))
        .and_then(|b| b.codepoint(0x391, "greek capital letter alpha", false))
        .and_then(|b| b.codepoint(0x3B1, "greek small letter alpha", false))
        .and_then(|b| b.codepoint(0x4E00, "cjk unified ideograph-4e00", false))
        .and_then(|b| b.codepoint(0x1F600, "grinning face", false))
        .and_then(|b| b.block(block(0x0000, 0x007F, "Basic Latin")))
        .and_then(|b| b.block(block(0x0080, 0x00FF, "Latin-1 Supplement")))
        .and_then(|b| b.block(block(0x0300, 0x036F, "Combining Diacritical Marks")))
        .and_then(|b| b.block(block(0x0370, 0x03FF, "Greek and Coptic")))
        .and_then(|b| b.block(block(0x0400, 0x04FF, "Cyrillic")))
        .and_then(|b| b.block(block(0x4E00, 0x9FFF, "CJK Unified Ideographs")))
        .and_then(|b| b.block(block(0x1F600, 0x1F64F, "Emoticons")))
        .and_then(|b| b.build())
        .expect("sample dataset is well formed")
}

/// [`sample_data`] shared for the whole test run.
pub fn shared_sample_data() -> &'static UnicodeData {
    static SAMPLE: OnceLock<UnicodeData> = OnceLock::new();
    SAMPLE.get_or_init(sample_data)
}

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty trailing lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        lines.push(line.trim_end().to_string());
    }

    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<'static, TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Browse the sample dataset on an 80x24 terminal from its first entry.
    pub fn sample() -> Self {
        Self::with_view(shared_sample_data(), 80, 24, |_| {})
    }

    /// Browse `data` on a `width` x `height` terminal.
    ///
    /// `configure` adjusts the view before the first frame, e.g. to set the
    /// start position or the accent.
    pub fn with_view(
        data: &'static UnicodeData,
        width: u16,
        height: u16,
        configure: impl FnOnce(&mut ViewState),
    ) -> Self {
        Self::try_with_view(data, width, height, configure)
            .expect("TestBackend terminal should always initialize")
    }

    fn try_with_view(
        data: &'static UnicodeData,
        width: u16,
        height: u16,
        configure: impl FnOnce(&mut ViewState),
    ) -> Result<Self, TuiError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut view = ViewState::new(0, ViewportDimensions::new(width, height));
        configure(&mut view);
        let app = TuiApp::new_for_test(terminal, AppState::new(data, view), KeyBindings::default());
        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// Returns the outcome the state machine reported.
    pub fn send_key(&mut self, key: KeyCode) -> Outcome {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> Outcome {
        self.send_event(Event::Key(KeyEvent::new(key, mods)))
    }

    /// Send a sequence of keys, stopping if the app exits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) == Outcome::Exit {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) == Outcome::Exit {
                break;
            }
        }
    }

    /// Resize the terminal and deliver the resize event.
    pub fn resize(&mut self, width: u16, height: u16) -> Outcome {
        self.app.terminal_mut().backend_mut().resize(width, height);
        self.send_event(Event::Resize(width, height))
    }

    fn send_event(&mut self, event: Event) -> Outcome {
        if !self.running {
            return Outcome::Exit;
        }
        let outcome = self
            .app
            .handle_event_test(&event)
            .expect("TestBackend never fails");
        if outcome == Outcome::Exit {
            self.running = false;
        }
        outcome
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState<'static> {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Render and return the terminal buffer for style assertions.
    pub fn render_buffer(&mut self) -> ratatui::buffer::Buffer {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");
        self.app.terminal().backend().buffer().clone()
    }

    /// Cursor position after the last render.
    pub fn cursor(&mut self) -> (u16, u16) {
        let position = self
            .app
            .terminal_mut()
            .get_cursor_position()
            .expect("TestBackend cursor is always available");
        (position.x, position.y)
    }
}
