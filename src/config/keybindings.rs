//! Keyboard bindings configuration.
//!
//! Translates raw crossterm events into logical commands. Terminal resize
//! is intercepted here: it updates the viewport and comes out as a redraw,
//! so every mode re-derives its layout bounds the same way.

use crate::layout::ViewportDimensions;
use crate::model::{KeyAction, TextKey};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Letter keys are case-folded before lookup, so every binding accepts
/// both cases.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
    text: HashMap<KeyEvent, TextKey>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&fold_case(key)).copied()
    }

    /// Translate an event for the table or block list.
    ///
    /// Returns `None` for unbound keys, key releases, and non-key events.
    pub fn interpret(
        &self,
        event: &Event,
        viewport: &mut ViewportDimensions,
    ) -> Option<KeyAction> {
        match event {
            Event::Resize(width, height) => {
                *viewport = ViewportDimensions::new(*width, *height);
                Some(KeyAction::Redraw)
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => self.get(*key),
            _ => None,
        }
    }

    /// Translate an event for the input line.
    ///
    /// Unbound printable keys become [`TextKey::Insert`]; the input line
    /// decides whether to accept them. Case is preserved.
    pub fn interpret_text(
        &self,
        event: &Event,
        viewport: &mut ViewportDimensions,
    ) -> Option<TextKey> {
        match event {
            Event::Resize(width, height) => {
                *viewport = ViewportDimensions::new(*width, *height);
                Some(TextKey::Redraw)
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let lookup = KeyEvent::new(key.code, key.modifiers);
                if let Some(command) = self.text.get(&lookup) {
                    return Some(*command);
                }
                match key.code {
                    KeyCode::Char(ch)
                        if !key
                            .modifiers
                            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                    {
                        Some(TextKey::Insert(ch))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Lower-case letter keys and drop the shift that produced them.
fn fold_case(key: KeyEvent) -> KeyEvent {
    match key.code {
        KeyCode::Char(ch) => KeyEvent::new(
            KeyCode::Char(ch.to_ascii_lowercase()),
            key.modifiers.difference(KeyModifiers::SHIFT),
        ),
        code => KeyEvent::new(code, key.modifiers),
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();
        let mut bind = |code: KeyCode, modifiers: KeyModifiers, action: KeyAction| {
            bindings.insert(KeyEvent::new(code, modifiers), action);
        };
        let none = KeyModifiers::NONE;
        let ctrl = KeyModifiers::CONTROL;

        // Single steps
        bind(KeyCode::Down, none, KeyAction::NextEntry);
        bind(KeyCode::Up, none, KeyAction::PrevEntry);
        bind(KeyCode::Right, none, KeyAction::NextColumn);
        bind(KeyCode::Left, none, KeyAction::PrevColumn);

        // Paging
        bind(KeyCode::Char(' '), none, KeyAction::PageForward);
        bind(KeyCode::PageDown, none, KeyAction::PageForward);
        bind(KeyCode::PageUp, none, KeyAction::PageBack);
        bind(KeyCode::Backspace, none, KeyAction::PageBack);
        bind(KeyCode::Char('h'), ctrl, KeyAction::PageBack);
        bind(KeyCode::Char('}'), none, KeyAction::LeapForward);
        bind(KeyCode::Char('{'), none, KeyAction::LeapBack);

        // Search and jumps
        bind(KeyCode::Char('/'), none, KeyAction::Search);
        bind(KeyCode::Char('n'), none, KeyAction::SearchNext);
        bind(KeyCode::Char('p'), none, KeyAction::SearchPrev);
        bind(KeyCode::Char('u'), none, KeyAction::GoToCodepoint);
        bind(KeyCode::Char('s'), none, KeyAction::GoToCodepoint);
        bind(KeyCode::Char('j'), none, KeyAction::SelectBlock);
        bind(KeyCode::Char('b'), none, KeyAction::SelectBlock);

        // Layout
        bind(KeyCode::Char('['), none, KeyAction::AddColumn);
        bind(KeyCode::Char(']'), none, KeyAction::RemoveColumn);

        // Application controls
        bind(KeyCode::Enter, none, KeyAction::Confirm);
        bind(KeyCode::Esc, none, KeyAction::Cancel);
        bind(KeyCode::Char('g'), ctrl, KeyAction::Cancel);
        bind(KeyCode::Char('?'), none, KeyAction::Help);
        bind(KeyCode::Char('h'), none, KeyAction::Help);
        bind(KeyCode::Char('v'), none, KeyAction::ShowVersion);
        bind(KeyCode::Char('l'), ctrl, KeyAction::Redraw);
        bind(KeyCode::Char('q'), none, KeyAction::Quit);
        bind(KeyCode::Char('c'), ctrl, KeyAction::Interrupt);

        let mut text = HashMap::new();
        let mut bind_text = |code: KeyCode, modifiers: KeyModifiers, key: TextKey| {
            text.insert(KeyEvent::new(code, modifiers), key);
        };
        bind_text(KeyCode::Enter, none, TextKey::Submit);
        bind_text(KeyCode::Backspace, none, TextKey::Erase);
        bind_text(KeyCode::Delete, none, TextKey::Erase);
        bind_text(KeyCode::Char('h'), ctrl, TextKey::Erase);
        bind_text(KeyCode::Char('u'), ctrl, TextKey::Kill);
        bind_text(KeyCode::Esc, none, TextKey::Abort);
        bind_text(KeyCode::Char('g'), ctrl, TextKey::Abort);
        bind_text(KeyCode::Char('l'), ctrl, TextKey::Redraw);
        bind_text(KeyCode::Char('c'), ctrl, TextKey::Interrupt);

        Self { bindings, text }
    }
}
