//! The navigation state machine.
//!
//! [`AppState`] owns the view parameters and the current mode, and applies
//! logical commands to them. Every transition is a plain method call; the
//! terminal is never touched, so the whole machine runs under test without
//! a real terminal.

use super::block_select::{handle_block_movement, BlockSelect};
use super::text_input::{handle_text_key, InputKind, InputStep, TextInput};
use super::view_state::ViewState;
use crate::config::KeyBindings;
use crate::index::{BlockIndex, CodepointIndex, Direction, NameSearch};
use crate::model::{KeyAction, Rejection, TextKey, UnicodeData};
use crossterm::event::{Event, KeyEventKind};
use tracing::debug;

/// Codepoint distance covered by a leap in the table.
pub const LEAP_DISTANCE: i64 = 0x1000;

/// Which view receives commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// The codepoint table.
    Table,
    /// The block list, with the highlighted row.
    BlockSelect(BlockSelect),
    /// The input line on the status row, drawn over the table.
    TextInput(TextInput),
}

/// A transient screen drawn over the current mode until the next key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    /// Key command summary for the current mode.
    Help,
    /// Unicode version of the dataset.
    Version,
}

/// What the shell should do after a command was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Draw the next frame normally.
    Continue,
    /// Clear the terminal and draw everything again.
    Repaint,
    /// The command was refused; alert the user. State is unchanged.
    Rejected(Rejection),
    /// Leave the program.
    Exit,
}

/// Navigation state for one program run.
#[derive(Debug)]
pub struct AppState<'a> {
    codepoints: CodepointIndex<'a>,
    blocks: BlockIndex<'a>,
    search: NameSearch,
    view: ViewState,
    mode: Mode,
    overlay: Option<Overlay>,
}

impl<'a> AppState<'a> {
    /// Start in the table over `data` with the given view.
    pub fn new(data: &'a UnicodeData, view: ViewState) -> Self {
        let mut state = Self {
            codepoints: CodepointIndex::new(data),
            blocks: BlockIndex::new(data),
            search: NameSearch::new(),
            view,
            mode: Mode::Table,
            overlay: None,
        };
        state.normalize();
        state
    }

    /// The dataset being browsed.
    pub fn data(&self) -> &'a UnicodeData {
        self.codepoints.data()
    }

    /// Codepoint lookups over the dataset.
    pub fn codepoints(&self) -> CodepointIndex<'a> {
        self.codepoints
    }

    /// Block lookups over the dataset.
    pub fn blocks(&self) -> &BlockIndex<'a> {
        &self.blocks
    }

    /// Current view parameters.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Current mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Overlay shown over the current mode, if any.
    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// The search string `n` and `p` repeat.
    pub fn last_search(&self) -> Option<&str> {
        self.search.last()
    }

    /// Re-derive column and scroll bounds from the current geometry.
    pub fn normalize(&mut self) {
        self.view.normalize(self.codepoints.len());
    }

    /// Route a terminal event to the current mode.
    ///
    /// Resize events update the geometry before anything else sees them.
    /// While an overlay is up, any key press dismisses it.
    pub fn handle_event(&mut self, bindings: &KeyBindings, event: &Event) -> Outcome {
        let outcome = if self.overlay.is_some() {
            self.handle_overlay_event(bindings, event)
        } else if matches!(self.mode, Mode::TextInput(_)) {
            match bindings.interpret_text(event, &mut self.view.viewport) {
                Some(key) => self.apply_text_key(key),
                None => Outcome::Continue,
            }
        } else {
            match bindings.interpret(event, &mut self.view.viewport) {
                Some(action) => self.apply_action(action),
                None => Outcome::Continue,
            }
        };
        self.normalize();
        outcome
    }

    fn handle_overlay_event(&mut self, bindings: &KeyBindings, event: &Event) -> Outcome {
        let action = bindings.interpret(event, &mut self.view.viewport);
        match event {
            Event::Resize(..) => Outcome::Repaint,
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.overlay = None;
                if action == Some(KeyAction::Interrupt) {
                    Outcome::Exit
                } else {
                    Outcome::Continue
                }
            }
            _ => Outcome::Continue,
        }
    }

    /// Apply a logical command to the table or block list.
    pub fn apply_action(&mut self, action: KeyAction) -> Outcome {
        debug!(?action, "Dispatching command");
        match self.mode {
            Mode::Table => self.apply_table_action(action),
            Mode::BlockSelect(select) => self.apply_block_action(select, action),
            Mode::TextInput(_) => Outcome::Continue,
        }
    }

    fn apply_table_action(&mut self, action: KeyAction) -> Outcome {
        let scroll = self.view.scroll_index;
        let rows = self.view.rows();
        let page = self.view.page_size();
        let width = self.view.viewport.width;

        match action {
            KeyAction::NextEntry => self.view.scroll_index = scroll.saturating_add(1),
            KeyAction::PrevEntry => self.view.scroll_index = scroll.saturating_sub(1),
            KeyAction::NextColumn => self.view.scroll_index = scroll.saturating_add(rows),
            KeyAction::PrevColumn => self.view.scroll_index = scroll.saturating_sub(rows),
            KeyAction::PageForward => self.view.scroll_index = scroll.saturating_add(page),
            KeyAction::PageBack => self.view.scroll_index = scroll.saturating_sub(page),
            KeyAction::LeapForward => {
                self.view.scroll_index = self.codepoints.offset(scroll, LEAP_DISTANCE)
            }
            KeyAction::LeapBack => {
                self.view.scroll_index = self.codepoints.offset(scroll, -LEAP_DISTANCE)
            }
            KeyAction::Search => {
                self.mode = Mode::TextInput(TextInput::new(InputKind::Search, width));
            }
            KeyAction::GoToCodepoint => {
                self.mode = Mode::TextInput(TextInput::new(InputKind::Hex, width));
            }
            KeyAction::SearchNext => return self.repeat_search(Direction::Forward),
            KeyAction::SearchPrev => return self.repeat_search(Direction::Backward),
            KeyAction::SelectBlock => match self.blocks.find_block_containing(scroll) {
                Some(block) => {
                    self.mode = Mode::BlockSelect(BlockSelect::new(block, self.blocks.len()));
                }
                None => return Outcome::Rejected(Rejection::EmptyBlock),
            },
            KeyAction::AddColumn => {
                self.view.column_count = self.view.column_count.saturating_add(1)
            }
            KeyAction::RemoveColumn => {
                self.view.column_count = self.view.column_count.saturating_sub(1)
            }
            KeyAction::Help => self.overlay = Some(Overlay::Help),
            KeyAction::ShowVersion => return self.show_version(),
            KeyAction::Redraw => return Outcome::Repaint,
            KeyAction::Quit | KeyAction::Interrupt => return Outcome::Exit,
            KeyAction::Confirm | KeyAction::Cancel => {}
        }
        Outcome::Continue
    }

    fn apply_block_action(&mut self, select: BlockSelect, action: KeyAction) -> Outcome {
        match action {
            KeyAction::Confirm => match self.blocks.first_codepoint(select.selected()) {
                Some(index) => {
                    self.view.scroll_index = index;
                    self.mode = Mode::Table;
                }
                None => return Outcome::Rejected(Rejection::EmptyBlock),
            },
            KeyAction::Quit | KeyAction::Cancel => self.mode = Mode::Table,
            KeyAction::Help => self.overlay = Some(Overlay::Help),
            KeyAction::ShowVersion => return self.show_version(),
            KeyAction::Redraw => return Outcome::Repaint,
            KeyAction::Interrupt => return Outcome::Exit,
            movement => {
                let page = self.view.rows();
                self.mode = Mode::BlockSelect(handle_block_movement(
                    select,
                    movement,
                    page,
                    self.blocks.len(),
                ));
            }
        }
        Outcome::Continue
    }

    /// Apply a line-editor command to the input line.
    pub fn apply_text_key(&mut self, key: TextKey) -> Outcome {
        let width = self.view.viewport.width;
        let Mode::TextInput(input) = &mut self.mode else {
            return Outcome::Continue;
        };
        let kind = input.kind();
        match handle_text_key(input, key, width) {
            InputStep::Editing => {
                if key == TextKey::Redraw {
                    Outcome::Repaint
                } else {
                    Outcome::Continue
                }
            }
            InputStep::Rejected(reason) => Outcome::Rejected(reason),
            InputStep::Aborted => {
                self.mode = Mode::Table;
                Outcome::Continue
            }
            InputStep::Interrupted => Outcome::Exit,
            InputStep::Submitted(text) => {
                self.mode = Mode::Table;
                self.submit(kind, &text)
            }
        }
    }

    fn submit(&mut self, kind: InputKind, text: &str) -> Outcome {
        let scroll = self.view.scroll_index;
        let found = match kind {
            InputKind::Search => {
                let query = text.to_lowercase();
                self.search
                    .find(&self.codepoints, Some(&query), scroll, Direction::Forward)
                    .ok_or(Rejection::NoMatch)
            }
            InputKind::Hex => self
                .codepoints
                .read_hex(text)
                .ok_or(Rejection::InvalidCodepoint),
        };
        match found {
            Ok(index) => {
                self.view.scroll_index = index;
                Outcome::Continue
            }
            Err(reason) => Outcome::Rejected(reason),
        }
    }

    fn repeat_search(&mut self, direction: Direction) -> Outcome {
        let scroll = self.view.scroll_index;
        match self.search.find(&self.codepoints, None, scroll, direction) {
            Some(index) => {
                self.view.scroll_index = index;
                Outcome::Continue
            }
            None => Outcome::Rejected(Rejection::NoMatch),
        }
    }

    fn show_version(&mut self) -> Outcome {
        match self.data().version() {
            Some(version) if !version.is_empty() => {
                self.overlay = Some(Overlay::Version);
                Outcome::Continue
            }
            _ => Outcome::Rejected(Rejection::NoVersion),
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
