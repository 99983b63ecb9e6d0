//! TUI rendering and terminal management (impure shell)

mod block_list;
pub mod constants;
mod help;
pub mod styles;
mod table;

pub use help::{render_help_overlay, HelpTopic};
pub use styles::{BrowserStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::layout::ViewportDimensions;
use crate::model::UnicodeData;
use crate::state::{AppState, Mode, Outcome, Overlay, ViewState};
use crossterm::{
    event,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    Frame, Terminal,
};
use std::io::{self, Stdout, Write};
use thiserror::Error;
use tracing::{debug, info};
use unicode_width::UnicodeWidthStr;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Raw mode and the alternate screen, restored on drop.
///
/// Dropping the guard on every exit path (normal return, `?`, panic unwind)
/// leaves the terminal usable before any error text is printed.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enter raw mode and switch to the alternate screen.
    pub fn enter() -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = restore_terminal() {
            debug!(%err, "Terminal restore failed");
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<'a, B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState<'a>,
    key_bindings: KeyBindings,
    styles: BrowserStyles,
    /// Ring the terminal bell on rejected input.
    audible: bool,
}

impl<'a> TuiApp<'a, CrosstermBackend<Stdout>> {
    /// Create the application on the real terminal.
    ///
    /// The caller must hold a [`TerminalGuard`].
    pub fn new(data: &'a UnicodeData, view: ViewState, key_bindings: KeyBindings) -> Result<Self, TuiError> {
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut app = Self::with_terminal(terminal, data, view, key_bindings)?;
        app.audible = true;
        Ok(app)
    }
}

impl<'a, B> TuiApp<'a, B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        data: &'a UnicodeData,
        mut view: ViewState,
        key_bindings: KeyBindings,
    ) -> Result<Self, TuiError> {
        let size = terminal.size()?;
        view.viewport = ViewportDimensions::new(size.width, size.height);
        Ok(Self {
            terminal,
            app_state: AppState::new(data, view),
            key_bindings,
            styles: BrowserStyles::default(),
            audible: false,
        })
    }

    /// Run the main event loop
    ///
    /// Blocks on each terminal event and returns when the user quits.
    pub fn run(&mut self) -> Result<(), TuiError> {
        loop {
            self.draw()?;
            let event = event::read()?;
            if self.handle_event(&event)? == Outcome::Exit {
                return Ok(());
            }
        }
    }

    fn handle_event(&mut self, event: &event::Event) -> Result<Outcome, TuiError> {
        let outcome = self.app_state.handle_event(&self.key_bindings, event);
        match outcome {
            Outcome::Continue | Outcome::Exit => {}
            Outcome::Repaint => self.terminal.clear()?,
            Outcome::Rejected(reason) => {
                debug!(?reason, "Input rejected");
                self.alert()?;
            }
        }
        Ok(outcome)
    }

    fn alert(&mut self) -> Result<(), TuiError> {
        if self.audible {
            let mut stdout = io::stdout();
            stdout.write_all(b"\x07")?;
            stdout.flush()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| render_screen(frame, state, styles))?;
        Ok(())
    }
}

#[cfg(test)]
impl<'a, B> TuiApp<'a, B>
where
    B: Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// The state's viewport must match the terminal size. Colors are off and
    /// the bell never rings.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState<'a>,
        key_bindings: KeyBindings,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            styles: BrowserStyles::with_color_config(ColorConfig::with_colors(false)),
            audible: false,
        }
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState<'a> {
        &self.app_state
    }

    /// Handle a single terminal event (test-only accessor)
    pub(crate) fn handle_event_test(&mut self, event: &event::Event) -> Result<Outcome, TuiError> {
        self.handle_event(event)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Get mutable reference to terminal (test-only accessor)
    pub(crate) fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }
}

/// Draw one frame: the current mode, its status row, and any overlay.
fn render_screen(frame: &mut Frame, state: &AppState<'_>, styles: &BrowserStyles) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }
    let status_height = constants::STATUS_BAR_HEIGHT.min(area.height);
    let content = Rect {
        height: area.height - status_height,
        ..area
    };
    let status_y = area.bottom() - status_height;

    let mut cursor = None;
    let status = {
        let buf = frame.buffer_mut();
        match state.mode() {
            Mode::Table => {
                let layout = table::render_table(buf, content, state, styles);
                table::table_status(state, &layout)
            }
            Mode::BlockSelect(select) => {
                block_list::render_block_list(buf, content, state, select.selected(), styles);
                constants::BLOCK_LIST_STATUS.to_string()
            }
            Mode::TextInput(input) => {
                table::render_table(buf, content, state, styles);
                let line = format!("{}{}", input.kind().prompt(), input.buffer());
                let x = (line.width() as u16).min(area.width - 1);
                cursor = Some(Position::new(area.x + x, status_y));
                line
            }
        }
    };

    let status = match state.overlay() {
        Some(Overlay::Version) => {
            format!("Unicode version {}", state.data().version().unwrap_or_default())
        }
        _ => status,
    };
    put_str(
        frame.buffer_mut(),
        area.x,
        status_y,
        &status,
        usize::from(area.width),
        styles.status,
    );

    if state.overlay() == Some(Overlay::Help) {
        let topic = match state.mode() {
            Mode::BlockSelect(_) => HelpTopic::BlockList,
            _ => HelpTopic::Table,
        };
        render_help_overlay(frame, content, topic, styles);
    }

    if let Some(position) = cursor {
        frame.set_cursor_position(position);
    }
}

/// Write `text` at (`x`, `y`), at most `max_width` cells, clipped to the
/// buffer.
///
/// Returns the position after the last cell written.
fn put_str(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: usize, style: Style) -> (u16, u16) {
    let area = buf.area;
    if y < area.top() || y >= area.bottom() || x < area.left() || x >= area.right() {
        return (x, y);
    }
    buf.set_stringn(x, y, text, max_width, style)
}

/// Initialize the terminal and browse `data` until the user quits.
///
/// The terminal is restored before this returns, on success or error.
pub fn run(data: &UnicodeData, view: ViewState, key_bindings: KeyBindings) -> Result<(), TuiError> {
    let _guard = TerminalGuard::enter()?;
    let mut app = TuiApp::new(data, view, key_bindings)?;
    info!(
        width = app.app_state.view().viewport.width,
        height = app.app_state.view().viewport.height,
        "Terminal initialized"
    );
    app.run()
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
