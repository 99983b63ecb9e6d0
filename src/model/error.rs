//! Error types for ubrowse.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`'s run function
//!   - [`StartupError`] - Malformed command-line or config values (start position, accent)
//!   - [`DatasetError`] - The embedded character database failed to load
//!   - [`ConfigError`](crate::config::ConfigError) - Config file unreadable or invalid
//!   - [`LoggingError`](crate::logging::LoggingError) - Log file could not be set up
//!   - [`TuiError`](crate::view::TuiError) - Terminal capability unavailable or I/O failure
//!
//! # Recoverable input
//!
//! Invalid interactive input (a hex jump that doesn't parse, a search with
//! no match, confirming an empty block) is never an error. State handlers
//! report it as a [`Rejection`], the shell rings the bell, and the state is
//! left exactly as it was.

use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Every variant is fatal: the terminal is restored, the message is written
/// to stderr and the process exits with a failure status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Command-line or configuration value could not be interpreted.
    #[error(transparent)]
    Startup(#[from] StartupError),

    /// The character database could not be loaded.
    #[error("Failed to load character data: {0}")]
    Dataset(#[from] DatasetError),

    /// Config file could not be read or parsed.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal could not be initialized or driven.
    #[error(transparent)]
    Terminal(#[from] crate::view::TuiError),
}

/// Errors interpreting startup values.
///
/// These are reported before any UI is drawn.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StartupError {
    /// Positional argument is not a character, a hex codepoint, or a
    /// substring of any codepoint name.
    #[error("Invalid start value: \"{0}\".")]
    InvalidStartValue(String),

    /// Accent value is neither a single character nor a valid hex codepoint.
    #[error("invalid accent character value: \"{0}\"")]
    InvalidAccent(String),
}

/// Errors building a [`UnicodeData`](super::UnicodeData) set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// A line of an input table could not be parsed.
    #[error("{table} line {line}: {reason}")]
    Malformed {
        /// Which table the line came from ("names" or "blocks").
        table: &'static str,
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// Codepoint values are not strictly increasing.
    #[error("codepoint {value:04X} is out of order (follows {previous:04X})")]
    Unsorted {
        /// Value that broke the ordering.
        value: u32,
        /// Value preceding it.
        previous: u32,
    },

    /// A value lies above U+10FFFF.
    #[error("codepoint {0:X} exceeds U+10FFFF")]
    OutOfRange(u32),

    /// The name buffer grew past what a name span can address.
    #[error("name buffer exceeds {0} bytes")]
    NameBufferOverflow(usize),

    /// No codepoints were supplied.
    #[error("dataset contains no codepoints")]
    Empty,
}

/// Reasons an interactive action was refused.
///
/// A rejection leaves all state unchanged; the caller gives an audible cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// No codepoint name contains the search string, or there is no
    /// previous search to repeat.
    NoMatch,
    /// Hex input is empty or exceeds U+10FFFF.
    InvalidCodepoint,
    /// The selected block contains no codepoints.
    EmptyBlock,
    /// The input line is full.
    InputFull,
    /// Erase was requested on an empty input line.
    NothingToErase,
    /// The dataset carries no Unicode version string.
    NoVersion,
}
