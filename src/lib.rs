//! ubrowse
//!
//! Interactive terminal browser for the Unicode character set: scroll the
//! codepoint table, jump by value or by block, and search character names.
//!
//! Pure core: [`model`], [`index`], [`layout`] and [`state`] never touch the
//! terminal. Impure shell: [`view`] owns the terminal and the event loop.

pub mod config;
pub mod index;
pub mod layout;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
