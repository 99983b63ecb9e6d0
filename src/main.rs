//! ubrowse - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use ubrowse::config::{self, KeyBindings, ResolvedConfig};
use ubrowse::index::{CodepointIndex, Direction};
use ubrowse::layout::ViewportDimensions;
use ubrowse::model::{AppError, StartupError, UnicodeData};
use ubrowse::state::ViewState;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\n",
    "Licensed under the MIT License or the Apache License, Version 2.0, at your option.\n",
    "This is free software: you are free to change and redistribute it."
);

/// Browse the Unicode character set in the terminal
#[derive(Parser, Debug)]
#[command(name = "ubrowse")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Browse the Unicode character set in the terminal")]
#[command(after_help = "START may be a single character, a hex codepoint value \
    (optionally prefixed with U+), or part of a character name.")]
pub struct Args {
    /// Initial position: a character, a hex value, or a name substring
    pub start: Option<String>,

    /// Base character combining marks are drawn on (a character or hex value)
    #[arg(short = 'a', long, value_name = "CHAR")]
    pub accent: Option<String>,

    /// Draw combining marks without a base character
    #[arg(short = 'A', long)]
    pub noaccent: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ubrowse: {err}");
            eprintln!("Try 'ubrowse --help' for more information.");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, args.accent.clone(), args.noaccent)
    };

    let data = UnicodeData::bundled()?;
    let codepoints = CodepointIndex::new(data);
    let accent = resolve_accent(&codepoints, &config.accent)?;
    let start = match args.start.as_deref() {
        Some(text) => resolve_start(&codepoints, text)?,
        None => 0,
    };

    ubrowse::logging::init(&config.log_file_path)?;
    info!(
        config = ?config,
        start = format_args!("U+{:04X}", codepoints.value_at(start)),
        entries = data.len(),
        "Configuration loaded and resolved"
    );

    let view = initial_view(&config, accent, start);
    ubrowse::view::run(data, view, KeyBindings::default())?;
    info!("Exiting");
    Ok(())
}

fn initial_view(config: &ResolvedConfig, accent: char, start: usize) -> ViewState {
    let mut view = ViewState::new(start, ViewportDimensions::default());
    view.column_count = config.columns;
    view.accent = accent;
    view.show_combining = config.show_combining;
    view
}

/// Interpret an accent value: a single character taken literally, or a hex
/// value snapped to the nearest defined codepoint.
fn resolve_accent(codepoints: &CodepointIndex<'_>, text: &str) -> Result<char, StartupError> {
    let mut chars = text.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return Ok(ch);
    }
    codepoints
        .read_hex(text)
        .and_then(|index| char::from_u32(codepoints.value_at(index)))
        .ok_or_else(|| StartupError::InvalidAccent(text.to_string()))
}

/// Interpret the positional start value.
///
/// Tried in order: a single character, a hex value, a name substring
/// (matched case-insensitively from the first entry).
fn resolve_start(codepoints: &CodepointIndex<'_>, text: &str) -> Result<usize, StartupError> {
    if text.is_empty() {
        return Err(StartupError::InvalidStartValue(text.to_string()));
    }
    codepoints
        .read_single_character(text)
        .or_else(|| codepoints.read_hex(text))
        .or_else(|| {
            // The entry at `start` is examined last, so begin from the end
            // to make the first entry the first candidate.
            let last = codepoints.len().saturating_sub(1);
            codepoints.find_name(&text.to_lowercase(), last, Direction::Forward)
        })
        .ok_or_else(|| StartupError::InvalidStartValue(text.to_string()))
}
