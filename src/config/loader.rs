//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "UBROWSE_CONFIG";

/// Environment variable overriding the accent character.
pub const ACCENT_ENV_VAR: &str = "UBROWSE_ACCENT";

/// Default base character for combining marks: MIDDLE DOT.
pub const DEFAULT_ACCENT: &str = "\u{00B7}";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A value parsed but is out of range.
    #[error("Invalid value for `{key}` in {path}: {reason}")]
    InvalidValue {
        /// Path of the config file.
        path: PathBuf,
        /// Offending key.
        key: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/ubrowse/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Initial number of table columns.
    #[serde(default)]
    pub columns: Option<u16>,

    /// Base character for combining marks: a literal character or hex value.
    #[serde(default)]
    pub accent: Option<String>,

    /// Compose combining marks onto the accent.
    #[serde(default)]
    pub show_combining: Option<bool>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args. The
/// accent is still raw text here; it is checked against the dataset at
/// startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial column count.
    pub columns: u16,
    /// Accent as given: a literal character or hex value.
    pub accent: String,
    /// Compose combining marks onto the accent.
    pub show_combining: bool,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            columns: crate::state::DEFAULT_COLUMNS,
            accent: DEFAULT_ACCENT.to_string(),
            show_combining: true,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/ubrowse/ubrowse.log` on Linux, or the platform's
/// state directory elsewhere. Falls back to the current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("ubrowse").join("ubrowse.log")
    } else {
        PathBuf::from("ubrowse.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but cannot be read, does not parse, or
/// holds an out-of-range value.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if config.columns == Some(0) {
        return Err(ConfigError::InvalidValue {
            path,
            key: "columns",
            reason: "must be at least 1".to_string(),
        });
    }

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/ubrowse/config.toml` on Linux, the platform's config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ubrowse").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `UBROWSE_CONFIG` environment variable
/// 3. Default path `~/.config/ubrowse/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// `UBROWSE_ACCENT` replaces the accent.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(accent) = std::env::var(ACCENT_ENV_VAR) {
        config.accent = accent;
    }
    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        columns: config.columns.unwrap_or(defaults.columns),
        accent: config.accent.unwrap_or(defaults.accent),
        show_combining: config.show_combining.unwrap_or(defaults.show_combining),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence. `accent_override` comes from `-a`;
/// `no_accent` from `-A` turns composition off.
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    accent_override: Option<String>,
    no_accent: bool,
) -> ResolvedConfig {
    if let Some(accent) = accent_override {
        config.accent = accent;
    }
    if no_accent {
        config.show_combining = false;
    }
    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_ubrowse_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("ubrowse.log"),
            "Default log path should end with 'ubrowse.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(!config.log_file_path.as_os_str().is_empty());
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };
        let resolved = merge_config(Some(config_file));
        assert_eq!(resolved.log_file_path, custom_path);
    }
}
