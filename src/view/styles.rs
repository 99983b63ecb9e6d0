//! Cell styling for the table, block list, and overlays.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Colors are disabled when the `NO_COLOR` environment variable is set.
/// Attributes that carry meaning (reverse video for the selected block,
/// dim for empty blocks) are kept either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from the environment.
    ///
    /// `NO_COLOR` with any value disables colors.
    pub fn from_env() -> Self {
        Self {
            enabled: std::env::var_os("NO_COLOR").is_none(),
        }
    }

    /// Colors on or off regardless of the environment.
    pub fn with_colors(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== BrowserStyles =====

/// Styles for every piece the view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserStyles {
    /// Hex label of a table entry.
    pub label: Style,
    /// Name of a table entry.
    pub name: Style,
    /// The glyph itself.
    pub glyph: Style,
    /// Highlighted row of the block list.
    pub selected: Style,
    /// Block list rows for blocks with no codepoints.
    pub empty_block: Style,
    /// The bottom status row.
    pub status: Style,
    /// Key names in help overlays.
    pub help_key: Style,
    /// Descriptions in help overlays.
    pub help_desc: Style,
    /// Help overlay border.
    pub help_border: Style,
}

impl BrowserStyles {
    /// Build styles honoring the color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        let plain = Style::default();
        let selected = plain.add_modifier(Modifier::REVERSED);
        let empty_block = plain.add_modifier(Modifier::DIM);
        if config.colors_enabled() {
            Self {
                label: plain.fg(Color::Cyan),
                name: plain,
                glyph: plain.add_modifier(Modifier::BOLD),
                selected,
                empty_block,
                status: plain,
                help_key: plain.fg(Color::Yellow).add_modifier(Modifier::BOLD),
                help_desc: plain.fg(Color::White),
                help_border: plain.fg(Color::Cyan),
            }
        } else {
            Self {
                label: plain,
                name: plain,
                glyph: plain,
                selected,
                empty_block,
                status: plain,
                help_key: plain.add_modifier(Modifier::BOLD),
                help_desc: plain,
                help_border: plain,
            }
        }
    }
}

impl Default for BrowserStyles {
    fn default() -> Self {
        Self::with_color_config(ColorConfig::from_env())
    }
}
