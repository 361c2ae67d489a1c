//! Color schemes and ANSI styling.
//!
//! Themes are TOML documents mapping table UI elements to hex colors. Four
//! Catppuccin variants ship embedded; custom themes load from a file. Hex
//! colors convert to 24-bit ANSI escape sequences at render time.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! sort_indicator_fg = "#f9e2af"
//! chip_fg = "#1e1e2e"
//! chip_bg = "#94e2d5"
//! pager_current_fg = "#1e1e2e"
//! pager_current_bg = "#89b4fa"
//! pager_disabled_fg = "#45475a"
//! panel_border = "#94e2d5"
//! ```

use crate::domain::error::{MarqueeError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A named color scheme for table rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Hex color assignments for every themed UI element.
///
/// Optional fields default to `None`, letting themes opt out of that bit of
/// styling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Column header text color.
    pub header_fg: String,
    /// Optional column header background color.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Normal cell text color.
    pub text_normal: String,
    /// Dimmed text color (footer labels, secondary info).
    pub text_dim: String,

    /// Border and separator line color.
    pub border: String,

    /// Search bar border color.
    pub search_bar_border: String,
    /// Search match highlight foreground.
    pub match_highlight_fg: String,
    /// Search match highlight background.
    pub match_highlight_bg: String,

    /// Empty state message color.
    pub empty_state_fg: String,

    /// Sort direction indicator color.
    pub sort_indicator_fg: String,

    /// Filter chip foreground color.
    pub chip_fg: String,
    /// Filter chip background color.
    pub chip_bg: String,

    /// Current page slot foreground in the pager.
    pub pager_current_fg: String,
    /// Current page slot background in the pager.
    pub pager_current_bg: String,
    /// Disabled pager control color.
    pub pager_disabled_fg: String,

    /// Filter panel border color.
    pub panel_border: String,
}

impl Theme {
    /// Loads a built-in theme by name, or `None` for an unknown name.
    ///
    /// Available: `catppuccin-mocha`, `catppuccin-latte`,
    /// `catppuccin-frappe`, `catppuccin-macchiato`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let embedded = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            "catppuccin-frappe" => include_str!("../../themes/catppuccin-frappe.toml"),
            "catppuccin-macchiato" => include_str!("../../themes/catppuccin-macchiato.toml"),
            _ => return None,
        };
        toml::from_str(embedded).ok()
    }

    /// Loads a theme from a TOML file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`MarqueeError::Theme`] when the file is unreadable or its
    /// content is not a valid theme document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MarqueeError::Theme(format!("Failed to read theme file: {e}")))?;
        toml::from_str(&contents)
            .map_err(|e| MarqueeError::Theme(format!("Failed to parse theme TOML: {e}")))
    }

    /// Foreground escape sequence for a hex color.
    ///
    /// # Example
    ///
    /// ```
    /// use marquee::ui::Theme;
    ///
    /// print!("{}warning{}", Theme::fg("#f9e2af"), Theme::reset());
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// Background escape sequence for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = parse_hex(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    /// ANSI bold.
    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    /// ANSI dim.
    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// ANSI reset, clearing all active styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// The default theme (Catppuccin Mocha).
    ///
    /// # Panics
    ///
    /// Panics if the embedded theme fails to parse, which cannot happen for
    /// a shipped build.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

/// Parses `#rrggbb` (hash optional) into an RGB triple, falling back to
/// white on anything malformed.
fn parse_hex(hex: &str) -> (u8, u8, u8) {
    let digits = hex.trim().trim_start_matches('#');
    if digits.len() != 6 {
        return (255, 255, 255);
    }
    match u32::from_str_radix(digits, 16) {
        Ok(rgb) => (
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        ),
        Err(_) => (255, 255, 255),
    }
}
