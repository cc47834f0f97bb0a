//! Theme palettes, light/dark switching and ANSI escape sequence generation.
//!
//! A [`Theme`] is a named palette. [`ThemeState`] holds the light and dark
//! palettes plus the current mode and is the only theme object the rest of the
//! crate sees. It lives in the presentation layer: the favorites registry and
//! the store clients never receive it.
//!
//! # Built-in Themes
//!
//! - `light` (default)
//! - `dark`
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#ffffff"
//! text = "#222222"
//! text_dim = "#777777"
//! primary = "#1e88e5"
//! button_text = "#ffffff"
//! card_background = "#f4f6f8"
//! input_background = "#f9f9f9"
//! shadow = "#000000"
//! favorite = "#ffd700"
//! error = "#d32f2f"
//! ```

use crate::domain::error::{CarFavoritesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions as hex strings (e.g. `"#1e88e5"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Screen background.
    pub background: String,
    /// Normal text.
    pub text: String,
    /// Secondary text (footer, timestamps).
    pub text_dim: String,
    /// Accent color for the header bar, borders and buttons.
    pub primary: String,
    /// Text drawn on top of `primary`.
    pub button_text: String,
    /// Car card and editor panel background.
    pub card_background: String,
    /// Text input background.
    pub input_background: String,
    /// Shadow color.
    pub shadow: String,
    /// Filled favorite star.
    pub favorite: String,
    /// Error status line.
    pub error: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use car_favorites::ui::Theme;
    ///
    /// let theme = Theme::from_name("dark").unwrap();
    /// assert_eq!(theme.name, "dark");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Theme`] if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .map_err(|e| CarFavoritesError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents).map_err(|e| CarFavoritesError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground color escape sequence.
    ///
    /// ```rust
    /// use car_favorites::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff0080"), "\u{1b}[38;2;255;0;128m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background color escape sequence.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the built-in light theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("light").expect("Built-in light theme should always parse")
    }
}

/// Light/dark palettes with the current mode.
///
/// # Example
///
/// ```rust
/// use car_favorites::ui::ThemeState;
///
/// let mut theme = ThemeState::default();
/// assert!(!theme.is_dark());
/// theme.toggle();
/// assert!(theme.is_dark());
/// assert_eq!(theme.current().name, "dark");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    light: Theme,
    dark: Theme,
    is_dark: bool,
}

impl ThemeState {
    #[must_use]
    pub const fn new(light: Theme, dark: Theme, is_dark: bool) -> Self {
        Self { light, dark, is_dark }
    }

    #[must_use]
    pub const fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Switches between the light and dark palettes.
    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
        tracing::debug!(is_dark = self.is_dark, "theme toggled");
    }

    /// The palette for the current mode.
    #[must_use]
    pub const fn current(&self) -> &Theme {
        if self.is_dark {
            &self.dark
        } else {
            &self.light
        }
    }

    #[must_use]
    pub const fn colors(&self) -> &ThemeColors {
        &self.current().colors
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        let dark = Theme::from_name("dark").unwrap_or_default();
        Self::new(Theme::default(), dark, false)
    }
}
