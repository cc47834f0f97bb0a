//! Shared rendering utilities.
//!
//! Everything renders into a `String` buffer so output can be tested and
//! printed in one write by the front end.
//!
//! - **Fuzzy Match Highlighting**: Renders text with highlighted character ranges
//! - **Padding**: Fills lines to the terminal width using character counts
//!
//! # Example
//!
//! ```rust
//! use car_favorites::ui::helpers::write_highlighted_text;
//! use car_favorites::ui::ThemeState;
//!
//! let theme = ThemeState::default();
//! let mut out = String::new();
//! write_highlighted_text(&mut out, "Ferrari", &[(0, 3)], theme.colors()).unwrap();
//! assert!(out.contains("Fer"));
//! assert!(out.ends_with("rari"));
//! ```

use crate::ui::theme::{Theme, ThemeColors};
use std::fmt::{self, Write};

/// Number of characters `text` occupies on screen.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Writes `count` spaces.
pub fn write_padding(out: &mut String, count: usize) -> fmt::Result {
    write!(out, "{:count$}", "")
}

/// Writes `text` centered in `cols` columns.
pub fn write_centered(out: &mut String, text: &str, cols: usize) -> fmt::Result {
    let width = display_width(text);
    let padding = cols.saturating_sub(width) / 2;

    write_padding(out, padding)?;
    out.push_str(text);
    write_padding(out, cols.saturating_sub(padding + width))
}

/// Renders text with highlighted character ranges for fuzzy matches.
///
/// Ranges use character indices (not byte indices) with an exclusive end.
/// Ranges past the end of `text` are clamped, so highlights computed on a
/// full name stay valid after truncation.
pub fn write_highlighted_text(out: &mut String, text: &str, ranges: &[(usize, usize)], colors: &ThemeColors) -> fmt::Result {
    if ranges.is_empty() {
        out.push_str(text);
        return Ok(());
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        out.extend(&chars[current_pos..start]);
        write!(out, "{}{}", Theme::bold(), Theme::fg(&colors.primary))?;
        out.extend(&chars[start..end]);
        write!(out, "{}{}", Theme::reset(), Theme::fg(&colors.text))?;

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
    Ok(())
}
