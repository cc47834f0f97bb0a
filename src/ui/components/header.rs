//! Header component renderer.
//!
//! Renders the title bar centered on the primary color, with the active
//! palette name right-aligned when it fits.

use crate::ui::helpers::{display_width, write_padding};
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::HeaderInfo;
use std::fmt::{self, Write};

/// Renders the header title bar.
///
/// # Layout
///
/// ```text
/// [left padding] TITLE [right padding] [theme]
/// ```
pub fn render_header(out: &mut String, header: &HeaderInfo, colors: &ThemeColors, cols: usize) -> fmt::Result {
    let title_len = display_width(&header.title);
    let label = format!("[{}] ", header.theme_label);
    let label_len = display_width(&label);
    let show_label = title_len + label_len * 2 <= cols;

    let padding = cols.saturating_sub(title_len) / 2;
    let right = cols.saturating_sub(padding + title_len);

    write!(out, "{}{}{}", Theme::bold(), Theme::fg(&colors.button_text), Theme::bg(&colors.primary))?;
    write_padding(out, padding)?;
    out.push_str(&header.title);
    if show_label {
        write_padding(out, right.saturating_sub(label_len))?;
        out.push_str(&label);
    } else {
        write_padding(out, right)?;
    }
    writeln!(out, "{}", Theme::reset())
}
