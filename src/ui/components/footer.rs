//! Footer and status line renderers.

use crate::app::StatusLevel;
use crate::ui::helpers::write_centered;
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::{FooterInfo, StatusInfo};
use std::fmt::{self, Write};

/// Renders the status line, colored by severity.
pub fn render_status(out: &mut String, status: &StatusInfo, colors: &ThemeColors) -> fmt::Result {
    let (prefix, color) = match status.level {
        StatusLevel::Info => ("", &colors.text),
        StatusLevel::Warning => ("! ", &colors.favorite),
        StatusLevel::Error => ("✗ ", &colors.error),
    };
    writeln!(out, "{}{prefix}{}{}", Theme::fg(color), status.text, Theme::reset())
}

/// Renders the command hints centered and dimmed.
pub fn render_footer(out: &mut String, footer: &FooterInfo, colors: &ThemeColors, cols: usize) -> fmt::Result {
    write!(out, "{}", Theme::fg(&colors.text_dim))?;
    write_centered(out, &footer.keybindings, cols)?;
    writeln!(out, "{}", Theme::reset())
}
