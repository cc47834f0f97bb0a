//! Empty favorites message renderer.

use crate::ui::helpers::write_centered;
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::EmptyState;
use std::fmt::{self, Write};

/// Renders a centered message and a dimmed hint below it.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, colors: &ThemeColors, cols: usize) -> fmt::Result {
    write!(out, "{}", Theme::fg(&colors.text))?;
    write_centered(out, &empty.message, cols)?;
    writeln!(out, "{}", Theme::reset())?;

    write!(out, "{}{}", Theme::dim(), Theme::fg(&colors.text_dim))?;
    write_centered(out, &empty.subtitle, cols)?;
    writeln!(out, "{}", Theme::reset())
}
