//! Favorite editor panel renderer.

use crate::ui::helpers::write_padding;
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::EditorInfo;
use std::fmt::{self, Write};

const EDITOR_MARGIN: usize = 4;

/// Renders the editor fields for the working car.
///
/// ```text
///     ── Edit Ferrari ★ ──
///     description: fast
///     rating:      5
///     [save] [cancel]
/// ```
pub fn render_editor(out: &mut String, editor: &EditorInfo, colors: &ThemeColors) -> fmt::Result {
    let (star, star_color) = if editor.is_favorite {
        ("★", &colors.favorite)
    } else {
        ("☆", &colors.text_dim)
    };

    write_padding(out, EDITOR_MARGIN)?;
    writeln!(
        out,
        "{}{}── Edit {} {}{}{} ──{}",
        Theme::bold(),
        Theme::fg(&colors.primary),
        editor.name,
        Theme::fg(star_color),
        star,
        Theme::fg(&colors.primary),
        Theme::reset()
    )?;

    if let Some(image) = &editor.image {
        write_padding(out, EDITOR_MARGIN)?;
        writeln!(out, "{}image:       {image}{}", Theme::fg(&colors.text_dim), Theme::reset())?;
    }

    write_field(out, "description", &editor.description, colors)?;
    write_field(out, "rating", &editor.rating_input, colors)?;

    write_padding(out, EDITOR_MARGIN)?;
    if editor.saving {
        writeln!(out, "{}saving...{}", Theme::dim(), Theme::reset())
    } else {
        writeln!(
            out,
            "{}{} save {} {} cancel {}",
            Theme::fg(&colors.button_text),
            Theme::bg(&colors.primary),
            Theme::reset(),
            Theme::fg(&colors.text_dim),
            Theme::reset()
        )
    }
}

fn write_field(out: &mut String, label: &str, value: &str, colors: &ThemeColors) -> fmt::Result {
    write_padding(out, EDITOR_MARGIN)?;
    writeln!(
        out,
        "{}{label:<12} {}{value}{}",
        Theme::fg(&colors.text_dim),
        Theme::fg(&colors.text),
        Theme::reset()
    )
}
