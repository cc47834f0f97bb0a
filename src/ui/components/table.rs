//! Favorites table renderer.
//!
//! Renders the favorites as NAME / RATING / DESCRIPTION / SAVED columns with
//! fuzzy match highlighting on the name.

use crate::ui::helpers::{self, display_width, write_padding};
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::FavoriteItem;
use std::fmt::{self, Write};

/// Name column width including the working-car marker.
const NAME_COLUMN: usize = 30;

/// Rating column width (five stars plus a gap).
const RATING_COLUMN: usize = 7;

/// Renders the table column headers.
pub fn render_table_headers(out: &mut String, colors: &ThemeColors) -> fmt::Result {
    writeln!(
        out,
        "{}{}{:<NAME_COLUMN$}{:<RATING_COLUMN$}{:<}{}",
        Theme::bold(),
        Theme::fg(&colors.text),
        "NAME",
        "RATING",
        "DESCRIPTION",
        Theme::reset()
    )
}

/// Renders all table rows.
pub fn render_table_rows(out: &mut String, items: &[FavoriteItem], colors: &ThemeColors, cols: usize) -> fmt::Result {
    for item in items {
        render_table_row(out, item, colors, cols)?;
    }
    Ok(())
}

/// Renders a single favorite.
///
/// # Layout
///
/// ```text
/// * NAME (28 chars) RATING DESCRIPTION ... SAVED
/// ```
///
/// `*` marks the working car; `~` marks an entry the store has not assigned
/// an id yet.
fn render_table_row(out: &mut String, item: &FavoriteItem, colors: &ThemeColors, cols: usize) -> fmt::Result {
    let marker = match (item.is_working, item.has_remote_id) {
        (true, _) => "* ",
        (false, false) => "~ ",
        (false, true) => "  ",
    };

    write!(out, "{}{marker}{}", Theme::fg(&colors.favorite), Theme::fg(&colors.text))?;
    helpers::write_highlighted_text(out, &item.name, &item.highlight_ranges, colors)?;
    write_padding(out, NAME_COLUMN.saturating_sub(display_width(marker) + display_width(&item.name)))?;

    let rating = item.rating.as_deref().unwrap_or("-");
    write!(out, "{}{rating}", Theme::fg(&colors.favorite))?;
    write_padding(out, RATING_COLUMN.saturating_sub(display_width(rating)))?;

    write!(out, "{}{}", Theme::fg(&colors.text), item.description)?;

    let used = NAME_COLUMN + RATING_COLUMN + display_width(&item.description);
    let saved_len = display_width(&item.saved);
    write_padding(out, cols.saturating_sub(used + saved_len + 1).max(1))?;
    writeln!(out, "{}{}{}", Theme::fg(&colors.text_dim), item.saved, Theme::reset())
}
