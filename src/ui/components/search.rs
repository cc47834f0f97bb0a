//! Search box and result card renderers.

use crate::ui::helpers::{display_width, write_padding};
use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::{CarCardInfo, SearchBarInfo};
use std::fmt::{self, Write};

const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the search input box (3 lines).
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, colors: &ThemeColors, cols: usize) -> fmt::Result {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    let state = if search.busy {
        format!("{}...", search.phase_label)
    } else {
        search.phase_label.clone()
    };
    let search_text = format!(" Car: {}", search.query);
    let padding = inner_width.saturating_sub(display_width(&search_text) + display_width(&state) + 1);

    write_padding(out, SEARCH_BOX_MARGIN)?;
    writeln!(out, "{}┌{}┐{}", Theme::fg(&colors.primary), "─".repeat(inner_width), Theme::reset())?;

    write_padding(out, SEARCH_BOX_MARGIN)?;
    write!(out, "{}│{}", Theme::fg(&colors.primary), Theme::fg(&colors.text))?;
    out.push_str(&search_text);
    write_padding(out, padding)?;
    write!(out, "{}{state} ", Theme::fg(&colors.text_dim))?;
    writeln!(out, "{}│{}", Theme::fg(&colors.primary), Theme::reset())?;

    write_padding(out, SEARCH_BOX_MARGIN)?;
    writeln!(out, "{}└{}┘{}", Theme::fg(&colors.primary), "─".repeat(inner_width), Theme::reset())
}

/// Renders the looked-up car: name, favorite star and image URL.
pub fn render_card(out: &mut String, card: &CarCardInfo, colors: &ThemeColors) -> fmt::Result {
    let (star, star_color) = if card.is_favorite {
        ("★", &colors.favorite)
    } else {
        ("☆", &colors.text_dim)
    };

    write_padding(out, SEARCH_BOX_MARGIN)?;
    writeln!(
        out,
        "{}{}{}{} {}{}",
        Theme::bold(),
        Theme::fg(&colors.text),
        card.name,
        Theme::fg(star_color),
        star,
        Theme::reset()
    )?;

    write_padding(out, SEARCH_BOX_MARGIN)?;
    match &card.image {
        Some(url) => writeln!(out, "{}image: {url}{}", Theme::fg(&colors.text_dim), Theme::reset()),
        None => writeln!(out, "{}no image found{}", Theme::fg(&colors.text_dim), Theme::reset()),
    }
}
