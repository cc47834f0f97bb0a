//! Composable UI component renderers.
//!
//! Each component writes one part of the screen into a `String` buffer and
//! returns `fmt::Result`.
//!
//! # Components
//!
//! - [`header`]: Title bar with the favorites count and palette name
//! - [`search`]: Search box and result card
//! - [`editor`]: Favorite editor fields
//! - [`table`]: Favorites list (NAME, RATING, DESCRIPTION, SAVED)
//! - [`empty`]: Message shown when the list has no rows
//! - [`footer`]: Status line and command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Search Bar - 3 lines]
//! [Card | Editor]
//! [Border]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Border]
//! [Status]
//! [Footer]
//! ```

pub mod editor;
pub mod empty;
pub mod footer;
pub mod header;
pub mod search;
pub mod table;

use crate::ui::theme::{Theme, ThemeColors};
use crate::ui::viewmodel::UIViewModel;
use std::fmt::{self, Write};

/// Renders a horizontal border line.
fn render_border(out: &mut String, color: &str, cols: usize) -> fmt::Result {
    writeln!(out, "{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset())
}

/// Renders the full screen layout.
pub fn render_screen(out: &mut String, vm: &UIViewModel, colors: &ThemeColors, cols: usize) -> fmt::Result {
    header::render_header(out, &vm.header, colors, cols)?;
    search::render_search_bar(out, &vm.search_bar, colors, cols)?;

    if let Some(editor) = &vm.editor {
        editor::render_editor(out, editor, colors)?;
    } else if let Some(card) = &vm.card {
        search::render_card(out, card, colors)?;
    }

    render_border(out, &colors.primary, cols)?;
    if let Some(empty) = &vm.empty_state {
        empty::render_empty_state(out, empty, colors, cols)?;
    } else {
        table::render_table_headers(out, colors)?;
        table::render_table_rows(out, &vm.favorites, colors, cols)?;
    }
    render_border(out, &colors.primary, cols)?;

    if let Some(status) = &vm.status {
        footer::render_status(out, status, colors)?;
    }
    footer::render_footer(out, &vm.footer, colors, cols)
}
