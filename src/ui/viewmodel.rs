//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data.
//!
//! # Example
//!
//! ```rust
//! use car_favorites::app::AppState;
//! use car_favorites::ui::ThemeState;
//!
//! let state = AppState::new(ThemeState::default(), false);
//! let vm = state.compute_viewmodel(80);
//! assert!(vm.favorites.is_empty());
//! assert!(vm.empty_state.is_some());
//! ```

use crate::app::StatusLevel;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Search field with the working car name.
    pub search_bar: SearchBarInfo,

    /// Result card, present once a lookup finished.
    pub card: Option<CarCardInfo>,

    /// Favorite editor, present while editing.
    pub editor: Option<EditorInfo>,

    /// Favorites after applying the filter, in registry order.
    pub favorites: Vec<FavoriteItem>,

    /// Shown instead of the favorites table when it has no rows.
    pub empty_state: Option<EmptyState>,

    /// Latest feedback line.
    pub status: Option<StatusInfo>,

    /// Command hints.
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text, including the favorites count.
    pub title: String,

    /// Name of the active palette.
    pub theme_label: String,
}

/// Search field display information.
#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    /// Working car name, empty before the first search.
    pub query: String,

    /// Workflow phase label.
    pub phase_label: String,

    /// Whether an external call is in flight.
    pub busy: bool,
}

/// The searched car with its image.
#[derive(Debug, Clone)]
pub struct CarCardInfo {
    pub name: String,
    pub image: Option<String>,
    pub is_favorite: bool,
}

/// Favorite editor display information.
#[derive(Debug, Clone)]
pub struct EditorInfo {
    pub name: String,
    pub image: Option<String>,
    /// Star state, reflecting the quick toggle.
    pub is_favorite: bool,
    pub description: String,
    /// Rating text as typed.
    pub rating_input: String,
    /// Whether the save call is in flight.
    pub saving: bool,
}

/// One row of the favorites table.
#[derive(Debug, Clone)]
pub struct FavoriteItem {
    /// Car name, truncated to the name column.
    pub name: String,

    /// Star rendering of the rating.
    pub rating: Option<String>,

    /// Description, truncated to the remaining width.
    pub description: String,

    /// Relative save time, e.g. "5m ago".
    pub saved: String,

    /// Whether this row is the working car.
    pub is_working: bool,

    /// Whether the store has assigned an id.
    pub has_remote_id: bool,

    /// Character ranges to highlight for the filter.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Empty favorites message.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "No favorites yet").
    pub message: String,

    /// Secondary hint.
    pub subtitle: String,
}

/// Status line display information.
#[derive(Debug, Clone)]
pub struct StatusInfo {
    pub level: StatusLevel,
    pub text: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Command hints for the current phase.
    pub keybindings: String,
}
