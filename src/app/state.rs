//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for the session: the favorites
//! registry, the workflow phase, the working car and its draft, the in-flight
//! call, the theme and the status line. The event handler is its only writer.
//!
//! # State Components
//!
//! - **Favorites**: registry of favorite entries (persisted state)
//! - **Working car**: name, last image and store id of the car being viewed
//! - **Draft**: unsaved description and rating typed into the editor
//! - **In flight**: the one external call being awaited, if any
//! - **Theme**: presentation-only palette state
//!
//! # Example
//!
//! ```rust
//! use car_favorites::app::AppState;
//! use car_favorites::ui::ThemeState;
//!
//! let state = AppState::new(ThemeState::default(), false);
//! let viewmodel = state.compute_viewmodel(80);
//! assert!(viewmodel.card.is_none());
//! ```

use super::modes::{InFlight, WorkflowPhase};
use crate::domain::{CarId, CarRecord, FavoriteEntry, Rating};
use crate::favorites::FavoritesRegistry;
use crate::ui::theme::ThemeState;
use crate::ui::viewmodel::{
    CarCardInfo, EditorInfo, EmptyState, FavoriteItem, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo,
    UIViewModel,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// The car named in the search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCar {
    /// Trimmed search name.
    pub name: String,
    /// Last lookup result.
    pub image: Option<String>,
    /// Store id, once the store has assigned one.
    pub id: Option<CarId>,
}

impl WorkingCar {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: None,
            id: None,
        }
    }
}

/// Unsaved editor input.
///
/// `rating_input` is the text as typed; `rating` is its parsed value. Both only
/// change together when the input passes validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub description: String,
    pub rating_input: String,
    pub rating: Option<Rating>,
}

impl Draft {
    /// Pre-populates a draft from an existing favorite.
    #[must_use]
    pub fn from_entry(entry: &FavoriteEntry) -> Self {
        Self {
            description: entry.description.clone(),
            rating_input: entry.rating.map(|r| r.to_string()).unwrap_or_default(),
            rating: entry.rating,
        }
    }
}

/// Severity of the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// One-line feedback shown under the main view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Local favorites, mutated only after confirmed store writes or by the
    /// editor's quick toggle.
    pub favorites: FavoritesRegistry,

    /// Current workflow phase.
    pub phase: WorkflowPhase,

    /// Car currently searched, `None` before the first search.
    pub working: Option<WorkingCar>,

    /// Editor input not yet saved.
    pub draft: Draft,

    /// The external call being awaited.
    pub in_flight: Option<InFlight>,

    /// Light/dark palette state; read only by the view layer.
    pub theme: ThemeState,

    /// Latest feedback for the user.
    pub status: Option<StatusMessage>,

    /// Query narrowing the favorites list.
    pub favorites_filter: String,

    /// Persist a non-favorite draft record right after each lookup.
    pub eager_save: bool,
}

impl AppState {
    /// Creates an idle state with an empty registry.
    #[must_use]
    pub fn new(theme: ThemeState, eager_save: bool) -> Self {
        Self {
            favorites: FavoritesRegistry::new(),
            phase: WorkflowPhase::Idle,
            working: None,
            draft: Draft::default(),
            in_flight: None,
            theme,
            status: None,
            favorites_filter: String::new(),
            eager_save,
        }
    }

    /// Returns `true` while an external call is awaited.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    #[must_use]
    pub fn working_name(&self) -> Option<&str> {
        self.working.as_ref().map(|car| car.name.as_str())
    }

    /// Whether the working car is currently in the favorites registry.
    #[must_use]
    pub fn working_is_favorite(&self) -> bool {
        self.working_name().is_some_and(|name| self.favorites.is_favorite(name))
    }

    /// Builds the record to send to the store for the working car.
    ///
    /// Carries the working id when one is known, so the store updates instead
    /// of creating a second record.
    #[must_use]
    pub fn draft_record(&self, is_favorite: bool) -> Option<CarRecord> {
        let working = self.working.as_ref()?;
        Some(CarRecord {
            id: working.id.clone(),
            name: working.name.clone(),
            image_url: working.image.clone(),
            description: self.draft.description.clone(),
            rating: self.draft.rating,
            is_favorite,
        })
    }

    pub fn set_info(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Info, text.into());
    }

    pub fn set_warning(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Warning, text.into());
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.set_status(StatusLevel::Error, text.into());
    }

    fn set_status(&mut self, level: StatusLevel, text: String) {
        tracing::debug!(level = ?level, text = %text, "status updated");
        self.status = Some(StatusMessage { level, text });
    }

    /// Computes a renderable view model.
    ///
    /// `cols` bounds the width of truncated fields such as image URLs and
    /// descriptions.
    #[must_use]
    pub fn compute_viewmodel(&self, cols: usize) -> UIViewModel {
        let matcher = if self.favorites_filter.trim().is_empty() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };

        let favorites: Vec<FavoriteItem> = self
            .favorites
            .search(&self.favorites_filter)
            .into_iter()
            .map(|entry| self.compute_favorite_item(entry, cols, matcher.as_ref()))
            .collect();
        let empty_state = favorites.is_empty().then(|| self.compute_empty_state());

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            card: self.compute_card(cols),
            editor: self.compute_editor(cols),
            favorites,
            empty_state,
            status: self.status.as_ref().map(|status| StatusInfo {
                level: status.level,
                text: status.text.clone(),
            }),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let filter = if self.favorites_filter.trim().is_empty() {
            String::new()
        } else {
            format!(" matching {:?}", self.favorites_filter.trim())
        };

        HeaderInfo {
            title: format!(" Car Favorites ({}){filter} ", self.favorites.len()),
            theme_label: self.theme.current().name.clone(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.working_name().unwrap_or_default().to_string(),
            phase_label: self.phase.label().to_string(),
            busy: self.is_busy(),
        }
    }

    fn compute_card(&self, cols: usize) -> Option<CarCardInfo> {
        if !matches!(self.phase, WorkflowPhase::Ready | WorkflowPhase::Editing) {
            return None;
        }

        let working = self.working.as_ref()?;
        Some(CarCardInfo {
            name: working.name.clone(),
            image: working.image.as_deref().map(|url| truncate(url, cols.saturating_sub(10))),
            is_favorite: self.favorites.is_favorite(&working.name),
        })
    }

    fn compute_editor(&self, cols: usize) -> Option<EditorInfo> {
        if self.phase != WorkflowPhase::Editing {
            return None;
        }

        let working = self.working.as_ref()?;
        Some(EditorInfo {
            name: working.name.clone(),
            image: working.image.as_deref().map(|url| truncate(url, cols.saturating_sub(10))),
            is_favorite: self.favorites.is_favorite(&working.name),
            description: self.draft.description.clone(),
            rating_input: self.draft.rating_input.clone(),
            saving: matches!(self.in_flight, Some(InFlight::Save { .. })),
        })
    }

    fn compute_favorite_item(&self, entry: &FavoriteEntry, cols: usize, matcher: Option<&SkimMatcherV2>) -> FavoriteItem {
        const NAME_COLUMN_WIDTH: usize = 28;
        const SAFETY_MARGIN: usize = 20;

        let highlight_ranges = matcher.map_or_else(Vec::new, |m| self.compute_highlight_ranges(&entry.car_name, m));

        FavoriteItem {
            name: truncate(&entry.car_name, NAME_COLUMN_WIDTH),
            rating: entry.rating.map(Rating::stars),
            description: truncate(&entry.description, cols.saturating_sub(NAME_COLUMN_WIDTH + SAFETY_MARGIN)),
            saved: entry.time_ago(),
            is_working: self.working_name() == Some(entry.car_name.as_str()),
            has_remote_id: entry.id.is_some(),
            highlight_ranges,
        }
    }

    /// Computes char index ranges to highlight for the favorites filter.
    ///
    /// Every filter token is matched separately; matched indices are merged and
    /// coalesced into `(start, end)` ranges with an exclusive end.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;
        use std::collections::BTreeSet;

        let text_lower = text.to_lowercase();
        let indices: BTreeSet<usize> = self
            .favorites_filter
            .split_whitespace()
            .filter_map(|token| matcher.fuzzy_indices(&text_lower, &token.to_lowercase()))
            .flat_map(|(_score, indices)| indices)
            .collect();

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    fn compute_empty_state(&self) -> EmptyState {
        if self.favorites.is_empty() {
            EmptyState {
                message: "No favorites yet".to_string(),
                subtitle: "Search for a car, then `edit` and `save` it".to_string(),
            }
        } else {
            EmptyState {
                message: format!("No favorites match {:?}", self.favorites_filter.trim()),
                subtitle: "Use `filter` with no query to show all".to_string(),
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.phase {
            WorkflowPhase::Idle | WorkflowPhase::Lookup => {
                "search <name>  refresh  filter <query>  remove <name>  theme  help  quit"
            }
            WorkflowPhase::Ready => "search <name>  edit  refresh  filter <query>  remove <name>  theme  quit",
            WorkflowPhase::Editing => "desc <text>  rating <1-5>  star  save  cancel",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Shortens `text` to at most `max_chars` characters, marking the cut with "...".
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars <= 3 {
        return text.chars().take(max_chars).collect();
    }
    let kept: String = text.chars().take(max_chars - 3).collect();
    format!("{kept}...")
}
