//! Event handling and state transition logic.
//!
//! [`handle_event`] is the workflow controller: it receives user intents and
//! worker responses, mutates [`AppState`] and returns the actions the runtime
//! must execute. It never performs I/O itself.
//!
//! # Event Types
//!
//! - **Workflow**: `SearchSubmit`, `OpenFavoriteEditor`, `SaveFavorite`, `CancelEdit`
//! - **Editor input**: `SetDescription`, `RatingInput`, `QuickToggleFavorite`
//! - **Favorites list**: `RemoveFavorite`, `RefreshFavorites`, `FilterFavorites`
//! - **Presentation**: `ToggleTheme`, `Quit`
//! - **Worker**: `WorkerResponse` with typed message variants
//!
//! # Consistency
//!
//! The registry changes only after the store confirms a write, with one
//! exception: the editor's quick toggle, which adds or removes locally and is
//! overwritten by the next confirmed save.
//!
//! # Example
//!
//! ```rust
//! use car_favorites::app::{handle_event, Action, AppState, Event};
//! use car_favorites::ui::ThemeState;
//! use car_favorites::worker::WorkerMessage;
//!
//! let mut state = AppState::new(ThemeState::default(), false);
//! let (_render, actions) = handle_event(&mut state, &Event::SearchSubmit(" Ferrari ".into()))?;
//! assert_eq!(
//!     actions,
//!     vec![Action::PostToWorker(WorkerMessage::LookupImage { name: "Ferrari".into() })]
//! );
//! # Ok::<(), car_favorites::CarFavoritesError>(())
//! ```

use super::modes::{InFlight, WorkflowPhase};
use super::state::{Draft, WorkingCar};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{CarId, CarRecord, FavoriteEntry, Rating};
use crate::worker::{SaveIntent, WorkerMessage, WorkerResponse};

/// Events triggered by user input or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Looks up the image for a car name.
    SearchSubmit(String),
    /// Opens the favorite editor over the working car.
    OpenFavoriteEditor,
    /// Replaces the draft description.
    SetDescription(String),
    /// Replaces the draft rating text; rejected unless empty or `1`-`5`.
    RatingInput(String),
    /// Adds or removes the working car locally, without calling the store.
    QuickToggleFavorite,
    /// Persists the working car as a favorite.
    SaveFavorite,
    /// Closes the editor and discards the draft.
    CancelEdit,
    /// Removes a favorite by exact name.
    RemoveFavorite(String),
    /// Rebuilds the registry from the store listing.
    RefreshFavorites,
    /// Narrows the displayed favorites list.
    FilterFavorites(String),
    /// Switches between the light and dark palettes.
    ToggleTheme,
    /// Ends the session.
    Quit,
    /// Wraps a response from the worker.
    WorkerResponse(WorkerResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// A `(render, actions)` pair: `render` is `true` when the visible state
/// changed, `actions` are executed in order by the runtime.
///
/// # Errors
///
/// Returns registry errors that indicate a broken invariant while merging a
/// store response. Expected failures (rejected input, store errors) are
/// reported through the status line instead.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, phase = ?state.phase).entered();

    match event {
        Event::SearchSubmit(name) => Ok(handle_search_submit(state, name)),
        Event::OpenFavoriteEditor => Ok(handle_open_editor(state)),
        Event::SetDescription(text) => {
            if state.phase != WorkflowPhase::Editing {
                tracing::debug!("description ignored outside the editor");
                return Ok((false, vec![]));
            }
            state.draft.description.clone_from(text);
            Ok((true, vec![]))
        }
        Event::RatingInput(text) => Ok(handle_rating_input(state, text)),
        Event::QuickToggleFavorite => handle_quick_toggle(state),
        Event::SaveFavorite => Ok(handle_save(state)),
        Event::CancelEdit => {
            if state.phase != WorkflowPhase::Editing {
                return Ok((false, vec![]));
            }
            state.phase = WorkflowPhase::Ready;
            state.draft = Draft::default();
            state.set_info("Edit cancelled");
            Ok((true, vec![]))
        }
        Event::RemoveFavorite(name) => Ok(handle_remove(state, name)),
        Event::RefreshFavorites => {
            if reject_if_busy(state) {
                return Ok((true, vec![]));
            }
            state.in_flight = Some(InFlight::List);
            Ok((true, vec![Action::PostToWorker(WorkerMessage::ListCars)]))
        }
        Event::FilterFavorites(query) => {
            if state.favorites_filter == *query {
                return Ok((false, vec![]));
            }
            state.favorites_filter.clone_from(query);
            Ok((true, vec![]))
        }
        Event::ToggleTheme => {
            state.theme.toggle();
            Ok((true, vec![]))
        }
        Event::Quit => Ok((false, vec![Action::Quit])),
        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

/// Sets a busy status and returns `true` when an operation is already in flight.
fn reject_if_busy(state: &mut AppState) -> bool {
    let Some(in_flight) = &state.in_flight else {
        return false;
    };
    tracing::debug!(in_flight = ?in_flight, "request ignored while busy");
    state.set_warning("Busy, wait for the current operation to finish");
    true
}

fn handle_search_submit(state: &mut AppState, name: &str) -> (bool, Vec<Action>) {
    let name = name.trim();
    if name.is_empty() {
        tracing::debug!("empty search ignored");
        return (false, vec![]);
    }
    if state.phase == WorkflowPhase::Editing {
        state.set_warning("Save or cancel the open editor before searching");
        return (true, vec![]);
    }
    if reject_if_busy(state) {
        return (true, vec![]);
    }

    tracing::debug!(car_name = %name, "starting lookup");
    state.working = Some(WorkingCar::new(name));
    state.draft = Draft::default();
    state.phase = WorkflowPhase::Lookup;
    state.in_flight = Some(InFlight::Lookup { name: name.to_string() });
    state.status = None;

    (
        true,
        vec![Action::PostToWorker(WorkerMessage::LookupImage { name: name.to_string() })],
    )
}

fn handle_open_editor(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.phase != WorkflowPhase::Ready {
        tracing::debug!(phase = ?state.phase, "editor can only open from ready");
        return (false, vec![]);
    }
    let Some(working) = state.working.as_mut() else {
        return (false, vec![]);
    };

    state.draft = match state.favorites.get(&working.name) {
        Some(entry) => {
            if entry.id.is_some() {
                working.id.clone_from(&entry.id);
            }
            Draft::from_entry(entry)
        }
        None => Draft::default(),
    };
    state.phase = WorkflowPhase::Editing;
    state.status = None;
    (true, vec![])
}

fn handle_rating_input(state: &mut AppState, text: &str) -> (bool, Vec<Action>) {
    if state.phase != WorkflowPhase::Editing {
        return (false, vec![]);
    }

    match Rating::parse_input(text) {
        Ok(rating) => {
            state.draft.rating_input = text.to_string();
            state.draft.rating = rating;
            state.status = None;
        }
        Err(e) => {
            tracing::debug!(input = %text, "rating input rejected");
            state.set_error(e.to_string());
        }
    }
    (true, vec![])
}

fn handle_quick_toggle(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.phase != WorkflowPhase::Editing {
        return Ok((false, vec![]));
    }
    let Some(working) = state.working.as_ref() else {
        return Ok((false, vec![]));
    };

    if state.favorites.remove(&working.name).is_some() {
        tracing::debug!(car_name = %working.name, "quick toggle removed favorite");
        let text = format!("Removed {} locally; save to sync", working.name);
        state.set_info(text);
    } else {
        let entry = FavoriteEntry {
            id: working.id.clone(),
            car_image: working.image.clone(),
            description: state.draft.description.clone(),
            rating: state.draft.rating,
            ..FavoriteEntry::new(working.name.clone())
        };
        tracing::debug!(car_name = %working.name, "quick toggle added favorite");
        let text = format!("Added {} locally; save to sync", working.name);
        state.favorites.add(entry)?;
        state.set_info(text);
    }
    Ok((true, vec![]))
}

fn handle_save(state: &mut AppState) -> (bool, Vec<Action>) {
    if state.phase != WorkflowPhase::Editing {
        return (false, vec![]);
    }
    if reject_if_busy(state) {
        return (true, vec![]);
    }

    let Some(draft) = state.draft_record(true).filter(|record| !record.name.trim().is_empty()) else {
        state.set_error("Validation error: enter a car name before saving");
        return (true, vec![]);
    };

    tracing::debug!(car_name = %draft.name, id = ?draft.id, "saving favorite");
    state.in_flight = Some(InFlight::Save {
        intent: SaveIntent::Favorite,
        name: draft.name.clone(),
    });
    state.set_info(format!("Saving {}...", draft.name));

    (
        true,
        vec![Action::PostToWorker(WorkerMessage::SaveCar {
            draft,
            intent: SaveIntent::Favorite,
        })],
    )
}

fn handle_remove(state: &mut AppState, name: &str) -> (bool, Vec<Action>) {
    let name = name.trim();
    let Some(entry) = state.favorites.get(name) else {
        state.set_warning(format!("{name} is not a favorite"));
        return (true, vec![]);
    };

    let Some(id) = entry.id.clone() else {
        state.favorites.remove(name);
        state.set_info(format!("Removed {name}"));
        return (true, vec![]);
    };

    if reject_if_busy(state) {
        return (true, vec![]);
    }

    tracing::debug!(car_name = %name, id = %id, "deleting favorite");
    state.in_flight = Some(InFlight::Delete { name: name.to_string() });
    (
        true,
        vec![Action::PostToWorker(WorkerMessage::DeleteCar {
            id,
            name: name.to_string(),
        })],
    )
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::ImageResolved { name, image } => Ok(handle_image_resolved(state, name, image.as_deref())),
        WorkerResponse::CarSaved { record, intent } => handle_car_saved(state, record, *intent),
        WorkerResponse::SaveFailed { name, intent, message } => {
            clear_in_flight(state, |f| matches!(f, InFlight::Save { .. }));
            match intent {
                SaveIntent::Favorite => {
                    state.set_error(format!("Could not save {name}: {message}"));
                }
                SaveIntent::Draft => {
                    state.set_warning(format!("Draft for {name} not stored: {message}"));
                }
            }
            Ok((true, vec![]))
        }
        WorkerResponse::CarsListed { records } => {
            clear_in_flight(state, |f| matches!(f, InFlight::List));
            state.favorites.replace_from_records(records);
            sync_working_id_from_registry(state);
            tracing::debug!(records = records.len(), favorites = state.favorites.len(), "favorites refreshed");
            state.set_info(format!("Loaded {} favorites", state.favorites.len()));
            Ok((true, vec![]))
        }
        WorkerResponse::ListFailed { message } => {
            clear_in_flight(state, |f| matches!(f, InFlight::List));
            state.set_error(format!("Could not load favorites: {message}"));
            Ok((true, vec![]))
        }
        WorkerResponse::CarDeleted { id, name } => {
            clear_in_flight(state, |f| matches!(f, InFlight::Delete { .. }));
            state.favorites.remove(name);
            forget_working_id(state, id);
            state.set_info(format!("Removed {name}"));
            Ok((true, vec![]))
        }
        WorkerResponse::DeleteFailed { name, message } => {
            clear_in_flight(state, |f| matches!(f, InFlight::Delete { .. }));
            state.set_error(format!("Could not remove {name}: {message}"));
            Ok((true, vec![]))
        }
    }
}

fn clear_in_flight(state: &mut AppState, expected: impl Fn(&InFlight) -> bool) {
    match state.in_flight.take() {
        Some(in_flight) if expected(&in_flight) => {}
        other => {
            tracing::warn!(in_flight = ?other, "worker response does not match the pending operation");
        }
    }
}

fn handle_image_resolved(state: &mut AppState, name: &str, image: Option<&str>) -> (bool, Vec<Action>) {
    let answers_lookup = matches!(&state.in_flight, Some(InFlight::Lookup { name: pending }) if pending == name);
    if !answers_lookup || state.working_name() != Some(name) {
        tracing::debug!(car_name = %name, "stale lookup result ignored");
        return (false, vec![]);
    }
    state.in_flight = None;

    let existing_id = state.favorites.get(name).map(|entry| entry.id.clone());
    if let Some(working) = state.working.as_mut() {
        working.image = image.map(str::to_string);
        if let Some(id) = &existing_id {
            working.id.clone_from(id);
        }
    }
    state.phase = WorkflowPhase::Ready;

    if image.is_none() {
        state.set_warning(format!("No image found for {name}"));
    }

    if existing_id.is_some() {
        return (true, vec![]);
    }

    if !state.eager_save {
        return (true, vec![]);
    }

    let Some(draft) = state.draft_record(false) else {
        return (true, vec![]);
    };
    tracing::debug!(car_name = %name, "eagerly storing draft record");
    state.in_flight = Some(InFlight::Save {
        intent: SaveIntent::Draft,
        name: name.to_string(),
    });
    (
        true,
        vec![Action::PostToWorker(WorkerMessage::SaveCar {
            draft,
            intent: SaveIntent::Draft,
        })],
    )
}

fn handle_car_saved(state: &mut AppState, record: &CarRecord, intent: SaveIntent) -> Result<(bool, Vec<Action>)> {
    let name = match state.in_flight.take() {
        Some(InFlight::Save { name, .. }) => name,
        other => {
            tracing::warn!(in_flight = ?other, "save response without a pending save");
            record.name.clone()
        }
    };

    if let Some(working) = state.working.as_mut().filter(|w| w.name == name) {
        working.id.clone_from(&record.id);
    }

    match intent {
        SaveIntent::Draft => {
            tracing::debug!(car_name = %name, id = ?record.id, "draft record stored");
            Ok((false, vec![]))
        }
        SaveIntent::Favorite => {
            let entry = FavoriteEntry {
                car_name: name.clone(),
                ..FavoriteEntry::from_record(record)
            };
            if state.favorites.is_favorite(&name) {
                state.favorites.update(entry)?;
            } else {
                state.favorites.add(entry)?;
            }
            tracing::debug!(car_name = %name, id = ?record.id, "favorite saved");

            if state.phase == WorkflowPhase::Editing {
                state.phase = WorkflowPhase::Ready;
            }
            state.draft = Draft::default();
            state.set_info(format!("Saved {name}"));
            Ok((true, vec![]))
        }
    }
}

/// Adopts the registry's id for the working car after a refresh.
fn sync_working_id_from_registry(state: &mut AppState) {
    let Some(working) = state.working.as_mut() else {
        return;
    };
    if let Some(id) = state.favorites.get(&working.name).and_then(|entry| entry.id.clone()) {
        working.id = Some(id);
    }
}

fn forget_working_id(state: &mut AppState, id: &CarId) {
    if let Some(working) = state.working.as_mut().filter(|w| w.id.as_ref() == Some(id)) {
        working.id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ThemeState;

    fn new_state() -> AppState {
        AppState::new(ThemeState::default(), false)
    }

    fn run(state: &mut AppState, event: Event) -> Vec<Action> {
        handle_event(state, &event).unwrap().1
    }

    fn resolve(state: &mut AppState, name: &str, image: Option<&str>) -> Vec<Action> {
        run(
            state,
            Event::WorkerResponse(WorkerResponse::ImageResolved {
                name: name.to_string(),
                image: image.map(str::to_string),
            }),
        )
    }

    fn ready_state(name: &str) -> AppState {
        let mut state = new_state();
        run(&mut state, Event::SearchSubmit(name.to_string()));
        resolve(&mut state, name, Some("http://img/car.png"));
        state
    }

    #[test]
    fn blank_search_is_a_noop() {
        let mut state = new_state();
        let (render, actions) = handle_event(&mut state, &Event::SearchSubmit("   ".to_string())).unwrap();

        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.phase, WorkflowPhase::Idle);
    }

    #[test]
    fn search_enters_lookup_with_trimmed_name() {
        let mut state = new_state();
        let actions = run(&mut state, Event::SearchSubmit("  Ferrari ".to_string()));

        assert_eq!(state.phase, WorkflowPhase::Lookup);
        assert_eq!(state.working_name(), Some("Ferrari"));
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::LookupImage {
                name: "Ferrari".to_string()
            })]
        );
    }

    #[test]
    fn second_search_is_ignored_while_lookup_in_flight() {
        let mut state = new_state();
        run(&mut state, Event::SearchSubmit("Ferrari".to_string()));
        let actions = run(&mut state, Event::SearchSubmit("Fusca".to_string()));

        assert!(actions.is_empty());
        assert_eq!(state.working_name(), Some("Ferrari"));
    }

    #[test]
    fn null_image_still_reaches_ready() {
        let mut state = new_state();
        run(&mut state, Event::SearchSubmit("Unknown".to_string()));
        resolve(&mut state, "Unknown", None);

        assert_eq!(state.phase, WorkflowPhase::Ready);
        assert!(!state.is_busy());
        assert!(state.working.as_ref().unwrap().image.is_none());
    }

    #[test]
    fn stale_lookup_result_is_ignored() {
        let mut state = ready_state("Ferrari");
        let actions = resolve(&mut state, "Fusca", Some("http://img/fusca.png"));

        assert!(actions.is_empty());
        assert_eq!(state.working.as_ref().unwrap().image.as_deref(), Some("http://img/car.png"));
    }

    #[test]
    fn eager_save_posts_non_favorite_draft() {
        let mut state = AppState::new(ThemeState::default(), true);
        run(&mut state, Event::SearchSubmit("Fusca".to_string()));
        let actions = resolve(&mut state, "Fusca", Some("http://img/fusca.png"));

        let [Action::PostToWorker(WorkerMessage::SaveCar { draft, intent })] = actions.as_slice() else {
            panic!("expected a draft save, got {actions:?}");
        };
        assert_eq!(*intent, SaveIntent::Draft);
        assert!(!draft.is_favorite);
        assert!(draft.id.is_none());
    }

    #[test]
    fn eager_save_skipped_for_existing_favorite() {
        let mut state = AppState::new(ThemeState::default(), true);
        state
            .favorites
            .add(FavoriteEntry {
                id: Some(CarId::Number(7)),
                ..FavoriteEntry::new("Fusca")
            })
            .unwrap();
        run(&mut state, Event::SearchSubmit("Fusca".to_string()));
        let actions = resolve(&mut state, "Fusca", None);

        assert!(actions.is_empty());
        assert_eq!(state.working.as_ref().unwrap().id, Some(CarId::Number(7)));
    }

    #[test]
    fn editor_only_opens_from_ready() {
        let mut state = new_state();
        run(&mut state, Event::OpenFavoriteEditor);
        assert_eq!(state.phase, WorkflowPhase::Idle);

        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);
        assert_eq!(state.phase, WorkflowPhase::Editing);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn editor_prepopulates_from_existing_favorite() {
        let mut state = ready_state("Ferrari");
        state
            .favorites
            .add(FavoriteEntry {
                id: Some(CarId::Number(42)),
                description: "fast".to_string(),
                rating: Rating::new(5),
                ..FavoriteEntry::new("Ferrari")
            })
            .unwrap();

        run(&mut state, Event::OpenFavoriteEditor);

        assert_eq!(state.draft.description, "fast");
        assert_eq!(state.draft.rating_input, "5");
        assert_eq!(state.working.as_ref().unwrap().id, Some(CarId::Number(42)));
    }

    #[test]
    fn invalid_rating_input_leaves_draft_unchanged() {
        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);
        run(&mut state, Event::RatingInput("3".to_string()));

        for input in ["6", "0", "12", "x"] {
            run(&mut state, Event::RatingInput(input.to_string()));
            assert_eq!(state.draft.rating, Rating::new(3), "input {input:?} changed the draft");
            assert_eq!(state.draft.rating_input, "3");
        }

        run(&mut state, Event::RatingInput(String::new()));
        assert_eq!(state.draft.rating, None);
    }

    #[test]
    fn save_posts_favorite_record_with_working_id() {
        let mut state = ready_state("Ferrari");
        state.working.as_mut().unwrap().id = Some(CarId::Number(42));
        run(&mut state, Event::OpenFavoriteEditor);
        run(&mut state, Event::SetDescription("slow".to_string()));

        let actions = run(&mut state, Event::SaveFavorite);

        let [Action::PostToWorker(WorkerMessage::SaveCar { draft, intent })] = actions.as_slice() else {
            panic!("expected a save, got {actions:?}");
        };
        assert_eq!(*intent, SaveIntent::Favorite);
        assert_eq!(draft.id, Some(CarId::Number(42)));
        assert_eq!(draft.description, "slow");
        assert!(draft.is_favorite);
        assert!(state.is_busy());
    }

    #[test]
    fn save_failure_keeps_editor_and_registry() {
        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);
        run(&mut state, Event::SetDescription("fast".to_string()));
        run(&mut state, Event::SaveFavorite);

        run(
            &mut state,
            Event::WorkerResponse(WorkerResponse::SaveFailed {
                name: "Ferrari".to_string(),
                intent: SaveIntent::Favorite,
                message: "connection refused".to_string(),
            }),
        );

        assert_eq!(state.phase, WorkflowPhase::Editing);
        assert_eq!(state.draft.description, "fast");
        assert!(state.favorites.is_empty());
        assert!(!state.is_busy());
    }

    #[test]
    fn cancel_discards_draft() {
        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);
        run(&mut state, Event::SetDescription("fast".to_string()));

        run(&mut state, Event::CancelEdit);

        assert_eq!(state.phase, WorkflowPhase::Ready);
        assert_eq!(state.draft, Draft::default());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn search_is_ignored_while_editing() {
        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);

        let actions = run(&mut state, Event::SearchSubmit("Fusca".to_string()));

        assert!(actions.is_empty());
        assert_eq!(state.working_name(), Some("Ferrari"));
        assert_eq!(state.phase, WorkflowPhase::Editing);
    }

    #[test]
    fn quick_toggle_adds_and_removes_locally() {
        let mut state = ready_state("Ferrari");
        run(&mut state, Event::OpenFavoriteEditor);

        let actions = run(&mut state, Event::QuickToggleFavorite);
        assert!(actions.is_empty());
        assert!(state.favorites.is_favorite("Ferrari"));

        run(&mut state, Event::QuickToggleFavorite);
        assert!(!state.favorites.is_favorite("Ferrari"));
    }

    #[test]
    fn remove_without_id_is_local() {
        let mut state = new_state();
        state.favorites.add(FavoriteEntry::new("Fusca")).unwrap();

        let actions = run(&mut state, Event::RemoveFavorite("Fusca".to_string()));

        assert!(actions.is_empty());
        assert!(state.favorites.is_empty());
    }

    #[test]
    fn remove_with_id_waits_for_store() {
        let mut state = ready_state("Fusca");
        state.working.as_mut().unwrap().id = Some(CarId::Number(3));
        state
            .favorites
            .add(FavoriteEntry {
                id: Some(CarId::Number(3)),
                ..FavoriteEntry::new("Fusca")
            })
            .unwrap();

        let actions = run(&mut state, Event::RemoveFavorite("Fusca".to_string()));
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::DeleteCar {
                id: CarId::Number(3),
                name: "Fusca".to_string()
            })]
        );
        assert!(state.favorites.is_favorite("Fusca"));

        run(
            &mut state,
            Event::WorkerResponse(WorkerResponse::CarDeleted {
                id: CarId::Number(3),
                name: "Fusca".to_string(),
            }),
        );
        assert!(!state.favorites.is_favorite("Fusca"));
        assert!(state.working.as_ref().unwrap().id.is_none());
    }

    #[test]
    fn list_failure_keeps_registry() {
        let mut state = new_state();
        state.favorites.add(FavoriteEntry::new("Fusca")).unwrap();
        run(&mut state, Event::RefreshFavorites);

        run(
            &mut state,
            Event::WorkerResponse(WorkerResponse::ListFailed {
                message: "timeout".to_string(),
            }),
        );

        assert_eq!(state.favorites.len(), 1);
        assert!(!state.is_busy());
    }

    #[test]
    fn toggle_theme_flips_palette() {
        let mut state = new_state();
        assert!(!state.theme.is_dark());
        run(&mut state, Event::ToggleTheme);
        assert!(state.theme.is_dark());
    }
}
