//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `AppState` into `UIViewModel`
//! 2. **Component Rendering**: Delegate to component renderers with the
//!    current palette
//!
//! # Example
//!
//! ```rust
//! use car_favorites::app::AppState;
//! use car_favorites::ui::{render, ThemeState};
//!
//! let state = AppState::new(ThemeState::default(), false);
//! let screen = render(&state, 80);
//! assert!(screen.contains("No favorites yet"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::theme::ThemeColors;
use crate::ui::viewmodel::UIViewModel;

/// Renders the whole screen for `state` at `cols` columns.
#[must_use]
pub fn render(state: &AppState, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(cols);
    render_viewmodel(&viewmodel, state.theme.colors(), cols)
}

/// Renders a pre-computed view model with the given palette.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, colors: &ThemeColors, cols: usize) -> String {
    let mut out = String::new();
    if let Err(e) = components::render_screen(&mut out, vm, colors, cols) {
        tracing::warn!(error = %e, "failed to render screen");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{WorkflowPhase, WorkingCar};
    use crate::domain::{FavoriteEntry, Rating};
    use crate::ui::ThemeState;

    #[test]
    fn renders_card_and_favorites() {
        let mut state = AppState::new(ThemeState::default(), false);
        state.working = Some(WorkingCar {
            name: "Ferrari".to_string(),
            image: Some("http://img/ferrari.png".to_string()),
            id: None,
        });
        state.phase = WorkflowPhase::Ready;
        state
            .favorites
            .add(FavoriteEntry {
                description: "fast".to_string(),
                rating: Rating::new(5),
                ..FavoriteEntry::new("Ferrari")
            })
            .unwrap();

        let screen = render(&state, 100);

        assert!(screen.contains("http://img/ferrari.png"));
        assert!(screen.contains("★★★★★"));
        assert!(screen.contains("fast"));
        assert!(!screen.contains("No favorites yet"));
    }

    #[test]
    fn renders_editor_while_editing() {
        let mut state = AppState::new(ThemeState::default(), false);
        state.working = Some(WorkingCar::new("Uno"));
        state.phase = WorkflowPhase::Editing;
        state.draft.description = "reliable".to_string();

        let screen = render(&state, 80);

        assert!(screen.contains("Edit Uno"));
        assert!(screen.contains("reliable"));
    }

    #[test]
    fn dark_palette_changes_output() {
        let mut state = AppState::new(ThemeState::default(), false);
        let light = render(&state, 80);
        state.theme.toggle();
        assert_ne!(render(&state, 80), light);
    }
}
