//! Presentation layer: theme state, view models, rendering and input mapping.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI String
//! stdin line → parse_command → Event
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`input`]: Command line to [`crate::app::Event`] mapping
//! - [`theme`]: Light/dark palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod input;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use input::{parse_command, Command, HELP_TEXT};
pub use renderer::render;
pub use theme::{Theme, ThemeColors, ThemeState};
pub use viewmodel::{
    CarCardInfo, EditorInfo, EmptyState, FavoriteItem, FooterInfo, HeaderInfo, SearchBarInfo, StatusInfo, UIViewModel,
};
