//! Favorites state manager.
//!
//! [`FavoritesRegistry`] owns the local list of favorite cars. Only the workflow
//! handler mutates it, and only after the store has confirmed a write (the
//! editor's quick-toggle star being the one local-only path).

pub mod registry;

pub use registry::FavoritesRegistry;
