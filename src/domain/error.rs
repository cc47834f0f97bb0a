//! Error types for car-favorites.
//!
//! This module defines the centralized error type [`CarFavoritesError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the `thiserror`
//! crate for automatic `Error` trait implementation.
//!
//! # Taxonomy
//!
//! - Image lookup failures never leave the lookup client; they resolve to "no image".
//! - [`CarFavoritesError::StoreRead`] surfaces list failures; local state stays as it was.
//! - [`CarFavoritesError::StoreWrite`] surfaces create/update/delete failures; the
//!   favorites registry is not touched.
//! - [`CarFavoritesError::Validation`] rejects user input before any network call.

use thiserror::Error;

/// The main error type for car-favorites operations.
///
/// # Examples
///
/// ```
/// use car_favorites::CarFavoritesError;
///
/// fn check_name(name: &str) -> Result<(), CarFavoritesError> {
///     if name.trim().is_empty() {
///         return Err(CarFavoritesError::Validation("car name is empty".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(check_name("  ").is_err());
/// ```
#[derive(Debug, Error)]
pub enum CarFavoritesError {
    /// Reading the car collection from the remote store failed.
    #[error("Store read error: {0}")]
    StoreRead(String),

    /// Creating, updating or deleting a car record failed.
    #[error("Store write error: {0}")]
    StoreWrite(String),

    /// User input was rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A favorite with this car name is already registered.
    #[error("Favorite already exists: {0}")]
    DuplicateFavorite(String),

    /// No favorite with this car name is registered.
    #[error("Favorite not found: {0}")]
    FavoriteNotFound(String),

    /// HTTP transport failure.
    ///
    /// Store clients translate these into `StoreRead`/`StoreWrite` before they
    /// reach the workflow; the image lookup swallows them.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for car-favorites operations.
pub type Result<T> = std::result::Result<T, CarFavoritesError>;
