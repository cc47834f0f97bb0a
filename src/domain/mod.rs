//! Domain layer for car-favorites.
//!
//! Core types independent of HTTP, storage format or presentation.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`car`]: Store-side car record and its opaque id
//! - [`favorite`]: Local favorite entry
//! - [`rating`]: 1-5 rating with input validation
//!
//! # Examples
//!
//! ```
//! use car_favorites::domain::{CarRecord, FavoriteEntry, Rating};
//!
//! let mut record = CarRecord::new("Ferrari");
//! record.rating = Rating::new(5);
//! let entry = FavoriteEntry::from_record(&record);
//! assert_eq!(entry.rating, Rating::new(5));
//! ```

pub mod car;
pub mod error;
pub mod favorite;
pub mod rating;

pub use car::{CarId, CarRecord};
pub use error::{CarFavoritesError, Result};
pub use favorite::FavoriteEntry;
pub use rating::Rating;
