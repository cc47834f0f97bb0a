//! Car store backend abstraction.
//!
//! This module defines the [`CarStore`] trait over the remote collection of car
//! records. The trait stays minimal: one method per store operation the
//! workflow needs, plus the create-vs-update rule implemented once here.

use crate::domain::error::{CarFavoritesError, Result};
use crate::domain::{CarId, CarRecord};

/// Abstraction over the remote car collection.
///
/// # Implementations
///
/// - [`HttpCarStore`](crate::storage::HttpCarStore): REST resource over HTTP
/// - [`JsonFileCarStore`](crate::storage::JsonFileCarStore): local JSON file
///
/// # Examples
///
/// ```no_run
/// use car_favorites::domain::CarRecord;
/// use car_favorites::storage::{CarStore, JsonFileCarStore};
/// use std::path::PathBuf;
///
/// let mut store = JsonFileCarStore::new(PathBuf::from("/tmp/cars.json"))?;
/// let saved = store.create_or_update(&CarRecord::new("Ferrari"))?;
/// assert!(saved.id.is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait CarStore: Send {
    /// Retrieves every car record.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::StoreRead`] if the listing fails.
    fn list(&self) -> Result<Vec<CarRecord>>;

    /// Creates a record and returns it with its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::StoreWrite`] if the store rejects the write.
    fn create(&mut self, draft: &CarRecord) -> Result<CarRecord>;

    /// Replaces the record with the given id and returns the stored result.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::StoreWrite`] if the store rejects the write
    /// or has no record with that id.
    fn update(&mut self, id: &CarId, draft: &CarRecord) -> Result<CarRecord>;

    /// Deletes a record. Deleting an id that is already gone succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::StoreWrite`] on transport or server failure.
    fn delete(&mut self, id: &CarId) -> Result<()>;

    /// Updates when `draft.id` is set, creates otherwise.
    ///
    /// The decision never looks at the name: two different records may share a
    /// display name and must not overwrite each other.
    ///
    /// # Errors
    ///
    /// Propagates store failures, and returns [`CarFavoritesError::StoreWrite`]
    /// if a create comes back without an id.
    fn create_or_update(&mut self, draft: &CarRecord) -> Result<CarRecord> {
        let _span = tracing::debug_span!("create_or_update",
            car_name = %draft.name,
            id = ?draft.id
        ).entered();

        match &draft.id {
            Some(id) => {
                tracing::debug!(id = %id, "updating existing car record");
                self.update(id, draft)
            }
            None => {
                tracing::debug!("creating car record");
                let created = self.create(draft)?;
                if created.id.is_none() {
                    return Err(CarFavoritesError::StoreWrite(format!(
                        "store created {:?} without assigning an id",
                        draft.name
                    )));
                }
                Ok(created)
            }
        }
    }
}
