//! JSON file-based car store.
//!
//! A local stand-in for the remote store: same [`CarStore`] contract, records
//! kept in one human-readable JSON file written atomically (write-to-temp +
//! rename) so a crash never leaves a half-written file.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "next_id": 3,
//!   "cars": [
//!     { "id": 1, "nome": "Ferrari", "imagem": "http://img/ferrari.png",
//!       "descricao": "fast", "rating": 5, "isFavorite": true }
//!   ]
//! }
//! ```

use crate::domain::error::{CarFavoritesError, Result};
use crate::domain::{CarId, CarRecord};
use crate::storage::backend::CarStore;
use crate::storage::models::CarPayload;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// JSON storage container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Next numeric id to hand out.
    #[serde(default = "first_id")]
    next_id: u64,

    /// Stored cars in creation order.
    #[serde(default)]
    cars: Vec<CarPayload>,
}

const fn first_id() -> u64 {
    1
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            next_id: first_id(),
            cars: Vec::new(),
        }
    }
}

/// JSON file car store.
///
/// The whole collection is kept in memory and persisted on every write; the
/// in-memory copy only changes once the file write succeeded.
/// Ids are sequential numbers and never reused.
pub struct JsonFileCarStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation and replaced after each write.
    data: StorageData,
}

impl JsonFileCarStore {
    /// Creates or opens a JSON car store.
    ///
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but does not contain a valid store document.
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON car store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(car_count = data.cars.len(), next_id = data.next_id, "car store initialized");

        Ok(Self {
            file_path,
            data,
        })
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| CarFavoritesError::StoreRead(format!("failed to read {}: {e}", path.display())))?;

        let mut data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| CarFavoritesError::StoreRead(format!("failed to parse JSON: {e}")))?;

        // Files edited by hand may carry ids beyond the stored counter.
        let highest = data
            .cars
            .iter()
            .filter_map(|car| match car.id {
                Some(CarId::Number(n)) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0);
        data.next_id = data.next_id.max(highest.saturating_add(1));

        Ok(data)
    }

    /// Writes `next` to disk atomically and adopts it only once the write
    /// succeeded, so a failed write leaves the in-memory copy untouched.
    fn commit(&mut self, next: StorageData) -> Result<()> {
        let json = serde_json::to_string_pretty(&next)
            .map_err(|e| CarFavoritesError::StoreWrite(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)
            .and_then(|()| std::fs::rename(&tmp_path, &self.file_path))
            .map_err(|e| CarFavoritesError::StoreWrite(format!("failed to write {}: {e}", self.file_path.display())))?;

        self.data = next;
        tracing::debug!("car store saved");
        Ok(())
    }

    fn position(&self, id: &CarId) -> Option<usize> {
        self.data.cars.iter().position(|car| car.id.as_ref() == Some(id))
    }
}

impl CarStore for JsonFileCarStore {
    fn list(&self) -> Result<Vec<CarRecord>> {
        let _span = tracing::debug_span!("json_list_cars").entered();

        let records: Vec<CarRecord> = self.data.cars.iter().cloned().map(CarPayload::into_record).collect();

        tracing::debug!(count = records.len(), "listed cars");
        Ok(records)
    }

    fn create(&mut self, draft: &CarRecord) -> Result<CarRecord> {
        let _span = tracing::debug_span!("json_create_car", car_name = %draft.name).entered();

        let mut next = self.data.clone();
        let id = CarId::Number(next.next_id);
        next.next_id = next.next_id.saturating_add(1);

        let mut payload = CarPayload::from_record(draft);
        payload.id = Some(id.clone());
        next.cars.push(payload.clone());

        self.commit(next)?;

        tracing::debug!(id = %id, "car created");
        Ok(payload.into_record())
    }

    fn update(&mut self, id: &CarId, draft: &CarRecord) -> Result<CarRecord> {
        let _span = tracing::debug_span!("json_update_car", id = %id, car_name = %draft.name).entered();

        let position = self
            .position(id)
            .ok_or_else(|| CarFavoritesError::StoreWrite(format!("car not found: {id}")))?;

        let mut payload = CarPayload::from_record(draft);
        payload.id = Some(id.clone());
        let mut next = self.data.clone();
        next.cars[position] = payload.clone();

        self.commit(next)?;

        tracing::debug!("car updated");
        Ok(payload.into_record())
    }

    fn delete(&mut self, id: &CarId) -> Result<()> {
        let _span = tracing::debug_span!("json_delete_car", id = %id).entered();

        let Some(position) = self.position(id) else {
            tracing::debug!("car already absent from store");
            return Ok(());
        };

        let mut next = self.data.clone();
        next.cars.remove(position);
        self.commit(next)?;

        tracing::debug!("car deleted");
        Ok(())
    }
}
