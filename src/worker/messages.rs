//! Worker message types.
//!
//! This module defines the request/response protocol between the workflow
//! handler and the worker that owns the image lookup and car store clients.
//! Every request produces exactly one response; failures are responses too,
//! so the handler always learns how an in-flight call ended.

use crate::domain::{CarId, CarRecord};

/// Why a car record is being saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIntent {
    /// Eager persistence right after a lookup; the car is not a favorite yet.
    Draft,

    /// The user pressed Save in the favorite editor.
    Favorite,
}

/// Requests executed by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Resolve an image URL for a car name.
    LookupImage {
        /// Trimmed car name.
        name: String,
    },

    /// Create or update a car record, decided by `draft.id`.
    SaveCar {
        /// Record to persist.
        draft: CarRecord,
        /// Carried back unchanged in the response.
        intent: SaveIntent,
    },

    /// List every car record in the store.
    ListCars,

    /// Delete a car record.
    DeleteCar {
        /// Store id of the record.
        id: CarId,
        /// Favorite name the record belongs to.
        name: String,
    },
}

/// Outcomes reported by the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerResponse {
    /// Lookup finished; `image` is `None` when nothing usable came back.
    ImageResolved {
        name: String,
        image: Option<String>,
    },

    /// The store accepted the write and returned its version of the record.
    CarSaved {
        record: CarRecord,
        intent: SaveIntent,
    },

    /// The store rejected the write or could not be reached.
    SaveFailed {
        name: String,
        intent: SaveIntent,
        message: String,
    },

    /// The store listing succeeded.
    CarsListed {
        records: Vec<CarRecord>,
    },

    /// The store listing failed.
    ListFailed {
        message: String,
    },

    /// The record is gone from the store.
    CarDeleted {
        id: CarId,
        name: String,
    },

    /// Deleting the record failed.
    DeleteFailed {
        name: String,
        message: String,
    },
}
