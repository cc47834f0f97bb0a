//! Worker implementation executing lookup and store requests.
//!
//! The worker owns both external clients. It runs one message at a time and
//! turns every result, good or bad, into a [`WorkerResponse`]; it never
//! touches application state.

use crate::domain::error::Result;
use crate::lookup::ImageLookup;
use crate::storage::CarStore;
use crate::worker::{WorkerMessage, WorkerResponse};

/// Executes [`WorkerMessage`]s against the image lookup and car store clients.
pub struct CarWorker {
    lookup: Box<dyn ImageLookup>,
    store: Box<dyn CarStore>,
}

impl CarWorker {
    #[must_use]
    pub fn new(lookup: Box<dyn ImageLookup>, store: Box<dyn CarStore>) -> Self {
        Self { lookup, store }
    }

    /// Processes one message and reports its outcome.
    pub fn process(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _span = tracing::debug_span!("worker_process", message = ?message).entered();

        match message {
            WorkerMessage::LookupImage { name } => self.handle_lookup_image(name),
            WorkerMessage::SaveCar { draft, intent } => {
                let name = draft.name.clone();
                Self::handle_store_result(
                    "save car",
                    self.store.create_or_update(&draft),
                    |record| WorkerResponse::CarSaved { record, intent },
                    |message| WorkerResponse::SaveFailed { name, intent, message },
                )
            }
            WorkerMessage::ListCars => Self::handle_store_result(
                "list cars",
                self.store.list(),
                |records| WorkerResponse::CarsListed { records },
                |message| WorkerResponse::ListFailed { message },
            ),
            WorkerMessage::DeleteCar { id, name } => {
                let failed_name = name.clone();
                Self::handle_store_result(
                    "delete car",
                    self.store.delete(&id),
                    |()| WorkerResponse::CarDeleted { id, name },
                    |message| WorkerResponse::DeleteFailed {
                        name: failed_name,
                        message,
                    },
                )
            }
        }
    }

    fn handle_lookup_image(&self, name: String) -> WorkerResponse {
        let image = self.lookup.lookup(&name);
        tracing::debug!(car_name = %name, has_image = image.is_some(), "lookup finished");
        WorkerResponse::ImageResolved { name, image }
    }

    /// Maps a store result to a response with consistent logging.
    fn handle_store_result<T, S, F>(operation: &str, result: Result<T>, on_success: S, on_failure: F) -> WorkerResponse
    where
        S: FnOnce(T) -> WorkerResponse,
        F: FnOnce(String) -> WorkerResponse,
    {
        match result {
            Ok(value) => {
                tracing::debug!(operation = operation, "store operation successful");
                on_success(value)
            }
            Err(e) => {
                tracing::warn!(operation = operation, error = %e, "store operation failed");
                on_failure(e.to_string())
            }
        }
    }
}

impl std::fmt::Debug for CarWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarWorker").finish_non_exhaustive()
    }
}
