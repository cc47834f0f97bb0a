//! HTTP car store backend.
//!
//! Talks to a REST `cars` collection:
//!
//! | Operation | Request                 |
//! |-----------|-------------------------|
//! | list      | `GET {base}/cars`       |
//! | create    | `POST {base}/cars`      |
//! | update    | `PUT {base}/cars/{id}`  |
//! | delete    | `DELETE {base}/cars/{id}` |
//!
//! Bodies are [`CarPayload`] JSON. Every request shares the client timeout;
//! expiry is reported like any other transport failure.

use crate::domain::error::{CarFavoritesError, Result};
use crate::domain::{CarId, CarRecord};
use crate::storage::backend::CarStore;
use crate::storage::models::CarPayload;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// REST client for the remote car collection.
#[derive(Debug, Clone)]
pub struct HttpCarStore {
    client: Client,
    base_url: Url,
}

impl HttpCarStore {
    /// Creates a store client rooted at `base_url` (the `cars` collection is
    /// appended to it).
    ///
    /// # Errors
    ///
    /// Returns [`CarFavoritesError::Config`] if `base_url` is not an absolute
    /// URL with a path, or the HTTP client cannot be built.
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self> {
        let raw = base_url.as_ref();
        let base_url =
            Url::parse(raw).map_err(|e| CarFavoritesError::Config(format!("invalid store URL {raw:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CarFavoritesError::Config(format!("invalid store URL {base_url:?}: not a base URL")));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("car-favorites/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CarFavoritesError::Config(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL with `segments` appended, each percent-encoded as one path
    /// segment.
    fn url_with(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn collection_url(&self) -> Url {
        self.url_with(&["cars"])
    }

    fn item_url(&self, id: &CarId) -> Url {
        self.url_with(&["cars", &id.to_string()])
    }

    fn write_error(operation: &str, err: &reqwest::Error) -> CarFavoritesError {
        CarFavoritesError::StoreWrite(format!("{operation} failed: {err}"))
    }

    fn send_write(&self, operation: &str, request: reqwest::blocking::RequestBuilder) -> Result<CarRecord> {
        let response = request
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(|e| Self::write_error(operation, &e))?;

        let payload: CarPayload = response
            .json()
            .map_err(|e| Self::write_error(operation, &e))?;

        Ok(payload.into_record())
    }
}

impl CarStore for HttpCarStore {
    fn list(&self) -> Result<Vec<CarRecord>> {
        let url = self.collection_url();
        let _span = tracing::debug_span!("http_list_cars", url = %url).entered();

        let read_error = |e: reqwest::Error| CarFavoritesError::StoreRead(format!("list failed: {e}"));

        let payloads: Vec<CarPayload> = self
            .client
            .get(url)
            .send()
            .and_then(reqwest::blocking::Response::error_for_status)
            .map_err(read_error)?
            .json()
            .map_err(read_error)?;

        tracing::debug!(count = payloads.len(), "listed cars");
        Ok(payloads.into_iter().map(CarPayload::into_record).collect())
    }

    fn create(&mut self, draft: &CarRecord) -> Result<CarRecord> {
        let url = self.collection_url();
        let _span = tracing::debug_span!("http_create_car", url = %url, car_name = %draft.name).entered();

        let mut body = CarPayload::from_record(draft);
        body.id = None;

        let created = self.send_write("create", self.client.post(url).json(&body))?;
        tracing::debug!(id = ?created.id, "car created");
        Ok(created)
    }

    fn update(&mut self, id: &CarId, draft: &CarRecord) -> Result<CarRecord> {
        let url = self.item_url(id);
        let _span = tracing::debug_span!("http_update_car", url = %url, car_name = %draft.name).entered();

        let mut body = CarPayload::from_record(draft);
        body.id = Some(id.clone());

        let mut updated = self.send_write("update", self.client.put(url).json(&body))?;
        if updated.id.is_none() {
            updated.id = Some(id.clone());
        }
        tracing::debug!(id = %id, "car updated");
        Ok(updated)
    }

    fn delete(&mut self, id: &CarId) -> Result<()> {
        let url = self.item_url(id);
        let _span = tracing::debug_span!("http_delete_car", url = %url).entered();

        let response = self
            .client
            .delete(url)
            .send()
            .map_err(|e| Self::write_error("delete", &e))?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!("car already absent from store");
            return Ok(());
        }

        response
            .error_for_status()
            .map_err(|e| Self::write_error("delete", &e))?;

        tracing::debug!("car deleted");
        Ok(())
    }
}
