//! Remote car store client layer.
//!
//! This module provides the store abstraction for persisting car records and
//! the two backends that implement it.
//!
//! # Modules
//!
//! - `backend`: [`CarStore`] trait with the create-vs-update rule
//! - `http`: REST backend over the `cars` collection
//! - `json`: local JSON file backend with atomic writes
//! - `models`: wire payload with the store's field names

pub mod backend;
pub mod http;
pub mod json;
pub mod models;

pub use backend::CarStore;
pub use http::HttpCarStore;
pub use json::JsonFileCarStore;
pub use models::CarPayload;
