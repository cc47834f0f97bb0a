//! Worker executing the workflow's external calls.
//!
//! The workflow handler never calls the image service or the car store
//! directly; it emits [`WorkerMessage`]s and receives [`WorkerResponse`]s.
//!
//! - `messages`: request/response protocol types
//! - `handler`: [`CarWorker`] owning the lookup and store clients

pub mod handler;
pub mod messages;

pub use handler::CarWorker;
pub use messages::{SaveIntent, WorkerMessage, WorkerResponse};
