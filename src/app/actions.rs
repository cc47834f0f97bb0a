//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after each event. Actions are the
//! boundary between pure state transitions and effectful work: the runtime
//! executes them in order and feeds worker responses back as events.
//!
//! # Example
//!
//! ```rust
//! use car_favorites::app::Action;
//! use car_favorites::worker::WorkerMessage;
//!
//! let actions = vec![Action::PostToWorker(WorkerMessage::ListCars)];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::worker::WorkerMessage;

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a lookup or store call on the worker.
    PostToWorker(WorkerMessage),

    /// Ends the session.
    Quit,
}
