//! Application layer coordinating state, events, and actions.
//!
//! This is the workflow controller, sitting between the terminal front end
//! (main.rs, driven through [`crate::runtime::Runtime`]) and the
//! domain/favorites/worker layers.
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Worker
//!                           ↑                                         ↓
//!                           └──────────── Worker Responses ───────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Workflow phase and in-flight operation types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InFlight, WorkflowPhase};
pub use state::{AppState, Draft, StatusLevel, StatusMessage, WorkingCar};
