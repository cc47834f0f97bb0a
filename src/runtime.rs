//! Serial event loop connecting the workflow handler to the worker.
//!
//! The runtime owns the [`AppState`] and the [`CarWorker`]. Dispatching an
//! event runs the handler, executes the returned actions in order and feeds
//! every worker response back as an event until the queue is empty. Events
//! are therefore processed one at a time and the registry has a single writer.

use crate::app::{handle_event, Action, AppState, Event};
use crate::worker::CarWorker;
use std::collections::VecDeque;

/// What the front end should do after a dispatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// At least one handled event changed visible state.
    pub render: bool,
    /// A `Quit` action was emitted.
    pub quit: bool,
}

/// Application state plus the worker executing its side effects.
#[derive(Debug)]
pub struct Runtime {
    state: AppState,
    worker: CarWorker,
}

impl Runtime {
    #[must_use]
    pub const fn new(state: AppState, worker: CarWorker) -> Self {
        Self { state, worker }
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Handles `event` and every worker response it leads to.
    ///
    /// Handler errors are logged and shown on the status line; processing of
    /// the remaining queue continues.
    pub fn dispatch(&mut self, event: Event) -> DispatchOutcome {
        let _span = tracing::debug_span!("dispatch", event_type = ?event).entered();

        let mut outcome = DispatchOutcome::default();
        let mut queue = VecDeque::from([event]);

        while let Some(event) = queue.pop_front() {
            let actions = match handle_event(&mut self.state, &event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(action_count = actions.len(), should_render = should_render, "event handled");
                    outcome.render |= should_render;
                    actions
                }
                Err(e) => {
                    tracing::error!(error = %e, "error handling event");
                    self.state.set_error(e.to_string());
                    outcome.render = true;
                    continue;
                }
            };

            for action in actions {
                match action {
                    Action::PostToWorker(message) => {
                        let response = self.worker.process(message);
                        queue.push_back(Event::WorkerResponse(response));
                    }
                    Action::Quit => outcome.quit = true,
                }
            }
        }

        outcome
    }
}
