//! Workflow phase and in-flight operation types.
//!
//! # State Machine
//!
//! ```text
//!            search (non-empty)          image resolved
//!   Idle ─────────────────────▶ Lookup ─────────────────▶ Ready
//!                                  ▲                      │  ▲
//!                                  └──── search ──────────┘  │ save ok / cancel
//!                                                         open editor
//!                                                            ▼  │
//!                                                          Editing
//! ```
//!
//! At most one store or lookup call is in flight at a time, tracked by
//! [`InFlight`]. Search and save requests arriving while one is pending are
//! ignored.

use crate::worker::SaveIntent;

/// Phase of the working-car workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkflowPhase {
    /// Nothing searched yet.
    #[default]
    Idle,

    /// Waiting for the image lookup of the working car.
    Lookup,

    /// Working car resolved (image possibly absent); editor closed.
    Ready,

    /// Favorite editor open over the working car.
    Editing,
}

impl WorkflowPhase {
    /// Short label for the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Lookup => "searching",
            Self::Ready => "ready",
            Self::Editing => "editing",
        }
    }
}

/// The one external call currently awaited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InFlight {
    Lookup { name: String },
    Save { intent: SaveIntent, name: String },
    Delete { name: String },
    List,
}
