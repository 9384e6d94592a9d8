//! Error types for the trial session.
//!
//! Wrong menu picks are not errors; they come back as
//! [`crate::session::Selection::Rejected`]. Everything here is a misuse of
//! the session by its host.

use thiserror::Error;

use crate::session::Phase;

/// Result type alias
pub type Result<T> = std::result::Result<T, SessionError>;

/// Faults raised when the session is driven out of order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// An operation was called in a phase that forbids it.
    #[error("`{operation}` is not allowed while the session is {phase:?}")]
    InvalidTransition {
        /// Name of the rejected operation.
        operation: &'static str,
        /// Phase the session was in.
        phase: Phase,
    },

    /// `advance` was called while the current trial is still open.
    #[error("trial {trial} has not been resolved yet")]
    TrialUnresolved {
        /// Number of the open trial.
        trial: u32,
    },

    /// The catalog has no selectable leaves to draw a target from.
    #[error("menu catalog has no leaves to choose a target from")]
    EmptyCatalog,
}
