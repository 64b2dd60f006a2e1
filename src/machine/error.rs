//! Engine error taxonomy.

use crate::validate::ValidationError;
use thiserror::Error;

/// Errors surfaced by machine construction and evaluation.
///
/// None of these are retried internally: each one signals a declaration or
/// data defect, not a transient condition.
#[derive(Debug, Error)]
pub enum FsmError {
    /// A transition declaration references a status outside the configured
    /// status set. Raised at construction; no machine is built.
    #[error("transitions reference statuses outside the configured set: {statuses:?}")]
    InvalidTransitionStatus { statuses: Vec<String> },

    /// No transition from the current status triggered for the observation.
    /// Signals a gap in the declared transition coverage.
    #[error("no transition triggered from status '{status}' for data point {data}")]
    NoTransitionTriggered { status: String, data: String },

    /// The observation or state failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
