//! Build errors for machine and transition builders.

use thiserror::Error;

/// Errors that can occur when building machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration not specified. Call .config(config) before .build()")]
    MissingConfig,

    #[error("No transitions declared. Add at least one transition")]
    NoTransitions,

    #[error("Transition initial status not specified. Call .from(status)")]
    MissingFromStatus,

    #[error("Transition target status not specified. Call .to(status)")]
    MissingToStatus,

    #[error("Transition trigger not specified. Call .trigger(trigger) or .when(predicate)")]
    MissingTrigger,
}
