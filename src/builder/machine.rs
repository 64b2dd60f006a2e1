//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::config::Config;
use crate::core::{Status, Timestamp, Value};
use crate::machine::{Fsm, FsmError, TransitionDecl};

/// Builder for constructing machines with a fluent API.
pub struct FsmBuilder<S: Status, V: Value, T: Timestamp> {
    config: Option<Config<S, V, T>>,
    transitions: Vec<TransitionDecl<S, V, T>>,
}

impl<S: Status, V: Value, T: Timestamp> FsmBuilder<S, V, T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: None,
            transitions: Vec::new(),
        }
    }

    /// Set the resolved configuration (required).
    pub fn config(mut self, config: Config<S, V, T>) -> Self {
        self.config = Some(config);
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(
        mut self,
        builder: TransitionBuilder<S, V, T>,
    ) -> Result<Self, BuildError> {
        let decl = builder.build()?;
        self.transitions.push(decl);
        Ok(self)
    }

    /// Add a pre-built transition declaration.
    pub fn add_transition(mut self, decl: TransitionDecl<S, V, T>) -> Self {
        self.transitions.push(decl);
        self
    }

    /// Add multiple transition declarations at once.
    pub fn transitions(mut self, decls: Vec<TransitionDecl<S, V, T>>) -> Self {
        self.transitions.extend(decls);
        self
    }

    /// Build the machine.
    ///
    /// Fails with `BuildError` if required pieces are missing, and with
    /// `FsmError::InvalidTransitionStatus` if a declaration references a
    /// status outside the configured set.
    pub fn build(self) -> Result<Fsm<S, V, T>, FsmBuildError> {
        let config = self.config.ok_or(BuildError::MissingConfig)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions.into());
        }

        Ok(Fsm::new(config, self.transitions)?)
    }
}

impl<S: Status, V: Value, T: Timestamp> Default for FsmBuilder<S, V, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Error from `FsmBuilder::build`: either the builder was incomplete or the
/// machine itself failed initialization.
#[derive(Debug, thiserror::Error)]
pub enum FsmBuildError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Fsm(#[from] FsmError),
}
