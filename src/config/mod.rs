//! Resolved machine configuration.
//!
//! The configuration is produced by an external resolver (merging, defaulting)
//! and consumed read-only here. `Config::new` performs only the consistency
//! check the engine depends on: the seed state's status must be a member of
//! the configured status set.

use crate::core::{EpisodeState, Status, Timestamp, Value};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from the configuration consistency check.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("initial status '{status}' is not among the allowed status values")]
    InitialStatusNotAllowed { status: String },
}

/// Resolved configuration for one machine.
///
/// Carries the allowed observation values, the allowed status values, and
/// the state that seeds a run. Trigger parameters are not configuration:
/// they are bound into each trigger when it is constructed.
///
/// # Example
///
/// ```rust
/// use episodic::config::Config;
/// use episodic::core::EpisodeState;
/// use episodic::status_enum;
///
/// status_enum! {
///     enum TwoStatus {
///         A,
///         B,
///     }
/// }
///
/// let config: Config<TwoStatus, u8, i64> = Config::new(
///     vec![0, 1],
///     vec![TwoStatus::A, TwoStatus::B],
///     EpisodeState::initial(TwoStatus::A),
/// )
/// .unwrap();
///
/// assert_eq!(config.status_values.len(), 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config<S, V, T = DateTime<Utc>> {
    /// Allowed observation values.
    pub data_values: Vec<V>,
    /// Allowed status values.
    pub status_values: Vec<S>,
    /// The state that seeds a run.
    pub state_initial: EpisodeState<S, T>,
}

impl<S: Status, V: Value, T: Timestamp> Config<S, V, T> {
    /// Create a configuration, checking that the seed state's status is a
    /// member of the allowed status set.
    pub fn new(
        data_values: Vec<V>,
        status_values: Vec<S>,
        state_initial: EpisodeState<S, T>,
    ) -> Result<Self, ConfigError> {
        if !status_values.contains(&state_initial.status) {
            return Err(ConfigError::InitialStatusNotAllowed {
                status: state_initial.status.name().to_string(),
            });
        }

        Ok(Self {
            data_values,
            status_values,
            state_initial,
        })
    }
}
