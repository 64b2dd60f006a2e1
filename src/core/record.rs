//! Observation and state records.
//!
//! `DataPoint` is one observation in a time-ordered series; `EpisodeState` is
//! the running state derived from folding observations through the machine.
//! Both are immutable values: the engine never mutates a record in place, it
//! always derives a new state from the previous one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Bounds for observation value types.
///
/// Implemented for anything cloneable, comparable, and thread-safe; values
/// are drawn from the configured `data_values` set.
pub trait Value: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<V> Value for V where V: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// Bounds for timestamp types.
///
/// The default timestamp type throughout the crate is `DateTime<Utc>`;
/// integer tick counters or any other ordered-by-convention type work too.
pub trait Timestamp: Clone + PartialEq + Debug + Send + Sync + 'static {}

impl<T> Timestamp for T where T: Clone + PartialEq + Debug + Send + Sync + 'static {}

/// One observation in a time-ordered series.
///
/// Created by the caller, consumed read-only by the engine.
///
/// # Example
///
/// ```rust
/// use episodic::core::DataPoint;
/// use chrono::Utc;
///
/// let point = DataPoint {
///     time: Utc::now(),
///     value: 2,
/// };
/// assert_eq!(point.value, 2);
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct DataPoint<V, T = DateTime<Utc>> {
    /// When the observation was made.
    pub time: T,
    /// The observed value, drawn from the configured value set.
    pub value: V,
}

impl<V, T> DataPoint<V, T> {
    /// Create an observation from a timestamp and a value.
    pub fn new(time: T, value: V) -> Self {
        Self { time, value }
    }
}

/// The running episode state.
///
/// Every field except `status` starts out null and is written by update
/// rules as transitions fire. `time` records the most recent observation
/// folded into this state; `episode_start`/`episode_end` bound the current
/// status episode; `episode_status_max` tracks the highest-severity status
/// the transition author chose to record during the episode.
///
/// # Example
///
/// ```rust
/// use episodic::core::EpisodeState;
///
/// let state: EpisodeState<&str> = EpisodeState::initial("watching");
/// assert_eq!(state.status, "watching");
/// assert!(state.time.is_none());
/// assert!(state.episode_start.is_none());
/// ```
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct EpisodeState<S, T = DateTime<Utc>> {
    /// Time of the most recent observation folded into this state.
    pub time: Option<T>,
    /// The current status. Always present.
    pub status: S,
    /// When the current status episode began.
    pub episode_start: Option<T>,
    /// When the current status episode last updated.
    pub episode_end: Option<T>,
    /// The highest-severity status recorded during the current episode.
    pub episode_status_max: Option<S>,
}

impl<S, T> EpisodeState<S, T> {
    /// Create an initial state: the given status, every other field null.
    ///
    /// This mirrors the shape a configuration resolver seeds a run with.
    pub fn initial(status: S) -> Self {
        Self {
            time: None,
            status,
            episode_start: None,
            episode_end: None,
            episode_status_max: None,
        }
    }
}
