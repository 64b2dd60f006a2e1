//! Trigger predicates deciding whether a transition fires.
//!
//! Triggers are pure boolean functions over an observation and the current
//! state. Any parameters a trigger needs are bound when the trigger is
//! constructed, so evaluation takes only `(data, state)`.

use super::record::{DataPoint, EpisodeState, Value};

/// Pure predicate that decides whether a transition fires for a given
/// observation and current state.
///
/// Implementations must be deterministic and side-effect free; the engine
/// imposes no other restriction on their internals.
///
/// # Example
///
/// ```rust
/// use episodic::core::{DataPoint, EpisodeState, Trigger, ValueEquals};
///
/// let trigger = ValueEquals(1);
/// let data = DataPoint::new(0i64, 1);
/// let state: EpisodeState<&str, i64> = EpisodeState::initial("watching");
///
/// assert!(trigger.evaluate(&data, &state));
/// ```
pub trait Trigger<S, V, T>: Send + Sync {
    /// Evaluate the predicate against an observation and the current state.
    fn evaluate(&self, data: &DataPoint<V, T>, state: &EpisodeState<S, T>) -> bool;
}

type Predicate<S, V, T> =
    Box<dyn Fn(&DataPoint<V, T>, &EpisodeState<S, T>) -> bool + Send + Sync>;

/// Trigger wrapping an arbitrary pure predicate function.
///
/// # Example
///
/// ```rust
/// use episodic::core::{DataPoint, EpisodeState, FnTrigger, Trigger};
///
/// let falling = FnTrigger::new(|d: &DataPoint<i64, i64>, s: &EpisodeState<&str, i64>| {
///     d.value == 0 && s.status == "alerting"
/// });
///
/// let state = EpisodeState::initial("alerting");
/// assert!(falling.evaluate(&DataPoint::new(0, 0), &state));
/// assert!(!falling.evaluate(&DataPoint::new(0, 1), &state));
/// ```
pub struct FnTrigger<S, V, T> {
    predicate: Predicate<S, V, T>,
}

impl<S, V, T> FnTrigger<S, V, T> {
    /// Create a trigger from a pure predicate function.
    ///
    /// The predicate must be deterministic, side-effect free, and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&DataPoint<V, T>, &EpisodeState<S, T>) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
        }
    }
}

impl<S, V, T> Trigger<S, V, T> for FnTrigger<S, V, T> {
    fn evaluate(&self, data: &DataPoint<V, T>, state: &EpisodeState<S, T>) -> bool {
        (self.predicate)(data, state)
    }
}

/// Fires when the observed value equals the bound value.
#[derive(Clone, Debug)]
pub struct ValueEquals<V>(pub V);

impl<S, V: Value, T> Trigger<S, V, T> for ValueEquals<V> {
    fn evaluate(&self, data: &DataPoint<V, T>, _state: &EpisodeState<S, T>) -> bool {
        data.value == self.0
    }
}

/// Fires when the observed value is greater than or equal to the bound value.
#[derive(Clone, Debug)]
pub struct ValueAtLeast<V>(pub V);

impl<S, V: Value + PartialOrd, T> Trigger<S, V, T> for ValueAtLeast<V> {
    fn evaluate(&self, data: &DataPoint<V, T>, _state: &EpisodeState<S, T>) -> bool {
        data.value >= self.0
    }
}

/// Fires when the observed value is less than or equal to the bound value.
#[derive(Clone, Debug)]
pub struct ValueAtMost<V>(pub V);

impl<S, V: Value + PartialOrd, T> Trigger<S, V, T> for ValueAtMost<V> {
    fn evaluate(&self, data: &DataPoint<V, T>, _state: &EpisodeState<S, T>) -> bool {
        data.value <= self.0
    }
}
