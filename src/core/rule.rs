//! Episode field update rules.
//!
//! An update rule is the named strategy a transition declares for computing
//! one episode field's new value when the transition fires. The rule set is
//! closed: adding or removing a rule is a compile-time-checked change.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error for update-rule names that are not part of the rule set.
///
/// Only reachable where rule names enter the system as strings, i.e.
/// `UpdateRule::from_str` and deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("update rule '{rule}' is not recognized")]
pub struct UnrecognizedRule {
    /// The offending rule name.
    pub rule: String,
}

/// Strategy for computing one episode field's new value on a transition.
///
/// Declarative surfaces spell the rules `advance`, `copy`, and `initialize`.
///
/// # Example
///
/// ```rust
/// use episodic::core::UpdateRule;
///
/// let rule: UpdateRule = "advance".parse().unwrap();
/// assert_eq!(rule, UpdateRule::Advance);
/// assert!("escalate".parse::<UpdateRule>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateRule {
    /// Take the value from the incoming observation: the data time for the
    /// episode boundary fields, the transition's target status for
    /// `episode_status_max`.
    Advance,
    /// Keep the field's current value from the state unchanged.
    Copy,
    /// Reset the field to its value in the configured initial state.
    Initialize,
}

impl UpdateRule {
    /// Resolve a time-valued episode field (`episode_start`/`episode_end`).
    ///
    /// `incoming` is the observation time, `current` the field's value in the
    /// state being advanced from, `initial` its value in the configured
    /// initial state.
    pub fn resolve_time<T: Clone>(
        self,
        incoming: &T,
        current: &Option<T>,
        initial: &Option<T>,
    ) -> Option<T> {
        match self {
            UpdateRule::Advance => Some(incoming.clone()),
            UpdateRule::Copy => current.clone(),
            UpdateRule::Initialize => initial.clone(),
        }
    }

    /// Resolve the `episode_status_max` field.
    ///
    /// Advancing records the transition's target status as the new maximum;
    /// the severity ordering itself is the transition author's contract.
    pub fn resolve_status_max<S: Clone>(
        self,
        target: &S,
        current: &Option<S>,
        initial: &Option<S>,
    ) -> Option<S> {
        match self {
            UpdateRule::Advance => Some(target.clone()),
            UpdateRule::Copy => current.clone(),
            UpdateRule::Initialize => initial.clone(),
        }
    }
}

impl fmt::Display for UpdateRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UpdateRule::Advance => "advance",
            UpdateRule::Copy => "copy",
            UpdateRule::Initialize => "initialize",
        };
        f.write_str(name)
    }
}

impl FromStr for UpdateRule {
    type Err = UnrecognizedRule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "advance" => Ok(UpdateRule::Advance),
            "copy" => Ok(UpdateRule::Copy),
            "initialize" => Ok(UpdateRule::Initialize),
            other => Err(UnrecognizedRule {
                rule: other.to_string(),
            }),
        }
    }
}

/// The per-field rule set a transition declares for the episode fields.
///
/// A field left at `None` is carried over from the previous state unchanged.
/// The `time` and `status` fields are not part of the set: the engine writes
/// them unconditionally on every transition.
///
/// # Example
///
/// ```rust
/// use episodic::core::{UpdateRule, UpdateRules};
///
/// // Continue an episode: keep its start, move its end forward.
/// let rules = UpdateRules::new()
///     .start(UpdateRule::Copy)
///     .end(UpdateRule::Advance);
/// assert_eq!(rules.episode_start, Some(UpdateRule::Copy));
/// assert!(rules.episode_status_max.is_none());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct UpdateRules {
    /// Rule for `episode_start`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_start: Option<UpdateRule>,
    /// Rule for `episode_end`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_end: Option<UpdateRule>,
    /// Rule for `episode_status_max`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub episode_status_max: Option<UpdateRule>,
}

impl UpdateRules {
    /// Create an empty rule set: every episode field carries over.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rule for `episode_start`.
    pub fn start(mut self, rule: UpdateRule) -> Self {
        self.episode_start = Some(rule);
        self
    }

    /// Set the rule for `episode_end`.
    pub fn end(mut self, rule: UpdateRule) -> Self {
        self.episode_end = Some(rule);
        self
    }

    /// Set the rule for `episode_status_max`.
    pub fn status_max(mut self, rule: UpdateRule) -> Self {
        self.episode_status_max = Some(rule);
        self
    }
}
