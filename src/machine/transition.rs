//! Transition declarations and their activated form.
//!
//! A `TransitionDecl` is the immutable declarative unit: initial status,
//! target status, trigger predicate, and update rules for the episode
//! fields. Activation binds a declaration to the resolved configuration,
//! producing a `Transition` that evaluates with only `(data, state)`.

use crate::config::Config;
use crate::core::{
    DataPoint, EpisodeState, FnTrigger, Status, Timestamp, Trigger, UpdateRules, Value,
};
use std::sync::Arc;

/// Declarative transition: from one status to another, guarded by a trigger,
/// with per-field update rules for the episode fields.
///
/// Declaration order is part of the contract: when several transitions from
/// the same status could fire on the same observation, the first declared
/// wins.
pub struct TransitionDecl<S: Status, V: Value, T: Timestamp> {
    /// Status this transition leaves from.
    pub from: S,
    /// Status this transition moves to.
    pub to: S,
    /// Predicate deciding whether the transition fires.
    pub trigger: Arc<dyn Trigger<S, V, T>>,
    /// Update rules for the episode fields.
    pub update: UpdateRules,
}

impl<S: Status, V: Value, T: Timestamp> TransitionDecl<S, V, T> {
    /// Declare a transition with any trigger implementation.
    pub fn new(from: S, to: S, trigger: impl Trigger<S, V, T> + 'static, update: UpdateRules) -> Self {
        Self {
            from,
            to,
            trigger: Arc::new(trigger),
            update,
        }
    }

    /// Declare a transition triggered by a closure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use episodic::core::{UpdateRule, UpdateRules};
    /// use episodic::machine::TransitionDecl;
    /// use episodic::status_enum;
    ///
    /// status_enum! {
    ///     enum TwoStatus {
    ///         A,
    ///         B,
    ///     }
    /// }
    ///
    /// let decl: TransitionDecl<TwoStatus, u8, i64> = TransitionDecl::when(
    ///     TwoStatus::A,
    ///     TwoStatus::B,
    ///     |d, _s| d.value == 1,
    ///     UpdateRules::new()
    ///         .start(UpdateRule::Advance)
    ///         .end(UpdateRule::Advance),
    /// );
    /// assert_eq!(decl.from, TwoStatus::A);
    /// ```
    pub fn when<F>(from: S, to: S, predicate: F, update: UpdateRules) -> Self
    where
        F: Fn(&DataPoint<V, T>, &EpisodeState<S, T>) -> bool + Send + Sync + 'static,
    {
        Self::new(from, to, FnTrigger::new(predicate), update)
    }
}

impl<S: Status, V: Value, T: Timestamp> Clone for TransitionDecl<S, V, T> {
    fn clone(&self) -> Self {
        Self {
            from: self.from.clone(),
            to: self.to.clone(),
            trigger: Arc::clone(&self.trigger),
            update: self.update,
        }
    }
}

/// A transition bound to a resolved configuration.
///
/// Owns no mutable state; `triggered` and `update` are pure functions of
/// `(data, state)`.
pub struct Transition<S: Status, V: Value, T: Timestamp> {
    decl: TransitionDecl<S, V, T>,
    config: Arc<Config<S, V, T>>,
}

impl<S: Status, V: Value, T: Timestamp> Transition<S, V, T> {
    /// Bind a declaration to the resolved configuration.
    pub fn activate(decl: TransitionDecl<S, V, T>, config: Arc<Config<S, V, T>>) -> Self {
        Self { decl, config }
    }

    /// Status this transition leaves from.
    pub fn from(&self) -> &S {
        &self.decl.from
    }

    /// Status this transition moves to.
    pub fn to(&self) -> &S {
        &self.decl.to
    }

    /// Evaluate the trigger predicate against an observation and state.
    pub fn triggered(&self, data: &DataPoint<V, T>, state: &EpisodeState<S, T>) -> bool {
        self.decl.trigger.evaluate(data, state)
    }

    /// Derive the successor state.
    ///
    /// The observation time and the target status are written
    /// unconditionally; each episode field with a declared rule is resolved
    /// through it; every other field carries over unchanged.
    pub fn update(&self, data: &DataPoint<V, T>, state: &EpisodeState<S, T>) -> EpisodeState<S, T> {
        let initial = &self.config.state_initial;
        let mut next = state.clone();

        next.time = Some(data.time.clone());
        next.status = self.decl.to.clone();

        if let Some(rule) = self.decl.update.episode_start {
            next.episode_start =
                rule.resolve_time(&data.time, &state.episode_start, &initial.episode_start);
        }
        if let Some(rule) = self.decl.update.episode_end {
            next.episode_end =
                rule.resolve_time(&data.time, &state.episode_end, &initial.episode_end);
        }
        if let Some(rule) = self.decl.update.episode_status_max {
            next.episode_status_max = rule.resolve_status_max(
                &self.decl.to,
                &state.episode_status_max,
                &initial.episode_status_max,
            );
        }

        next
    }
}

impl<S: Status, V: Value, T: Timestamp> Clone for Transition<S, V, T> {
    fn clone(&self) -> Self {
        Self {
            decl: self.decl.clone(),
            config: Arc::clone(&self.config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UpdateRule;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestStatus {
        A,
        B,
    }

    impl Status for TestStatus {
        fn name(&self) -> &str {
            match self {
                Self::A => "A",
                Self::B => "B",
            }
        }
    }

    fn config() -> Arc<Config<TestStatus, u8, i64>> {
        Arc::new(
            Config::new(
                vec![0, 1],
                vec![TestStatus::A, TestStatus::B],
                EpisodeState::initial(TestStatus::A),
            )
            .unwrap(),
        )
    }

    fn activated(update: UpdateRules) -> Transition<TestStatus, u8, i64> {
        let decl = TransitionDecl::when(TestStatus::A, TestStatus::B, |d, _s| d.value == 1, update);
        Transition::activate(decl, config())
    }

    #[test]
    fn triggered_delegates_to_the_predicate() {
        let transition = activated(UpdateRules::new());
        let state = EpisodeState::initial(TestStatus::A);

        assert!(transition.triggered(&DataPoint::new(0, 1), &state));
        assert!(!transition.triggered(&DataPoint::new(0, 0), &state));
    }

    #[test]
    fn update_writes_time_and_status_unconditionally() {
        let transition = activated(UpdateRules::new());
        let state = EpisodeState::initial(TestStatus::A);

        let next = transition.update(&DataPoint::new(5, 1), &state);
        assert_eq!(next.time, Some(5));
        assert_eq!(next.status, TestStatus::B);
    }

    #[test]
    fn update_applies_declared_rules_per_field() {
        let transition = activated(
            UpdateRules::new()
                .start(UpdateRule::Copy)
                .end(UpdateRule::Advance)
                .status_max(UpdateRule::Advance),
        );
        let state = EpisodeState {
            time: Some(3),
            status: TestStatus::A,
            episode_start: Some(1),
            episode_end: Some(3),
            episode_status_max: None,
        };

        let next = transition.update(&DataPoint::new(4, 1), &state);
        assert_eq!(next.episode_start, Some(1));
        assert_eq!(next.episode_end, Some(4));
        assert_eq!(next.episode_status_max, Some(TestStatus::B));
    }

    #[test]
    fn update_carries_unruled_fields_over() {
        let transition = activated(UpdateRules::new().end(UpdateRule::Advance));
        let state = EpisodeState {
            time: Some(3),
            status: TestStatus::A,
            episode_start: Some(1),
            episode_end: Some(3),
            episode_status_max: Some(TestStatus::A),
        };

        let next = transition.update(&DataPoint::new(4, 1), &state);
        assert_eq!(next.episode_start, Some(1));
        assert_eq!(next.episode_status_max, Some(TestStatus::A));
    }

    #[test]
    fn update_does_not_mutate_its_inputs() {
        let transition = activated(UpdateRules::new().start(UpdateRule::Advance));
        let state = EpisodeState::initial(TestStatus::A);
        let data = DataPoint::new(2, 1);

        let _ = transition.update(&data, &state);
        assert_eq!(state, EpisodeState::initial(TestStatus::A));
        assert_eq!(data, DataPoint::new(2, 1));
    }

    #[test]
    fn initialize_rule_resets_from_the_configured_initial_state() {
        let transition = activated(
            UpdateRules::new()
                .start(UpdateRule::Initialize)
                .end(UpdateRule::Initialize)
                .status_max(UpdateRule::Initialize),
        );
        let state = EpisodeState {
            time: Some(3),
            status: TestStatus::A,
            episode_start: Some(1),
            episode_end: Some(3),
            episode_status_max: Some(TestStatus::B),
        };

        let next = transition.update(&DataPoint::new(4, 1), &state);
        assert_eq!(next.episode_start, None);
        assert_eq!(next.episode_end, None);
        assert_eq!(next.episode_status_max, None);
    }
}
