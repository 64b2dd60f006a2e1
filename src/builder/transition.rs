//! Builder for constructing transition declarations.

use crate::builder::error::BuildError;
use crate::core::{
    DataPoint, EpisodeState, FnTrigger, Status, Timestamp, Trigger, UpdateRule, UpdateRules, Value,
};
use crate::machine::TransitionDecl;
use std::sync::Arc;

/// Builder for constructing transition declarations with a fluent API.
pub struct TransitionBuilder<S: Status, V: Value, T: Timestamp> {
    from: Option<S>,
    to: Option<S>,
    trigger: Option<Arc<dyn Trigger<S, V, T>>>,
    update: UpdateRules,
}

impl<S: Status, V: Value, T: Timestamp> TransitionBuilder<S, V, T> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            from: None,
            to: None,
            trigger: None,
            update: UpdateRules::new(),
        }
    }

    /// Set the initial status (required).
    pub fn from(mut self, status: S) -> Self {
        self.from = Some(status);
        self
    }

    /// Set the target status (required).
    pub fn to(mut self, status: S) -> Self {
        self.to = Some(status);
        self
    }

    /// Set the trigger (required, unless `when` is used).
    pub fn trigger(mut self, trigger: impl Trigger<S, V, T> + 'static) -> Self {
        self.trigger = Some(Arc::new(trigger));
        self
    }

    /// Set the trigger from a closure.
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&DataPoint<V, T>, &EpisodeState<S, T>) -> bool + Send + Sync + 'static,
    {
        self.trigger = Some(Arc::new(FnTrigger::new(predicate)));
        self
    }

    /// Set all update rules at once (optional; the default carries every
    /// episode field over).
    pub fn update(mut self, update: UpdateRules) -> Self {
        self.update = update;
        self
    }

    /// Set the rule for `episode_start`.
    pub fn start(mut self, rule: UpdateRule) -> Self {
        self.update = self.update.start(rule);
        self
    }

    /// Set the rule for `episode_end`.
    pub fn end(mut self, rule: UpdateRule) -> Self {
        self.update = self.update.end(rule);
        self
    }

    /// Set the rule for `episode_status_max`.
    pub fn status_max(mut self, rule: UpdateRule) -> Self {
        self.update = self.update.status_max(rule);
        self
    }

    /// Build the transition declaration.
    pub fn build(self) -> Result<TransitionDecl<S, V, T>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromStatus)?;
        let to = self.to.ok_or(BuildError::MissingToStatus)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;

        Ok(TransitionDecl {
            from,
            to,
            trigger,
            update: self.update,
        })
    }
}

impl<S: Status, V: Value, T: Timestamp> Default for TransitionBuilder<S, V, T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ValueEquals;
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

    #[test]
    fn builder_validates_required_fields() {
        let result = TransitionBuilder::<TestStatus, u8, i64>::new()
            .from(TestStatus::A)
            .build();

        assert!(matches!(result, Err(BuildError::MissingToStatus)));
    }

    #[test]
    fn builder_validates_missing_trigger() {
        let result = TransitionBuilder::<TestStatus, u8, i64>::new()
            .from(TestStatus::A)
            .to(TestStatus::B)
            .build();

        assert!(matches!(result, Err(BuildError::MissingTrigger)));
    }

    #[test]
    fn fluent_api_builds_declaration() {
        let decl: TransitionDecl<TestStatus, u8, i64> = TransitionBuilder::new()
            .from(TestStatus::A)
            .to(TestStatus::B)
            .trigger(ValueEquals(1))
            .start(UpdateRule::Advance)
            .end(UpdateRule::Advance)
            .build()
            .unwrap();

        assert_eq!(decl.from, TestStatus::A);
        assert_eq!(decl.to, TestStatus::B);
        assert_eq!(decl.update.episode_start, Some(UpdateRule::Advance));
        assert!(decl.update.episode_status_max.is_none());
    }

    #[test]
    fn when_sets_a_closure_trigger() {
        let decl: TransitionDecl<TestStatus, u8, i64> = TransitionBuilder::new()
            .from(TestStatus::A)
            .to(TestStatus::B)
            .when(|d, _s| d.value == 1)
            .build()
            .unwrap();

        let state = EpisodeState::initial(TestStatus::A);
        assert!(decl.trigger.evaluate(&DataPoint::new(0, 1), &state));
        assert!(!decl.trigger.evaluate(&DataPoint::new(0, 0), &state));
    }
}
