//! Escalation machine over integer severity levels.
//!
//! A ready-made three-status machine for monitoring pipelines: `Watching`
//! (no episode), `Warning`, and `Alerting`, driven by observed levels.
//! Watching is the rest status: entering it resets the episode fields, and
//! an episode spans the whole warning/alerting excursion until the machine
//! returns to watching. `episode_status_max` records the peak severity
//! reached during the excursion.
//!
//! Level semantics: 2 raises a warning, 3 (or 2 while already warning)
//! alerts, 1 de-escalates, -1 clears an alert back to watching. Level 0
//! while alerting is deliberately uncovered: an alert must first de-escalate
//! or clear.

use crate::config::Config;
use crate::core::{
    DataPoint, EpisodeState, UpdateRule, UpdateRules, ValueAtLeast, ValueAtMost, ValueEquals,
};
use crate::machine::{Fsm, FsmError, TransitionDecl};
use crate::status_enum;
use chrono::{DateTime, Duration, Utc};

status_enum! {
    /// Severity statuses tracked by the escalation machine.
    pub enum Severity {
        Watching,
        Warning,
        Alerting,
    }
}

/// The resolved configuration for the escalation machine.
pub fn escalation_config() -> Config<Severity, i64> {
    Config {
        data_values: vec![-1, 0, 1, 2, 3],
        status_values: vec![Severity::Watching, Severity::Warning, Severity::Alerting],
        state_initial: EpisodeState::initial(Severity::Watching),
    }
}

/// The escalation transition set, in declaration order.
pub fn escalation_transitions() -> Vec<TransitionDecl<Severity, i64, DateTime<Utc>>> {
    vec![
        TransitionDecl::new(
            Severity::Watching,
            Severity::Watching,
            ValueAtMost(1),
            UpdateRules::new()
                .start(UpdateRule::Initialize)
                .end(UpdateRule::Initialize)
                .status_max(UpdateRule::Initialize),
        ),
        TransitionDecl::new(
            Severity::Watching,
            Severity::Warning,
            ValueEquals(2),
            UpdateRules::new()
                .start(UpdateRule::Advance)
                .end(UpdateRule::Advance)
                .status_max(UpdateRule::Advance),
        ),
        TransitionDecl::new(
            Severity::Watching,
            Severity::Alerting,
            ValueEquals(3),
            UpdateRules::new()
                .start(UpdateRule::Advance)
                .end(UpdateRule::Advance)
                .status_max(UpdateRule::Advance),
        ),
        TransitionDecl::new(
            Severity::Warning,
            Severity::Watching,
            ValueAtMost(1),
            UpdateRules::new()
                .start(UpdateRule::Initialize)
                .end(UpdateRule::Initialize)
                .status_max(UpdateRule::Initialize),
        ),
        TransitionDecl::new(
            Severity::Warning,
            Severity::Alerting,
            ValueAtLeast(2),
            UpdateRules::new()
                .start(UpdateRule::Copy)
                .end(UpdateRule::Advance)
                .status_max(UpdateRule::Advance),
        ),
        TransitionDecl::new(
            Severity::Alerting,
            Severity::Alerting,
            ValueAtLeast(2),
            UpdateRules::new()
                .start(UpdateRule::Copy)
                .end(UpdateRule::Advance)
                .status_max(UpdateRule::Copy),
        ),
        TransitionDecl::new(
            Severity::Alerting,
            Severity::Warning,
            ValueEquals(1),
            UpdateRules::new()
                .start(UpdateRule::Copy)
                .end(UpdateRule::Copy)
                .status_max(UpdateRule::Copy),
        ),
        TransitionDecl::new(
            Severity::Alerting,
            Severity::Watching,
            ValueAtMost(-1),
            UpdateRules::new()
                .start(UpdateRule::Initialize)
                .end(UpdateRule::Initialize)
                .status_max(UpdateRule::Initialize),
        ),
    ]
}

/// Initialize the escalation machine.
pub fn escalation() -> Result<Fsm<Severity, i64, DateTime<Utc>>, FsmError> {
    Fsm::new(escalation_config(), escalation_transitions())
}

/// Build a minute-spaced observation series from raw levels.
pub fn level_series(levels: &[i64]) -> Vec<DataPoint<i64, DateTime<Utc>>> {
    levels
        .iter()
        .enumerate()
        .map(|(i, level)| {
            DataPoint::new(
                DateTime::<Utc>::UNIX_EPOCH + Duration::minutes(i as i64),
                *level,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute(i: i64) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH + Duration::minutes(i)
    }

    fn statuses(levels: &[i64]) -> Vec<Severity> {
        let fsm = escalation().unwrap();
        fsm.run(level_series(levels), fsm.config().state_initial.clone())
            .map(|state| state.unwrap().status)
            .collect()
    }

    #[test]
    fn quiet_series_stays_watching() {
        assert_eq!(
            statuses(&[0, 1, 0, -1]),
            vec![
                Severity::Watching,
                Severity::Watching,
                Severity::Watching,
                Severity::Watching,
            ],
        );
    }

    #[test]
    fn escalation_and_clear_sequence() {
        assert_eq!(
            statuses(&[0, 2, 2, 1, 3, -1]),
            vec![
                Severity::Watching,
                Severity::Warning,
                Severity::Alerting,
                Severity::Warning,
                Severity::Alerting,
                Severity::Watching,
            ],
        );
    }

    #[test]
    fn episode_spans_the_whole_excursion() {
        let fsm = escalation().unwrap();
        let states: Vec<_> = fsm
            .run(
                level_series(&[0, 2, 2, 1]),
                fsm.config().state_initial.clone(),
            )
            .collect::<Result<_, _>>()
            .unwrap();

        // Warning raised at minute 1 starts the episode.
        assert_eq!(states[1].episode_start, Some(minute(1)));
        assert_eq!(states[1].episode_end, Some(minute(1)));

        // Escalating keeps the start and moves the end.
        assert_eq!(states[2].episode_start, Some(minute(1)));
        assert_eq!(states[2].episode_end, Some(minute(2)));

        // De-escalating to warning freezes both boundaries.
        assert_eq!(states[3].episode_start, Some(minute(1)));
        assert_eq!(states[3].episode_end, Some(minute(2)));
    }

    #[test]
    fn status_max_records_the_peak_severity() {
        let fsm = escalation().unwrap();
        let states: Vec<_> = fsm
            .run(
                level_series(&[2, 2, 1, 1]),
                fsm.config().state_initial.clone(),
            )
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(states[0].episode_status_max, Some(Severity::Warning));
        assert_eq!(states[1].episode_status_max, Some(Severity::Alerting));
        // Back at warning, the peak stays alerting.
        assert_eq!(states[2].episode_status_max, Some(Severity::Alerting));
        // Clearing to watching resets the peak.
        assert_eq!(states[3].episode_status_max, None);
        assert_eq!(states[3].status, Severity::Watching);
    }

    #[test]
    fn level_zero_while_alerting_is_a_coverage_gap() {
        let fsm = escalation().unwrap();
        let alerting = EpisodeState {
            time: Some(minute(0)),
            status: Severity::Alerting,
            episode_start: Some(minute(0)),
            episode_end: Some(minute(0)),
            episode_status_max: Some(Severity::Alerting),
        };

        let err = fsm
            .advance(&DataPoint::new(minute(1), 0), &alerting)
            .unwrap_err();
        assert!(matches!(err, FsmError::NoTransitionTriggered { .. }));
    }
}
