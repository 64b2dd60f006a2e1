//! The sequential run driver.

use crate::core::{DataPoint, EpisodeState, Status, Timestamp, Value};
use crate::machine::error::FsmError;
use crate::machine::fsm::Fsm;

/// Lazy, forward-only iterator over the states produced by folding a series
/// of observations through a machine.
///
/// Yields one `Result` per input observation; each `Ok` state becomes the
/// current state for the next step. The driver owns its initial state, so
/// concurrent runs never alias a shared seed record. Errors from `advance`
/// are yielded, not caught, and end the sequence: after the first `Err`,
/// `next()` returns `None`. A run is single-pass; re-processing a series
/// means calling [`Fsm::run`] again with a fresh initial state.
///
/// # Example
///
/// ```rust
/// use episodic::monitor;
///
/// let fsm = monitor::escalation().unwrap();
/// let series = monitor::level_series(&[0, 2, 2, -1]);
///
/// let statuses: Vec<_> = fsm
///     .run(series, fsm.config().state_initial.clone())
///     .map(|state| state.unwrap().status)
///     .collect();
///
/// assert_eq!(
///     statuses,
///     vec![
///         monitor::Severity::Watching,
///         monitor::Severity::Warning,
///         monitor::Severity::Alerting,
///         monitor::Severity::Watching,
///     ],
/// );
/// ```
pub struct Run<'a, S: Status, V: Value, T: Timestamp, I> {
    fsm: &'a Fsm<S, V, T>,
    series: I,
    state: EpisodeState<S, T>,
    halted: bool,
}

impl<'a, S: Status, V: Value, T: Timestamp, I> Run<'a, S, V, T, I>
where
    I: Iterator<Item = DataPoint<V, T>>,
{
    pub(crate) fn new(fsm: &'a Fsm<S, V, T>, series: I, state_init: EpisodeState<S, T>) -> Self {
        Self {
            fsm,
            series,
            state: state_init,
            halted: false,
        }
    }
}

impl<'a, S: Status, V: Value, T: Timestamp, I> Iterator for Run<'a, S, V, T, I>
where
    I: Iterator<Item = DataPoint<V, T>>,
{
    type Item = Result<EpisodeState<S, T>, FsmError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }
        let data = self.series.next()?;
        match self.fsm.advance(&data, &self.state) {
            Ok(next) => {
                self.state = next.clone();
                Some(Ok(next))
            }
            Err(err) => {
                self.halted = true;
                Some(Err(err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::{UpdateRule, UpdateRules};
    use crate::machine::transition::TransitionDecl;
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

    fn fsm() -> Fsm<TestStatus, u8, i64> {
        Fsm::new(
            Config::new(
                vec![0, 1],
                vec![TestStatus::A, TestStatus::B],
                EpisodeState::initial(TestStatus::A),
            )
            .unwrap(),
            vec![
                TransitionDecl::when(
                    TestStatus::A,
                    TestStatus::A,
                    |d, _s| d.value == 0,
                    UpdateRules::new(),
                ),
                TransitionDecl::when(
                    TestStatus::A,
                    TestStatus::B,
                    |d, _s| d.value == 1,
                    UpdateRules::new()
                        .start(UpdateRule::Advance)
                        .end(UpdateRule::Advance),
                ),
                // B has no outgoing transitions: any observation from B is a
                // coverage gap, which the driver must surface and stop on.
            ],
        )
        .unwrap()
    }

    fn series(values: &[u8]) -> Vec<DataPoint<u8, i64>> {
        values
            .iter()
            .enumerate()
            .map(|(t, v)| DataPoint::new(t as i64, *v))
            .collect()
    }

    #[test]
    fn run_yields_one_state_per_input() {
        let fsm = fsm();
        let states: Vec<_> = fsm
            .run(series(&[0, 0, 0]), fsm.config().state_initial.clone())
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(states.len(), 3);
    }

    #[test]
    fn run_threads_each_state_into_the_next_step() {
        let fsm = fsm();
        let states: Vec<_> = fsm
            .run(series(&[0, 1]), fsm.config().state_initial.clone())
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(states[0].status, TestStatus::A);
        assert_eq!(states[1].status, TestStatus::B);
        assert_eq!(states[1].episode_start, Some(1));
    }

    #[test]
    fn run_stops_after_the_first_error() {
        let fsm = fsm();
        let mut run = fsm.run(series(&[1, 0, 0]), fsm.config().state_initial.clone());

        assert!(run.next().unwrap().is_ok());
        // 0 from B triggers nothing.
        assert!(matches!(
            run.next(),
            Some(Err(FsmError::NoTransitionTriggered { .. }))
        ));
        assert!(run.next().is_none());
    }

    #[test]
    fn run_is_lazy() {
        let fsm = fsm();
        let mut consumed = 0usize;
        let counted = series(&[0, 0, 0]).into_iter().map(|d| {
            consumed += 1;
            d
        });

        let mut run = fsm.run(counted, fsm.config().state_initial.clone());
        assert!(run.next().is_some());
        drop(run);
        assert_eq!(consumed, 1);
    }

    #[test]
    fn run_does_not_disturb_the_caller_seed() {
        let fsm = fsm();
        let seed = fsm.config().state_initial.clone();
        let _: Vec<_> = fsm.run(series(&[1, 1]), seed.clone()).collect();
        assert_eq!(seed, fsm.config().state_initial.clone());
    }
}
