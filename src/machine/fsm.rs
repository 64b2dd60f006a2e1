//! The FSM advance engine.

use crate::config::Config;
use crate::core::{DataPoint, EpisodeState, Status, Timestamp, Value};
use crate::machine::error::FsmError;
use crate::machine::run::Run;
use crate::machine::transition::{Transition, TransitionDecl};
use crate::validate::{self, ValidationError};
use std::sync::Arc;

/// An initialized machine: the resolved configuration plus the activated
/// transition set, in declaration order.
///
/// Immutable after construction, so independent runs over different series
/// may share one `Fsm` with no coordination.
///
/// # Example
///
/// ```rust
/// use episodic::config::Config;
/// use episodic::core::{EpisodeState, UpdateRule, UpdateRules};
/// use episodic::machine::{Fsm, TransitionDecl};
/// use episodic::status_enum;
///
/// status_enum! {
///     enum TwoStatus {
///         A,
///         B,
///     }
/// }
///
/// let config = Config::new(
///     vec![0u8, 1],
///     vec![TwoStatus::A, TwoStatus::B],
///     EpisodeState::<TwoStatus, i64>::initial(TwoStatus::A),
/// )
/// .unwrap();
///
/// let fsm = Fsm::new(
///     config,
///     vec![
///         TransitionDecl::when(
///             TwoStatus::A,
///             TwoStatus::A,
///             |d, _s| d.value == 0,
///             UpdateRules::new(),
///         ),
///         TransitionDecl::when(
///             TwoStatus::A,
///             TwoStatus::B,
///             |d, _s| d.value == 1,
///             UpdateRules::new()
///                 .start(UpdateRule::Advance)
///                 .end(UpdateRule::Advance),
///         ),
///         TransitionDecl::when(
///             TwoStatus::B,
///             TwoStatus::B,
///             |d, _s| d.value == 1,
///             UpdateRules::new()
///                 .start(UpdateRule::Copy)
///                 .end(UpdateRule::Advance),
///         ),
///         TransitionDecl::when(
///             TwoStatus::B,
///             TwoStatus::A,
///             |d, _s| d.value == 0,
///             UpdateRules::new()
///                 .start(UpdateRule::Initialize)
///                 .end(UpdateRule::Initialize),
///         ),
///     ],
/// )
/// .unwrap();
///
/// let state = fsm.config().state_initial.clone();
/// let next = fsm.advance(&episodic::core::DataPoint::new(0, 1), &state).unwrap();
/// assert_eq!(next.status, TwoStatus::B);
/// assert_eq!(next.episode_start, Some(0));
/// ```
pub struct Fsm<S: Status, V: Value, T: Timestamp> {
    config: Arc<Config<S, V, T>>,
    transitions: Vec<Transition<S, V, T>>,
}

impl<S: Status, V: Value, T: Timestamp> Fsm<S, V, T> {
    /// Initialize a machine from a resolved configuration and an ordered
    /// sequence of transition declarations.
    ///
    /// Every declaration's `from`/`to` status must be a member of the
    /// configured status set; otherwise construction fails with
    /// `FsmError::InvalidTransitionStatus` naming all offending statuses,
    /// and no machine is built. Activation of the full set is eager.
    pub fn new(
        config: Config<S, V, T>,
        transitions: Vec<TransitionDecl<S, V, T>>,
    ) -> Result<Self, FsmError> {
        let mut invalid: Vec<String> = Vec::new();
        for decl in &transitions {
            for status in [&decl.from, &decl.to] {
                if !config.status_values.contains(status) {
                    let name = status.name().to_string();
                    if !invalid.contains(&name) {
                        invalid.push(name);
                    }
                }
            }
        }
        if !invalid.is_empty() {
            return Err(FsmError::InvalidTransitionStatus { statuses: invalid });
        }

        let config = Arc::new(config);
        let transitions = transitions
            .into_iter()
            .map(|decl| Transition::activate(decl, Arc::clone(&config)))
            .collect();

        Ok(Self {
            config,
            transitions,
        })
    }

    /// The resolved configuration this machine was initialized with.
    pub fn config(&self) -> &Config<S, V, T> {
        &self.config
    }

    /// The activated transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition<S, V, T>] {
        &self.transitions
    }

    /// Advance to the next state given an observation and the current state.
    ///
    /// Both records are validated first; all field errors found are
    /// aggregated into one `ValidationError`. Transitions whose `from`
    /// matches the current status are then evaluated in declaration order
    /// and the first one that triggers produces the successor state
    /// (first-match-wins, short-circuit). If none triggers, the transition
    /// set has a coverage gap and `NoTransitionTriggered` is returned.
    pub fn advance(
        &self,
        data: &DataPoint<V, T>,
        state: &EpisodeState<S, T>,
    ) -> Result<EpisodeState<S, T>, FsmError> {
        let mut errors = validate::data_errors(&self.config, data);
        errors.extend(validate::state_errors(&self.config, state));
        if !errors.is_empty() {
            return Err(ValidationError { errors }.into());
        }

        for transition in self.transitions.iter().filter(|t| t.from() == &state.status) {
            if transition.triggered(data, state) {
                return Ok(transition.update(data, state));
            }
        }

        Err(FsmError::NoTransitionTriggered {
            status: state.status.name().to_string(),
            data: format!("{:?}", data),
        })
    }

    /// Sequentially process a series of observations from an initial state.
    ///
    /// Returns a lazy iterator yielding one `Result` per input; see [`Run`].
    pub fn run<I>(&self, series: I, state_init: EpisodeState<S, T>) -> Run<'_, S, V, T, I::IntoIter>
    where
        I: IntoIterator<Item = DataPoint<V, T>>,
    {
        Run::new(self, series.into_iter(), state_init)
    }
}
