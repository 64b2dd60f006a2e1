//! Episodic: a declarative episode-tracking state machine library
//!
//! Episodic evaluates a finite-state machine over a time-ordered series of
//! observations, tracking the "episode" status of the series (e.g. watching
//! → warning → alerting) along with when the current episode began and
//! ended and the maximum severity status reached during it.
//!
//! The core is pure: transitions are immutable declarations, triggers are
//! side-effect-free predicates, and advancing never mutates a state — it
//! derives a new one from the previous state plus an observation.
//!
//! # Core Concepts
//!
//! - **Status**: type-safe status sets via the `Status` trait
//! - **Triggers**: pure predicates deciding whether a transition fires
//! - **Update rules**: `advance`/`copy`/`initialize` strategies for the
//!   episode fields, declared per transition
//! - **Run**: the lazy sequential driver threading state through a series
//!
//! # Example
//!
//! ```rust
//! use episodic::config::Config;
//! use episodic::core::{DataPoint, EpisodeState, UpdateRule, UpdateRules};
//! use episodic::machine::{Fsm, TransitionDecl};
//! use episodic::status_enum;
//!
//! status_enum! {
//!     enum LinkStatus {
//!         Up,
//!         Down,
//!     }
//! }
//!
//! let config = Config::new(
//!     vec![0u8, 1],
//!     vec![LinkStatus::Up, LinkStatus::Down],
//!     EpisodeState::<LinkStatus, i64>::initial(LinkStatus::Up),
//! )
//! .unwrap();
//!
//! let fsm = Fsm::new(
//!     config,
//!     vec![
//!         TransitionDecl::when(LinkStatus::Up, LinkStatus::Up, |d, _s| d.value == 1, UpdateRules::new()),
//!         TransitionDecl::when(
//!             LinkStatus::Up,
//!             LinkStatus::Down,
//!             |d, _s| d.value == 0,
//!             UpdateRules::new()
//!                 .start(UpdateRule::Advance)
//!                 .end(UpdateRule::Advance),
//!         ),
//!         TransitionDecl::when(
//!             LinkStatus::Down,
//!             LinkStatus::Down,
//!             |d, _s| d.value == 0,
//!             UpdateRules::new()
//!                 .start(UpdateRule::Copy)
//!                 .end(UpdateRule::Advance),
//!         ),
//!         TransitionDecl::when(
//!             LinkStatus::Down,
//!             LinkStatus::Up,
//!             |d, _s| d.value == 1,
//!             UpdateRules::new()
//!                 .start(UpdateRule::Initialize)
//!                 .end(UpdateRule::Initialize),
//!         ),
//!     ],
//! )
//! .unwrap();
//!
//! let series = vec![
//!     DataPoint::new(0, 1),
//!     DataPoint::new(1, 0),
//!     DataPoint::new(2, 0),
//! ];
//! let states: Vec<_> = fsm
//!     .run(series, fsm.config().state_initial.clone())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(states[2].status, LinkStatus::Down);
//! assert_eq!(states[2].episode_start, Some(1));
//! assert_eq!(states[2].episode_end, Some(2));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;
pub mod monitor;
pub mod validate;

// Re-export commonly used types
pub use builder::{BuildError, FsmBuilder, TransitionBuilder};
pub use config::{Config, ConfigError};
pub use core::{
    DataPoint, EpisodeState, Status, Trigger, UnrecognizedRule, UpdateRule, UpdateRules,
};
pub use machine::{Fsm, FsmError, Run, Transition, TransitionDecl};
pub use validate::{FieldError, ValidationError};
