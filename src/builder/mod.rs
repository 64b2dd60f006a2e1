//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring machines
//! with minimal boilerplate while maintaining type safety.
//!
//! # Example
//!
//! ```
//! use episodic::builder::{FsmBuilder, TransitionBuilder};
//! use episodic::config::Config;
//! use episodic::core::{EpisodeState, UpdateRule, ValueEquals};
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
//! let fsm = FsmBuilder::new()
//!     .config(config)
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(LinkStatus::Up)
//!             .to(LinkStatus::Down)
//!             .trigger(ValueEquals(0))
//!             .start(UpdateRule::Advance)
//!             .end(UpdateRule::Advance),
//!     )
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .from(LinkStatus::Down)
//!             .to(LinkStatus::Up)
//!             .trigger(ValueEquals(1)),
//!     )
//!     .unwrap()
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(fsm.transitions().len(), 2);
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::{FsmBuildError, FsmBuilder};
pub use transition::TransitionBuilder;
