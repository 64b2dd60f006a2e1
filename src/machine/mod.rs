//! The evaluating machine.
//!
//! This module wires the pure core into an engine:
//!
//! - **Transitions**: declarations bound to a configuration at activation
//! - **Fsm**: the advance engine, first-match-wins in declaration order
//! - **Run**: the lazy sequential driver threading state through a series

mod error;
mod fsm;
mod run;
mod transition;

pub use error::FsmError;
pub use fsm::Fsm;
pub use run::Run;
pub use transition::{Transition, TransitionDecl};
