//! Core Status trait for episode statuses.
//!
//! Every status tracked by a state machine must implement this trait, which
//! provides pure methods for inspecting the status without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for episode statuses.
///
/// A status is one value out of a closed, enumerated set (e.g. watching,
/// warning, alerting). The engine imposes no ordering between statuses; any
/// severity ordering lives in the update rules the transition author
/// declares for `episode_status_max`.
///
/// # Required Traits
///
/// - `Clone`: statuses flow into derived states by value
/// - `PartialEq`: transition selection compares statuses
/// - `Debug`: statuses must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable
///
/// # Example
///
/// ```rust
/// use episodic::core::Status;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum PipelineStatus {
///     Watching,
///     Warning,
///     Alerting,
/// }
///
/// impl Status for PipelineStatus {
///     fn name(&self) -> &str {
///         match self {
///             Self::Watching => "Watching",
///             Self::Warning => "Warning",
///             Self::Alerting => "Alerting",
///         }
///     }
/// }
/// ```
pub trait Status:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the status name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming.
    fn name(&self) -> &str;
}
