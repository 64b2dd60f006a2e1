//! Record validation against the configured value sets.
//!
//! The validator checks one record at a time and returns every field error it
//! finds (empty iff valid) instead of stopping at the first. The engine wraps
//! `advance` with these checks so malformed observations or states are
//! rejected before any trigger runs.

use crate::config::Config;
use crate::core::{DataPoint, EpisodeState, Status, Timestamp, Value};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// One schema violation found in a record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FieldError {
    /// The record field in violation.
    pub field: &'static str,
    /// Human-readable description of the violation.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Aggregate of every field error found while validating the records passed
/// to an `advance` call.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    /// All violations found, across both records.
    pub errors: Vec<FieldError>,
}

/// Validate an observation against the configuration.
///
/// Returns every violation found; an empty vector means the record is valid.
pub fn data_errors<S, V, T>(config: &Config<S, V, T>, data: &DataPoint<V, T>) -> Vec<FieldError>
where
    S: Status,
    V: Value,
    T: Timestamp,
{
    let mut errors = Vec::new();
    if !config.data_values.contains(&data.value) {
        errors.push(FieldError {
            field: "value",
            message: format!("{:?} is not among the allowed data values", data.value),
        });
    }
    errors
}

/// Validate an episode state against the configuration.
///
/// Returns every violation found; an empty vector means the record is valid.
pub fn state_errors<S, V, T>(
    config: &Config<S, V, T>,
    state: &EpisodeState<S, T>,
) -> Vec<FieldError>
where
    S: Status,
    V: Value,
    T: Timestamp,
{
    let mut errors = Vec::new();
    if !config.status_values.contains(&state.status) {
        errors.push(FieldError {
            field: "status",
            message: format!(
                "'{}' is not among the allowed status values",
                state.status.name()
            ),
        });
    }
    if let Some(max) = &state.episode_status_max {
        if !config.status_values.contains(max) {
            errors.push(FieldError {
                field: "episode_status_max",
                message: format!("'{}' is not among the allowed status values", max.name()),
            });
        }
    }
    errors
}
