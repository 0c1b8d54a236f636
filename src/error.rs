//! Error types.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors that abort a simulation before the decision loop starts.
///
/// Conditions reached inside the loop (such as an exhausted RMS horizon)
/// are not errors; they are reported as
/// [`SimulationWarning`](crate::models::SimulationWarning)s on the outcome.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Unknown scheduling policy: {0}")]
    UnknownPolicy(String),
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput`, empty otherwise.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            SimulationError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
