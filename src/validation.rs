//! Input validation for simulation runs.
//!
//! Checks every process before the decision loop starts. Detects:
//! - Non-positive burst times and negative arrival times
//! - Fields the selected policy depends on but the process lacks
//! - Duplicate process IDs
//! - Sets whose latest arrival plus total burst leaves the `i64` range
//!
//! Absent fields are never defaulted to zero: a missing deadline under EDF
//! would otherwise silently sort first.

use std::collections::HashSet;

use thiserror::Error;

use crate::models::{Policy, Process, WorkingProcess};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A numeric field is out of range (burst ≤ 0, arrival < 0, ...).
    InvalidProcess,
    /// A field required by the policy is absent.
    MissingField,
    /// Two processes share the same ID.
    DuplicateId,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process set for `policy`.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], policy: Policy) -> ValidationResult {
    prepare(processes, policy, crate::config::DEFAULT_RMS_PERIOD_FACTOR).map(|_| ())
}

/// Validates the process set and builds one working copy per process,
/// in input order.
pub fn prepare(
    processes: &[Process],
    policy: Policy,
    period_factor: i64,
) -> Result<Vec<WorkingProcess>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();
    let mut working = Vec::with_capacity(processes.len());

    for (index, process) in processes.iter().enumerate() {
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        match WorkingProcess::from_process(index, process, policy, period_factor) {
            Ok(w) => working.push(w),
            Err(mut errs) => errors.append(&mut errs),
        }
    }

    let latest_arrival = working.iter().map(|w| w.arrival_time).max().unwrap_or(0);
    let span = working
        .iter()
        .try_fold(latest_arrival, |end, w| end.checked_add(w.burst_time));
    if span.is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            format!("Process set cannot finish before time {}", i64::MAX),
        ));
    }

    if errors.is_empty() {
        Ok(working)
    } else {
        Err(errors)
    }
}
