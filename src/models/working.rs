//! Per-run mutable process copy.

use super::{Policy, Process};
use crate::validation::{ValidationError, ValidationErrorKind};

/// A validated, independently owned copy of a [`Process`] for one run.
///
/// `remaining_time` starts at `burst_time`, only ever decreases, and
/// reaches zero exactly once; `completion_time` is set at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingProcess {
    /// Position in the caller's input slice (final tie-breaker).
    pub index: usize,
    /// Process identifier.
    pub id: String,
    /// Arrival time.
    pub arrival_time: i64,
    /// Total service demand.
    pub burst_time: i64,
    /// Priority, if supplied.
    pub priority: Option<i64>,
    /// Deadline, if supplied.
    pub deadline: Option<i64>,
    /// Rate-monotonic period (`priority × factor`), if a priority is present.
    pub period: Option<i64>,
    /// Service still owed.
    pub remaining_time: i64,
    /// Set when `remaining_time` reaches zero.
    pub completion_time: Option<i64>,
}

impl WorkingProcess {
    /// Builds the working copy for `policy`, checking every field the
    /// policy depends on.
    ///
    /// Returns all problems found for this process, not only the first.
    pub fn from_process(
        index: usize,
        process: &Process,
        policy: Policy,
        period_factor: i64,
    ) -> Result<Self, Vec<ValidationError>> {
        let mut errors = Vec::new();
        let id = &process.id;

        if process.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process '{id}' has non-positive burst time {}",
                    process.burst_time
                ),
            ));
        }
        if process.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process '{id}' has negative arrival time {}",
                    process.arrival_time
                ),
            ));
        }

        if policy.requires_priority() && process.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Process '{id}' has no priority, required by {policy}"),
            ));
        }
        if policy.requires_deadline() && process.deadline.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingField,
                format!("Process '{id}' has no deadline, required by {policy}"),
            ));
        }

        let period = match process.priority {
            Some(priority) => match priority.checked_mul(period_factor) {
                Some(period) => Some(period),
                None => {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvalidProcess,
                        format!("Process '{id}' has priority {priority}; period overflows"),
                    ));
                    None
                }
            },
            None => None,
        };

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            index,
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            deadline: process.deadline,
            period,
            remaining_time: process.burst_time,
            completion_time: None,
        })
    }

    /// Whether the process has arrived and still needs service at `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time && !self.is_finished()
    }

    /// Whether all service has been delivered.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Delivers `ticks` of service ending at `now`.
    ///
    /// Returns `true` when this call finished the process.
    pub(crate) fn serve(&mut self, ticks: i64, now: i64) -> bool {
        debug_assert!(ticks > 0 && ticks <= self.remaining_time);
        self.remaining_time -= ticks;
        if self.remaining_time == 0 {
            self.completion_time = Some(now);
            true
        } else {
            false
        }
    }
}
