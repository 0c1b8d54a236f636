//! Execution timeline model.
//!
//! The timeline is the ordered record of CPU occupancy produced by a
//! simulation run: which process held the CPU over which half-open
//! interval `[start_time, end_time)`.

use serde::{Deserialize, Serialize};

/// One contiguous interval of CPU occupancy by a single process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    /// Process that held the CPU.
    pub process_id: String,
    /// Inclusive start.
    pub start_time: i64,
    /// Exclusive end.
    pub end_time: i64,
}

impl ExecutionStep {
    /// Creates a step.
    pub fn new(process_id: impl Into<String>, start_time: i64, end_time: i64) -> Self {
        Self {
            process_id: process_id.into(),
            start_time,
            end_time,
        }
    }

    /// Interval length.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }
}

/// How a newly executed slice is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// Always push a new step.
    Append,
    /// Extend the last step when it belongs to the same process and ends
    /// where the new slice starts.
    Coalesce,
}

/// Ordered, non-overlapping sequence of [`ExecutionStep`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    steps: Vec<ExecutionStep>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `[start_time, end_time)` for `process_id`.
    pub fn record(&mut self, process_id: &str, start_time: i64, end_time: i64, mode: StepMode) {
        debug_assert!(end_time > start_time);
        debug_assert!(self.steps.last().is_none_or(|s| s.end_time <= start_time));

        if mode == StepMode::Coalesce {
            if let Some(last) = self.steps.last_mut() {
                if last.process_id == process_id && last.end_time == start_time {
                    last.end_time = end_time;
                    return;
                }
            }
        }
        self.steps
            .push(ExecutionStep::new(process_id, start_time, end_time));
    }

    /// Steps in start-time order.
    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    /// Consumes the timeline.
    pub fn into_steps(self) -> Vec<ExecutionStep> {
        self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has run.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// End of the last step (0 when empty).
    pub fn makespan(&self) -> i64 {
        self.steps.last().map(|s| s.end_time).unwrap_or(0)
    }

    /// Total CPU time across all steps.
    pub fn busy_time(&self) -> i64 {
        self.steps.iter().map(ExecutionStep::duration).sum()
    }

    /// Total CPU time granted to one process.
    pub fn busy_time_for(&self, process_id: &str) -> i64 {
        self.steps
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(ExecutionStep::duration)
            .sum()
    }

    /// Number of hand-overs between different processes.
    pub fn context_switches(&self) -> usize {
        count_switches(&self.steps)
    }

    /// Sorted by start, non-empty and pairwise non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.steps)
    }
}

pub(crate) fn count_switches(steps: &[ExecutionStep]) -> usize {
    steps
        .windows(2)
        .filter(|w| w[0].process_id != w[1].process_id)
        .count()
}

pub(crate) fn is_well_formed(steps: &[ExecutionStep]) -> bool {
    steps.iter().all(|s| s.end_time > s.start_time)
        && steps.windows(2).all(|w| w[0].end_time <= w[1].start_time)
}
