//! Simulation output model.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::timeline::is_well_formed;
use super::{ExecutionStep, Policy, WorkingProcess};

/// Per-process scheduling result, emitted once when the process finishes.
///
/// Invariants: `turnaround_time = completion_time - arrival_time`,
/// `waiting_time = turnaround_time - burst_time`, both non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub process_id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
    pub priority: Option<i64>,
    pub deadline: Option<i64>,
    pub completion_time: i64,
    pub turnaround_time: i64,
    pub waiting_time: i64,
    /// `Some` only for deadline-aware runs.
    pub missed_deadline: Option<bool>,
}

impl ProcessResult {
    /// Derives the result for a process that has just finished at
    /// `completion_time`.
    pub fn from_completed(
        process: &WorkingProcess,
        completion_time: i64,
        track_deadline: bool,
    ) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        Self {
            process_id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            deadline: process.deadline,
            completion_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            missed_deadline: if track_deadline {
                process.deadline.map(|d| completion_time > d)
            } else {
                None
            },
        }
    }

    /// Whether a tracked deadline was missed.
    pub fn is_late(&self) -> bool {
        self.missed_deadline == Some(true)
    }
}

/// Non-fatal conditions reported alongside a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationWarning {
    /// The bounded horizon was reached before every process finished.
    /// Results for the listed processes are absent.
    HorizonExceeded {
        horizon: i64,
        unfinished: Vec<String>,
    },
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Policy that produced this outcome.
    pub policy: Policy,
    /// Results in completion order.
    pub results: Vec<ProcessResult>,
    /// CPU occupancy in start-time order.
    pub steps: Vec<ExecutionStep>,
    /// Conditions that left the run incomplete.
    pub warnings: Vec<SimulationWarning>,
}

impl SimulationOutcome {
    /// Creates an empty outcome.
    pub fn empty(policy: Policy) -> Self {
        Self {
            policy,
            results: Vec::new(),
            steps: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Whether every process produced a result.
    pub fn is_complete(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Steps sorted by start, non-empty and non-overlapping.
    pub fn is_well_formed(&self) -> bool {
        is_well_formed(&self.steps)
    }

    /// Finds the result for a process.
    pub fn result_for(&self, process_id: &str) -> Option<&ProcessResult> {
        self.results.iter().find(|r| r.process_id == process_id)
    }

    /// Returns all steps for a process.
    pub fn steps_for(&self, process_id: &str) -> Vec<&ExecutionStep> {
        self.steps
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Process ids in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.results.iter().map(|r| r.process_id.as_str()).collect()
    }

    /// Ids left unfinished by a horizon cut-off.
    pub fn unfinished(&self) -> Vec<&str> {
        self.warnings
            .iter()
            .flat_map(|w| match w {
                SimulationWarning::HorizonExceeded { unfinished, .. } => unfinished.iter(),
            })
            .map(String::as_str)
            .collect()
    }
}
