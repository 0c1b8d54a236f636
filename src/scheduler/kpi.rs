//! Simulation performance metrics (KPIs).
//!
//! Computes standard CPU scheduling criteria from a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | Mean of (turnaround - burst) |
//! | Avg Turnaround | Mean of (completion - arrival) |
//! | Makespan | End of the last step |
//! | Utilization | CPU busy time / makespan |
//! | Throughput | Completed processes / makespan |
//! | Context Switches | Adjacent steps of different processes |
//! | Missed Deadlines | Results flagged late (EDF) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

use crate::models::{count_switches, SimulationOutcome};

/// Aggregate metrics of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Number of processes that produced a result.
    pub completed: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Longest single waiting time.
    pub max_waiting_time: i64,
    /// End of the last executed step.
    pub makespan: i64,
    /// Total CPU time across all steps.
    pub busy_time: i64,
    /// busy_time / makespan (0.0..1.0).
    pub utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Hand-overs between different processes.
    pub context_switches: usize,
    /// Results with a missed deadline.
    pub missed_deadlines: usize,
}

impl SimulationKpi {
    /// Computes KPIs from an outcome.
    pub fn calculate(outcome: &SimulationOutcome) -> Self {
        let completed = outcome.results.len();
        let makespan = outcome.steps.iter().map(|s| s.end_time).max().unwrap_or(0);
        let busy_time: i64 = outcome.steps.iter().map(|s| s.duration()).sum();

        let (total_waiting, total_turnaround) = outcome
            .results
            .iter()
            .fold((0.0, 0.0), |(w, t), r| {
                (w + r.waiting_time as f64, t + r.turnaround_time as f64)
            });

        let mean = |total: f64| {
            if completed == 0 {
                0.0
            } else {
                total / completed as f64
            }
        };
        let per_tick = |value: f64| {
            if makespan <= 0 {
                0.0
            } else {
                value / makespan as f64
            }
        };

        Self {
            completed,
            avg_waiting_time: mean(total_waiting),
            avg_turnaround_time: mean(total_turnaround),
            max_waiting_time: outcome
                .results
                .iter()
                .map(|r| r.waiting_time)
                .max()
                .unwrap_or(0),
            makespan,
            busy_time,
            utilization: per_tick(busy_time as f64),
            throughput: per_tick(completed as f64),
            context_switches: count_switches(&outcome.steps),
            missed_deadlines: outcome.results.iter().filter(|r| r.is_late()).count(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.utilization >= min_utilization
    }
}

impl SimulationOutcome {
    /// Computes the run's KPIs.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }
}
