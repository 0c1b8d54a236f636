//! Policy engine and KPI evaluation.
//!
//! Every policy shares one decision-loop shape: admit arrivals, select,
//! run for a policy-determined slice, record, check completion. Three loop
//! variants cover the seven policies:
//!
//! | Loop | Policies | Slice |
//! |------|----------|-------|
//! | run-to-completion | FCFS, SJF-NP, Priority | whole burst |
//! | run-until-next-event | SRTF, EDF, RMS | until finish, next arrival or horizon |
//! | FIFO quantum | Round Robin | `min(remaining, quantum)` |
//!
//! Each run works on private copies of the input and keeps no state
//! between runs, so repeated runs on the same input are identical.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Buttazzo (2011), "Hard Real-Time Computing Systems", Ch. 4

mod kpi;
mod non_preemptive;
mod preemptive;
mod round_robin;
mod state;

pub use kpi::SimulationKpi;

use tracing::{debug, warn};

use crate::config::{SimulationConfig, SteppingMode};
use crate::dispatching::engine_for;
use crate::error::SimulationError;
use crate::models::{Policy, Process, SimulationOutcome, SimulationWarning};
use crate::validation::prepare;
use state::RunState;

/// Single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{ExecutionStep, Policy, Process};
/// use u_cpusched::scheduler::Simulator;
///
/// let processes = vec![
///     Process::new("1").with_arrival(0).with_burst(4),
///     Process::new("2").with_arrival(1).with_burst(2),
/// ];
///
/// let outcome = Simulator::new().simulate(&processes, Policy::RoundRobin).unwrap();
/// assert_eq!(
///     outcome.steps,
///     vec![
///         ExecutionStep::new("1", 0, 2),
///         ExecutionStep::new("2", 2, 4),
///         ExecutionStep::new("1", 4, 6),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: SimulationConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Runs `policy` over `processes`.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidConfig`] for out-of-range parameters.
    /// - [`SimulationError::InvalidInput`] with every validation problem;
    ///   nothing is simulated for an invalid set.
    ///
    /// An RMS run cut off by its horizon is not an error: the outcome
    /// carries the completed results and a
    /// [`SimulationWarning::HorizonExceeded`].
    pub fn simulate(
        &self,
        processes: &[Process],
        policy: Policy,
    ) -> Result<SimulationOutcome, SimulationError> {
        self.config.validate()?;
        let working = prepare(processes, policy, self.config.rms_period_factor)
            .map_err(SimulationError::InvalidInput)?;

        debug!(%policy, processes = working.len(), "starting simulation");

        let mut state = RunState::new(working, policy == Policy::Edf);
        let mut warnings = Vec::new();

        match policy {
            Policy::Fcfs | Policy::SjfNonPreemptive | Policy::PriorityNonPreemptive => {
                non_preemptive::run_to_completion(&mut state, &engine_for(policy));
            }
            Policy::RoundRobin => {
                round_robin::run_round_robin(&mut state, self.config.quantum);
            }
            Policy::Srtf | Policy::Edf | Policy::Rms => {
                let (stepping, horizon) = match policy {
                    Policy::Srtf => (SteppingMode::EventDriven, None),
                    Policy::Rms => (self.config.stepping, self.config.rms_horizon),
                    _ => (self.config.stepping, None),
                };
                let engine = engine_for(policy);
                if preemptive::run_preemptive(&mut state, &engine, stepping, horizon) {
                    let horizon = horizon.unwrap_or_default();
                    let unfinished = state.unfinished();
                    warn!(
                        %policy,
                        horizon,
                        unfinished = unfinished.len(),
                        "horizon exceeded; workload infeasible at derived periods"
                    );
                    warnings.push(SimulationWarning::HorizonExceeded {
                        horizon,
                        unfinished,
                    });
                }
            }
        }

        let (results, timeline) = state.into_parts();
        debug_assert!(timeline.is_well_formed());
        debug!(
            %policy,
            completed = results.len(),
            steps = timeline.len(),
            makespan = timeline.makespan(),
            "simulation finished"
        );

        Ok(SimulationOutcome {
            policy,
            results,
            steps: timeline.into_steps(),
            warnings,
        })
    }
}

/// Runs `policy` with the default configuration.
pub fn simulate(
    processes: &[Process],
    policy: Policy,
) -> Result<SimulationOutcome, SimulationError> {
    Simulator::new().simulate(processes, policy)
}
