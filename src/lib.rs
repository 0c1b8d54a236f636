//! Single-CPU scheduling policy simulator for the U-Engine ecosystem.
//!
//! Computes, for a set of processes described by arrival time, burst time
//! and optional priority/deadline, the exact timeline of CPU occupancy
//! under a chosen policy, plus waiting/turnaround metrics and deadline
//! misses.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Policy`, `WorkingProcess`,
//!   `ExecutionStep`, `Timeline`, `ProcessResult`, `SimulationOutcome`
//! - **`dispatching`**: Ready-set selection rules and the rule engine
//! - **`scheduler`**: The seven policies, `Simulator`, and KPIs
//! - **`validation`**: Input checks run before any simulation
//! - **`config`**: Quantum, RMS horizon/period factor, stepping mode
//! - **`presentation`**: Joins cosmetic fields back onto results
//! - **`workload`**: Random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Policy, Process};
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![
//!     Process::new("1").with_arrival(0).with_burst(5),
//!     Process::new("2").with_arrival(1).with_burst(3),
//!     Process::new("3").with_arrival(2).with_burst(1),
//! ];
//!
//! let outcome = simulate(&processes, Policy::Fcfs).unwrap();
//! let waiting: Vec<i64> = outcome.results.iter().map(|r| r.waiting_time).collect();
//! assert_eq!(waiting, vec![0, 4, 6]);
//! assert!((outcome.kpi().avg_waiting_time - 10.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # Logging
//!
//! Run boundaries are logged at `debug`, every executed slice at `trace`,
//! and an exhausted RMS horizon at `warn`, through `tracing`. No subscriber
//! is installed by the library.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod presentation;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
