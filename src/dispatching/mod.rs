//! Selection rules and rule engine for the ready set.
//!
//! Each policy picks the next process from its ready set by evaluating a
//! chain of rules: a primary comparator followed by tie-breakers. The
//! engine always falls back to input order, so selection is deterministic.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, RuleEngine};
//!
//! // Shortest job first, ties broken by earliest arrival.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalOrder);
//! assert_eq!(engine.rule_names(), vec!["SJF", "FCFS"]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Liu & Layland (1973), "Scheduling Algorithms for Multiprogramming in a
//!   Hard-Real-Time Environment"

mod engine;
pub mod rules;

pub use engine::RuleEngine;

use crate::models::{Policy, WorkingProcess};
use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower scores = selected first.
pub type RuleScore = i64;

/// A rule that scores a ready process.
///
/// # Score Convention
/// **Lower score = higher preference.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "EDF").
    fn name(&self) -> &'static str;

    /// Scores a process in its current state.
    fn evaluate(&self, process: &WorkingProcess) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Builds the selection chain for a ready-set policy.
///
/// Round Robin has no comparator; its FIFO queue order is the selection,
/// so it gets plain arrival order here.
pub fn engine_for(policy: Policy) -> RuleEngine {
    let engine = RuleEngine::new();
    match policy {
        Policy::Fcfs | Policy::RoundRobin => engine.with_rule(rules::ArrivalOrder),
        Policy::SjfNonPreemptive => engine.with_rule(rules::ShortestBurst),
        Policy::Srtf => engine.with_rule(rules::ShortestRemaining),
        Policy::PriorityNonPreemptive => engine.with_rule(rules::PriorityRule),
        Policy::Edf => engine.with_rule(rules::EarliestDeadline),
        Policy::Rms => engine.with_rule(rules::RateMonotonic),
    }
    .with_tie_breaker(rules::ArrivalOrder)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_for_policies() {
        assert_eq!(engine_for(Policy::Fcfs).rule_names(), vec!["FCFS", "FCFS"]);
        assert_eq!(
            engine_for(Policy::SjfNonPreemptive).rule_names(),
            vec!["SJF", "FCFS"]
        );
        assert_eq!(engine_for(Policy::Srtf).rule_names(), vec!["SRTF", "FCFS"]);
        assert_eq!(
            engine_for(Policy::PriorityNonPreemptive).rule_names(),
            vec!["PRIORITY", "FCFS"]
        );
        assert_eq!(engine_for(Policy::Edf).rule_names(), vec!["EDF", "FCFS"]);
        assert_eq!(engine_for(Policy::Rms).rule_names(), vec!["RMS", "FCFS"]);
    }
}
