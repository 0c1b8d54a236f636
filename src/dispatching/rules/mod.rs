//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Order-based**: FCFS
//! - **Time-based**: SJF, SRTF
//! - **Static priority**: PRIORITY, RMS
//! - **Deadline**: EDF
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.
//! Fields a rule depends on are guaranteed present by validation; a rule
//! applied outside its policy ranks such processes last.

use super::{DispatchingRule, RuleScore};
use crate::models::WorkingProcess;

// ======================== Order-based rules ========================

/// First Come First Served.
///
/// Prefers the earliest arrival.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.arrival_time
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Prefers the smallest total burst. Optimal for mean waiting time among
/// non-preemptive policies when all jobs are available.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.burst_time
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest Remaining Time First.
///
/// Prefers the least outstanding service.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl DispatchingRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.remaining_time
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

// ======================== Static priority rules ========================

/// Static priority, lower value first.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule;

impl DispatchingRule for PriorityRule {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Static Priority"
    }
}

/// Rate Monotonic.
///
/// Prefers the shortest period, derived as `priority × factor`.
///
/// # Reference
/// Liu & Layland (1973), optimal among fixed-priority policies.
#[derive(Debug, Clone, Copy)]
pub struct RateMonotonic;

impl DispatchingRule for RateMonotonic {
    fn name(&self) -> &'static str {
        "RMS"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.period.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Rate Monotonic"
    }
}

// ======================== Deadline rules ========================

/// Earliest Deadline First.
///
/// # Reference
/// Liu & Layland (1973), optimal for single-processor preemptive scheduling.
#[derive(Debug, Clone, Copy)]
pub struct EarliestDeadline;

impl DispatchingRule for EarliestDeadline {
    fn name(&self) -> &'static str {
        "EDF"
    }

    fn evaluate(&self, process: &WorkingProcess) -> RuleScore {
        process.deadline.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Earliest Deadline First"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Policy, Process};

    fn make(id: &str, arrival: i64, burst: i64, priority: i64, deadline: i64) -> WorkingProcess {
        let p = Process::new(id)
            .with_arrival(arrival)
            .with_burst(burst)
            .with_priority(priority)
            .with_deadline(deadline);
        WorkingProcess::from_process(0, &p, Policy::Rms, 10).unwrap()
    }

    #[test]
    fn test_arrival_order() {
        let early = make("a", 0, 5, 1, 10);
        let late = make("b", 3, 1, 1, 10);
        assert!(ArrivalOrder.evaluate(&early) < ArrivalOrder.evaluate(&late));
    }

    #[test]
    fn test_shortest_burst() {
        let short = make("a", 0, 1, 1, 10);
        let long = make("b", 0, 5, 1, 10);
        assert!(ShortestBurst.evaluate(&short) < ShortestBurst.evaluate(&long));
    }

    #[test]
    fn test_shortest_remaining_tracks_progress() {
        let mut started = make("a", 0, 5, 1, 10);
        let fresh = make("b", 0, 3, 1, 10);
        assert!(ShortestRemaining.evaluate(&fresh) < ShortestRemaining.evaluate(&started));
        started.serve(4, 4);
        assert!(ShortestRemaining.evaluate(&started) < ShortestRemaining.evaluate(&fresh));
        // SJF ignores progress.
        assert!(ShortestBurst.evaluate(&fresh) < ShortestBurst.evaluate(&started));
    }

    #[test]
    fn test_priority_lower_first() {
        let high = make("a", 0, 1, 1, 10);
        let low = make("b", 0, 1, 4, 10);
        assert!(PriorityRule.evaluate(&high) < PriorityRule.evaluate(&low));
    }

    #[test]
    fn test_rate_monotonic_uses_period() {
        let fast = make("a", 0, 1, 2, 10);
        assert_eq!(RateMonotonic.evaluate(&fast), 20);
    }

    #[test]
    fn test_earliest_deadline() {
        let urgent = make("a", 0, 1, 1, 4);
        let relaxed = make("b", 0, 1, 1, 40);
        assert!(EarliestDeadline.evaluate(&urgent) < EarliestDeadline.evaluate(&relaxed));
    }

    #[test]
    fn test_missing_field_ranks_last() {
        let p = Process::new("x").with_burst(1);
        let w = WorkingProcess::from_process(0, &p, Policy::Fcfs, 10).unwrap();
        assert_eq!(EarliestDeadline.evaluate(&w), RuleScore::MAX);
        assert_eq!(PriorityRule.evaluate(&w), RuleScore::MAX);
        assert_eq!(RateMonotonic.evaluate(&w), RuleScore::MAX);
    }
}
