//! Rule engine for ready-set selection.
//!
//! Composes a primary rule with tie-breakers evaluated in sequence. After
//! all rules tie, the process that came first in the caller's input wins.

use std::cmp::Ordering;
use std::sync::Arc;

use super::DispatchingRule;
use crate::models::WorkingProcess;

/// A composable rule chain.
///
/// # Example
/// ```
/// use u_cpusched::dispatching::{rules, RuleEngine};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::EarliestDeadline)
///     .with_tie_breaker(rules::ArrivalOrder);
/// assert_eq!(engine.rule_names(), vec!["EDF", "FCFS"]);
/// ```
#[derive(Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
}

impl RuleEngine {
    /// Creates an empty engine (pure input order).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a rule consulted only when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Picks the preferred process among `ready` (indices into `processes`).
    ///
    /// Returns the position within `ready`, or `None` when it is empty.
    pub fn select(&self, processes: &[WorkingProcess], ready: &[usize]) -> Option<usize> {
        ready
            .iter()
            .enumerate()
            .min_by(|a, b| self.compare(&processes[*a.1], &processes[*b.1]))
            .map(|(pos, _)| pos)
    }

    /// Orders `ready` from most to least preferred.
    pub fn sort_indices(&self, processes: &[WorkingProcess], ready: &[usize]) -> Vec<usize> {
        let mut sorted = ready.to_vec();
        sorted.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        sorted
    }

    /// Total order: each rule in turn, then input position.
    pub fn compare(&self, a: &WorkingProcess, b: &WorkingProcess) -> Ordering {
        self.rules
            .iter()
            .map(|rule| rule.evaluate(a).cmp(&rule.evaluate(b)))
            .find(|ord| ord.is_ne())
            .unwrap_or_else(|| a.index.cmp(&b.index))
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::{Policy, Process};

    fn make(index: usize, arrival: i64, burst: i64) -> WorkingProcess {
        let p = Process::new(format!("P{index}"))
            .with_arrival(arrival)
            .with_burst(burst);
        WorkingProcess::from_process(index, &p, Policy::Fcfs, 10).unwrap()
    }

    #[test]
    fn test_sjf_ordering() {
        let procs = vec![make(0, 0, 5), make(1, 0, 3), make(2, 0, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.sort_indices(&procs, &[0, 1, 2]), vec![2, 1, 0]);
    }

    #[test]
    fn test_tie_breaker_applies_on_tie() {
        let procs = vec![make(0, 4, 2), make(1, 1, 2)];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::ArrivalOrder);
        assert_eq!(engine.select(&procs, &[0, 1]), Some(1));
    }

    #[test]
    fn test_input_order_is_final_tie_breaker() {
        let procs = vec![make(0, 0, 2), make(1, 0, 2)];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::ArrivalOrder);
        // Ready list order must not matter.
        assert_eq!(engine.select(&procs, &[1, 0]), Some(1));
        assert_eq!(engine.sort_indices(&procs, &[1, 0]), vec![0, 1]);
    }

    #[test]
    fn test_select_returns_position_within_ready() {
        let procs = vec![make(0, 0, 9), make(1, 0, 9), make(2, 0, 1)];
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select(&procs, &[0, 2]), Some(1));
    }

    #[test]
    fn test_empty_ready() {
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert_eq!(engine.select(&[], &[]), None);
        assert!(engine.sort_indices(&[], &[]).is_empty());
    }
}
