//! Random workload generation.
//!
//! Produces process sets for demos and property checks. The defaults mirror
//! a classroom "randomize" button: five processes named `P1..P5` arriving in
//! `[0, 10)` with bursts in `[1, 10]` and priorities in `[1, 5]`.
//!
//! ```
//! use rand::rngs::SmallRng;
//! use rand::SeedableRng;
//! use u_cpusched::workload::{generate, WorkloadSpec};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = generate(&WorkloadSpec::default(), &mut rng);
//! assert_eq!(processes.len(), 5);
//! assert_eq!(processes[0].name, "P1");
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::Process;

/// Parameters for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Exclusive upper bound for arrival times (arrivals in `[0, max_arrival)`).
    pub max_arrival: i64,
    /// Inclusive upper bound for bursts (bursts in `[1, max_burst]`).
    pub max_burst: i64,
    /// Inclusive upper bound for priorities (priorities in `[1, max_priority]`).
    pub max_priority: i64,
    /// When set, deadline = arrival + burst + slack with slack drawn from
    /// this inclusive range.
    pub deadline_slack: Option<(i64, i64)>,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            count: 5,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
            deadline_slack: None,
        }
    }
}

impl WorkloadSpec {
    /// Sets the process count.
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the arrival bound.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst bound.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst;
        self
    }

    /// Generates deadlines with slack in `[min, max]`.
    pub fn with_deadline_slack(mut self, min: i64, max: i64) -> Self {
        self.deadline_slack = Some((min, max));
        self
    }
}

/// Generates a random process set.
///
/// IDs are `"1".."n"`, names `"P1".."Pn"`. Bounds below their minimum are
/// clamped, so every generated process passes validation.
pub fn generate<R: Rng>(spec: &WorkloadSpec, rng: &mut R) -> Vec<Process> {
    (1..=spec.count)
        .map(|n| {
            let arrival = rng.random_range(0..spec.max_arrival.max(1));
            let burst = rng.random_range(1..=spec.max_burst.max(1));
            let priority = rng.random_range(1..=spec.max_priority.max(1));
            let hue = rng.random_range(0..360);

            let mut process = Process::new(n.to_string())
                .with_name(format!("P{n}"))
                .with_arrival(arrival)
                .with_burst(burst)
                .with_priority(priority)
                .with_color(format!("hsl({hue}, 70%, 60%)"));

            if let Some((min, max)) = spec.deadline_slack {
                let (lo, hi) = (min.max(0), max.max(min.max(0)));
                process = process.with_deadline(arrival + burst + rng.random_range(lo..=hi));
            }
            process
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Policy;
    use crate::validation::validate_input;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_ranges() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..50 {
            for p in generate(&WorkloadSpec::default(), &mut rng) {
                assert!((0..10).contains(&p.arrival_time));
                assert!((1..=10).contains(&p.burst_time));
                assert!((1..=5).contains(&p.priority.unwrap()));
                assert!(p.deadline.is_none());
                assert!(p.color.unwrap().starts_with("hsl("));
            }
        }
    }

    #[test]
    fn test_deadlines_leave_room_for_burst() {
        let mut rng = SmallRng::seed_from_u64(2);
        let spec = WorkloadSpec::default().with_deadline_slack(2, 4);
        for p in generate(&spec, &mut rng) {
            let slack = p.deadline.unwrap() - p.arrival_time - p.burst_time;
            assert!((2..=4).contains(&slack));
        }
    }

    #[test]
    fn test_generated_sets_are_valid_everywhere() {
        let mut rng = SmallRng::seed_from_u64(3);
        let spec = WorkloadSpec::default().with_count(8).with_deadline_slack(0, 5);
        let processes = generate(&spec, &mut rng);
        for policy in Policy::ALL {
            assert!(validate_input(&processes, policy).is_ok());
        }
    }

    #[test]
    fn test_same_seed_same_workload() {
        let spec = WorkloadSpec::default();
        let a = generate(&spec, &mut SmallRng::seed_from_u64(9));
        let b = generate(&spec, &mut SmallRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_bounds_clamped() {
        let mut rng = SmallRng::seed_from_u64(4);
        let spec = WorkloadSpec::default().with_max_arrival(0).with_max_burst(0);
        for p in generate(&spec, &mut rng) {
            assert_eq!(p.arrival_time, 0);
            assert_eq!(p.burst_time, 1);
        }
    }
}
