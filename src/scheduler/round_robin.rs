//! Round Robin loop.
//!
//! # Algorithm
//! 1. Seed the FIFO queue with the earliest arrival(s); the clock starts
//!    at that arrival.
//! 2. Dequeue the head and run it for `min(remaining, quantum)`.
//! 3. Enqueue every process that arrived up to the end of the slice, in
//!    arrival order.
//! 4. Re-enqueue the preempted process **after** those arrivals.
//! 5. When the queue drains but arrivals remain, jump to the next arrival.
//!
//! Slices are appended without coalescing: each quantum is one step.

use std::collections::VecDeque;

use super::state::RunState;
use crate::models::StepMode;

pub(crate) fn run_round_robin(state: &mut RunState, quantum: i64) {
    let mut queue: VecDeque<usize> = VecDeque::new();

    loop {
        let Some(idx) = queue.pop_front() else {
            if !state.skip_idle() {
                break;
            }
            queue.extend(state.take_arrivals());
            continue;
        };

        let slice = state.process(idx).remaining_time.min(quantum);
        let finished = state.run(idx, slice, StepMode::Append);

        queue.extend(state.take_arrivals());
        if !finished {
            queue.push_back(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExecutionStep, Policy, Process};
    use crate::validation::prepare;

    fn simulate(processes: &[Process], quantum: i64) -> Vec<ExecutionStep> {
        let mut state = RunState::new(prepare(processes, Policy::RoundRobin, 10).unwrap(), false);
        run_round_robin(&mut state, quantum);
        state.into_parts().1.into_steps()
    }

    #[test]
    fn test_arrival_during_slice_served_before_requeue() {
        let procs = vec![
            Process::new("1").with_arrival(0).with_burst(4),
            Process::new("2").with_arrival(1).with_burst(2),
        ];
        assert_eq!(
            simulate(&procs, 2),
            vec![
                ExecutionStep::new("1", 0, 2),
                ExecutionStep::new("2", 2, 4),
                ExecutionStep::new("1", 4, 6),
            ]
        );
    }

    #[test]
    fn test_arrival_at_slice_end_precedes_requeue() {
        let procs = vec![
            Process::new("1").with_arrival(0).with_burst(3),
            Process::new("2").with_arrival(2).with_burst(1),
        ];
        let steps = simulate(&procs, 2);
        assert_eq!(steps[1], ExecutionStep::new("2", 2, 3));
        assert_eq!(steps[2], ExecutionStep::new("1", 3, 4));
    }

    #[test]
    fn test_single_process_not_coalesced() {
        let procs = vec![Process::new("1").with_arrival(3).with_burst(5)];
        assert_eq!(
            simulate(&procs, 2),
            vec![
                ExecutionStep::new("1", 3, 5),
                ExecutionStep::new("1", 5, 7),
                ExecutionStep::new("1", 7, 8),
            ]
        );
    }

    #[test]
    fn test_idle_gap_between_bursts() {
        let procs = vec![
            Process::new("1").with_arrival(0).with_burst(1),
            Process::new("2").with_arrival(4).with_burst(1),
        ];
        assert_eq!(
            simulate(&procs, 2),
            vec![ExecutionStep::new("1", 0, 1), ExecutionStep::new("2", 4, 5)]
        );
    }

    #[test]
    fn test_larger_quantum() {
        let procs = vec![
            Process::new("1").with_burst(5),
            Process::new("2").with_burst(3),
        ];
        let steps = simulate(&procs, 4);
        assert_eq!(
            steps,
            vec![
                ExecutionStep::new("1", 0, 4),
                ExecutionStep::new("2", 4, 7),
                ExecutionStep::new("1", 7, 8),
            ]
        );
    }
}
