//! Run-to-completion loop (FCFS, SJF-NP, Priority-NP).
//!
//! # Algorithm
//! 1. Admit arrivals up to the clock into the ready set.
//! 2. If the ready set is empty, jump to the next arrival.
//! 3. Otherwise pick the best process by the rule chain and run it for its
//!    whole burst; it leaves contention immediately.
//!
//! # Complexity
//! O(n²) selections in the worst case, n = processes.

use super::state::RunState;
use crate::dispatching::RuleEngine;
use crate::models::StepMode;

pub(crate) fn run_to_completion(state: &mut RunState, engine: &RuleEngine) {
    let mut ready: Vec<usize> = Vec::new();

    loop {
        ready.extend(state.take_arrivals());

        let Some(pos) = engine.select(state.processes(), &ready) else {
            if state.skip_idle() {
                continue;
            }
            break;
        };

        let idx = ready.swap_remove(pos);
        let burst = state.process(idx).remaining_time;
        state.run(idx, burst, StepMode::Append);
    }
}
