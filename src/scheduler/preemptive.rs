//! Run-until-next-event loop (SRTF, EDF, RMS).
//!
//! # Algorithm
//! 1. Admit arrivals up to the clock into the ready set.
//! 2. If the ready set is empty, jump to the next arrival.
//! 3. Pick the best process by the rule chain and run it until it
//!    finishes, the next process arrives, or the horizon is reached.
//!    Under `UnitStep` the slice is a single tick instead.
//! 4. Record the slice, coalescing with the previous step when the same
//!    process simply continues.
//!
//! Selection keys only change when the ready set changes, and the ready
//! set only grows at arrivals, so re-selecting at arrivals reproduces
//! per-tick re-selection exactly.

use tracing::debug;

use super::state::RunState;
use crate::config::SteppingMode;
use crate::dispatching::RuleEngine;
use crate::models::StepMode;

/// Returns `true` if the loop stopped at `horizon` with work left.
pub(crate) fn run_preemptive(
    state: &mut RunState,
    engine: &RuleEngine,
    stepping: SteppingMode,
    horizon: Option<i64>,
) -> bool {
    let mut ready: Vec<usize> = Vec::new();

    loop {
        if let Some(h) = horizon {
            if state.clock() >= h {
                let stopped_early = !state.unfinished().is_empty();
                if stopped_early {
                    debug!(horizon = h, "horizon reached with unfinished processes");
                }
                return stopped_early;
            }
        }

        ready.extend(state.take_arrivals());

        let Some(pos) = engine.select(state.processes(), &ready) else {
            if state.skip_idle() {
                continue;
            }
            return false;
        };

        let idx = ready[pos];
        let remaining = state.process(idx).remaining_time;
        let mut ticks = match stepping {
            SteppingMode::UnitStep => 1,
            SteppingMode::EventDriven => state
                .next_arrival_time()
                .map_or(remaining, |t| remaining.min(t - state.clock())),
        };
        if let Some(h) = horizon {
            ticks = ticks.min(h - state.clock());
        }

        if state.run(idx, ticks, StepMode::Coalesce) {
            ready.swap_remove(pos);
        }
    }
}
