//! Shared per-run simulation state.

use tracing::trace;

use crate::models::{ProcessResult, StepMode, Timeline, WorkingProcess};

/// Clock, arrival cursor, timeline and results for one run.
///
/// Arrivals are admitted through a cursor over process indices sorted by
/// (arrival, input position); each loop shape keeps its own ready
/// collection fed by [`take_arrivals`](Self::take_arrivals).
#[derive(Debug)]
pub(crate) struct RunState {
    processes: Vec<WorkingProcess>,
    arrival_order: Vec<usize>,
    next_arrival: usize,
    clock: i64,
    timeline: Timeline,
    results: Vec<ProcessResult>,
    track_deadlines: bool,
}

impl RunState {
    pub(crate) fn new(processes: Vec<WorkingProcess>, track_deadlines: bool) -> Self {
        let mut arrival_order: Vec<usize> = (0..processes.len()).collect();
        arrival_order.sort_by_key(|&i| (processes[i].arrival_time, i));

        Self {
            processes,
            arrival_order,
            next_arrival: 0,
            clock: 0,
            timeline: Timeline::new(),
            results: Vec::new(),
            track_deadlines,
        }
    }

    #[inline]
    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    pub(crate) fn processes(&self) -> &[WorkingProcess] {
        &self.processes
    }

    pub(crate) fn process(&self, idx: usize) -> &WorkingProcess {
        &self.processes[idx]
    }

    /// Admits every process with `arrival_time <= clock`, in arrival order.
    pub(crate) fn take_arrivals(&mut self) -> Vec<usize> {
        let start = self.next_arrival;
        while self.next_arrival < self.arrival_order.len()
            && self.processes[self.arrival_order[self.next_arrival]].arrival_time <= self.clock
        {
            self.next_arrival += 1;
        }
        self.arrival_order[start..self.next_arrival].to_vec()
    }

    /// Arrival time of the next process not yet admitted.
    pub(crate) fn next_arrival_time(&self) -> Option<i64> {
        self.arrival_order
            .get(self.next_arrival)
            .map(|&i| self.processes[i].arrival_time)
    }

    /// Jumps the clock to the next arrival when the CPU would otherwise
    /// idle. Returns `false` when nothing is left to arrive.
    pub(crate) fn skip_idle(&mut self) -> bool {
        match self.next_arrival_time() {
            Some(t) => {
                if t > self.clock {
                    trace!(from = self.clock, to = t, "cpu idle");
                }
                self.clock = self.clock.max(t);
                true
            }
            None => false,
        }
    }

    /// Runs `idx` for `ticks`, records the slice and advances the clock.
    ///
    /// Returns `true` when the process finished during this slice; its
    /// result is appended at that point.
    pub(crate) fn run(&mut self, idx: usize, ticks: i64, mode: StepMode) -> bool {
        let start = self.clock;
        let end = start + ticks;
        let process = &mut self.processes[idx];

        self.timeline.record(&process.id, start, end, mode);
        self.clock = end;
        trace!(process = %process.id, start, end, "run slice");

        if process.serve(ticks, end) {
            self.results.push(ProcessResult::from_completed(
                process,
                end,
                self.track_deadlines,
            ));
            true
        } else {
            false
        }
    }

    /// Ids of processes still owed service, in input order.
    pub(crate) fn unfinished(&self) -> Vec<String> {
        self.processes
            .iter()
            .filter(|p| !p.is_finished())
            .map(|p| p.id.clone())
            .collect()
    }

    pub(crate) fn into_parts(self) -> (Vec<ProcessResult>, Timeline) {
        (self.results, self.timeline)
    }
}
