//! CPU scheduling domain models.
//!
//! Data flows strictly forward:
//!
//! | Stage | Types |
//! |-------|-------|
//! | Input | `Process`, `Policy` |
//! | Per-run state | `WorkingProcess` |
//! | Output | `ExecutionStep`, `Timeline`, `ProcessResult`, `SimulationOutcome` |

mod outcome;
mod policy;
mod process;
mod timeline;
mod working;

pub use outcome::{ProcessResult, SimulationOutcome, SimulationWarning};
pub use policy::Policy;
pub use process::Process;
pub(crate) use timeline::count_switches;
pub use timeline::{ExecutionStep, StepMode, Timeline};
pub use working::WorkingProcess;
