//! Process model.
//!
//! A process is a unit of work competing for the single simulated CPU.
//! It arrives at a given instant, demands a fixed amount of CPU time and
//! optionally carries a priority and an absolute deadline.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process as supplied by the caller.
///
/// The engine never mutates these records; every run works on private
/// [`WorkingProcess`](super::WorkingProcess) copies.
///
/// # Time Representation
/// All times are integral ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: String,
    /// Display label. No effect on scheduling.
    pub name: String,
    /// Instant the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// Static priority (lower = preferred). Required by Priority and RMS.
    pub priority: Option<i64>,
    /// Absolute completion deadline. Required by EDF.
    pub deadline: Option<i64>,
    /// Cosmetic colour, passed through to the presentation layer only.
    pub color: Option<String>,
}

impl Process {
    /// Creates a process arriving at t=0 with a one-tick burst.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            arrival_time: 0,
            burst_time: 1,
            priority: None,
            deadline: None,
            color: None,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the arrival time.
    pub fn with_arrival(mut self, arrival_time: i64) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Sets the burst (total service) time.
    pub fn with_burst(mut self, burst_time: i64) -> Self {
        self.burst_time = burst_time;
        self
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the absolute deadline.
    pub fn with_deadline(mut self, deadline: i64) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets the display colour.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Name for display, falling back to the id.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1")
            .with_name("Editor")
            .with_arrival(3)
            .with_burst(7)
            .with_priority(2)
            .with_deadline(20)
            .with_color("hsl(120, 70%, 60%)");

        assert_eq!(p.id, "P1");
        assert_eq!(p.name, "Editor");
        assert_eq!(p.arrival_time, 3);
        assert_eq!(p.burst_time, 7);
        assert_eq!(p.priority, Some(2));
        assert_eq!(p.deadline, Some(20));
        assert_eq!(p.color.as_deref(), Some("hsl(120, 70%, 60%)"));
    }

    #[test]
    fn test_optional_fields_absent_by_default() {
        let p = Process::new("P1");
        assert_eq!(p.priority, None);
        assert_eq!(p.deadline, None);
        assert_eq!(p.color, None);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(Process::new("P7").display_name(), "P7");
        assert_eq!(Process::new("P7").with_name("shell").display_name(), "shell");
    }

    #[test]
    fn test_process_from_json() {
        let p: Process = serde_json::from_str(
            r#"{"id":"1","name":"P1","arrival_time":0,"burst_time":5,
                "priority":null,"deadline":12,"color":null}"#,
        )
        .unwrap();
        assert_eq!(p.burst_time, 5);
        assert_eq!(p.deadline, Some(12));
        assert_eq!(p.priority, None);
    }
}
