//! Scheduling policy identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;

/// The seven supported single-CPU scheduling policies.
///
/// | Policy | Preemptive | Selects |
/// |--------|-----------|---------|
/// | `Fcfs` | no | earliest arrival |
/// | `SjfNonPreemptive` | no | shortest burst |
/// | `Srtf` | yes | shortest remaining time |
/// | `PriorityNonPreemptive` | no | lowest priority value |
/// | `RoundRobin` | yes | head of FIFO queue, one quantum |
/// | `Edf` | yes | earliest absolute deadline |
/// | `Rms` | yes | shortest period (`priority × factor`) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    #[serde(rename = "FCFS")]
    Fcfs,
    #[serde(rename = "SJF-NP")]
    SjfNonPreemptive,
    #[serde(rename = "SJF-P")]
    Srtf,
    #[serde(rename = "Priority")]
    PriorityNonPreemptive,
    #[serde(rename = "RR")]
    RoundRobin,
    #[serde(rename = "EDF")]
    Edf,
    #[serde(rename = "RMS")]
    Rms,
}

impl Policy {
    /// Every policy, in menu order.
    pub const ALL: [Policy; 7] = [
        Policy::Fcfs,
        Policy::SjfNonPreemptive,
        Policy::Srtf,
        Policy::PriorityNonPreemptive,
        Policy::RoundRobin,
        Policy::Edf,
        Policy::Rms,
    ];

    /// Short label (`"FCFS"`, `"SJF-NP"`, ...).
    pub fn label(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::SjfNonPreemptive => "SJF-NP",
            Policy::Srtf => "SJF-P",
            Policy::PriorityNonPreemptive => "Priority",
            Policy::RoundRobin => "RR",
            Policy::Edf => "EDF",
            Policy::Rms => "RMS",
        }
    }

    /// Whether a running process can be interrupted before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Policy::Srtf | Policy::RoundRobin | Policy::Edf | Policy::Rms
        )
    }

    /// Whether every process must carry a priority.
    pub fn requires_priority(&self) -> bool {
        matches!(self, Policy::PriorityNonPreemptive | Policy::Rms)
    }

    /// Whether every process must carry a deadline.
    pub fn requires_deadline(&self) -> bool {
        matches!(self, Policy::Edf)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Policy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Policy::ALL
            .iter()
            .copied()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .or(match wanted.to_ascii_uppercase().as_str() {
                "SJF" => Some(Policy::SjfNonPreemptive),
                "SRTF" => Some(Policy::Srtf),
                "ROUNDROBIN" | "ROUND-ROBIN" => Some(Policy::RoundRobin),
                _ => None,
            })
            .ok_or_else(|| SimulationError::UnknownPolicy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for policy in Policy::ALL {
            assert_eq!(policy.label().parse::<Policy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_parse_aliases_and_case() {
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!("srtf".parse::<Policy>().unwrap(), Policy::Srtf);
        assert_eq!(" edf ".parse::<Policy>().unwrap(), Policy::Edf);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "LOTTERY".parse::<Policy>().unwrap_err();
        assert_eq!(err, SimulationError::UnknownPolicy("LOTTERY".into()));
    }

    #[test]
    fn test_requirements() {
        assert!(Policy::Rms.requires_priority());
        assert!(Policy::PriorityNonPreemptive.requires_priority());
        assert!(!Policy::Edf.requires_priority());
        assert!(Policy::Edf.requires_deadline());
        assert!(!Policy::Fcfs.is_preemptive());
        assert!(Policy::RoundRobin.is_preemptive());
    }

    #[test]
    fn test_serde_labels() {
        assert_eq!(serde_json::to_string(&Policy::Srtf).unwrap(), "\"SJF-P\"");
        let p: Policy = serde_json::from_str("\"RMS\"").unwrap();
        assert_eq!(p, Policy::Rms);
    }
}
