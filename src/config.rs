//! Simulation configuration.
//!
//! Every field has a default, so a partial JSON document is a valid config:
//!
//! ```
//! use u_cpusched::config::{SimulationConfig, SteppingMode};
//!
//! let config: SimulationConfig = serde_json::from_str(r#"{"quantum": 4}"#).unwrap();
//! assert_eq!(config.quantum, 4);
//! assert_eq!(config.rms_horizon, Some(100));
//! assert_eq!(config.stepping, SteppingMode::EventDriven);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Default Round Robin time slice.
pub const DEFAULT_QUANTUM: i64 = 2;
/// Default RMS simulation horizon.
pub const DEFAULT_RMS_HORIZON: i64 = 100;
/// Default multiplier turning an RMS priority into a period.
pub const DEFAULT_RMS_PERIOD_FACTOR: i64 = 10;

/// How unit-granularity preemptive policies (EDF, RMS) advance the clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteppingMode {
    /// Run the selected process until it finishes or the next arrival.
    #[default]
    EventDriven,
    /// Re-select after every single tick.
    UnitStep,
}

/// Tunable parameters for a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Round Robin time slice.
    pub quantum: i64,
    /// RMS stops at this instant; `None` runs until every process finishes.
    pub rms_horizon: Option<i64>,
    /// RMS period = priority × factor.
    pub rms_period_factor: i64,
    /// Clock advancement for EDF and RMS.
    pub stepping: SteppingMode,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            quantum: DEFAULT_QUANTUM,
            rms_horizon: Some(DEFAULT_RMS_HORIZON),
            rms_period_factor: DEFAULT_RMS_PERIOD_FACTOR,
            stepping: SteppingMode::EventDriven,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Round Robin quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = quantum;
        self
    }

    /// Sets (or removes) the RMS horizon.
    pub fn with_rms_horizon(mut self, horizon: Option<i64>) -> Self {
        self.rms_horizon = horizon;
        self
    }

    /// Sets the RMS period factor.
    pub fn with_rms_period_factor(mut self, factor: i64) -> Self {
        self.rms_period_factor = factor;
        self
    }

    /// Sets the EDF/RMS stepping mode.
    pub fn with_stepping(mut self, stepping: SteppingMode) -> Self {
        self.stepping = stepping;
        self
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.quantum <= 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "quantum must be positive, got {}",
                self.quantum
            )));
        }
        if let Some(h) = self.rms_horizon.filter(|&h| h <= 0) {
            return Err(SimulationError::InvalidConfig(format!(
                "RMS horizon must be positive, got {h}"
            )));
        }
        if self.rms_period_factor <= 0 {
            return Err(SimulationError::InvalidConfig(format!(
                "RMS period factor must be positive, got {}",
                self.rms_period_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SimulationConfig::default();
        assert_eq!(c.quantum, 2);
        assert_eq!(c.rms_horizon, Some(100));
        assert_eq!(c.rms_period_factor, 10);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_quantum() {
        let c = SimulationConfig::new().with_quantum(0);
        assert!(matches!(c.validate(), Err(SimulationError::InvalidConfig(_))));
    }

    #[test]
    fn test_invalid_horizon_and_factor() {
        assert!(SimulationConfig::new()
            .with_rms_horizon(Some(0))
            .validate()
            .is_err());
        assert!(SimulationConfig::new()
            .with_rms_horizon(None)
            .validate()
            .is_ok());
        assert!(SimulationConfig::new()
            .with_rms_period_factor(-1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_json_roundtrip_with_unbounded_horizon() {
        let c: SimulationConfig =
            serde_json::from_str(r#"{"rms_horizon": null, "stepping": "unit_step"}"#).unwrap();
        assert_eq!(c.rms_horizon, None);
        assert_eq!(c.stepping, SteppingMode::UnitStep);
        assert_eq!(c.quantum, DEFAULT_QUANTUM);
    }
}
