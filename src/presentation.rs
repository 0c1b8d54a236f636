//! Presentation decoration.
//!
//! Core results carry only scheduling data. This module joins them back
//! with the cosmetic fields of the input (display name, colour) for a
//! timeline or metrics view. Nothing here feeds back into scheduling.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{ExecutionStep, Process, ProcessResult, SimulationOutcome};

/// An execution step with display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedStep {
    pub process_id: String,
    pub name: String,
    pub start_time: i64,
    pub end_time: i64,
    pub color: String,
}

/// A result with display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecoratedResult {
    pub name: String,
    pub color: String,
    #[serde(flatten)]
    pub result: ProcessResult,
}

/// A fully decorated outcome, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    pub steps: Vec<DecoratedStep>,
    pub results: Vec<DecoratedResult>,
}

/// Deterministic fallback colour for the process at input position `index`.
pub fn palette_color(index: usize) -> String {
    // 137° steps (golden angle)
    let hue = (index * 137) % 360;
    format!("hsl({hue}, 70%, 60%)")
}

/// Attaches names and colours from `processes` to `outcome`.
///
/// Steps or results whose process is not in `processes` fall back to the
/// id as name and a palette colour.
pub fn decorate(outcome: &SimulationOutcome, processes: &[Process]) -> Presentation {
    let by_id: HashMap<&str, (usize, &Process)> = processes
        .iter()
        .enumerate()
        .map(|(i, p)| (p.id.as_str(), (i, p)))
        .collect();

    let attrs = |id: &str| -> (String, String) {
        match by_id.get(id) {
            Some(&(index, p)) => (
                p.display_name().to_string(),
                p.color.clone().unwrap_or_else(|| palette_color(index)),
            ),
            None => (id.to_string(), palette_color(by_id.len())),
        }
    };

    let steps = outcome
        .steps
        .iter()
        .map(|s: &ExecutionStep| {
            let (name, color) = attrs(&s.process_id);
            DecoratedStep {
                process_id: s.process_id.clone(),
                name,
                start_time: s.start_time,
                end_time: s.end_time,
                color,
            }
        })
        .collect();

    let results = outcome
        .results
        .iter()
        .map(|r| {
            let (name, color) = attrs(&r.process_id);
            DecoratedResult {
                name,
                color,
                result: r.clone(),
            }
        })
        .collect();

    Presentation { steps, results }
}
