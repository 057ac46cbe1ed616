// ─────────────────────────────────────────────────────────────────────
// ForceLab — Results
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::scenario::ScenarioKind;

/// Which way the net force drives a body on an incline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionDirection {
    Upward,
    Downward,
    Stationary,
}

impl MotionDirection {
    /// Positive acceleration points down the slope.
    pub fn from_acceleration(acceleration: f64) -> Self {
        if acceleration > 0.0 {
            MotionDirection::Downward
        } else if acceleration < 0.0 {
            MotionDirection::Upward
        } else {
            MotionDirection::Stationary
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MotionDirection::Upward => "upward",
            MotionDirection::Downward => "downward",
            MotionDirection::Stationary => "stationary",
        }
    }
}

/// Forces on a block resting on a rough incline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InclinedPlaneResult {
    pub normal_force: f64,         // N, perpendicular to the slope
    pub friction_force: f64,       // N, μ·normal
    pub gravitational_force: f64,  // N, weight component along the slope
    pub acceleration: f64,         // m/s², positive = down the slope
    pub direction: MotionDirection,
}

/// Drop from rest. `time` and `final_velocity` ignore air resistance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FreeFallResult {
    pub time: f64,           // s
    pub final_velocity: f64, // m/s
    pub acceleration: f64,   // m/s²
}

/// Euler trajectory under a time-varying force.
/// The four sample vectors always have the same length (≥ 1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableForcesResult {
    pub acceleration: f64, // m/s² at the last sample
    pub velocity: f64,     // m/s at the last sample
    pub displacement: f64, // m at the last sample
    pub time_points: Vec<f64>,
    pub force_values: Vec<f64>,
    pub velocity_values: Vec<f64>,
    pub position_values: Vec<f64>,
}

impl VariableForcesResult {
    pub fn sample_count(&self) -> usize {
        self.time_points.len()
    }
}

/// Net force of a planar force set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquilibriumResult {
    pub total_force_x: f64,
    pub total_force_y: f64,
    pub is_equilibrium: bool,
}

/// Mass hanging from a single rope at rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspendedObjectResult {
    pub gravitational_force: f64, // N
    pub tension: f64,             // N
}

/// Output of one computation, tagged by scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScenarioResult {
    InclinedPlane(InclinedPlaneResult),
    FreeFall(FreeFallResult),
    VariableForces(VariableForcesResult),
    Equilibrium(EquilibriumResult),
    SuspendedObject(SuspendedObjectResult),
}

impl ScenarioResult {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioResult::InclinedPlane(_) => ScenarioKind::InclinedPlane,
            ScenarioResult::FreeFall(_) => ScenarioKind::FreeFall,
            ScenarioResult::VariableForces(_) => ScenarioKind::VariableForces,
            ScenarioResult::Equilibrium(_) => ScenarioKind::Equilibrium,
            ScenarioResult::SuspendedObject(_) => ScenarioKind::SuspendedObject,
        }
    }
}
