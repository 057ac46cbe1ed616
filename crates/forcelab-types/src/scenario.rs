// ─────────────────────────────────────────────────────────────────────
// ForceLab — Scenario Requests
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Request records for the supported scenarios.
//!
//! Each variant carries only the fields its scenario reads. Fields stay
//! optional so the validator can report what the user left blank; the
//! calculators treat a missing required field as a caller bug.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Closed set of supported scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScenarioKind {
    InclinedPlane,
    FreeFall,
    VariableForces,
    Equilibrium,
    SuspendedObject,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 5] = [
        ScenarioKind::InclinedPlane,
        ScenarioKind::FreeFall,
        ScenarioKind::VariableForces,
        ScenarioKind::Equilibrium,
        ScenarioKind::SuspendedObject,
    ];

    /// Wire identifier, identical to the serde tag.
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioKind::InclinedPlane => "inclinedPlane",
            ScenarioKind::FreeFall => "freeFall",
            ScenarioKind::VariableForces => "variableForces",
            ScenarioKind::Equilibrium => "equilibrium",
            ScenarioKind::SuspendedObject => "suspendedObject",
        }
    }

    /// Human-readable name used in prompts and reports.
    pub fn title(self) -> &'static str {
        match self {
            ScenarioKind::InclinedPlane => "inclined plane",
            ScenarioKind::FreeFall => "free fall",
            ScenarioKind::VariableForces => "variable forces",
            ScenarioKind::Equilibrium => "equilibrium",
            ScenarioKind::SuspendedObject => "suspended object",
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScenarioKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown scenario kind '{s}'"))
    }
}

/// Shape of the time-varying force.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForceFunctionKind {
    /// `F(t) = slope·t`
    Linear,
    /// `F(t) = a·t² + b·t + c`
    Quadratic,
    /// `F(t) = amplitude·sin(frequency·t)`
    Sinusoidal,
}

impl ForceFunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ForceFunctionKind::Linear => "linear",
            ForceFunctionKind::Quadratic => "quadratic",
            ForceFunctionKind::Sinusoidal => "sinusoidal",
        }
    }

    /// Coefficient names this kind reads from [`FunctionParameters`].
    pub fn parameter_names(self) -> &'static [&'static str] {
        match self {
            ForceFunctionKind::Linear => &["slope"],
            ForceFunctionKind::Quadratic => &["a", "b", "c"],
            ForceFunctionKind::Sinusoidal => &["amplitude", "frequency"],
        }
    }
}

impl fmt::Display for ForceFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ForceFunctionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(ForceFunctionKind::Linear),
            "quadratic" => Ok(ForceFunctionKind::Quadratic),
            "sinusoidal" => Ok(ForceFunctionKind::Sinusoidal),
            other => Err(format!("unknown force function kind '{other}'")),
        }
    }
}

/// Named coefficients of the force function. Only the ones the selected
/// [`ForceFunctionKind`] needs are read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FunctionParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub a: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub b: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub c: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
}

impl FunctionParameters {
    pub fn linear(slope: f64) -> Self {
        FunctionParameters {
            slope: Some(slope),
            ..Default::default()
        }
    }

    pub fn quadratic(a: f64, b: f64, c: f64) -> Self {
        FunctionParameters {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            ..Default::default()
        }
    }

    pub fn sinusoidal(amplitude: f64, frequency: f64) -> Self {
        FunctionParameters {
            amplitude: Some(amplitude),
            frequency: Some(frequency),
            ..Default::default()
        }
    }

    /// Look a coefficient up by its wire name.
    pub fn get(&self, name: &str) -> Option<f64> {
        match name {
            "slope" => self.slope,
            "a" => self.a,
            "b" => self.b,
            "c" => self.c,
            "amplitude" => self.amplitude,
            "frequency" => self.frequency,
            _ => None,
        }
    }
}

/// One force acting on a body in the equilibrium scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedForce {
    /// Magnitude (N). Negative values are accepted and flip the direction.
    pub magnitude: f64,
    /// Direction, counter-clockwise from +x (deg).
    #[serde(alias = "angle")]
    pub angle_degrees: f64,
}

impl AppliedForce {
    pub fn new(magnitude: f64, angle_degrees: f64) -> Self {
        AppliedForce {
            magnitude,
            angle_degrees,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InclinedPlaneRequest {
    pub mass: Option<f64>,
    /// Incline angle above horizontal (deg).
    pub angle: Option<f64>,
    pub friction_coefficient: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FreeFallRequest {
    pub mass: Option<f64>,
    pub height: Option<f64>,
    /// Constant opposing force (N).
    pub air_resistance: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VariableForcesRequest {
    pub mass: Option<f64>,
    pub function_kind: Option<ForceFunctionKind>,
    pub function_parameters: Option<FunctionParameters>,
    pub time_start: Option<f64>,
    pub time_end: Option<f64>,
    pub time_step: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EquilibriumRequest {
    /// Not used by the summation; still range-checked when supplied.
    pub mass: Option<f64>,
    pub forces: Vec<AppliedForce>,
}

/// A mass hanging at rest from one vertical rope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuspendedObjectRequest {
    pub mass: Option<f64>,
}

/// A single computation request, tagged by scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ScenarioRequest {
    InclinedPlane(InclinedPlaneRequest),
    FreeFall(FreeFallRequest),
    VariableForces(VariableForcesRequest),
    Equilibrium(EquilibriumRequest),
    SuspendedObject(SuspendedObjectRequest),
}

impl ScenarioRequest {
    pub fn kind(&self) -> ScenarioKind {
        match self {
            ScenarioRequest::InclinedPlane(_) => ScenarioKind::InclinedPlane,
            ScenarioRequest::FreeFall(_) => ScenarioKind::FreeFall,
            ScenarioRequest::VariableForces(_) => ScenarioKind::VariableForces,
            ScenarioRequest::Equilibrium(_) => ScenarioKind::Equilibrium,
            ScenarioRequest::SuspendedObject(_) => ScenarioKind::SuspendedObject,
        }
    }

    /// The mass field every scenario shares.
    pub fn mass(&self) -> Option<f64> {
        match self {
            ScenarioRequest::InclinedPlane(r) => r.mass,
            ScenarioRequest::FreeFall(r) => r.mass,
            ScenarioRequest::VariableForces(r) => r.mass,
            ScenarioRequest::Equilibrium(r) => r.mass,
            ScenarioRequest::SuspendedObject(r) => r.mass,
        }
    }

    /// Parse a request from its JSON form.
    pub fn from_json(json: &str) -> crate::error::ForceLabResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
