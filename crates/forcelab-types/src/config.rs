// ─────────────────────────────────────────────────────────────────────
// ForceLab — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_TIME_END_S, DEFAULT_TIME_START_S, DEFAULT_TIME_STEP_S, EQUILIBRIUM_TOLERANCE,
    FORCE_MAX_ANGLE_DEG, INCLINE_MAX_ANGLE_DEG, MAX_FORCE_N, MAX_HEIGHT_M,
    MAX_INTEGRATION_SAMPLES, MAX_MASS_KG, MAX_TIME_S, STANDARD_GRAVITY,
};
use crate::error::{ForceLabError, ForceLabResult};

/// Engine-wide configuration shared by the validator and the calculators.
/// Every field is optional in JSON; absent fields take classroom defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Gravitational acceleration (m/s²).
    #[serde(default = "default_gravity")]
    pub gravity: f64,
    /// Absolute tolerance on |ΣFx| and |ΣFy| for equilibrium (N).
    #[serde(default = "default_equilibrium_tolerance")]
    pub equilibrium_tolerance: f64,
    /// Maximum number of Euler samples a single request may produce.
    #[serde(default = "default_max_integration_samples")]
    pub max_integration_samples: usize,
    /// Window used for time fields a variable-force request leaves out.
    #[serde(default)]
    pub integration_window: IntegrationWindow,
    #[serde(default)]
    pub limits: ValidationLimits,
}

/// Closed interval of accepted angles (deg).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleRange {
    pub min: f64,
    pub max: f64,
}

impl AngleRange {
    pub fn new(min: f64, max: f64) -> Self {
        AngleRange { min, max }
    }

    /// True when `angle` is finite and within `[min, max]`.
    pub fn contains(&self, angle: f64) -> bool {
        angle.is_finite() && angle >= self.min && angle <= self.max
    }
}

/// Numeric bounds applied by the validator.
/// The angle rule is per scenario: inclines are first-quadrant only,
/// applied forces may point in any direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationLimits {
    #[serde(default = "default_max_mass")]
    pub max_mass: f64,
    #[serde(default = "default_incline_angle")]
    pub incline_angle: AngleRange,
    #[serde(default = "default_force_angle")]
    pub force_angle: AngleRange,
    #[serde(default = "default_max_height")]
    pub max_height: f64,
    #[serde(default = "default_max_force")]
    pub max_force: f64,
    #[serde(default = "default_max_time")]
    pub max_time: f64,
}

/// Default integration window (s).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegrationWindow {
    #[serde(default = "default_time_start")]
    pub start: f64,
    #[serde(default = "default_time_end")]
    pub end: f64,
    #[serde(default = "default_time_step")]
    pub step: f64,
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}
fn default_equilibrium_tolerance() -> f64 {
    EQUILIBRIUM_TOLERANCE
}
fn default_max_integration_samples() -> usize {
    MAX_INTEGRATION_SAMPLES
}
fn default_max_mass() -> f64 {
    MAX_MASS_KG
}
fn default_incline_angle() -> AngleRange {
    AngleRange::new(0.0, INCLINE_MAX_ANGLE_DEG)
}
fn default_force_angle() -> AngleRange {
    AngleRange::new(0.0, FORCE_MAX_ANGLE_DEG)
}
fn default_max_height() -> f64 {
    MAX_HEIGHT_M
}
fn default_max_force() -> f64 {
    MAX_FORCE_N
}
fn default_max_time() -> f64 {
    MAX_TIME_S
}
fn default_time_start() -> f64 {
    DEFAULT_TIME_START_S
}
fn default_time_end() -> f64 {
    DEFAULT_TIME_END_S
}
fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP_S
}

impl Default for IntegrationWindow {
    fn default() -> Self {
        IntegrationWindow {
            start: default_time_start(),
            end: default_time_end(),
            step: default_time_step(),
        }
    }
}

impl Default for ValidationLimits {
    fn default() -> Self {
        ValidationLimits {
            max_mass: default_max_mass(),
            incline_angle: default_incline_angle(),
            force_angle: default_force_angle(),
            max_height: default_max_height(),
            max_force: default_max_force(),
            max_time: default_max_time(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            gravity: default_gravity(),
            equilibrium_tolerance: default_equilibrium_tolerance(),
            max_integration_samples: default_max_integration_samples(),
            integration_window: IntegrationWindow::default(),
            limits: ValidationLimits::default(),
        }
    }
}

impl EngineConfig {
    /// Default configuration with a different gravitational acceleration.
    pub fn with_gravity(gravity: f64) -> Self {
        EngineConfig {
            gravity,
            ..EngineConfig::default()
        }
    }

    /// Load from a JSON file and check it for consistency.
    pub fn from_file(path: &str) -> ForceLabResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the calculators cannot work with.
    pub fn validate(&self) -> ForceLabResult<()> {
        if !self.gravity.is_finite() || self.gravity <= 0.0 {
            return Err(ForceLabError::ConfigError(format!(
                "gravity must be finite and positive, got {}",
                self.gravity
            )));
        }
        if !self.equilibrium_tolerance.is_finite() || self.equilibrium_tolerance <= 0.0 {
            return Err(ForceLabError::ConfigError(format!(
                "equilibrium tolerance must be finite and positive, got {}",
                self.equilibrium_tolerance
            )));
        }
        if self.max_integration_samples == 0 {
            return Err(ForceLabError::ConfigError(
                "max integration samples must be at least 1".to_string(),
            ));
        }
        let w = &self.integration_window;
        if !(w.start.is_finite() && w.end.is_finite() && w.step.is_finite())
            || w.start >= w.end
            || w.step <= 0.0
        {
            return Err(ForceLabError::ConfigError(format!(
                "integration window must satisfy start < end and step > 0, got [{}, {}] step {}",
                w.start, w.end, w.step
            )));
        }
        for (name, range) in [
            ("incline angle", self.limits.incline_angle),
            ("force angle", self.limits.force_angle),
        ] {
            if !(range.min.is_finite() && range.max.is_finite()) || range.min > range.max {
                return Err(ForceLabError::ConfigError(format!(
                    "{name} range is empty: [{}, {}]",
                    range.min, range.max
                )));
            }
        }
        Ok(())
    }
}
