// ─────────────────────────────────────────────────────────────────────
// ForceLab — Variable Forces
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Motion under a time-varying force, integrated with forward Euler.
//!
//! The body starts at rest at the origin. At each sample time the force
//! is evaluated, velocity is advanced first and position second using the
//! new velocity, and the sample `(t, F, v, x)` is recorded.

use forcelab_types::config::EngineConfig;
use forcelab_types::constants::STEP_COUNT_SLACK;
use forcelab_types::error::{ForceLabError, ForceLabResult};
use forcelab_types::scenario::{
    ForceFunctionKind, FunctionParameters, ScenarioKind, VariableForcesRequest,
};
use forcelab_types::state::VariableForcesResult;
use tracing::debug;

use crate::engine::{checked_mass, ensure_finite};

/// Force as a function of time (N).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ForceFunction {
    Linear { slope: f64 },
    Quadratic { a: f64, b: f64, c: f64 },
    Sinusoidal { amplitude: f64, frequency: f64 },
}

impl ForceFunction {
    /// Pick the coefficients `kind` needs out of `params`.
    pub fn from_parameters(
        kind: ForceFunctionKind,
        params: &FunctionParameters,
    ) -> ForceLabResult<Self> {
        let coeff = |value: Option<f64>, field: &'static str| {
            value.ok_or(ForceLabError::MissingField {
                scenario: ScenarioKind::VariableForces.as_str(),
                field,
            })
        };
        Ok(match kind {
            ForceFunctionKind::Linear => ForceFunction::Linear {
                slope: coeff(params.slope, "functionParameters.slope")?,
            },
            ForceFunctionKind::Quadratic => ForceFunction::Quadratic {
                a: coeff(params.a, "functionParameters.a")?,
                b: coeff(params.b, "functionParameters.b")?,
                c: coeff(params.c, "functionParameters.c")?,
            },
            ForceFunctionKind::Sinusoidal => ForceFunction::Sinusoidal {
                amplitude: coeff(params.amplitude, "functionParameters.amplitude")?,
                frequency: coeff(params.frequency, "functionParameters.frequency")?,
            },
        })
    }

    pub fn kind(&self) -> ForceFunctionKind {
        match self {
            ForceFunction::Linear { .. } => ForceFunctionKind::Linear,
            ForceFunction::Quadratic { .. } => ForceFunctionKind::Quadratic,
            ForceFunction::Sinusoidal { .. } => ForceFunctionKind::Sinusoidal,
        }
    }

    pub fn eval(&self, t: f64) -> f64 {
        match *self {
            ForceFunction::Linear { slope } => slope * t,
            ForceFunction::Quadratic { a, b, c } => a * t * t + b * t + c,
            ForceFunction::Sinusoidal {
                amplitude,
                frequency,
            } => amplitude * (frequency * t).sin(),
        }
    }
}

/// Uniform sample times `start + i·step` for `i = 0..=steps`.
///
/// The step count is an integer fixed up front,
/// `steps = floor(r + max(r, 1)·STEP_COUNT_SLACK)` with `r = (end - start) / step`,
/// so accumulated floating error cannot add or drop a sample. Sample times
/// are clamped to `end`; the slack can never push the last one past it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    pub start: f64,
    pub end: f64,
    pub step: f64,
    pub steps: usize,
}

impl TimeGrid {
    pub fn new(start: f64, end: f64, step: f64, max_samples: usize) -> ForceLabResult<Self> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(ForceLabError::PhysicsViolation(format!(
                "time window must be finite, got [{start}, {end}] step {step}"
            )));
        }
        if step <= 0.0 {
            return Err(ForceLabError::PhysicsViolation(format!(
                "time step must be positive, got {step}"
            )));
        }
        if end < start {
            return Err(ForceLabError::PhysicsViolation(format!(
                "time window is inverted: start {start} > end {end}"
            )));
        }

        let ratio = (end - start) / step;
        let steps = (ratio + ratio.max(1.0) * STEP_COUNT_SLACK).floor();
        // `as usize` saturates, so an absurd ratio still trips the cap below.
        let samples = (steps as usize).saturating_add(1);
        if !steps.is_finite() || samples > max_samples {
            return Err(ForceLabError::StepLimitExceeded {
                samples,
                limit: max_samples,
            });
        }

        Ok(TimeGrid {
            start,
            end,
            step,
            steps: steps as usize,
        })
    }

    pub fn sample_count(&self) -> usize {
        self.steps + 1
    }

    pub fn time_at(&self, i: usize) -> f64 {
        (self.start + i as f64 * self.step).min(self.end)
    }

    /// Restartable iterator over the sample times.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..=self.steps).map(move |i| self.time_at(i))
    }
}

/// One recorded integration sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EulerSample {
    pub time: f64,
    pub force: f64,
    pub velocity: f64,
    pub position: f64,
}

/// Integrate a trajectory with forward Euler.
pub fn integrate_euler(force: &ForceFunction, mass: f64, grid: &TimeGrid) -> Vec<EulerSample> {
    let dt = grid.step;
    let mut traj = Vec::with_capacity(grid.sample_count());
    let mut v = 0.0;
    let mut x = 0.0;
    for t in grid.times() {
        let f = force.eval(t);
        v += f / mass * dt;
        x += v * dt;
        traj.push(EulerSample {
            time: t,
            force: f,
            velocity: v,
            position: x,
        });
    }
    traj
}

/// Run the integration and summarise the final sample.
pub fn variable_forces(
    mass: f64,
    force: &ForceFunction,
    grid: &TimeGrid,
) -> ForceLabResult<VariableForcesResult> {
    let mass = checked_mass(mass)?;
    let traj = integrate_euler(force, mass, grid);
    let Some(last) = traj.last().copied() else {
        return Err(ForceLabError::PhysicsViolation(
            "integration produced no samples".to_string(),
        ));
    };

    let acceleration = ensure_finite(last.force / mass, "final acceleration")?;
    let velocity = ensure_finite(last.velocity, "final velocity")?;
    let displacement = ensure_finite(last.position, "displacement")?;
    if traj.iter().any(|s| !s.force.is_finite()) {
        return Err(ForceLabError::NonFinite {
            quantity: "force samples",
        });
    }

    Ok(VariableForcesResult {
        acceleration,
        velocity,
        displacement,
        time_points: traj.iter().map(|s| s.time).collect(),
        force_values: traj.iter().map(|s| s.force).collect(),
        velocity_values: traj.iter().map(|s| s.velocity).collect(),
        position_values: traj.iter().map(|s| s.position).collect(),
    })
}

/// Missing time fields fall back to the configured integration window.
pub fn compute(
    request: &VariableForcesRequest,
    config: &EngineConfig,
) -> ForceLabResult<VariableForcesResult> {
    let scenario = ScenarioKind::VariableForces.as_str();
    let mass = request.mass.ok_or(ForceLabError::MissingField {
        scenario,
        field: "mass",
    })?;
    let kind = request.function_kind.ok_or(ForceLabError::MissingField {
        scenario,
        field: "functionKind",
    })?;
    let params = request
        .function_parameters
        .as_ref()
        .ok_or(ForceLabError::MissingField {
            scenario,
            field: "functionParameters",
        })?;
    let force = ForceFunction::from_parameters(kind, params)?;

    let window = &config.integration_window;
    let grid = TimeGrid::new(
        request.time_start.unwrap_or(window.start),
        request.time_end.unwrap_or(window.end),
        request.time_step.unwrap_or(window.step),
        config.max_integration_samples,
    )?;
    debug!(
        function = %kind,
        samples = grid.sample_count(),
        dt = grid.step,
        "integrating variable force"
    );

    variable_forces(mass, &force, &grid)
}
