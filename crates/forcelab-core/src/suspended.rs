//! Mass hanging at rest from a single vertical rope.

use forcelab_types::config::EngineConfig;
use forcelab_types::error::ForceLabResult;
use forcelab_types::scenario::{ScenarioKind, SuspendedObjectRequest};
use forcelab_types::state::SuspendedObjectResult;

use crate::engine::{checked_mass, ensure_finite, require};

/// `W = m g`; at rest the rope tension equals the weight.
pub fn suspended_object(mass: f64, gravity: f64) -> ForceLabResult<SuspendedObjectResult> {
    let mass = checked_mass(mass)?;
    let weight = ensure_finite(mass * gravity, "weight")?;
    Ok(SuspendedObjectResult {
        gravitational_force: weight,
        tension: weight,
    })
}

pub fn compute(
    request: &SuspendedObjectRequest,
    config: &EngineConfig,
) -> ForceLabResult<SuspendedObjectResult> {
    let mass = require(request.mass, ScenarioKind::SuspendedObject, "mass")?;
    suspended_object(mass, config.gravity)
}
