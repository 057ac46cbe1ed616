// ─────────────────────────────────────────────────────────────────────
// ForceLab — Inclined Plane
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Block on a rough incline, released from rest.

use forcelab_types::config::EngineConfig;
use forcelab_types::error::ForceLabResult;
use forcelab_types::scenario::{InclinedPlaneRequest, ScenarioKind};
use forcelab_types::state::{InclinedPlaneResult, MotionDirection};

use crate::engine::{checked_mass, ensure_finite, require};

/// Forces along and across the slope.
///
/// ```text
/// N  = m g cos θ
/// Fg = m g sin θ
/// Ff = μ N
/// a  = (Fg - Ff) / m
/// ```
///
/// Positive `a` drives the block down the slope. Friction is applied as
/// kinetic friction even when it exceeds `Fg`, so `a` may come out
/// negative and the direction is then reported as upward.
pub fn inclined_plane(
    mass: f64,
    angle_deg: f64,
    friction_coefficient: f64,
    gravity: f64,
) -> ForceLabResult<InclinedPlaneResult> {
    let mass = checked_mass(mass)?;
    let theta = angle_deg.to_radians();
    let weight = mass * gravity;

    let normal_force = ensure_finite(weight * theta.cos(), "normal force")?;
    let gravitational_force = ensure_finite(weight * theta.sin(), "gravitational force")?;
    let friction_force = ensure_finite(friction_coefficient * normal_force, "friction force")?;
    let acceleration = ensure_finite(
        (gravitational_force - friction_force) / mass,
        "incline acceleration",
    )?;

    Ok(InclinedPlaneResult {
        normal_force,
        friction_force,
        gravitational_force,
        acceleration,
        direction: MotionDirection::from_acceleration(acceleration),
    })
}

pub fn compute(
    request: &InclinedPlaneRequest,
    config: &EngineConfig,
) -> ForceLabResult<InclinedPlaneResult> {
    let kind = ScenarioKind::InclinedPlane;
    let mass = require(request.mass, kind, "mass")?;
    let angle = require(request.angle, kind, "angle")?;
    let mu = require(request.friction_coefficient, kind, "frictionCoefficient")?;
    inclined_plane(mass, angle, mu, config.gravity)
}
