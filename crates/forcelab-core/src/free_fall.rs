// ─────────────────────────────────────────────────────────────────────
// ForceLab — Free Fall
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Drop from rest with an optional constant air-resistance force.

use forcelab_types::config::EngineConfig;
use forcelab_types::error::ForceLabResult;
use forcelab_types::scenario::{FreeFallRequest, ScenarioKind};
use forcelab_types::state::FreeFallResult;

use crate::engine::{checked_mass, ensure_finite, require};

/// `t = sqrt(2h / g)`, `v = g t`, `a = g - F_air / m`.
///
/// NOTE: fall time and final velocity always use the unmodified `g`; air
/// resistance only changes the reported acceleration (known approximation).
pub fn free_fall(
    mass: f64,
    height: f64,
    air_resistance: Option<f64>,
    gravity: f64,
) -> ForceLabResult<FreeFallResult> {
    let mass = checked_mass(mass)?;
    let time = ensure_finite((2.0 * height / gravity).sqrt(), "fall time")?;
    let final_velocity = ensure_finite(gravity * time, "final velocity")?;
    let acceleration = match air_resistance {
        Some(drag) => ensure_finite(gravity - drag / mass, "free-fall acceleration")?,
        None => gravity,
    };

    Ok(FreeFallResult {
        time,
        final_velocity,
        acceleration,
    })
}

pub fn compute(request: &FreeFallRequest, config: &EngineConfig) -> ForceLabResult<FreeFallResult> {
    let kind = ScenarioKind::FreeFall;
    let mass = require(request.mass, kind, "mass")?;
    let height = require(request.height, kind, "height")?;
    free_fall(mass, height, request.air_resistance, config.gravity)
}
