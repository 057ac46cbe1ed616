// ─────────────────────────────────────────────────────────────────────
// ForceLab — Static Equilibrium
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Net force of a planar force set and the equilibrium test.

use forcelab_types::config::EngineConfig;
use forcelab_types::error::{ForceLabError, ForceLabResult};
use forcelab_types::scenario::{AppliedForce, EquilibriumRequest, ScenarioKind};
use forcelab_types::state::EquilibriumResult;

use crate::engine::ensure_finite;

/// Component sums `(ΣFx, ΣFy)` with angles measured from +x.
pub fn net_force(forces: &[AppliedForce]) -> (f64, f64) {
    forces.iter().fold((0.0, 0.0), |(fx, fy), f| {
        let theta = f.angle_degrees.to_radians();
        (fx + f.magnitude * theta.cos(), fy + f.magnitude * theta.sin())
    })
}

/// Equilibrium holds when both components are below `tolerance` in
/// absolute value. The tolerance is absolute, not scaled by magnitude.
pub fn equilibrium(forces: &[AppliedForce], tolerance: f64) -> ForceLabResult<EquilibriumResult> {
    if forces.is_empty() {
        return Err(ForceLabError::MissingField {
            scenario: ScenarioKind::Equilibrium.as_str(),
            field: "forces",
        });
    }
    let (fx, fy) = net_force(forces);
    let total_force_x = ensure_finite(fx, "net force x")?;
    let total_force_y = ensure_finite(fy, "net force y")?;

    Ok(EquilibriumResult {
        total_force_x,
        total_force_y,
        is_equilibrium: total_force_x.abs() < tolerance && total_force_y.abs() < tolerance,
    })
}

pub fn compute(
    request: &EquilibriumRequest,
    config: &EngineConfig,
) -> ForceLabResult<EquilibriumResult> {
    equilibrium(&request.forces, config.equilibrium_tolerance)
}
