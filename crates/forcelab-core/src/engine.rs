// ─────────────────────────────────────────────────────────────────────
// ForceLab — Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scenario dispatch and the guards shared by every calculator.

use forcelab_types::config::EngineConfig;
use forcelab_types::error::{ForceLabError, ForceLabResult};
use forcelab_types::scenario::{ScenarioKind, ScenarioRequest};
use forcelab_types::state::ScenarioResult;
use tracing::{debug, warn};

use crate::{equilibrium, free_fall, inclined_plane, suspended, variable_forces};

/// Compute the result for a request that already passed validation.
///
/// Any error returned here is a domain fault: a required field was
/// absent, the mass was unusable, or the computation produced a
/// non-finite value. No partial result is returned.
pub fn compute(request: &ScenarioRequest, config: &EngineConfig) -> ForceLabResult<ScenarioResult> {
    let kind = request.kind();
    debug!(scenario = %kind, gravity = config.gravity, "computing scenario");

    let outcome = match request {
        ScenarioRequest::InclinedPlane(r) => {
            inclined_plane::compute(r, config).map(ScenarioResult::InclinedPlane)
        }
        ScenarioRequest::FreeFall(r) => free_fall::compute(r, config).map(ScenarioResult::FreeFall),
        ScenarioRequest::VariableForces(r) => {
            variable_forces::compute(r, config).map(ScenarioResult::VariableForces)
        }
        ScenarioRequest::Equilibrium(r) => {
            equilibrium::compute(r, config).map(ScenarioResult::Equilibrium)
        }
        ScenarioRequest::SuspendedObject(r) => {
            suspended::compute(r, config).map(ScenarioResult::SuspendedObject)
        }
    };

    if let Err(err) = &outcome {
        warn!(scenario = %kind, error = %err, "computation aborted");
    }
    outcome
}

/// Unwrap a field the calculator cannot run without.
pub(crate) fn require(
    value: Option<f64>,
    scenario: ScenarioKind,
    field: &'static str,
) -> ForceLabResult<f64> {
    value.ok_or(ForceLabError::MissingField {
        scenario: scenario.as_str(),
        field,
    })
}

/// Mass is a divisor in most formulas; refuse anything that is not a
/// finite positive number.
pub(crate) fn checked_mass(mass: f64) -> ForceLabResult<f64> {
    if !mass.is_finite() || mass <= 0.0 {
        return Err(ForceLabError::PhysicsViolation(format!(
            "mass must be finite and positive, got {mass}"
        )));
    }
    Ok(mass)
}

pub(crate) fn ensure_finite(value: f64, quantity: &'static str) -> ForceLabResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ForceLabError::NonFinite { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcelab_types::scenario::{
        AppliedForce, EquilibriumRequest, ForceFunctionKind, FreeFallRequest, FunctionParameters,
        InclinedPlaneRequest, SuspendedObjectRequest, VariableForcesRequest,
    };

    fn requests() -> Vec<ScenarioRequest> {
        vec![
            ScenarioRequest::InclinedPlane(InclinedPlaneRequest {
                mass: Some(10.0),
                angle: Some(30.0),
                friction_coefficient: Some(0.2),
            }),
            ScenarioRequest::FreeFall(FreeFallRequest {
                mass: Some(5.0),
                height: Some(20.0),
                air_resistance: Some(4.0),
            }),
            ScenarioRequest::VariableForces(VariableForcesRequest {
                mass: Some(2.0),
                function_kind: Some(ForceFunctionKind::Sinusoidal),
                function_parameters: Some(FunctionParameters::sinusoidal(3.0, 1.5)),
                time_start: Some(0.0),
                time_end: Some(5.0),
                time_step: Some(0.01),
            }),
            ScenarioRequest::Equilibrium(EquilibriumRequest {
                mass: None,
                forces: vec![
                    AppliedForce::new(10.0, 30.0),
                    AppliedForce::new(7.5, 200.0),
                ],
            }),
            ScenarioRequest::SuspendedObject(SuspendedObjectRequest { mass: Some(2.5) }),
        ]
    }

    #[test]
    fn test_dispatch_matches_request_kind() {
        let cfg = EngineConfig::default();
        for req in requests() {
            let result = compute(&req, &cfg).unwrap();
            assert_eq!(result.kind(), req.kind());
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let cfg = EngineConfig::default();
        for req in requests() {
            let first = serde_json::to_string(&compute(&req, &cfg).unwrap()).unwrap();
            let second = serde_json::to_string(&compute(&req, &cfg).unwrap()).unwrap();
            assert_eq!(first, second, "{} not idempotent", req.kind());
        }
    }

    #[test]
    fn test_missing_field_is_domain_fault() {
        let req = ScenarioRequest::InclinedPlane(InclinedPlaneRequest {
            mass: Some(1.0),
            angle: None,
            friction_coefficient: Some(0.1),
        });
        match compute(&req, &EngineConfig::default()) {
            Err(ForceLabError::MissingField { scenario, field }) => {
                assert_eq!(scenario, "inclinedPlane");
                assert_eq!(field, "angle");
            }
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_checked_mass_rejects_zero_and_nan() {
        assert!(checked_mass(0.0).is_err());
        assert!(checked_mass(-3.0).is_err());
        assert!(checked_mass(f64::NAN).is_err());
        assert!(checked_mass(f64::INFINITY).is_err());
        assert_eq!(checked_mass(2.5).unwrap(), 2.5);
    }
}
