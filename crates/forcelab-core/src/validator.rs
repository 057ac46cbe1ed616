// ─────────────────────────────────────────────────────────────────────
// ForceLab — Request Validator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-field range checks run before any computation.
//!
//! Every applicable rule runs, so one request can surface several errors.
//! Optional fields are only checked when present; the engine reports
//! fields that are required but absent.

use forcelab_types::config::{EngineConfig, ValidationLimits};
use forcelab_types::error::ValidationError;
use forcelab_types::scenario::{
    EquilibriumRequest, FreeFallRequest, InclinedPlaneRequest, ScenarioRequest,
    VariableForcesRequest,
};
use tracing::debug;

/// Check `request` against the limits in `config`. Empty means valid.
pub fn validate(request: &ScenarioRequest, config: &EngineConfig) -> Vec<ValidationError> {
    let limits = &config.limits;
    let mut errors = Vec::new();

    if let Some(mass) = request.mass() {
        if !is_valid_mass(mass, limits) {
            errors.push(ValidationError::new(
                "mass",
                format!(
                    "Mass must be a positive number no greater than {} kg",
                    limits.max_mass
                ),
            ));
        }
    }

    match request {
        ScenarioRequest::InclinedPlane(r) => validate_inclined_plane(r, limits, &mut errors),
        ScenarioRequest::FreeFall(r) => validate_free_fall(r, limits, &mut errors),
        ScenarioRequest::VariableForces(r) => validate_variable_forces(r, config, &mut errors),
        ScenarioRequest::Equilibrium(r) => validate_equilibrium(r, limits, &mut errors),
        // Mass is the only field, checked above.
        ScenarioRequest::SuspendedObject(_) => {}
    }

    if !errors.is_empty() {
        debug!(scenario = %request.kind(), count = errors.len(), "request rejected");
    }
    errors
}

fn is_valid_mass(mass: f64, limits: &ValidationLimits) -> bool {
    mass.is_finite() && mass > 0.0 && mass <= limits.max_mass
}

fn is_valid_coefficient(mu: f64) -> bool {
    mu.is_finite() && (0.0..=1.0).contains(&mu)
}

fn is_valid_height(height: f64, limits: &ValidationLimits) -> bool {
    height.is_finite() && height >= 0.0 && height <= limits.max_height
}

fn is_valid_time(t: f64, limits: &ValidationLimits) -> bool {
    t.is_finite() && t >= 0.0 && t <= limits.max_time
}

/// Forces have no lower bound; negative magnitudes point the other way.
fn is_valid_force(magnitude: f64, limits: &ValidationLimits) -> bool {
    magnitude.is_finite() && magnitude <= limits.max_force
}

fn validate_inclined_plane(
    r: &InclinedPlaneRequest,
    limits: &ValidationLimits,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(angle) = r.angle {
        let range = limits.incline_angle;
        if !range.contains(angle) {
            errors.push(ValidationError::new(
                "angle",
                format!(
                    "Angle must be between {} and {} degrees",
                    range.min, range.max
                ),
            ));
        }
    }
    if let Some(mu) = r.friction_coefficient {
        if !is_valid_coefficient(mu) {
            errors.push(ValidationError::new(
                "frictionCoefficient",
                "Friction coefficient must be between 0 and 1",
            ));
        }
    }
}

fn validate_free_fall(
    r: &FreeFallRequest,
    limits: &ValidationLimits,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(height) = r.height {
        if !is_valid_height(height, limits) {
            errors.push(ValidationError::new(
                "height",
                format!(
                    "Height must be a non-negative number no greater than {} m",
                    limits.max_height
                ),
            ));
        }
    }
    if let Some(drag) = r.air_resistance {
        if !is_valid_force(drag, limits) {
            errors.push(ValidationError::new(
                "airResistance",
                format!(
                    "Air resistance must be a valid number no greater than {} N",
                    limits.max_force
                ),
            ));
        }
    }
}

fn validate_variable_forces(
    r: &VariableForcesRequest,
    config: &EngineConfig,
    errors: &mut Vec<ValidationError>,
) {
    let limits = &config.limits;
    let window = &config.integration_window;

    if let Some(start) = r.time_start {
        if !is_valid_time(start, limits) {
            errors.push(ValidationError::new(
                "timeStart",
                format!(
                    "Start time must be a non-negative number no greater than {} s",
                    limits.max_time
                ),
            ));
        }
    }
    if let Some(end) = r.time_end {
        if !is_valid_time(end, limits) {
            errors.push(ValidationError::new(
                "timeEnd",
                format!(
                    "End time must be a non-negative number no greater than {} s",
                    limits.max_time
                ),
            ));
        }
    }
    // Absent ends fall back to the configured window, as in the engine.
    let effective_start = r.time_start.unwrap_or(window.start);
    let effective_end = r.time_end.unwrap_or(window.end);
    if effective_start >= effective_end {
        errors.push(ValidationError::new(
            "timeRange",
            format!(
                "Start time ({effective_start} s) must be earlier than end time ({effective_end} s)"
            ),
        ));
    }
    if r.time_end.is_some() && r.time_step.is_none() {
        errors.push(ValidationError::new(
            "timeStep",
            "A time step is required when an end time is given",
        ));
    }
    if let Some(step) = r.time_step {
        let span = effective_end - effective_start;
        if !step.is_finite() || step <= 0.0 || step > span {
            errors.push(ValidationError::new(
                "timeStep",
                "Time step must be positive and no longer than the time range",
            ));
        }
    }

    match r.function_kind {
        None => errors.push(ValidationError::new(
            "functionKind",
            "A force function kind (linear, quadratic or sinusoidal) is required",
        )),
        Some(kind) => match &r.function_parameters {
            None => errors.push(ValidationError::new(
                "functionParameters",
                format!("Parameters are required for the {kind} force function"),
            )),
            Some(params) => {
                for name in kind.parameter_names() {
                    if !params.get(name).is_some_and(f64::is_finite) {
                        errors.push(ValidationError::new(
                            format!("functionParameters.{name}"),
                            format!("A numeric value for '{name}' is required"),
                        ));
                    }
                }
            }
        },
    }
}

fn validate_equilibrium(
    r: &EquilibriumRequest,
    limits: &ValidationLimits,
    errors: &mut Vec<ValidationError>,
) {
    if r.forces.is_empty() {
        errors.push(ValidationError::new(
            "forces",
            "At least one force is required for the equilibrium calculation",
        ));
        return;
    }

    let range = limits.force_angle;
    for (i, force) in r.forces.iter().enumerate() {
        if !is_valid_force(force.magnitude, limits) {
            errors.push(ValidationError::new(
                format!("forces[{i}].magnitude"),
                format!(
                    "Magnitude of force {} must be a valid number no greater than {} N",
                    i + 1,
                    limits.max_force
                ),
            ));
        }
        if !range.contains(force.angle_degrees) {
            errors.push(ValidationError::new(
                format!("forces[{i}].angleDegrees"),
                format!(
                    "Angle of force {} must be between {} and {} degrees",
                    i + 1,
                    range.min,
                    range.max
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forcelab_types::scenario::{
        AppliedForce, ForceFunctionKind, FunctionParameters, SuspendedObjectRequest,
    };

    fn fields(errors: &[ValidationError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    fn incline(mass: f64, angle: f64, mu: f64) -> ScenarioRequest {
        ScenarioRequest::InclinedPlane(InclinedPlaneRequest {
            mass: Some(mass),
            angle: Some(angle),
            friction_coefficient: Some(mu),
        })
    }

    fn variable(r: VariableForcesRequest) -> ScenarioRequest {
        ScenarioRequest::VariableForces(r)
    }

    fn linear_request() -> VariableForcesRequest {
        VariableForcesRequest {
            mass: Some(2.0),
            function_kind: Some(ForceFunctionKind::Linear),
            function_parameters: Some(FunctionParameters::linear(5.0)),
            time_start: Some(0.0),
            time_end: Some(1.0),
            time_step: Some(0.5),
        }
    }

    #[test]
    fn test_valid_incline_has_no_errors() {
        let cfg = EngineConfig::default();
        assert!(validate(&incline(10.0, 30.0, 0.2), &cfg).is_empty());
    }

    #[test]
    fn test_negative_mass_tagged() {
        let errors = validate(&incline(-1.0, 30.0, 0.2), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["mass"]);
    }

    #[test]
    fn test_friction_above_one_tagged() {
        let errors = validate(&incline(10.0, 30.0, 1.5), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["frictionCoefficient"]);
    }

    #[test]
    fn test_no_short_circuit() {
        let errors = validate(&incline(0.0, 120.0, -0.1), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["mass", "angle", "frictionCoefficient"]);
    }

    #[test]
    fn test_incline_angle_limited_to_first_quadrant() {
        let cfg = EngineConfig::default();
        assert!(validate(&incline(1.0, 90.0, 0.0), &cfg).is_empty());
        assert_eq!(fields(&validate(&incline(1.0, 91.0, 0.0), &cfg)), vec!["angle"]);
        assert_eq!(
            fields(&validate(&incline(1.0, f64::NAN, 0.0), &cfg)),
            vec!["angle"]
        );
    }

    #[test]
    fn test_mass_upper_bound() {
        let cfg = EngineConfig::default();
        assert!(validate(&incline(1_000_000.0, 10.0, 0.1), &cfg).is_empty());
        assert_eq!(
            fields(&validate(&incline(1_000_000.5, 10.0, 0.1), &cfg)),
            vec!["mass"]
        );
        assert_eq!(
            fields(&validate(&incline(f64::INFINITY, 10.0, 0.1), &cfg)),
            vec!["mass"]
        );
    }

    #[test]
    fn test_absent_optional_fields_pass() {
        let req = ScenarioRequest::FreeFall(FreeFallRequest::default());
        assert!(validate(&req, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_free_fall_bounds() {
        let req = ScenarioRequest::FreeFall(FreeFallRequest {
            mass: Some(5.0),
            height: Some(-1.0),
            air_resistance: Some(2_000_000.0),
        });
        let errors = validate(&req, &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["height", "airResistance"]);
    }

    #[test]
    fn test_negative_air_resistance_allowed() {
        let req = ScenarioRequest::FreeFall(FreeFallRequest {
            mass: Some(5.0),
            height: Some(10.0),
            air_resistance: Some(-50.0),
        });
        assert!(validate(&req, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_valid_variable_forces() {
        assert!(validate(&variable(linear_request()), &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_inverted_time_range() {
        let req = VariableForcesRequest {
            time_start: Some(5.0),
            time_end: Some(1.0),
            time_step: Some(0.1),
            ..linear_request()
        };
        let errors = validate(&variable(req), &EngineConfig::default());
        // The step is also longer than the (negative) span.
        assert_eq!(fields(&errors), vec!["timeRange", "timeStep"]);
    }

    #[test]
    fn test_end_without_step() {
        let req = VariableForcesRequest {
            time_step: None,
            ..linear_request()
        };
        let errors = validate(&variable(req), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["timeStep"]);
    }

    #[test]
    fn test_step_longer_than_range() {
        let req = VariableForcesRequest {
            time_step: Some(2.0),
            ..linear_request()
        };
        let errors = validate(&variable(req), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["timeStep"]);
    }

    #[test]
    fn test_step_checked_against_default_window() {
        // No explicit window: the engine will use 0..10 s.
        let req = VariableForcesRequest {
            time_start: None,
            time_end: None,
            time_step: Some(5.0),
            ..linear_request()
        };
        assert!(validate(&variable(req.clone()), &EngineConfig::default()).is_empty());
        let req = VariableForcesRequest {
            time_step: Some(11.0),
            ..req
        };
        assert_eq!(
            fields(&validate(&variable(req), &EngineConfig::default())),
            vec!["timeStep"]
        );
    }

    #[test]
    fn test_partial_window_checked_against_default_ends() {
        // Start past the default 10 s end.
        let late_start = VariableForcesRequest {
            time_start: Some(20.0),
            time_end: None,
            time_step: None,
            ..linear_request()
        };
        assert_eq!(
            fields(&validate(&variable(late_start), &EngineConfig::default())),
            vec!["timeRange"]
        );

        // End at the default 0 s start.
        let zero_end = VariableForcesRequest {
            time_start: None,
            time_end: Some(0.0),
            time_step: Some(0.1),
            ..linear_request()
        };
        let errors = validate(&variable(zero_end), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["timeRange", "timeStep"]);

        let inside = VariableForcesRequest {
            time_start: Some(4.0),
            time_end: None,
            time_step: None,
            ..linear_request()
        };
        let req = variable(inside);
        assert!(validate(&req, &EngineConfig::default()).is_empty());
        assert!(crate::compute(&req, &EngineConfig::default()).is_ok());
    }

    #[test]
    fn test_times_out_of_range() {
        let req = VariableForcesRequest {
            time_start: Some(-1.0),
            time_end: Some(4000.0),
            time_step: Some(1.0),
            ..linear_request()
        };
        let errors = validate(&variable(req), &EngineConfig::default());
        assert_eq!(fields(&errors), vec!["timeStart", "timeEnd"]);
    }

    #[test]
    fn test_missing_function_kind() {
        let req = VariableForcesRequest {
            function_kind: None,
            ..linear_request()
        };
        assert_eq!(
            fields(&validate(&variable(req), &EngineConfig::default())),
            vec!["functionKind"]
        );
    }

    #[test]
    fn test_missing_function_parameters() {
        let req = VariableForcesRequest {
            function_parameters: None,
            ..linear_request()
        };
        assert_eq!(
            fields(&validate(&variable(req), &EngineConfig::default())),
            vec!["functionParameters"]
        );
    }

    #[test]
    fn test_missing_quadratic_coefficients_tagged_individually() {
        let req = VariableForcesRequest {
            function_kind: Some(ForceFunctionKind::Quadratic),
            function_parameters: Some(FunctionParameters {
                b: Some(1.0),
                ..Default::default()
            }),
            ..linear_request()
        };
        assert_eq!(
            fields(&validate(&variable(req), &EngineConfig::default())),
            vec!["functionParameters.a", "functionParameters.c"]
        );
    }

    #[test]
    fn test_non_finite_coefficient_rejected() {
        let req = VariableForcesRequest {
            function_kind: Some(ForceFunctionKind::Sinusoidal),
            function_parameters: Some(FunctionParameters::sinusoidal(f64::NAN, 1.0)),
            ..linear_request()
        };
        assert_eq!(
            fields(&validate(&variable(req), &EngineConfig::default())),
            vec!["functionParameters.amplitude"]
        );
    }

    #[test]
    fn test_equilibrium_requires_forces() {
        let req = ScenarioRequest::Equilibrium(EquilibriumRequest::default());
        assert_eq!(fields(&validate(&req, &EngineConfig::default())), vec!["forces"]);
    }

    #[test]
    fn test_equilibrium_errors_tagged_per_index() {
        let req = ScenarioRequest::Equilibrium(EquilibriumRequest {
            mass: None,
            forces: vec![
                AppliedForce::new(10.0, 0.0),
                AppliedForce::new(-5.0, 270.0),
                AppliedForce::new(2e6, 400.0),
            ],
        });
        let errors = validate(&req, &EngineConfig::default());
        assert_eq!(
            fields(&errors),
            vec!["forces[2].magnitude", "forces[2].angleDegrees"]
        );
        assert!(errors[0].message.contains("force 3"));
    }

    #[test]
    fn test_force_angle_allows_full_circle() {
        let req = ScenarioRequest::Equilibrium(EquilibriumRequest {
            mass: None,
            forces: vec![AppliedForce::new(1.0, 359.5)],
        });
        assert!(validate(&req, &EngineConfig::default()).is_empty());
    }

    #[test]
    fn test_suspended_object_checks_mass_only() {
        let ok = ScenarioRequest::SuspendedObject(SuspendedObjectRequest { mass: Some(3.0) });
        assert!(validate(&ok, &EngineConfig::default()).is_empty());
        let bad = ScenarioRequest::SuspendedObject(SuspendedObjectRequest { mass: Some(0.0) });
        assert_eq!(fields(&validate(&bad, &EngineConfig::default())), vec!["mass"]);
    }

    #[test]
    fn test_custom_limits_respected() {
        let mut cfg = EngineConfig::default();
        cfg.limits.max_mass = 100.0;
        assert_eq!(fields(&validate(&incline(150.0, 10.0, 0.1), &cfg)), vec!["mass"]);
    }
}
