// ─────────────────────────────────────────────────────────────────────
// ForceLab — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Gravitational acceleration (m/s²) used by the classroom scenarios.
/// NOTE: deliberately 9.8, not the CODATA 9.80665. Override via config.
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Absolute tolerance on both net force components for equilibrium (N).
pub const EQUILIBRIUM_TOLERANCE: f64 = 0.01;

/// Upper bound on accepted mass (kg).
pub const MAX_MASS_KG: f64 = 1_000_000.0;

/// Upper bound on accepted drop height (m).
pub const MAX_HEIGHT_M: f64 = 1_000_000.0;

/// Upper bound on accepted force magnitudes, air resistance included (N).
pub const MAX_FORCE_N: f64 = 1_000_000.0;

/// Upper bound on integration window endpoints (s).
pub const MAX_TIME_S: f64 = 3600.0;

/// Inclined plane angles are restricted to the first quadrant (deg).
pub const INCLINE_MAX_ANGLE_DEG: f64 = 90.0;

/// Applied force directions may point anywhere on the circle (deg).
pub const FORCE_MAX_ANGLE_DEG: f64 = 360.0;

/// Integration window used when a request omits its time fields (s).
pub const DEFAULT_TIME_START_S: f64 = 0.0;
pub const DEFAULT_TIME_END_S: f64 = 10.0;
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;

/// Hard cap on Euler samples per request.
pub const MAX_INTEGRATION_SAMPLES: usize = 1_000_000;

/// Relative slack added to `span / step` before flooring the step count,
/// so that e.g. `1.0 / 0.1 = 9.999999999999998` still yields 10 steps.
pub const STEP_COUNT_SLACK: f64 = 1e-9;
