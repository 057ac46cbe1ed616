// ─────────────────────────────────────────────────────────────────────
// ForceLab — Property-Based Tests (proptest) for forcelab-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for forcelab-types using proptest.
//!
//! Covers: angle range membership, motion direction sign convention,
//! request parsing of arbitrary in-range payloads.

use forcelab_types::config::{AngleRange, EngineConfig};
use forcelab_types::scenario::{ScenarioKind, ScenarioRequest};
use forcelab_types::state::MotionDirection;
use proptest::prelude::*;

// ── AngleRange ───────────────────────────────────────────────────────

proptest! {
    /// Every angle inside the default incline range is accepted.
    #[test]
    fn incline_range_accepts_first_quadrant(angle in 0.0f64..=90.0) {
        let cfg = EngineConfig::default();
        prop_assert!(cfg.limits.incline_angle.contains(angle));
    }

    /// Angles past a right angle are refused for inclines but fine for forces.
    #[test]
    fn incline_range_is_narrower_than_force_range(angle in 90.001f64..360.0) {
        let cfg = EngineConfig::default();
        prop_assert!(!cfg.limits.incline_angle.contains(angle));
        prop_assert!(cfg.limits.force_angle.contains(angle));
    }

    /// Negative angles are refused by any range starting at zero.
    #[test]
    fn negative_angles_rejected(angle in -1e6f64..-1e-9, max in 1.0f64..720.0) {
        prop_assert!(!AngleRange::new(0.0, max).contains(angle));
    }
}

// ── MotionDirection ──────────────────────────────────────────────────

proptest! {
    /// Direction follows the sign of the acceleration.
    #[test]
    fn direction_follows_sign(a in -1e6f64..1e6) {
        let dir = MotionDirection::from_acceleration(a);
        if a > 0.0 {
            prop_assert_eq!(dir, MotionDirection::Downward);
        } else if a < 0.0 {
            prop_assert_eq!(dir, MotionDirection::Upward);
        } else {
            prop_assert_eq!(dir, MotionDirection::Stationary);
        }
    }
}

// ── Request Parsing ──────────────────────────────────────────────────

proptest! {
    /// Numeric fields survive JSON parsing (to within float parsing error).
    #[test]
    fn free_fall_request_fields_preserved(
        mass in 0.001f64..1e6,
        height in 0.0f64..1e6,
    ) {
        let json = format!(
            r#"{{"kind": "freeFall", "mass": {mass:?}, "height": {height:?}}}"#
        );
        let req = ScenarioRequest::from_json(&json).unwrap();
        prop_assert_eq!(req.kind(), ScenarioKind::FreeFall);
        let parsed_mass = req.mass().unwrap();
        prop_assert!((parsed_mass - mass).abs() <= 1e-12 * mass);
        let ScenarioRequest::FreeFall(r) = req else {
            return Err(TestCaseError::fail("wrong variant"));
        };
        let parsed_height = r.height.unwrap();
        prop_assert!((parsed_height - height).abs() <= 1e-12 * height.max(1.0));
        prop_assert_eq!(r.air_resistance, None);
    }
}
