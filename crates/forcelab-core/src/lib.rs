// ─────────────────────────────────────────────────────────────────────
// ForceLab — Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Validation and calculation engine for the classroom mechanics scenarios.
//!
//! Callers run [`validator::validate`] first and only call
//! [`engine::compute`] on a request that produced no errors.

pub mod engine;
pub mod equilibrium;
pub mod explanation;
pub mod free_fall;
pub mod inclined_plane;
pub mod report;
pub mod suspended;
pub mod validator;
pub mod variable_forces;

pub use engine::compute;
pub use validator::validate;
