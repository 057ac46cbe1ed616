use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain faults raised by the calculators. These signal caller bugs or
/// unusable configuration, not bad user input.
#[derive(Error, Debug)]
pub enum ForceLabError {
    #[error("Missing required field '{field}' for {scenario} scenario")]
    MissingField {
        scenario: &'static str,
        field: &'static str,
    },

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Non-finite result for {quantity}")]
    NonFinite { quantity: &'static str },

    #[error("Integration needs {samples} samples, limit is {limit}")]
    StepLimitExceeded { samples: usize, limit: usize },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Explanation service error: {0}")]
    Explanation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ForceLabResult<T> = Result<T, ForceLabError>;

/// A user-facing input problem, tagged with the path of the offending
/// field (`mass`, `forces[2].magnitude`, `functionParameters.slope`).
/// Returned as data by the validator, never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
