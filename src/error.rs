//! Error types
//!
//! Prediction itself never fails: unknown identifiers produce the documented
//! fallback result. Errors only come from the strict entry points
//! ([`try_predict`](crate::models::SurrogateModel::try_predict), registry
//! construction) and from validating optimizer inputs.

use thiserror::Error;

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, AdsorbError>;

/// Unified error type for adsorb-rs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdsorbError {
    /// Material identifier not present in the registry
    #[error("unknown material '{0}'")]
    UnknownMaterial(String),

    /// Contaminant identifier not present in the registry
    #[error("unknown contaminant '{0}'")]
    UnknownContaminant(String),

    /// Two profiles share the same identifier
    #[error("duplicate registry identifier '{0}'")]
    DuplicateId(String),

    /// A `(min, max)` range is inverted or not finite
    #[error("invalid {parameter} range [{min}, {max}]")]
    InvalidRange {
        parameter: &'static str,
        min: f64,
        max: f64,
    },

    /// A material or contaminant profile has unusable coefficients
    #[error("invalid profile '{id}': {reason}")]
    InvalidProfile {
        id: String,
        reason: String,
    },

    /// Search configuration or problem is unusable
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl AdsorbError {
    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        AdsorbError::InvalidConfiguration(message.into())
    }

    /// Creates a profile error.
    pub fn profile(id: &str, reason: impl Into<String>) -> Self {
        AdsorbError::InvalidProfile {
            id: id.to_string(),
            reason: reason.into(),
        }
    }
}
