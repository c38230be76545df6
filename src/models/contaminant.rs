//! Contaminant profiles

use crate::error::{AdsorbError, Result};
use crate::physics::PhResponse;

/// Identifier of the reference contaminant (attribution baseline)
pub const REFERENCE_CONTAMINANT: &str = "pb";

/// Fixed coefficients of a contaminant
#[derive(Debug, Clone, PartialEq)]
pub struct ContaminantProfile {
    /// Registry key
    pub id: String,

    /// Display name
    pub name: String,

    /// Direction of the pH dependence
    pub ph_response: PhResponse,

    /// Multiplier at optimum conditions, must be $> 0$
    pub optimum_multiplier: f64,

    /// Concentration at which the concentration factor equals 1 \[mg/L\]
    pub reference_concentration: f64,
}

impl ContaminantProfile {
    /// Creates a new contaminant profile (not validated)
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        ph_response: PhResponse,
        optimum_multiplier: f64,
        reference_concentration: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ph_response,
            optimum_multiplier,
            reference_concentration,
        }
    }

    /// Validates the coefficients
    pub fn validate(&self) -> Result<()> {
        if !self.optimum_multiplier.is_finite() || self.optimum_multiplier <= 0.0 {
            return Err(AdsorbError::profile(
                &self.id,
                format!("optimum multiplier must be positive, got {}", self.optimum_multiplier),
            ));
        }
        if !self.reference_concentration.is_finite() {
            return Err(AdsorbError::profile(&self.id, "reference concentration must be finite"));
        }
        Ok(())
    }
}

/// The built-in contaminant catalogue
///
/// Three heavy metals (practical range 1–40 mg/L) and one antibiotic
/// (up to ~100 mg/L).
pub fn builtin_contaminants() -> Vec<ContaminantProfile> {
    vec![
        ContaminantProfile::new(REFERENCE_CONTAMINANT, "Lead(II)", PhResponse::FavoredHigh, 1.05, 5.0),
        ContaminantProfile::new("cd", "Cadmium(II)", PhResponse::FavoredHigh, 0.95, 5.0),
        ContaminantProfile::new("cr6", "Chromium(VI)", PhResponse::FavoredLow, 0.90, 5.0),
        ContaminantProfile::new("tetracycline", "Tetracycline", PhResponse::Insensitive, 1.00, 20.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contaminants() {
        let contaminants = builtin_contaminants();
        assert_eq!(contaminants.len(), 4);
        assert!(contaminants.iter().all(|c| c.validate().is_ok()));

        // one of each pH response is represented
        for response in [PhResponse::FavoredHigh, PhResponse::FavoredLow, PhResponse::Insensitive] {
            assert!(contaminants.iter().any(|c| c.ph_response == response));
        }
    }

    #[test]
    fn test_invalid_multiplier() {
        let contaminant = ContaminantProfile::new("x", "X", PhResponse::Insensitive, -1.0, 5.0);
        assert!(matches!(
            contaminant.validate(),
            Err(AdsorbError::InvalidProfile { ref id, .. }) if id == "x"
        ));
    }
}
