//! Removal model traits and types
//!
//! This module defines the core API shared by every removal model:
//! - `OperatingConditions`: the numeric inputs of one prediction
//! - `PredictionResult`: boundary-rounded mean removal and uncertainty
//! - `RemovalModel`: trait for all removal models

// =================================================================================================
// Operating conditions
// =================================================================================================

/// Operating point of a batch adsorption run
///
/// Values are not validated: out-of-range inputs are evaluated as given.
/// Inputs are expected to be real numbers; a NaN field propagates to a NaN
/// mean, since clamping does not apply to NaN.
///
/// # Example
/// ```
/// use adsorb_rs::physics::OperatingConditions;
///
/// let conditions = OperatingConditions::new(6.0, 10.0, 15.0).with_competition(true);
/// assert!(conditions.competition);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingConditions {
    /// Initial solution pH
    pub ph: f64,

    /// Initial contaminant concentration (mg/L)
    pub concentration: f64,

    /// Contact time (min)
    pub contact_time: f64,

    /// Competing ionic species present in solution
    pub competition: bool,
}

impl OperatingConditions {
    /// Create conditions without competing species
    pub fn new(ph: f64, concentration: f64, contact_time: f64) -> Self {
        Self {
            ph,
            concentration,
            contact_time,
            competition: false,
        }
    }

    /// Set the competition flag
    pub fn with_competition(mut self, competition: bool) -> Self {
        self.competition = competition;
        self
    }

    /// Same conditions at another pH
    pub fn at_ph(mut self, ph: f64) -> Self {
        self.ph = ph;
        self
    }

    /// Same conditions at another concentration
    pub fn at_concentration(mut self, concentration: f64) -> Self {
        self.concentration = concentration;
        self
    }

    /// Same conditions at another contact time
    pub fn at_contact_time(mut self, contact_time: f64) -> Self {
        self.contact_time = contact_time;
        self
    }
}

// =================================================================================================
// Prediction result
// =================================================================================================

/// Mean removal returned for identifiers missing from the registry
pub const FALLBACK_MEAN: f64 = 0.0;

/// Standard deviation returned for identifiers missing from the registry
pub const FALLBACK_STD: f64 = 5.0;

/// Round to two decimals (the presentation contract of every boundary value)
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Predicted removal at one operating point
///
/// `mean` is a percentage in [0, 100] and `std` is strictly positive.
/// Both are rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictionResult {
    /// Mean removal (%)
    pub mean: f64,

    /// Standard deviation of the removal (%)
    pub std: f64,
}

impl PredictionResult {
    /// Round full-precision values at the boundary
    pub fn rounded(mean: f64, std: f64) -> Self {
        Self {
            mean: round2(mean),
            std: round2(std),
        }
    }

    /// Result for unresolved material or contaminant identifiers
    ///
    /// A resolved pair can produce the same values, e.g. a material without
    /// synergy at zero contact time and its pH optimum. Equality with this
    /// result does not tell whether the identifiers were found. Use
    /// [`SurrogateModel::evaluate`](crate::models::SurrogateModel::evaluate) or
    /// [`SurrogateModel::try_predict`](crate::models::SurrogateModel::try_predict)
    /// for that.
    pub fn fallback() -> Self {
        Self {
            mean: FALLBACK_MEAN,
            std: FALLBACK_STD,
        }
    }
}

// =================================================================================================
// Removal model trait
// =================================================================================================

/// Trait for removal models
///
/// # Responsibility
/// Maps a (material, contaminant, conditions) triple to a prediction.
/// Consumers (optimizer, attribution) only ever talk to this trait, so a
/// test double or a future fitted model can be swapped in.
///
/// # Contract
/// - Total: unknown identifiers yield [`PredictionResult::fallback`], never a panic
/// - Pure: identical inputs give bit-identical outputs
pub trait RemovalModel: Send + Sync {
    /// Predict removal for a material/contaminant pair at given conditions
    ///
    /// # Arguments
    /// * `material` - Adsorbent identifier
    /// * `contaminant` - Contaminant identifier
    /// * `conditions` - Operating point
    fn predict(
        &self,
        material: &str,
        contaminant: &str,
        conditions: &OperatingConditions,
    ) -> PredictionResult;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Description of the model (option)
    fn description(&self) -> Option<&str> {
        None
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(91.994541), 91.99);
        assert_eq!(round2(2.0135), 2.01);
        assert_eq!(round2(-3.2), -3.2);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_fallback() {
        let fallback = PredictionResult::fallback();
        assert_eq!(fallback.mean, 0.0);
        assert_eq!(fallback.std, 5.0);
        assert_eq!(PredictionResult::rounded(0.0, 5.001), fallback);
        assert_ne!(PredictionResult::rounded(0.0, 5.01), fallback);
    }

    #[test]
    fn test_conditions_builders() {
        let base = OperatingConditions::new(6.0, 10.0, 15.0);
        assert!(!base.competition);

        let moved = base.at_ph(3.0).at_concentration(25.0).at_contact_time(1.0);
        assert_eq!(moved.ph, 3.0);
        assert_eq!(moved.concentration, 25.0);
        assert_eq!(moved.contact_time, 1.0);

        // builders copy, the original stays put
        assert_eq!(base.ph, 6.0);
    }
}
