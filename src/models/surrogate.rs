//! Closed-form removal surrogate
//!
//! # Model equations
//!
//! For material $m$ and contaminant $c$ at operating point $(pH, C, t)$:
//!
//! $$R_{raw} = Q_m \cdot f_{kin}(t) \cdot f_{pH}(pH) \cdot f_C(C) \cdot \mu_c \cdot f_{comp} + S_m$$
//!
//! $$\bar{R} = \text{clamp}(R_{raw}, 0, 100)$$
//!
//! $$\sigma = 2 + 3 (1 - f_{kin}) + 1.5 \cdot |pH - pH_{opt,m}| / 3$$
//!
//! See [`crate::physics::factors`] for the individual factors.
//!
//! # Precision
//!
//! [`SurrogateModel::evaluate`] keeps full precision and exposes every factor.
//! [`RemovalModel::predict`] rounds mean and std to two decimals at the
//! boundary.
//!
//! # Unknown identifiers
//!
//! `predict` never fails: an unknown material or contaminant yields the
//! fallback `{mean: 0, std: 5}`. [`SurrogateModel::try_predict`] is the strict
//! variant for callers that prefer an error.
//!
//! # Example
//!
//! ```rust
//! use adsorb_rs::models::SurrogateModel;
//! use adsorb_rs::physics::{OperatingConditions, RemovalModel};
//!
//! let model = SurrogateModel::builtin();
//! let conditions = OperatingConditions::new(6.0, 5.0, 30.0);
//!
//! let prediction = model.predict("mof_biochar", "pb", &conditions);
//! assert_eq!(prediction.mean, 91.99);
//! assert_eq!(prediction.std, 2.01);
//!
//! let breakdown = model.evaluate("mof_biochar", "pb", &conditions).unwrap();
//! assert!((breakdown.kinetic - 0.9955).abs() < 1e-4);
//! ```

use std::sync::Arc;

use crate::error::Result;
use crate::models::contaminant::ContaminantProfile;
use crate::models::material::MaterialProfile;
use crate::models::registry::Registry;
use crate::physics::factors::{
    competition_penalty,
    concentration_factor,
    kinetic_factor,
    ph_factor,
    uncertainty,
};
use crate::physics::{OperatingConditions, PredictionResult, RemovalModel};

// =================================================================================================
// Removal breakdown
// =================================================================================================

/// Full-precision evaluation of the surrogate at one operating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovalBreakdown {
    /// Kinetic factor, in [0, 1) for non-negative times
    pub kinetic: f64,

    /// pH factor
    pub ph: f64,

    /// Concentration factor (may exceed 1)
    pub concentration: f64,

    /// Competition penalty (0.92 or 1)
    pub competition: f64,

    /// Removal before clamping
    pub raw_removal: f64,

    /// Removal clamped to [0, 100]
    pub mean: f64,

    /// Standard deviation
    pub std: f64,
}

impl RemovalBreakdown {
    /// Round at the boundary
    pub fn to_prediction(&self) -> PredictionResult {
        PredictionResult::rounded(self.mean, self.std)
    }
}

// =================================================================================================
// Surrogate model
// =================================================================================================

/// Deterministic closed-form removal surrogate over a [`Registry`]
#[derive(Debug, Clone)]
pub struct SurrogateModel {
    registry: Arc<Registry>,
}

impl SurrogateModel {
    /// Create a model over a custom registry
    pub fn new(registry: Registry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// Create a model over the built-in catalogue
    pub fn builtin() -> Self {
        Self::new(Registry::builtin())
    }

    /// Underlying registry
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Evaluate the surrogate for resolved profiles
    ///
    /// Computation order: kinetic, pH, concentration, competition, raw
    /// removal, clamp, uncertainty.
    pub fn breakdown(
        material: &MaterialProfile,
        contaminant: &ContaminantProfile,
        conditions: &OperatingConditions,
    ) -> RemovalBreakdown {
        let kinetic = kinetic_factor(material.rate_constant, conditions.contact_time);
        let ph = ph_factor(contaminant.ph_response, conditions.ph);
        let concentration = concentration_factor(
            material.decay_constant,
            conditions.concentration,
            contaminant.reference_concentration,
        );
        let competition = competition_penalty(conditions.competition);

        let raw_removal = material.base_capacity
            * kinetic
            * ph
            * concentration
            * contaminant.optimum_multiplier
            * competition
            + material.synergy_bonus;

        RemovalBreakdown {
            kinetic,
            ph,
            concentration,
            competition,
            raw_removal,
            mean: raw_removal.clamp(0.0, 100.0),
            std: uncertainty(kinetic, conditions.ph, material.ph_optimum),
        }
    }

    /// Full-precision evaluation, `None` for unknown identifiers
    pub fn evaluate(
        &self,
        material: &str,
        contaminant: &str,
        conditions: &OperatingConditions,
    ) -> Option<RemovalBreakdown> {
        let material = self.registry.material(material)?;
        let contaminant = self.registry.contaminant(contaminant)?;
        Some(Self::breakdown(material, contaminant, conditions))
    }

    /// Strict prediction that reports unknown identifiers
    ///
    /// Results for known identifiers are identical to [`RemovalModel::predict`].
    pub fn try_predict(
        &self,
        material: &str,
        contaminant: &str,
        conditions: &OperatingConditions,
    ) -> Result<PredictionResult> {
        let material = self.registry.require_material(material)?;
        let contaminant = self.registry.require_contaminant(contaminant)?;
        Ok(Self::breakdown(material, contaminant, conditions).to_prediction())
    }
}

impl Default for SurrogateModel {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RemovalModel for SurrogateModel {
    fn predict(
        &self,
        material: &str,
        contaminant: &str,
        conditions: &OperatingConditions,
    ) -> PredictionResult {
        match self.evaluate(material, contaminant, conditions) {
            Some(breakdown) => breakdown.to_prediction(),
            None => {
                log::warn!(
                    "Unresolved pair ({material}, {contaminant}). Using fallback prediction."
                );
                PredictionResult::fallback()
            }
        }
    }

    fn name(&self) -> &str {
        "Closed-form adsorption surrogate"
    }

    fn description(&self) -> Option<&str> {
        Some(
            "Saturating kinetics times logistic pH response times exponential \
             load decay, with additive synergy and heteroscedastic uncertainty.",
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
