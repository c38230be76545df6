//! Adsorbent material profiles
//!
//! # Coefficients
//!
//! | Parameter        | Symbol        | Effect                                    |
//! |------------------|---------------|-------------------------------------------|
//! | `base_capacity`  | $Q$           | Removal ceiling on a 0–100 scale          |
//! | `rate_constant`  | $k$           | Speed of the saturating uptake            |
//! | `ph_optimum`     | $pH_{opt}$    | Centre of the uncertainty well            |
//! | `ph_sensitivity` | -             | Catalogue metadata, not used in the model |
//! | `decay_constant` | $\delta$      | Loss of efficiency with concentration     |
//! | `synergy_bonus`  | $S$           | Additive composite enhancement            |

use crate::error::{AdsorbError, Result};

/// Identifier of the reference adsorbent (attribution baseline)
pub const REFERENCE_MATERIAL: &str = "mof_biochar";

/// Fixed coefficients of an adsorbent material
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialProfile {
    /// Registry key
    pub id: String,

    /// Display name
    pub name: String,

    /// Removal ceiling \[%\], in [0, 100]
    pub base_capacity: f64,

    /// Pseudo-first-order rate constant \[1/min\], must be $> 0$
    pub rate_constant: f64,

    /// pH of least predictive uncertainty
    pub ph_optimum: f64,

    /// Relative pH sensitivity (catalogue metadata)
    pub ph_sensitivity: f64,

    /// Concentration decay constant \[L/mg\], must be $> 0$
    pub decay_constant: f64,

    /// Additive synergy bonus \[%\], may be 0
    pub synergy_bonus: f64,
}

impl MaterialProfile {
    /// Creates a new material profile
    ///
    /// This constructor does not validate. Call [`validate`](Self::validate)
    /// or go through [`Registry::from_profiles`](crate::models::Registry::from_profiles).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_capacity: f64,
        rate_constant: f64,
        ph_optimum: f64,
        ph_sensitivity: f64,
        decay_constant: f64,
        synergy_bonus: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            base_capacity,
            rate_constant,
            ph_optimum,
            ph_sensitivity,
            decay_constant,
            synergy_bonus,
        }
    }

    /// Validates the physical constraints of the coefficients
    ///
    /// # Rules
    ///
    /// - $0 \leq Q \leq 100$
    /// - $k > 0$
    /// - $\delta > 0$
    /// - every coefficient finite
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.base_capacity,
            self.rate_constant,
            self.ph_optimum,
            self.ph_sensitivity,
            self.decay_constant,
            self.synergy_bonus,
        ]
        .iter()
        .all(|value| value.is_finite());

        if !finite {
            return Err(AdsorbError::profile(&self.id, "non-finite coefficients"));
        }
        if !(0.0..=100.0).contains(&self.base_capacity) {
            return Err(AdsorbError::profile(
                &self.id,
                format!("base capacity must be in [0, 100], got {}", self.base_capacity),
            ));
        }
        if self.rate_constant <= 0.0 {
            return Err(AdsorbError::profile(
                &self.id,
                format!("rate constant must be positive, got {}", self.rate_constant),
            ));
        }
        if self.decay_constant <= 0.0 {
            return Err(AdsorbError::profile(
                &self.id,
                format!("decay constant must be positive, got {}", self.decay_constant),
            ));
        }
        Ok(())
    }
}

/// The built-in adsorbent catalogue
pub fn builtin_materials() -> Vec<MaterialProfile> {
    vec![
        MaterialProfile::new(REFERENCE_MATERIAL, "MOF@Biochar composite", 92.0, 0.18, 6.0, 0.8, 0.012, 5.0),
        MaterialProfile::new("biochar", "Pristine biochar", 68.0, 0.09, 6.5, 0.6, 0.020, 0.0),
        MaterialProfile::new("activated_carbon", "Activated carbon", 78.0, 0.12, 6.0, 0.5, 0.015, 0.0),
        MaterialProfile::new("zeolite", "Natural zeolite", 60.0, 0.10, 7.0, 0.7, 0.025, 0.0),
        MaterialProfile::new("zif8", "ZIF-8 framework", 85.0, 0.15, 6.5, 0.9, 0.014, 2.0),
    ]
}
