//! Multiplicative response factors
//!
//! Each factor isolates one physical effect of the removal surrogate:
//!
//! | Factor          | Formula                                              |
//! |-----------------|------------------------------------------------------|
//! | kinetic         | $1 - e^{-k t}$                                       |
//! | pH (high)       | $1 / (1 + e^{-1.5 (pH - 4.5)})$                      |
//! | pH (low)        | $1 / (1 + e^{1.2 (pH - 6.5)})$                       |
//! | pH (insensitive)| $0.85 + 0.15 e^{-0.3 (pH - 6)^2}$                    |
//! | concentration   | $e^{-\delta (C - C_{ref})}$                          |
//! | competition     | $0.92$ if competing species else $1$                 |
//!
//! and the heteroscedastic uncertainty
//!
//! $$\sigma = 2 + 3 (1 - f_{kin}) + 1.5 \cdot |pH - pH_{opt}| / 3$$
//!
//! All functions are full precision; rounding happens at the model boundary.

/// Direction of the pH dependence of a contaminant's removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhResponse {
    /// Removal rises with pH (cationic metals: deprotonated surface)
    FavoredHigh,

    /// Removal falls with pH (oxyanions: protonated surface)
    FavoredLow,

    /// Near-flat with a mild optimum at pH 6
    Insensitive,
}

impl PhResponse {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            PhResponse::FavoredHigh => "favored at high pH",
            PhResponse::FavoredLow => "favored at low pH",
            PhResponse::Insensitive => "pH-insensitive",
        }
    }
}

/// Discount applied when competing species occupy adsorption sites
pub const COMPETITION_PENALTY: f64 = 0.92;

/// Saturating uptake kinetics, 0 at t = 0 and → 1 as t → ∞
#[inline]
pub fn kinetic_factor(rate_constant: f64, contact_time: f64) -> f64 {
    1.0 - (-rate_constant * contact_time).exp()
}

/// pH dependence selected by the contaminant's response direction
#[inline]
pub fn ph_factor(response: PhResponse, ph: f64) -> f64 {
    match response {
        PhResponse::FavoredHigh => 1.0 / (1.0 + (-1.5 * (ph - 4.5)).exp()),
        PhResponse::FavoredLow => 1.0 / (1.0 + (1.2 * (ph - 6.5)).exp()),
        PhResponse::Insensitive => {
            let offset = ph - 6.0;
            0.85 + 0.15 * (-0.3 * offset * offset).exp()
        }
    }
}

/// Load dependence relative to the contaminant's reference concentration
///
/// Unclamped: exceeds 1 below the reference concentration.
#[inline]
pub fn concentration_factor(decay_constant: f64, concentration: f64, reference: f64) -> f64 {
    (-decay_constant * (concentration - reference)).exp()
}

/// Fixed discount for competing species
#[inline]
pub fn competition_penalty(competition: bool) -> f64 {
    if competition {
        COMPETITION_PENALTY
    } else {
        1.0
    }
}

/// Predictive standard deviation
///
/// Larger before the kinetics resolve and away from the material's pH optimum.
#[inline]
pub fn uncertainty(kinetic: f64, ph: f64, ph_optimum: f64) -> f64 {
    2.0 + 3.0 * (1.0 - kinetic) + 1.5 * (ph - ph_optimum).abs() / 3.0
}

// =================================================================================================
// Tests
// =================================================================================================
