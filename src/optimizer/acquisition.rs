//! Acquisition score
//!
//! Ranks trials by combining the gap to the target with the predictive
//! uncertainty:
//!
//! - at or above target: $s = \bar{R} - 0.1\,\sigma$ (confident solutions win)
//! - below target: $s = (\bar{R} - R^*) + 0.5\,\sigma$ (uncertain regions get an
//!   exploration bonus)

/// Uncertainty penalty once the target is met
pub const EXPLOITATION_WEIGHT: f64 = 0.1;

/// Uncertainty bonus while below target
pub const EXPLORATION_WEIGHT: f64 = 0.5;

/// Score one trial
#[inline]
pub fn acquisition_score(mean: f64, std: f64, target: f64) -> f64 {
    if mean >= target {
        mean - EXPLOITATION_WEIGHT * std
    } else {
        (mean - target) + EXPLORATION_WEIGHT * std
    }
}
