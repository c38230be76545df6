//! Optimization problem definition
//!
//! A problem combines the pair being treated, the removal target and the
//! search space. This is the "WHAT to optimise"; [`SearchConfiguration`]
//! is the "HOW".
//!
//! [`SearchConfiguration`]: crate::optimizer::SearchConfiguration

use crate::error::{AdsorbError, Result};
use crate::optimizer::space::SearchSpace;

/// Optimization problem
///
/// # Example
///
/// ```rust
/// use adsorb_rs::optimizer::{SearchProblem, SearchSpace};
///
/// let problem = SearchProblem::new("cr6", "zif8", 90.0, SearchSpace::default());
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchProblem {
    /// Contaminant identifier
    pub contaminant: String,

    /// Adsorbent identifier
    pub material: String,

    /// Target removal (%)
    pub target_removal: f64,

    /// Explored ranges
    pub space: SearchSpace,
}

impl SearchProblem {
    /// Create a problem
    pub fn new(
        contaminant: impl Into<String>,
        material: impl Into<String>,
        target_removal: f64,
        space: SearchSpace,
    ) -> Self {
        Self {
            contaminant: contaminant.into(),
            material: material.into(),
            target_removal,
            space,
        }
    }

    /// Check the target is finite and the space is well formed
    ///
    /// Identifiers are not checked: unknown pairs simply score the fallback
    /// prediction on every trial.
    pub fn validate(&self) -> Result<()> {
        if !self.target_removal.is_finite() {
            return Err(AdsorbError::configuration(format!(
                "target removal must be finite, got {}",
                self.target_removal
            )));
        }
        self.space.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_validation() {
        let problem = SearchProblem::new("pb", "biochar", 95.0, SearchSpace::default());
        assert!(problem.validate().is_ok());

        let problem = SearchProblem::new("pb", "biochar", f64::NAN, SearchSpace::default());
        assert!(matches!(problem.validate(), Err(AdsorbError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_unknown_ids_are_not_rejected() {
        let problem = SearchProblem::new("arsenic", "graphene", 50.0, SearchSpace::default());
        assert!(problem.validate().is_ok());
    }
}
