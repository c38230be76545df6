//! Optimizer traits and types
//!
//! # Design Philosophy
//!
//! Mirrors the model side of the crate:
//! - `SearchProblem` says WHAT to optimise
//! - `SearchConfiguration` says HOW MUCH budget and which random source
//! - `Optimizer` implementations provide the method
//! - `OptimizationResult` carries the best trial and the full history

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{AdsorbError, Result};
use crate::optimizer::problem::SearchProblem;
use crate::physics::RemovalModel;

// =================================================================================================
// Configuration
// =================================================================================================

/// Budget and random source of a search
///
/// # Examples
///
/// ```rust
/// use adsorb_rs::optimizer::SearchConfiguration;
///
/// // 50 trials, reproducible
/// let config = SearchConfiguration::new(50).with_seed(42);
/// assert!(config.validate().is_ok());
///
/// // zero trials is rejected
/// assert!(SearchConfiguration::new(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfiguration {
    /// Number of trials (fixed budget, no early stop)
    pub iterations: usize,

    /// Seed of the random source, entropy when `None`
    pub seed: Option<u64>,
}

impl SearchConfiguration {
    /// Configuration with entropy-seeded sampling
    pub fn new(iterations: usize) -> Self {
        Self { iterations, seed: None }
    }

    /// Make the search reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// At least one trial is required
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(AdsorbError::configuration("iteration count must be positive"));
        }
        Ok(())
    }

    /// Random source selected by this configuration
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for SearchConfiguration {
    fn default() -> Self {
        Self::new(30)
    }
}

// =================================================================================================
// Samples and results
// =================================================================================================

/// One scored trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationSample {
    /// 1-based trial index
    pub iteration: usize,

    /// Sampled pH
    pub ph: f64,

    /// Sampled contact time (min)
    pub contact_time: f64,

    /// Sampled concentration (mg/L)
    pub concentration: f64,

    /// Predicted mean removal (%)
    pub mean: f64,

    /// Predicted standard deviation (%)
    pub std: f64,

    /// Acquisition score
    pub score: f64,
}

/// Outcome of a search
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationResult {
    /// Highest-scoring trial, earliest one on ties
    pub best: OptimizationSample,

    /// Every trial in iteration order
    pub history: Vec<OptimizationSample>,

    /// Target removal the trials were scored against
    pub target_removal: f64,
}

impl OptimizationResult {
    /// Reduce a non-empty history to its best trial
    ///
    /// A trial replaces the running best only on a strictly greater score.
    /// Returns `None` for an empty history.
    pub fn from_history(history: Vec<OptimizationSample>, target_removal: f64) -> Option<Self> {
        let mut trials = history.iter();
        let mut best = *trials.next()?;

        for sample in trials {
            if sample.score > best.score {
                log::trace!(
                    "Trial {} improves best score {:.4} -> {:.4}",
                    sample.iteration,
                    best.score,
                    sample.score
                );
                best = *sample;
            }
        }

        Some(Self {
            best,
            history,
            target_removal,
        })
    }

    /// Number of trials
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false for results produced by an optimizer
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Trials whose mean removal meets the target
    pub fn feasible(&self) -> Vec<&OptimizationSample> {
        self.history
            .iter()
            .filter(|sample| sample.mean >= self.target_removal)
            .collect()
    }

    /// Whether the best trial meets the target
    pub fn target_met(&self) -> bool {
        self.best.mean >= self.target_removal
    }
}

// =================================================================================================
// Optimizer trait
// =================================================================================================

/// Trait for parameter optimizers
///
/// # Responsibility
/// Explores a problem's search space by querying a [`RemovalModel`].
/// Does NOT compute removals itself (that's the model's job).
pub trait Optimizer {
    /// Run a search
    ///
    /// # Errors
    /// Invalid problem (non-finite target, bad range) or configuration
    /// (zero iterations).
    fn search(
        &self,
        model: &dyn RemovalModel,
        problem: &SearchProblem,
        config: &SearchConfiguration,
    ) -> Result<OptimizationResult>;

    /// Name of the method (used to display and logging)
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
