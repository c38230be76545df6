//! Operating-condition optimizer
//!
//! This module searches the operating space (pH, contact time,
//! concentration) of a material/contaminant pair for conditions reaching a
//! removal target.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Problem** (`SearchProblem`) - WHAT to optimise
//!    - Material and contaminant identifiers
//!    - Target removal
//!    - Search space (three ranges)
//!
//! 2. **Configuration** (`SearchConfiguration`) - HOW MUCH
//!    - Fixed trial budget
//!    - Optional seed of the random source
//!
//! 3. **Optimizer** (`Optimizer` trait) - The method
//!    - Samples, queries the model, scores
//!    - Returns best trial plus history
//!
//! # Module Organization
//!
//! - **`traits`**: `Optimizer`, `SearchConfiguration`, samples and results
//! - **`space`**: `ParameterRange` and `SearchSpace`
//! - **`problem`**: `SearchProblem`
//! - **`acquisition`**: the trial score
//! - **`methods`**: `RandomSearch`
//!
//! # Quick Start Example
//!
//! ```rust
//! use adsorb_rs::models::SurrogateModel;
//! use adsorb_rs::optimizer::{
//!     Optimizer, RandomSearch, SearchConfiguration, SearchProblem, SearchSpace,
//! };
//!
//! let model = SurrogateModel::builtin();
//!
//! // 1. WHAT: reach 95% lead removal on the composite
//! let space = SearchSpace::new((4.0, 8.0), (5.0, 30.0), (1.0, 20.0));
//! let problem = SearchProblem::new("pb", "mof_biochar", 95.0, space);
//!
//! // 2. HOW MUCH: 100 reproducible trials
//! let config = SearchConfiguration::new(100).with_seed(2024);
//!
//! // 3. Run
//! let result = RandomSearch::new().search(&model, &problem, &config).unwrap();
//! println!("best: pH {:.2}, {:.1} min -> {}%", result.best.ph, result.best.contact_time, result.best.mean);
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod space;
mod problem;
pub mod acquisition;
mod methods;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without requiring a mutex on every
// search. Relaxed ordering is sufficient: the value is a performance hint,
// not a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of trials above which a search evaluates on rayon.
///
/// A single surrogate evaluation is a handful of `exp` calls; below a few
/// hundred trials the pool dispatch costs more than it saves.
const DEFAULT_PARALLEL_THRESHOLD: usize = 512;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// Searches with more trials than this value evaluate them in parallel,
/// but only when the crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use adsorb_rs::optimizer::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use adsorb_rs::optimizer::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(2048);
/// assert_eq!(parallel_threshold(), 2048);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

/// Serialises threshold changes across concurrently running tests.
#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Holds a lock for its whole lifetime, so
/// two guards never interleave.
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self { previous, _lock: lock }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    OptimizationResult,
    OptimizationSample,
    Optimizer,
    SearchConfiguration,
};

pub use space::{ParameterRange, SamplePoint, SearchSpace};
pub use problem::SearchProblem;
pub use acquisition::acquisition_score;

pub use methods::RandomSearch;

// =================================================================================================
// Tests
// =================================================================================================
