//! Fixed-budget random search
//!
//! # Algorithm
//!
//! For each of the `N` trials:
//! 1. Draw pH, contact time and concentration uniformly and independently
//! 2. Predict removal without competing species
//! 3. Score with [`acquisition_score`]
//! 4. Record the trial (1-based index)
//!
//! The best trial is the first one reaching the maximum score. There is no
//! convergence test, no early termination and no adaptive sampling: every
//! trial is independent of the others.
//!
//! # Parallel evaluation
//!
//! All draws are taken sequentially from the random source first, so the
//! sampled points only depend on the seed. Model evaluation is then
//! dispatched to rayon when the crate is compiled with the `parallel`
//! feature and the budget exceeds [`parallel_threshold()`]. Results are
//! collected in trial order, so the history and the best trial are identical
//! on both paths.
//!
//! # Example
//!
//! ```rust
//! use adsorb_rs::models::SurrogateModel;
//! use adsorb_rs::optimizer::{Optimizer, RandomSearch, SearchConfiguration, SearchProblem, SearchSpace};
//!
//! let model = SurrogateModel::builtin();
//! let problem = SearchProblem::new("pb", "mof_biochar", 90.0, SearchSpace::default());
//! let config = SearchConfiguration::new(40).with_seed(7);
//!
//! let result = RandomSearch::new().search(&model, &problem, &config).unwrap();
//! assert_eq!(result.history.len(), 40);
//! assert!(result.history.iter().all(|trial| trial.score <= result.best.score));
//! ```

use rand::Rng;

use crate::error::{AdsorbError, Result};
use crate::optimizer::acquisition::acquisition_score;
use crate::optimizer::parallel_threshold;
use crate::optimizer::problem::SearchProblem;
use crate::optimizer::space::SamplePoint;
use crate::optimizer::traits::{
    OptimizationResult,
    OptimizationSample,
    Optimizer,
    SearchConfiguration,
};
use crate::physics::{OperatingConditions, RemovalModel};

/// Independent-uniform stochastic search with an acquisition score
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSearch;

impl RandomSearch {
    /// Create a new random search
    pub fn new() -> Self {
        Self
    }

    /// Run a search with an injected random source
    ///
    /// # Arguments
    ///
    /// * `model` - Removal model queried for every trial
    /// * `problem` - Pair, target and search space
    /// * `iterations` - Number of trials, must be positive
    /// * `rng` - Random source; the same seeded source yields the same result
    pub fn search_with_rng<R: Rng + ?Sized>(
        &self,
        model: &dyn RemovalModel,
        problem: &SearchProblem,
        iterations: usize,
        rng: &mut R,
    ) -> Result<OptimizationResult> {
        problem.validate()?;
        if iterations == 0 {
            return Err(AdsorbError::configuration("iteration count must be positive"));
        }

        log::debug!(
            "Random search: {} on {} -> target {}% over {} trials",
            problem.material,
            problem.contaminant,
            problem.target_removal,
            iterations
        );

        let points: Vec<SamplePoint> = (0..iterations)
            .map(|_| problem.space.sample(rng))
            .collect();

        let history = evaluate_points(model, problem, &points);

        let result = OptimizationResult::from_history(history, problem.target_removal)
            .ok_or_else(|| AdsorbError::configuration("search produced no trials"))?;

        log::debug!(
            "Random search done: best trial {} (mean {}%, score {:.4})",
            result.best.iteration,
            result.best.mean,
            result.best.score
        );

        Ok(result)
    }
}

impl Optimizer for RandomSearch {
    fn search(
        &self,
        model: &dyn RemovalModel,
        problem: &SearchProblem,
        config: &SearchConfiguration,
    ) -> Result<OptimizationResult> {
        config.validate()?;
        let mut rng = config.rng();
        self.search_with_rng(model, problem, config.iterations, &mut rng)
    }

    fn name(&self) -> &str {
        "Random search"
    }
}

// =================================================================================================
// Trial evaluation
// =================================================================================================

/// Score a single trial
fn evaluate_trial(
    model: &dyn RemovalModel,
    problem: &SearchProblem,
    iteration: usize,
    point: &SamplePoint,
) -> OptimizationSample {
    let conditions = OperatingConditions::new(point.ph, point.concentration, point.contact_time);
    let prediction = model.predict(&problem.material, &problem.contaminant, &conditions);

    OptimizationSample {
        iteration,
        ph: point.ph,
        contact_time: point.contact_time,
        concentration: point.concentration,
        mean: prediction.mean,
        std: prediction.std,
        score: acquisition_score(prediction.mean, prediction.std, problem.target_removal),
    }
}

/// Score every point, preserving trial order
fn evaluate_points(
    model: &dyn RemovalModel,
    problem: &SearchProblem,
    points: &[SamplePoint],
) -> Vec<OptimizationSample> {
    let trial = |(index, point): (usize, &SamplePoint)| {
        evaluate_trial(model, problem, index + 1, point)
    };

    if points.len() > parallel_threshold() {
        // Above threshold: parallel iteration when the feature is enabled.
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            // indexed parallel iterators collect in input order
            return points.par_iter().enumerate().map(trial).collect();
        }
    }

    points.iter().enumerate().map(trial).collect()
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SurrogateModel;
    use crate::optimizer::{SearchSpace, ThresholdGuard};
    use crate::physics::PredictionResult;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn lead_problem(target: f64) -> SearchProblem {
        SearchProblem::new("pb", "mof_biochar", target, SearchSpace::default())
    }

    #[test]
    fn test_history_indices() {
        let model = SurrogateModel::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let result = RandomSearch::new()
            .search_with_rng(&model, &lead_problem(90.0), 25, &mut rng)
            .unwrap();

        assert_eq!(result.history.len(), 25);
        for (i, sample) in result.history.iter().enumerate() {
            assert_eq!(sample.iteration, i + 1);
        }
    }

    #[test]
    fn test_samples_inside_space() {
        let model = SurrogateModel::builtin();
        let space = SearchSpace::new((4.0, 5.0), (10.0, 12.0), (3.0, 3.5));
        let problem = SearchProblem::new("cd", "zeolite", 50.0, space);
        let result = RandomSearch::new()
            .search(&model, &problem, &SearchConfiguration::new(50).with_seed(11))
            .unwrap();

        for sample in &result.history {
            assert!((4.0..=5.0).contains(&sample.ph));
            assert!((10.0..=12.0).contains(&sample.contact_time));
            assert!((3.0..=3.5).contains(&sample.concentration));
        }
    }

    #[test]
    fn test_scores_match_predictions() {
        let model = SurrogateModel::builtin();
        let result = RandomSearch::new()
            .search(&model, &lead_problem(70.0), &SearchConfiguration::new(20).with_seed(5))
            .unwrap();

        for sample in &result.history {
            let conditions =
                OperatingConditions::new(sample.ph, sample.concentration, sample.contact_time);
            let prediction = model.predict("mof_biochar", "pb", &conditions);
            assert_eq!(prediction, PredictionResult { mean: sample.mean, std: sample.std });
            assert_eq!(sample.score, acquisition_score(sample.mean, sample.std, 70.0));
        }
    }

    #[test]
    fn test_best_is_first_maximum() {
        let model = SurrogateModel::builtin();
        let result = RandomSearch::new()
            .search(&model, &lead_problem(85.0), &SearchConfiguration::new(60).with_seed(21))
            .unwrap();

        let max = result
            .history
            .iter()
            .map(|s| s.score)
            .fold(f64::NEG_INFINITY, f64::max);
        let first = result.history.iter().find(|s| s.score == max).unwrap();
        assert_eq!(result.best, *first);
    }

    #[test]
    fn test_seed_is_reproducible() {
        let model = SurrogateModel::builtin();
        let config = SearchConfiguration::new(30).with_seed(1234);
        let first = RandomSearch::new().search(&model, &lead_problem(90.0), &config).unwrap();
        let second = RandomSearch::new().search(&model, &lead_problem(90.0), &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_path_matches_sequential() {
        let model = SurrogateModel::builtin();
        let config = SearchConfiguration::new(200).with_seed(99);

        let sequential = {
            let _guard = ThresholdGuard::save(usize::MAX);
            RandomSearch::new().search(&model, &lead_problem(90.0), &config).unwrap()
        };
        let parallel = {
            let _guard = ThresholdGuard::save(1);
            RandomSearch::new().search(&model, &lead_problem(90.0), &config).unwrap()
        };

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_unknown_pair_scores_fallback() {
        let model = SurrogateModel::builtin();
        let problem = SearchProblem::new("arsenic", "mof_biochar", 80.0, SearchSpace::default());
        let result = RandomSearch::new()
            .search(&model, &problem, &SearchConfiguration::new(10).with_seed(2))
            .unwrap();

        // every trial is the fallback, so all tie and the first one wins
        assert!(result.history.iter().all(|s| s.mean == 0.0 && s.std == 5.0));
        assert_eq!(result.best.iteration, 1);
        assert_eq!(result.best.score, -77.5);
    }

    #[test]
    fn test_invalid_inputs() {
        let model = SurrogateModel::builtin();
        let search = RandomSearch::new();

        assert!(search
            .search(&model, &lead_problem(90.0), &SearchConfiguration::new(0))
            .is_err());

        let mut rng = StdRng::seed_from_u64(0);
        assert!(search.search_with_rng(&model, &lead_problem(90.0), 0, &mut rng).is_err());

        let inverted = SearchProblem::new("pb", "mof_biochar", 90.0, SearchSpace::new((8.0, 2.0), (0.0, 30.0), (1.0, 40.0)));
        assert!(matches!(
            search.search(&model, &inverted, &SearchConfiguration::new(5)),
            Err(AdsorbError::InvalidRange { .. })
        ));
    }
}
