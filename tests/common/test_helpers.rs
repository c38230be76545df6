//! Helper functions for integration tests

#![allow(dead_code)]

use adsorb_rs::models::Registry;
use adsorb_rs::optimizer::OptimizationResult;

/// Every (material, contaminant) pair of a registry
pub fn all_pairs(registry: &Registry) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for material in registry.material_ids() {
        for contaminant in registry.contaminant_ids() {
            pairs.push((material.to_string(), contaminant.to_string()));
        }
    }
    pairs
}

/// Evenly spaced grid from `start` to `end` inclusive
pub fn grid(start: f64, end: f64, n: usize) -> Vec<f64> {
    adsorb_rs::models::sweep::linspace(start, end, n)
}

/// Assert that a search result is internally consistent
///
/// - history indices are exactly 1..=n
/// - best score dominates every trial
/// - best is the first trial reaching that score
pub fn assert_result_consistent(result: &OptimizationResult, iterations: usize) {
    assert_eq!(result.history.len(), iterations, "history length");

    for (i, sample) in result.history.iter().enumerate() {
        assert_eq!(sample.iteration, i + 1, "gap or duplicate at position {}", i);
        assert!(
            sample.score <= result.best.score,
            "trial {} scores {} above best {}",
            sample.iteration, sample.score, result.best.score
        );
    }

    let first_max = result
        .history
        .iter()
        .find(|sample| sample.score == result.best.score)
        .map(|sample| sample.iteration);
    assert_eq!(first_max, Some(result.best.iteration), "best is not the first maximum");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs() {
        assert_eq!(all_pairs(&Registry::builtin()).len(), 20);
    }
}
