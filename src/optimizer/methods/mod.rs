//! Search methods
//!
//! This module contains concrete implementations of the
//! [`Optimizer`](crate::optimizer::Optimizer) trait.
//!
//! # Available Methods
//!
//! - **[`RandomSearch`]**: independent uniform draws, scored by the
//!   acquisition heuristic, fixed budget
//!   - Cost: 1 model evaluation per trial
//!   - Deterministic for a fixed seed, with or without the `parallel` feature
//!
//! A surrogate-posterior (Gaussian-process) optimizer would be a separate
//! method next to this one; `RandomSearch` is not an approximation of it.

mod random_search;

// Re-exports for convenience
pub use random_search::RandomSearch;
