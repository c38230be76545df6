//! Per-factor attribution of removal predictions
//!
//! Explains a prediction by moving one input at a time away from a fixed
//! baseline point and measuring the change in predicted removal. This is a
//! one-factor-at-a-time decomposition, not a Shapley attribution: the six
//! contributions are not additive and interaction effects may be counted
//! twice or not at all.
//!
//! The Competition factor is a fixed constant and is not queried from the
//! model.
//!
//! # Module Organization
//!
//! - **`factor`**: [`AttributionFactor`] and its declared order
//! - **`engine`**: [`Baseline`], [`AttributionItem`], [`AttributionEngine`]

pub mod factor;
pub mod engine;

pub use factor::AttributionFactor;
pub use engine::{AttributionEngine, AttributionItem, Baseline, COMPETITION_CONTRIBUTION};
