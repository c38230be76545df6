//! Removal physics
//!
//! This module provides the trait and the elementary factors of removal
//! models. A removal model maps an adsorbent, a contaminant and an operating
//! point to a predicted removal percentage with an uncertainty.
//!
//! # Core Concepts
//!
//! - **Removal Model**: Predicts mean removal and standard deviation
//! - **Operating Conditions**: pH, concentration, contact time, competition
//! - **Factors**: Kinetic, pH, concentration and competition terms
//!
//! # Architecture
//!
//! Removal models are **separate from their consumers**:
//! - The model provides the **response** (physics)
//! - The optimizer and the attribution engine **query** it
//!
//! This separation allows:
//! - Same optimizer with different models (surrogate, mock, fitted)
//! - Same model behind several consumers
//!
//! # Example
//!
//! ```rust
//! use adsorb_rs::physics::{OperatingConditions, PredictionResult, RemovalModel};
//! use adsorb_rs::models::SurrogateModel;
//!
//! let model = SurrogateModel::builtin();
//! let conditions = OperatingConditions::new(6.0, 5.0, 30.0);
//!
//! let prediction = model.predict("mof_biochar", "pb", &conditions);
//! assert!(prediction.mean > 90.0);
//!
//! // Unknown identifiers fall back, they never fail
//! let unknown = model.predict("graphene", "pb", &conditions);
//! assert_eq!(unknown, PredictionResult::fallback());
//! assert!(model.evaluate("graphene", "pb", &conditions).is_none());
//! ```

// module declaration
pub mod traits;
pub mod factors;

// re-export commonly used types for convenience
pub use factors::PhResponse;
pub use traits::{
    round2,
    OperatingConditions,
    PredictionResult,
    RemovalModel,
    FALLBACK_MEAN,
    FALLBACK_STD,
};
