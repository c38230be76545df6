//! adsorb-rs: Adsorbent Removal Surrogate
//!
//! A deterministic, closed-form surrogate of contaminant removal by adsorbent
//! materials, with two consumers built on top of it: an operating-condition
//! optimizer and a per-factor attribution explainer.
//!
//! # Architecture
//!
//! adsorb-rs is built on two core principles:
//!
//! 1. **Separation of Model and Consumers**
//!    - Removal models define the response (what is predicted)
//!    - The optimizer and the attribution engine query it (how it is explored)
//!
//! 2. **Pure, Total Evaluation**
//!    - Registries are immutable once built
//!    - Prediction never fails: unknown identifiers yield a documented fallback
//!    - Randomness is injected, so searches are reproducible under a seed
//!
//! # Quick Start
//!
//! ```rust
//! use adsorb_rs::prelude::*;
//!
//! // 1. Build the model over the built-in catalogue
//! let model = SurrogateModel::builtin();
//!
//! // 2. Direct prediction
//! let conditions = OperatingConditions::new(6.0, 5.0, 30.0);
//! let prediction = model.predict("mof_biochar", "pb", &conditions);
//! assert_eq!(prediction.mean, 91.99);
//!
//! // 3. Search for conditions reaching 95% removal
//! let problem = SearchProblem::new("pb", "mof_biochar", 95.0, SearchSpace::default());
//! let config = SearchConfiguration::new(50).with_seed(42);
//! let result = RandomSearch::new().search(&model, &problem, &config).unwrap();
//! assert_eq!(result.history.len(), 50);
//!
//! // 4. Explain a prediction
//! let items = AttributionEngine::new(&model).explain("zeolite", "cr6", 3.0, 20.0, 20.0);
//! assert_eq!(items.len(), 6);
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Removal model trait and response factors
//! - [`models`]: Registries, the surrogate model and response sweeps
//! - [`optimizer`]: Fixed-budget random search
//! - [`attribution`]: One-factor-at-a-time attribution
//! - [`error`]: Error type of the strict entry points

// Core modules
pub mod error;
pub mod physics;

pub mod models;
pub mod optimizer;
pub mod attribution;

pub use error::{AdsorbError, Result};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use adsorb_rs::prelude::*;
    //! ```
    pub use crate::physics::{OperatingConditions,
                             PredictionResult,
                             RemovalModel};
    pub use crate::models::{Registry,
                            SurrogateModel};
    pub use crate::optimizer::{Optimizer,
                               OptimizationResult,
                               OptimizationSample,
                               RandomSearch,
                               SearchConfiguration,
                               SearchProblem,
                               SearchSpace};
    pub use crate::attribution::{AttributionEngine,
                                 AttributionFactor,
                                 AttributionItem};
}
