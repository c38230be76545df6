//! Removal models and their registries
//!
//! All models implement the [`RemovalModel`](crate::physics::RemovalModel) trait.
//! Consumers (optimizer, attribution) call `predict`. Models are responsible
//! for the response, consumers for how they explore it.
//!
//! # Available Models
//!
//! ## [`SurrogateModel`]: closed-form surrogate
//!
//! Deterministic combination of kinetic, pH, concentration and competition
//! effects with fixed coefficients. No fitting, no state.
//!
//! # Registries
//!
//! [`Registry`] holds the immutable [`MaterialProfile`] and
//! [`ContaminantProfile`] tables. The built-in catalogue has five adsorbents
//! and four contaminants; [`REFERENCE_MATERIAL`] and
//! [`REFERENCE_CONTAMINANT`] anchor the attribution baseline.
//!
//! # Sweeps
//!
//! [`sweep`] evaluates any model along time or pH grids and over a
//! pH × time surface.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod contaminant;
pub mod material;
pub mod registry;
pub mod surrogate;
pub mod sweep;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use contaminant::{builtin_contaminants, ContaminantProfile, REFERENCE_CONTAMINANT};
pub use material::{builtin_materials, MaterialProfile, REFERENCE_MATERIAL};
pub use registry::Registry;
pub use surrogate::{RemovalBreakdown, SurrogateModel};
pub use crate::physics::PhResponse;
