//! Response sweeps over operating grids
//!
//! Evaluates a [`RemovalModel`] along one or two axes while holding the other
//! inputs fixed. The uptake curve and the pH × time surface are what the
//! presentation layer charts.
//!
//! # Layout
//!
//! [`response_surface`] returns a `[n_ph × n_time]` matrix:
//! - **Rows**: pH grid values
//! - **Columns**: contact time grid values
//!
//! # Example
//!
//! ```rust
//! use adsorb_rs::models::{SurrogateModel, sweep};
//! use adsorb_rs::physics::OperatingConditions;
//!
//! let model = SurrogateModel::builtin();
//! let base = OperatingConditions::new(6.0, 10.0, 15.0);
//!
//! let times = sweep::linspace(0.0, 30.0, 31);
//! let curve = sweep::kinetic_curve(&model, "biochar", "cd", &base, &times);
//! assert_eq!(curve.len(), 31);
//!
//! let ph_grid = sweep::linspace(2.0, 8.0, 13);
//! let surface = sweep::response_surface(&model, "biochar", "cd", &base, &ph_grid, &times);
//! assert_eq!(surface.shape(), (13, 31));
//! ```

use nalgebra::{DMatrix, DVector};

use crate::physics::{OperatingConditions, RemovalModel};

/// `n` evenly spaced values from `start` to `end` inclusive
///
/// Returns `[start]` for `n == 1` and an empty vector for `n == 0`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Mean removal along a contact-time grid
pub fn kinetic_curve(
    model: &dyn RemovalModel,
    material: &str,
    contaminant: &str,
    base: &OperatingConditions,
    times: &[f64],
) -> DVector<f64> {
    DVector::from_iterator(
        times.len(),
        times
            .iter()
            .map(|&t| model.predict(material, contaminant, &base.at_contact_time(t)).mean),
    )
}

/// Mean removal along a pH grid
pub fn ph_profile(
    model: &dyn RemovalModel,
    material: &str,
    contaminant: &str,
    base: &OperatingConditions,
    ph_values: &[f64],
) -> DVector<f64> {
    DVector::from_iterator(
        ph_values.len(),
        ph_values
            .iter()
            .map(|&ph| model.predict(material, contaminant, &base.at_ph(ph)).mean),
    )
}

/// Mean removal over a pH × contact-time grid
pub fn response_surface(
    model: &dyn RemovalModel,
    material: &str,
    contaminant: &str,
    base: &OperatingConditions,
    ph_values: &[f64],
    times: &[f64],
) -> DMatrix<f64> {
    DMatrix::from_fn(ph_values.len(), times.len(), |i, j| {
        let conditions = base.at_ph(ph_values[i]).at_contact_time(times[j]);
        model.predict(material, contaminant, &conditions).mean
    })
}

// =================================================================================================
// Tests
// =================================================================================================
