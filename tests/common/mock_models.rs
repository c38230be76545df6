//! Mock removal models for testing
//!
//! These models have trivially known responses, making them
//! ideal for checking the optimizer and attribution logic in isolation.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use adsorb_rs::physics::{OperatingConditions, PredictionResult, RemovalModel};

// =================================================================================================
// Constant Model: R = c, σ = s
// =================================================================================================

/// Same prediction everywhere
///
/// Every trial of a search ties, so the first one must win.
pub struct ConstantModel {
    pub mean: f64,
    pub std: f64,
}

impl ConstantModel {
    pub fn new(mean: f64, std: f64) -> Self {
        Self { mean, std }
    }
}

impl RemovalModel for ConstantModel {
    fn predict(&self, _material: &str, _contaminant: &str, _conditions: &OperatingConditions) -> PredictionResult {
        PredictionResult { mean: self.mean, std: self.std }
    }

    fn name(&self) -> &str {
        "Constant"
    }
}

// =================================================================================================
// pH Ramp: R = slope * pH
// =================================================================================================

/// Removal proportional to pH, clamped to [0, 100], fixed uncertainty
///
/// The optimum of any search above target is the largest sampled pH.
pub struct PhRamp {
    pub slope: f64,
}

impl PhRamp {
    pub fn new(slope: f64) -> Self {
        Self { slope }
    }
}

impl RemovalModel for PhRamp {
    fn predict(&self, _material: &str, _contaminant: &str, conditions: &OperatingConditions) -> PredictionResult {
        PredictionResult::rounded((self.slope * conditions.ph).clamp(0.0, 100.0), 1.0)
    }

    fn name(&self) -> &str {
        "pH Ramp"
    }
}

// =================================================================================================
// Counting Model: wraps another model and counts calls
// =================================================================================================

/// Delegates to an inner model and counts `predict` calls
pub struct CountingModel<M: RemovalModel> {
    pub inner: M,
    calls: AtomicUsize,
}

impl<M: RemovalModel> CountingModel<M> {
    pub fn new(inner: M) -> Self {
        Self { inner, calls: AtomicUsize::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<M: RemovalModel> RemovalModel for CountingModel<M> {
    fn predict(&self, material: &str, contaminant: &str, conditions: &OperatingConditions) -> PredictionResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.predict(material, contaminant, conditions)
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

// =================================================================================================
// Recording Model: wraps another model and keeps every operating point
// =================================================================================================

/// Delegates to an inner model and records the conditions of each call
pub struct RecordingModel<M: RemovalModel> {
    pub inner: M,
    seen: Mutex<Vec<OperatingConditions>>,
}

impl<M: RemovalModel> RecordingModel<M> {
    pub fn new(inner: M) -> Self {
        Self { inner, seen: Mutex::new(Vec::new()) }
    }

    /// Recorded conditions, in call order
    pub fn conditions(&self) -> Vec<OperatingConditions> {
        self.seen.lock().unwrap().clone()
    }
}

impl<M: RemovalModel> RemovalModel for RecordingModel<M> {
    fn predict(&self, material: &str, contaminant: &str, conditions: &OperatingConditions) -> PredictionResult {
        self.seen.lock().unwrap().push(*conditions);
        self.inner.predict(material, contaminant, conditions)
    }

    fn name(&self) -> &str {
        "Recording"
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ph_ramp() {
        let model = PhRamp::new(10.0);
        let prediction = model.predict("m", "c", &OperatingConditions::new(7.25, 10.0, 15.0));
        assert_eq!(prediction.mean, 72.5);
        assert_eq!(model.predict("m", "c", &OperatingConditions::new(14.0, 10.0, 15.0)).mean, 100.0);
    }

    #[test]
    fn test_counting_model() {
        let model = CountingModel::new(ConstantModel::new(50.0, 2.0));
        let conditions = OperatingConditions::new(6.0, 10.0, 15.0);
        model.predict("m", "c", &conditions);
        model.predict("m", "c", &conditions);
        assert_eq!(model.calls(), 2);
    }

    #[test]
    fn test_recording_model() {
        let model = RecordingModel::new(ConstantModel::new(50.0, 2.0));
        let conditions = OperatingConditions::new(6.0, 10.0, 15.0).with_competition(true);
        model.predict("m", "c", &conditions);
        assert_eq!(model.conditions(), vec![conditions]);
    }
}
