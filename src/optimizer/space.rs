//! Search space definition
//!
//! Three independent closed intervals, one per sampled operating parameter.
//! Each trial draws every parameter uniformly and independently: no
//! space-filling design, no correlation between axes.

use rand::Rng;

use crate::error::{AdsorbError, Result};

/// Closed interval `[min, max]` of a sampled parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
}

impl ParameterRange {
    /// Create a range (not validated)
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Degenerate range holding a single value
    pub fn fixed(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// Width of the interval
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies in the closed interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Check bounds are finite, ordered and have a finite span
    pub fn validate(&self, parameter: &'static str) -> Result<()> {
        if !self.min.is_finite()
            || !self.max.is_finite()
            || self.min > self.max
            || !self.span().is_finite()
        {
            return Err(AdsorbError::InvalidRange {
                parameter,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Uniform draw from the closed interval
    ///
    /// Bounds must have been validated.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        rng.gen_range(self.min..=self.max)
    }
}

impl From<(f64, f64)> for ParameterRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// A point drawn from a [`SearchSpace`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub ph: f64,
    pub contact_time: f64,
    pub concentration: f64,
}

/// Ranges explored by the optimizer
///
/// # Default
///
/// | Parameter       | Range       |
/// |-----------------|-------------|
/// | pH              | 2 – 8       |
/// | contact time    | 0 – 30 min  |
/// | concentration   | 1 – 40 mg/L |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSpace {
    pub ph: ParameterRange,
    pub contact_time: ParameterRange,
    pub concentration: ParameterRange,
}

impl SearchSpace {
    /// Create a search space from the three ranges
    pub fn new(
        ph: impl Into<ParameterRange>,
        contact_time: impl Into<ParameterRange>,
        concentration: impl Into<ParameterRange>,
    ) -> Self {
        Self {
            ph: ph.into(),
            contact_time: contact_time.into(),
            concentration: concentration.into(),
        }
    }

    /// Validate all three ranges
    pub fn validate(&self) -> Result<()> {
        self.ph.validate("pH")?;
        self.contact_time.validate("contact time")?;
        self.concentration.validate("concentration")
    }

    /// Draw one point: pH, then contact time, then concentration
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SamplePoint {
        let ph = self.ph.sample(rng);
        let contact_time = self.contact_time.sample(rng);
        let concentration = self.concentration.sample(rng);
        SamplePoint { ph, contact_time, concentration }
    }

    /// Whether a point lies inside the space
    pub fn contains(&self, point: &SamplePoint) -> bool {
        self.ph.contains(point.ph)
            && self.contact_time.contains(point.contact_time)
            && self.concentration.contains(point.concentration)
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new((2.0, 8.0), (0.0, 30.0), (1.0, 40.0))
    }
}

// =================================================================================================
// Tests
// =================================================================================================
