//! Linear combination of standardized features.
//!
//! ## Purpose
//!
//! This module evaluates `intercept + Σ coefficient[i] * feature[i]`, the
//! final stage of the pipeline, using Kahan compensated summation in `f64`.
//!
//! ## Design notes
//!
//! * The accumulator is seeded with the intercept, then products are added
//!   in feature order. Changing the order changes the rounding.
//! * The result stays in `f64`; narrowing to the caller's type happens in the
//!   engine as the very last step.

use crate::math::kahan::compensated_dot;

// ============================================================================
// LinearCombiner
// ============================================================================

/// Borrowed coefficients and intercept of a fitted linear model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearCombiner<'a> {
    coefficients: &'a [f64],
    intercept: f64,
}

impl<'a> LinearCombiner<'a> {
    /// Wrap a coefficient table and intercept.
    #[inline]
    pub const fn new(coefficients: &'a [f64], intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    /// Coefficients, one per feature.
    #[inline]
    pub fn coefficients(&self) -> &'a [f64] {
        self.coefficients
    }

    /// Intercept added before any product.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Compensated `intercept + coefficients · features`.
    #[inline]
    pub fn combine(&self, features: &[f64]) -> f64 {
        compensated_dot(self.intercept, self.coefficients, features)
    }
}
