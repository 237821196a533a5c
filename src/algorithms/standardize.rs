//! Per-feature standardization.
//!
//! ## Purpose
//!
//! This module applies the affine transform learned at fit time,
//! `x' = (x - mean) / scale`, to every feature in place.
//!
//! ## Invariants
//!
//! * `means` and `scales` are parallel to the feature vector.
//! * Every scale is non-zero and finite; the model builder rejects tables
//!   that break this, so it is not re-checked here.

// ============================================================================
// StandardScaler
// ============================================================================

/// Borrowed mean/scale tables of a fitted standard scaler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardScaler<'a> {
    means: &'a [f64],
    scales: &'a [f64],
}

impl<'a> StandardScaler<'a> {
    /// Wrap parallel mean and scale tables.
    #[inline]
    pub const fn new(means: &'a [f64], scales: &'a [f64]) -> Self {
        Self { means, scales }
    }

    /// Per-feature means.
    #[inline]
    pub fn means(&self) -> &'a [f64] {
        self.means
    }

    /// Per-feature scales.
    #[inline]
    pub fn scales(&self) -> &'a [f64] {
        self.scales
    }

    /// Standardize `features` in place.
    ///
    /// Features beyond the shorter table are left untouched.
    #[inline]
    pub fn transform(&self, features: &mut [f64]) {
        for ((x, &mean), &scale) in features.iter_mut().zip(self.means).zip(self.scales) {
            *x = (*x - mean) / scale;
        }
    }
}
