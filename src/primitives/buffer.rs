//! Fixed-capacity stack buffers for the prediction pipeline.
//!
//! ## Purpose
//!
//! This module provides [`FeatureBuffer`], the per-call scratch space that
//! holds the expanded (and later standardized) feature vector. It lives on the
//! caller's stack, so a prediction performs no heap allocation and two
//! concurrent predictions never share state.
//!
//! ## Design notes
//!
//! * **Fixed capacity**: Storage is sized for [`MAX_DEGREE`] at compile time.
//!   A model of lower degree uses a prefix of the array.
//! * **Working precision**: Values are always `f64`, independent of the
//!   caller's input/output float type.
//!
//! ## Invariants
//!
//! * `len <= MAX_FEATURES` at all times.
//! * Only the first `len` values are observable through `Deref`.
//!
//! ## Non-goals
//!
//! * Pooling or reusing buffers across calls.

use core::fmt;
use core::ops::{Deref, DerefMut};

// ============================================================================
// Capacity Limits
// ============================================================================

/// Highest polynomial degree a model may declare.
pub const MAX_DEGREE: usize = 20;

/// Number of monomial features for the highest supported degree.
pub const MAX_FEATURES: usize = feature_count(MAX_DEGREE);

/// Number of distinct monomials `a^i b^j` with `i + j <= degree`.
#[inline]
pub const fn feature_count(degree: usize) -> usize {
    (degree + 1) * (degree + 2) / 2
}

// ============================================================================
// FeatureBuffer
// ============================================================================

/// Stack-allocated feature vector for a single prediction.
#[derive(Clone, Copy)]
pub struct FeatureBuffer {
    values: [f64; MAX_FEATURES],
    len: usize,
}

impl FeatureBuffer {
    /// Create an empty buffer.
    #[inline]
    pub const fn new() -> Self {
        Self {
            values: [0.0; MAX_FEATURES],
            len: 0,
        }
    }

    /// Zero the first `len` slots and expose exactly `len` values.
    ///
    /// `len` is clamped to [`MAX_FEATURES`].
    #[inline]
    pub fn reset(&mut self, len: usize) {
        let len = len.min(MAX_FEATURES);
        self.values[..len].fill(0.0);
        self.len = len;
    }

    /// Number of live features.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no features have been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live features as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// The live features as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values[..self.len]
    }
}

impl Default for FeatureBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for FeatureBuffer {
    type Target = [f64];
    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl DerefMut for FeatureBuffer {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl fmt::Debug for FeatureBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureBuffer")
            .field("len", &self.len)
            .field("values", &self.as_slice())
            .finish()
    }
}
