//! Polynomial feature expansion.
//!
//! ## Purpose
//!
//! This module turns an input pair `(a, b)` into the full feature vector of
//! monomials `a^i b^j` (`i + j <= D`) in canonical order, ready for
//! standardization.
//!
//! ## Design notes
//!
//! * **Working precision**: Inputs are widened to `f64` before any power is
//!   taken, whatever the caller's float type.
//! * **Cached powers**: Two [`PowerTable`]s of length `D + 1` are built once
//!   per call; each higher-degree feature is one multiply of two entries.
//! * **Direct low orders**: Features `1`, `a` and `b` are assigned directly.
//! * **Stack only**: Output goes into a caller-owned [`FeatureBuffer`] or
//!   slice; nothing is allocated.
//!
//! ## Invariants
//!
//! * Exactly `(D+1)(D+2)/2` features are written, each once.
//! * Feature order matches [`monomials`].
//!
//! ## Non-goals
//!
//! * Range checking of the inputs (done by the engine's validator).

use crate::algorithms::monomials::monomials;
use crate::math::powers::PowerTable;
use crate::primitives::buffer::{FeatureBuffer, MAX_DEGREE, feature_count};

// ============================================================================
// PolynomialFeatures
// ============================================================================

/// Feature expander for a fixed total degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolynomialFeatures {
    degree: usize,
}

impl PolynomialFeatures {
    /// Expander for total degree `degree`, clamped to [`MAX_DEGREE`].
    #[inline]
    pub const fn new(degree: usize) -> Self {
        let degree = if degree > MAX_DEGREE {
            MAX_DEGREE
        } else {
            degree
        };
        Self { degree }
    }

    /// Total polynomial degree.
    #[inline]
    pub const fn degree(&self) -> usize {
        self.degree
    }

    /// Number of features produced per input pair.
    #[inline]
    pub const fn n_features(&self) -> usize {
        feature_count(self.degree)
    }

    /// Expand `(a, b)` into `out`, resizing it to [`Self::n_features`].
    #[inline]
    pub fn expand(&self, a: f64, b: f64, out: &mut FeatureBuffer) {
        out.reset(self.n_features());
        self.expand_into(a, b, out.as_mut_slice());
    }

    /// Expand `(a, b)` into the first [`Self::n_features`] slots of `out`.
    ///
    /// If `out` is shorter, only its length is filled.
    pub fn expand_into(&self, a: f64, b: f64, out: &mut [f64]) {
        let n = self.n_features().min(out.len());
        let out = &mut out[..n];

        // Degree 0 and 1 terms
        if let Some(slot) = out.first_mut() {
            *slot = 1.0;
        }
        if n < 3 {
            if let Some(slot) = out.get_mut(1) {
                *slot = a;
            }
            return;
        }
        out[1] = a;
        out[2] = b;

        let a_powers = PowerTable::build(a, self.degree);
        let b_powers = PowerTable::build(b, self.degree);

        for (slot, term) in out.iter_mut().zip(monomials(self.degree)).skip(3) {
            *slot = a_powers.get(term.a_power as usize) * b_powers.get(term.b_power as usize);
        }
    }
}
