//! Incremental power tables.
//!
//! ## Purpose
//!
//! This module builds the sequence `x^0, x^1, ..., x^d` used by the feature
//! expander. Every monomial `a^i b^j` is later formed as a single product of
//! two cached powers.
//!
//! ## Design notes
//!
//! * **Incremental**: `p[n] = p[n-1] * x`, one multiply per degree. No calls
//!   to `powi`, whose rounding differs between targets.
//! * **Direct low orders**: `p[0] = 1` and `p[1] = x` are assigned, never
//!   computed, so the first two entries are exact for any `x`.
//!
//! ## Invariants
//!
//! * `p[n]` equals `x` multiplied by itself `n` times, left to right.
//! * `x = 0` yields `[1, 0, 0, ...]`; negative `x` alternates sign.
//!
//! ## Non-goals
//!
//! * This module does not guard against overflow for huge `x`; input bounds
//!   are enforced before expansion.

use num_traits::Float;

use crate::primitives::buffer::MAX_DEGREE;

// ============================================================================
// Power Sequence
// ============================================================================

/// Fill `out` with `base^0 .. base^(out.len() - 1)`.
#[inline]
pub fn fill_powers<T: Float>(base: T, out: &mut [T]) {
    if out.is_empty() {
        return;
    }
    out[0] = T::one();
    if out.len() == 1 {
        return;
    }
    out[1] = base;
    for n in 2..out.len() {
        out[n] = out[n - 1] * base;
    }
}

// ============================================================================
// PowerTable
// ============================================================================

/// Cached powers of one input in working precision.
#[derive(Debug, Clone, Copy)]
pub struct PowerTable {
    values: [f64; MAX_DEGREE + 1],
    degree: usize,
}

impl PowerTable {
    /// Build `base^0 ..= base^degree`. `degree` is clamped to [`MAX_DEGREE`].
    #[inline]
    pub fn build(base: f64, degree: usize) -> Self {
        let degree = degree.min(MAX_DEGREE);
        let mut values = [0.0; MAX_DEGREE + 1];
        fill_powers(base, &mut values[..=degree]);
        Self { values, degree }
    }

    /// Highest cached exponent.
    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// `base^n`.
    ///
    /// # Panics
    ///
    /// Panics if `n > self.degree()`.
    #[inline]
    pub fn get(&self, n: usize) -> f64 {
        self.as_slice()[n]
    }

    /// All cached powers, index = exponent.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values[..=self.degree]
    }
}
