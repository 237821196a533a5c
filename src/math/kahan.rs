//! Kahan compensated summation.
//!
//! ## Purpose
//!
//! This module provides a compensated accumulator and a compensated dot
//! product. The linear combiner sums over a hundred or more products of
//! mixed sign; plain sequential addition loses low-order bits on every step,
//! and the loss is of the same order as single-precision output resolution.
//!
//! ## Design notes
//!
//! * **Algorithm**: Classic Kahan. For each term: `y = x - c`, `t = sum + y`,
//!   `c = (t - sum) - y`, `sum = t`.
//! * **Seeded**: The accumulator may start from a non-zero value (the model
//!   intercept) with zero compensation.
//! * **Generics**: Generic over `Float` types; the pipeline uses `f64`.
//!
//! ## Invariants
//!
//! * Terms are consumed strictly in iteration order.
//! * The compiler must not reassociate; no fast-math style shortcuts are used.
//!
//! ## Non-goals
//!
//! * Neumaier or pairwise variants.

use num_traits::Float;

// ============================================================================
// KahanSum
// ============================================================================

/// Running compensated sum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KahanSum<T: Float> {
    sum: T,
    compensation: T,
}

impl<T: Float> KahanSum<T> {
    /// Start from zero.
    #[inline]
    pub fn new() -> Self {
        Self::seeded(T::zero())
    }

    /// Start from `initial` with no pending compensation.
    #[inline]
    pub fn seeded(initial: T) -> Self {
        Self {
            sum: initial,
            compensation: T::zero(),
        }
    }

    /// Add one term.
    #[inline]
    pub fn add(&mut self, term: T) {
        let y = term - self.compensation;
        let t = self.sum + y;
        self.compensation = (t - self.sum) - y;
        self.sum = t;
    }

    /// Current compensated total.
    #[inline]
    pub fn value(&self) -> T {
        self.sum
    }

    /// Low-order error still carried by the accumulator.
    #[inline]
    pub fn compensation(&self) -> T {
        self.compensation
    }
}

impl<T: Float> Default for KahanSum<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Extend<T> for KahanSum<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for term in iter {
            self.add(term);
        }
    }
}

// ============================================================================
// Dot Products
// ============================================================================

/// `initial + Σ lhs[i] * rhs[i]` with compensated accumulation.
///
/// Pairs beyond the shorter slice are ignored.
#[inline]
pub fn compensated_dot<T: Float>(initial: T, lhs: &[T], rhs: &[T]) -> T {
    let mut acc = KahanSum::seeded(initial);
    acc.extend(lhs.iter().zip(rhs).map(|(&l, &r)| l * r));
    acc.value()
}

/// `initial + Σ lhs[i] * rhs[i]` with plain left-to-right accumulation.
///
/// Kept as the reference the compensated path is measured against.
#[inline]
pub fn naive_dot<T: Float>(initial: T, lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs)
        .fold(initial, |acc, (&l, &r)| acc + l * r)
}
