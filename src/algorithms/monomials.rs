//! Canonical monomial enumeration.
//!
//! ## Purpose
//!
//! This module defines the fixed order in which the monomials `a^i b^j`
//! (`i + j <= D`) appear in a feature vector. The order is part of the model
//! contract: coefficients and scaler tables are positional, so any deviation
//! silently corrupts every prediction.
//!
//! ## Key concepts
//!
//! * **Graded order**: Monomials are grouped by total degree `k = i + j`,
//!   ascending. Inside a group the power of `a` descends from `k` to `0`.
//!   For `D = 2` this gives `[1, a, b, a^2, ab, b^2]`.
//! * **Prefix property**: The order for degree `d` is a prefix of the order
//!   for any higher degree, so one table generated for [`MAX_DEGREE`] serves
//!   every model.
//!
//! ## Invariants
//!
//! * The table is generated at compile time; each index is written once.
//! * `index_of(m.a_power, m.b_power) == position of m` for every entry.

use core::fmt;

use crate::primitives::buffer::{MAX_DEGREE, MAX_FEATURES, feature_count};

// ============================================================================
// Monomial
// ============================================================================

/// A single term `a^a_power * b^b_power`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Monomial {
    /// Exponent of the first input.
    pub a_power: u8,
    /// Exponent of the second input.
    pub b_power: u8,
}

impl Monomial {
    /// Create a monomial from its exponents.
    #[inline]
    pub const fn new(a_power: u8, b_power: u8) -> Self {
        Self { a_power, b_power }
    }

    /// Total degree `a_power + b_power`.
    #[inline]
    pub const fn degree(&self) -> usize {
        self.a_power as usize + self.b_power as usize
    }

    /// Render the term with the given input names, e.g. `under_y^2 theta`.
    #[inline]
    pub fn named<'n>(&self, a_name: &'n str, b_name: &'n str) -> MonomialName<'n> {
        MonomialName {
            monomial: *self,
            a_name,
            b_name,
        }
    }
}

/// Display adapter for a [`Monomial`] with input names attached.
#[derive(Debug, Clone, Copy)]
pub struct MonomialName<'n> {
    monomial: Monomial,
    a_name: &'n str,
    b_name: &'n str,
}

impl fmt::Display for MonomialName<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Monomial { a_power, b_power } = self.monomial;
        if a_power == 0 && b_power == 0 {
            return write!(f, "1");
        }
        let mut wrote = false;
        for (name, power) in [(self.a_name, a_power), (self.b_name, b_power)] {
            if power == 0 {
                continue;
            }
            if wrote {
                write!(f, " ")?;
            }
            match power {
                1 => write!(f, "{}", name)?,
                p => write!(f, "{}^{}", name, p)?,
            }
            wrote = true;
        }
        Ok(())
    }
}

// ============================================================================
// Order Table
// ============================================================================

/// Canonical order for [`MAX_DEGREE`]; lower degrees use a prefix.
pub static MONOMIAL_ORDER: [Monomial; MAX_FEATURES] = build_order();

const fn build_order() -> [Monomial; MAX_FEATURES] {
    let mut order = [Monomial::new(0, 0); MAX_FEATURES];
    let mut idx = 0;
    let mut k = 0;
    while k <= MAX_DEGREE {
        let mut j = 0;
        while j <= k {
            order[idx] = Monomial::new((k - j) as u8, j as u8);
            idx += 1;
            j += 1;
        }
        k += 1;
    }
    order
}

/// Monomials of a degree-`degree` model, in canonical order.
///
/// `degree` is clamped to [`MAX_DEGREE`].
#[inline]
pub fn monomials(degree: usize) -> &'static [Monomial] {
    &MONOMIAL_ORDER[..feature_count(degree.min(MAX_DEGREE))]
}

/// Position of `a^a_power b^b_power` in the canonical order.
#[inline]
pub const fn index_of(a_power: usize, b_power: usize) -> usize {
    let k = a_power + b_power;
    k * (k + 1) / 2 + b_power
}
