//! Input and model validation.
//!
//! ## Purpose
//!
//! This module holds every check the crate performs. There are two kinds:
//!
//! * **Per-call input gating**: [`Validator::validate_input_range`] decides
//!   whether a prediction is computed at all. It is the only check on the hot
//!   path and it never allocates or fails loudly.
//! * **Build-time model checks**: table lengths, finite values, non-zero
//!   scales and sane bounds. They run once in the model builder and return
//!   [`PolyError`]; a model that passes is never re-checked.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Model validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//!
//! ## Invariants
//!
//! * Range checks are inclusive at both ends.
//! * NaN inputs fail every comparison and are therefore rejected.
//! * Validation is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * Verifying that the tables were fitted with the same monomial order or
//!   working precision. That is a property of the offline fit and cannot be
//!   observed from the numbers alone.
//! * Clamping or otherwise correcting inputs.

use crate::engine::model::InputRange;
use crate::engine::output::{InputAxis, Rejection};
use crate::primitives::buffer::MAX_DEGREE;
use crate::primitives::errors::PolyError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for model tables and prediction inputs.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Per-call Input Validation
    // ========================================================================

    /// True iff `a` and `b` both lie inside their inclusive ranges.
    #[inline]
    pub fn validate_input_range(a: f64, b: f64, a_range: InputRange, b_range: InputRange) -> bool {
        a_range.contains(a) && b_range.contains(b)
    }

    /// Like [`Self::validate_input_range`], but reports the failing input.
    ///
    /// `a` is checked first.
    #[inline]
    pub fn check_input_range(
        a: f64,
        b: f64,
        a_range: InputRange,
        b_range: InputRange,
    ) -> Result<(), Rejection> {
        if !a_range.contains(a) {
            return Err(Rejection {
                axis: InputAxis::A,
                value: a,
            });
        }
        if !b_range.contains(b) {
            return Err(Rejection {
                axis: InputAxis::B,
                value: b,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Model Validation
    // ========================================================================

    /// Validate the total polynomial degree.
    pub fn validate_degree(degree: usize) -> Result<(), PolyError> {
        if degree > MAX_DEGREE {
            return Err(PolyError::UnsupportedDegree {
                got: degree,
                max: MAX_DEGREE,
            });
        }
        Ok(())
    }

    /// Validate that a table has exactly one entry per feature.
    pub fn validate_table_len(
        table: &'static str,
        got: usize,
        expected: usize,
    ) -> Result<(), PolyError> {
        if got != expected {
            return Err(PolyError::MismatchedTables {
                table,
                got,
                expected,
            });
        }
        Ok(())
    }

    /// Validate a single model scalar for finiteness.
    pub fn validate_scalar(name: &'static str, value: f64) -> Result<(), PolyError> {
        if !value.is_finite() {
            return Err(PolyError::InvalidNumericValue {
                name,
                index: 0,
                value,
            });
        }
        Ok(())
    }

    /// Validate that every entry of a table is finite.
    pub fn validate_finite(name: &'static str, values: &[f64]) -> Result<(), PolyError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PolyError::InvalidNumericValue { name, index, value });
        }
        Ok(())
    }

    /// Validate standardization scales: finite and non-zero.
    pub fn validate_scales(scales: &[f64]) -> Result<(), PolyError> {
        if let Some((index, &value)) = scales
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s == 0.0)
        {
            return Err(PolyError::InvalidScale { index, value });
        }
        Ok(())
    }

    /// Validate an input range: finite ends with `min <= max`.
    pub fn validate_range(input: &'static str, range: InputRange) -> Result<(), PolyError> {
        if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
            return Err(PolyError::InvalidBounds {
                input,
                min: range.min,
                max: range.max,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PolyError> {
        if let Some(parameter) = duplicate_param {
            return Err(PolyError::DuplicateParameter { parameter });
        }
        Ok(())
    }

    // ========================================================================
    // Batch Validation
    // ========================================================================

    /// Validate parallel batch slices: non-empty and equal length.
    pub fn validate_batch(a_len: usize, b_len: usize, other_len: usize) -> Result<(), PolyError> {
        if a_len == 0 && b_len == 0 {
            return Err(PolyError::EmptyInput);
        }
        if a_len != b_len || a_len != other_len {
            return Err(PolyError::MismatchedInputs {
                a_len,
                b_len,
                other_len,
            });
        }
        Ok(())
    }
}
