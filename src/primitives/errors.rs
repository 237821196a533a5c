//! Error types for model construction and batch evaluation.
//!
//! ## Purpose
//!
//! This module defines [`PolyError`], the single error type returned by every
//! fallible operation in the crate. Errors are raised when a model is built
//! (inconsistent tables, zero scales, inverted bounds) or when batch inputs
//! are malformed. The per-call prediction path never produces a `PolyError`;
//! out-of-range inputs are reported through `Prediction::Rejected` instead.
//!
//! ## Design notes
//!
//! * **no_std**: `Display` is implemented by hand so the type works without
//!   the standard library. `std::error::Error` is only implemented with `std`.
//! * **Copyable payloads**: Variants carry indices and `f64` values rather
//!   than formatted strings, so constructing an error never allocates.
//!
//! ## Non-goals
//!
//! * This module does not log; callers decide what to report.

use core::fmt;

#[cfg(feature = "std")]
use std::string::String;

// ============================================================================
// Error Enum
// ============================================================================

/// Errors raised while building a model or evaluating a dataset.
#[derive(Debug, Clone, PartialEq)]
pub enum PolyError {
    /// Batch input slices are empty.
    EmptyInput,

    /// Batch input slices have different lengths.
    MismatchedInputs {
        /// Length of the `a` slice.
        a_len: usize,
        /// Length of the `b` slice.
        b_len: usize,
        /// Length of the target or output slice.
        other_len: usize,
    },

    /// Polynomial degree is larger than the compiled-in maximum.
    UnsupportedDegree {
        /// Requested degree.
        got: usize,
        /// Largest supported degree.
        max: usize,
    },

    /// A model table does not have one entry per monomial feature.
    MismatchedTables {
        /// Name of the offending table.
        table: &'static str,
        /// Number of entries supplied.
        got: usize,
        /// Number of features implied by the degree.
        expected: usize,
    },

    /// A required builder parameter was never set.
    MissingParameter {
        /// Name of the missing parameter.
        parameter: &'static str,
    },

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the duplicated parameter.
        parameter: &'static str,
    },

    /// A standardization scale is zero or not finite.
    InvalidScale {
        /// Feature index of the bad scale.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// A model parameter is NaN or infinite.
    InvalidNumericValue {
        /// Name of the table or scalar holding the value.
        name: &'static str,
        /// Position inside the table (0 for scalars).
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// An input range is inverted or not finite.
    InvalidBounds {
        /// Name of the input the range belongs to.
        input: &'static str,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// A model artifact could not be read or parsed.
    #[cfg(feature = "std")]
    Artifact(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::EmptyInput => write!(f, "Input arrays are empty"),
            PolyError::MismatchedInputs {
                a_len,
                b_len,
                other_len,
            } => write!(
                f,
                "Length mismatch: a has {} values, b has {}, output/target has {}",
                a_len, b_len, other_len
            ),
            PolyError::UnsupportedDegree { got, max } => write!(
                f,
                "Unsupported polynomial degree: {} (must be at most {})",
                got, max
            ),
            PolyError::MismatchedTables {
                table,
                got,
                expected,
            } => write!(
                f,
                "Table '{}' has {} entries, expected {} (one per feature)",
                table, got, expected
            ),
            PolyError::MissingParameter { parameter } => {
                write!(f, "Missing required parameter: {}", parameter)
            }
            PolyError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
            PolyError::InvalidScale { index, value } => write!(
                f,
                "Invalid scale at feature {}: {} (must be non-zero and finite)",
                index, value
            ),
            PolyError::InvalidNumericValue { name, index, value } => {
                write!(f, "Invalid numeric value: {}[{}]={}", name, index, value)
            }
            PolyError::InvalidBounds { input, min, max } => write!(
                f,
                "Invalid bounds for '{}': [{}, {}] (must be finite with min <= max)",
                input, min, max
            ),
            #[cfg(feature = "std")]
            PolyError::Artifact(msg) => write!(f, "Invalid model artifact: {}", msg),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyError {}
