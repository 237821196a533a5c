//! Prediction results.
//!
//! ## Purpose
//!
//! This module defines [`Prediction`], the tagged result of a single model
//! evaluation. A call either yields a value or is rejected because an input
//! lies outside the model's declared range; nothing in between.
//!
//! ## Design notes
//!
//! * **No panics, no errors**: Rejection is an ordinary value so the pipeline
//!   can run where unwinding is unavailable (interrupt handlers, `panic =
//!   "abort"` firmware).
//! * **Legacy sentinel**: [`Prediction::or_sentinel`] collapses a rejection to
//!   [`REJECTED_SENTINEL`] for callers that still expect the firmware's
//!   `-1.0` convention. The tagged form is preferred because `-1.0` is also a
//!   legal model output.
//!
//! ## Invariants
//!
//! * `Rejected` is produced before any feature is computed.

use core::fmt;
use num_traits::Float;

// ============================================================================
// Sentinel
// ============================================================================

/// Value returned by [`Prediction::or_sentinel`] for rejected inputs.
pub const REJECTED_SENTINEL: f64 = -1.0;

// ============================================================================
// Rejection
// ============================================================================

/// Which model input failed its range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAxis {
    /// The first input (`a`).
    A,

    /// The second input (`b`).
    B,
}

/// Reason a prediction was not computed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rejection {
    /// The input that failed.
    pub axis: InputAxis,

    /// The rejected value, widened to `f64` (NaN if it could not be widened).
    pub value: f64,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.axis {
            InputAxis::A => "a",
            InputAxis::B => "b",
        };
        write!(f, "input {}={} is outside the model range", name, self.value)
    }
}

// ============================================================================
// Prediction
// ============================================================================

/// Outcome of one model evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prediction<T> {
    /// The model output, in the caller's float type.
    Value(T),

    /// An input was outside the declared bounds; nothing was computed.
    Rejected(Rejection),
}

impl<T: Float> Prediction<T> {
    /// The predicted value, if any.
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Prediction::Value(v) => Some(v),
            Prediction::Rejected(_) => None,
        }
    }

    /// True when the input was rejected.
    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, Prediction::Rejected(_))
    }

    /// The predicted value, or [`REJECTED_SENTINEL`] when rejected.
    #[inline]
    pub fn or_sentinel(self) -> T {
        match self {
            Prediction::Value(v) => v,
            Prediction::Rejected(_) => T::from(REJECTED_SENTINEL).unwrap_or_else(T::nan),
        }
    }

    /// Convert into a `Result`, for use with `?`.
    #[inline]
    pub fn into_result(self) -> Result<T, Rejection> {
        match self {
            Prediction::Value(v) => Ok(v),
            Prediction::Rejected(r) => Err(r),
        }
    }
}

impl<T> From<Rejection> for Prediction<T> {
    fn from(rejection: Rejection) -> Self {
        Prediction::Rejected(rejection)
    }
}
