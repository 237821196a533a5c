//! Prediction pipeline execution.
//!
//! ## Purpose
//!
//! This module runs one prediction end to end:
//!
//! ```text
//! validate → expand → standardize → combine → narrow
//! ```
//!
//! ## Design notes
//!
//! * **Gate first**: Inputs are widened to `f64` and range-checked before the
//!   feature buffer exists. A rejected call does no numeric work.
//! * **Stack buffer**: Each call creates its own [`FeatureBuffer`]; nothing is
//!   shared between calls, so the executor is re-entrant.
//! * **Late narrowing**: The `f64` result is converted to the caller's type
//!   only after the compensated sum completes.
//!
//! ## Invariants
//!
//! * Identical inputs on an identical model give bit-identical outputs.
//! * The executor never allocates and never panics on a built model.

use log::trace;
use num_traits::Float;

use crate::engine::model::PolynomialModel;
use crate::engine::output::{InputAxis, Prediction, Rejection};
use crate::engine::validator::Validator;
use crate::primitives::buffer::FeatureBuffer;

// ============================================================================
// Feature Stage
// ============================================================================

/// How far through the pipeline a requested feature vector should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureStage {
    /// Raw monomials `a^i b^j`.
    Expanded,

    /// Monomials after `(x - mean) / scale`.
    #[default]
    Standardized,
}

// ============================================================================
// Executor
// ============================================================================

/// Stateless driver for the prediction pipeline.
pub struct PredictionExecutor;

impl PredictionExecutor {
    /// Run the full pipeline for `(a, b)`.
    pub fn run<T: Float>(model: &PolynomialModel<'_>, a: T, b: T) -> Prediction<T> {
        let (a, b) = match Self::gate(model, a, b) {
            Ok(pair) => pair,
            Err(rejection) => return Prediction::Rejected(rejection),
        };

        let mut features = FeatureBuffer::new();
        let value = Self::evaluate(model, a, b, &mut features);

        Prediction::Value(T::from(value).unwrap_or_else(T::nan))
    }

    /// Widen `(a, b)` to working precision and range-check it.
    #[inline]
    pub fn gate<T: Float>(
        model: &PolynomialModel<'_>,
        a: T,
        b: T,
    ) -> Result<(f64, f64), Rejection> {
        let a = widen(a, InputAxis::A)?;
        let b = widen(b, InputAxis::B)?;
        Validator::check_input_range(a, b, model.a_range(), model.b_range()).inspect_err(|r| {
            trace!("rejected prediction: {}", r);
        })?;
        Ok((a, b))
    }

    /// Expand, standardize and combine an already-gated pair.
    #[inline]
    pub fn evaluate(
        model: &PolynomialModel<'_>,
        a: f64,
        b: f64,
        features: &mut FeatureBuffer,
    ) -> f64 {
        Self::features_into(model, a, b, FeatureStage::Standardized, features);
        model.combiner().combine(features.as_slice())
    }

    /// Fill `features` up to the requested stage.
    #[inline]
    pub fn features_into(
        model: &PolynomialModel<'_>,
        a: f64,
        b: f64,
        stage: FeatureStage,
        features: &mut FeatureBuffer,
    ) {
        model.expander().expand(a, b, features);
        if stage == FeatureStage::Standardized {
            model.scaler().transform(features.as_mut_slice());
        }
    }
}

/// Convert an input to `f64`, rejecting values that cannot be represented.
#[inline]
fn widen<T: Float>(x: T, axis: InputAxis) -> Result<f64, Rejection> {
    x.to_f64().ok_or(Rejection {
        axis,
        value: f64::NAN,
    })
}
