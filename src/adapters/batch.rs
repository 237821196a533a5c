//! Batch adapter for evaluating many input pairs.
//!
//! ## Purpose
//!
//! This module runs a model over parallel slices of inputs, either writing
//! predictions into a caller-provided slice or scoring them against measured
//! targets. It is the host-side counterpart of the single-call firmware path
//! and is what a deployment check uses to confirm that the embedded tables
//! reproduce the fit's reported error.
//!
//! ## Design notes
//!
//! * **Delegation**: Every row goes through the same executor as a single
//!   call, so batch and single predictions are bit-identical.
//! * **No allocation** in [`BatchPredictor::predict_into`] and
//!   [`BatchPredictor::evaluate`]; [`BatchPredictor::predict`] allocates the
//!   output vector and needs `std`.
//!
//! ## Invariants
//!
//! * Input, target and output slices must have equal, non-zero length.
//! * Output order matches input order.
//!
//! ## Non-goals
//!
//! * Parallel execution across rows.

#[cfg(feature = "std")]
use std::vec::Vec;

use log::debug;
use num_traits::Float;

use crate::engine::model::PolynomialModel;
use crate::engine::output::Prediction;
use crate::engine::validator::Validator;
use crate::evaluation::metrics::{Metrics, MetricsAccumulator};
use crate::primitives::errors::PolyError;

// ============================================================================
// BatchPredictor
// ============================================================================

/// Runs a borrowed model over slices of inputs.
#[derive(Debug, Clone, Copy)]
pub struct BatchPredictor<'m, 'a> {
    model: &'m PolynomialModel<'a>,
}

impl<'m, 'a> BatchPredictor<'m, 'a> {
    /// Wrap `model`.
    pub fn new(model: &'m PolynomialModel<'a>) -> Self {
        Self { model }
    }

    /// Predict every `(a[i], b[i])` into `out[i]`.
    ///
    /// Returns the number of rejected rows.
    pub fn predict_into<T: Float>(
        &self,
        a: &[T],
        b: &[T],
        out: &mut [Prediction<T>],
    ) -> Result<usize, PolyError> {
        Validator::validate_batch(a.len(), b.len(), out.len())?;

        let mut rejected = 0;
        for ((slot, &ai), &bi) in out.iter_mut().zip(a).zip(b) {
            *slot = self.model.predict(ai, bi);
            if slot.is_rejected() {
                rejected += 1;
            }
        }
        Ok(rejected)
    }

    /// Predict every `(a[i], b[i])` into a new vector.
    #[cfg(feature = "std")]
    pub fn predict<T: Float>(&self, a: &[T], b: &[T]) -> Result<Vec<Prediction<T>>, PolyError> {
        Validator::validate_batch(a.len(), b.len(), b.len())?;

        Ok(a.iter()
            .zip(b)
            .map(|(&ai, &bi)| self.model.predict(ai, bi))
            .collect())
    }

    /// Score predictions for `(a[i], b[i])` against `targets[i]`.
    ///
    /// Rejected rows are counted in [`Metrics::rejected`] and excluded from
    /// the error statistics.
    pub fn evaluate<T: Float>(&self, a: &[T], b: &[T], targets: &[T]) -> Result<Metrics, PolyError> {
        Validator::validate_batch(a.len(), b.len(), targets.len())?;

        let mut acc = MetricsAccumulator::new();
        for ((&ai, &bi), &yi) in a.iter().zip(b).zip(targets) {
            match self.model.predict(ai, bi) {
                Prediction::Value(v) => acc.push(
                    v.to_f64().unwrap_or(f64::NAN),
                    yi.to_f64().unwrap_or(f64::NAN),
                ),
                Prediction::Rejected(_) => acc.reject(),
            }
        }

        let metrics = acc.finish();
        debug!(
            "evaluated {} rows ({} rejected): mae={:.6} rmse={:.6}",
            metrics.total(),
            metrics.rejected,
            metrics.mae,
            metrics.rmse
        );
        Ok(metrics)
    }
}
