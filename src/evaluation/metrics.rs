//! Accuracy metrics for a model over a labelled dataset.
//!
//! ## Purpose
//!
//! This module computes the error statistics the fitting process reports for
//! its train and validation splits (MAE, RMSE), plus R² and the worst
//! absolute error, so a deployed table set can be checked against measured
//! data on the host.
//!
//! ## Design notes
//!
//! * **Streaming**: [`MetricsAccumulator`] consumes one `(prediction, target)`
//!   pair at a time and needs no buffer, so it also runs on the target.
//! * **Compensated**: Sums of errors use [`KahanSum`].
//! * **Welford**: The target variance for R² is tracked with Welford's
//!   update instead of `Σy² - n·ȳ²`.
//!
//! ## Invariants
//!
//! * Rejected rows are counted but contribute to no error statistic.
//! * With zero scored rows every statistic is NaN.

use core::fmt;
use num_traits::Float;

use crate::math::kahan::KahanSum;

// ============================================================================
// Metrics
// ============================================================================

/// Summary statistics of prediction error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Rows that produced a prediction.
    pub scored: usize,

    /// Rows rejected by the input range check.
    pub rejected: usize,

    /// Mean absolute error.
    pub mae: f64,

    /// Root mean squared error.
    pub rmse: f64,

    /// Coefficient of determination.
    pub r_squared: f64,

    /// Largest absolute error seen.
    pub max_abs_error: f64,
}

impl Metrics {
    /// Total rows seen, scored or not.
    #[inline]
    pub fn total(&self) -> usize {
        self.scored + self.rejected
    }
}

impl fmt::Display for Metrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Evaluation:")?;
        writeln!(f, "  Rows:          {}", self.total())?;
        writeln!(f, "  Rejected:      {}", self.rejected)?;
        writeln!(f, "  MAE:           {:.6}", self.mae)?;
        writeln!(f, "  RMSE:          {:.6}", self.rmse)?;
        writeln!(f, "  R^2:           {:.6}", self.r_squared)?;
        writeln!(f, "  Max |error|:   {:.6}", self.max_abs_error)
    }
}

// ============================================================================
// MetricsAccumulator
// ============================================================================

/// Incremental builder for [`Metrics`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MetricsAccumulator {
    scored: usize,
    rejected: usize,
    abs_error: KahanSum<f64>,
    sq_error: KahanSum<f64>,
    max_abs_error: f64,
    target_mean: f64,
    target_m2: f64,
}

impl MetricsAccumulator {
    /// Empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one scored row.
    pub fn push(&mut self, prediction: f64, target: f64) {
        let err = target - prediction;
        let abs_err = Float::abs(err);
        self.scored += 1;
        self.abs_error.add(abs_err);
        self.sq_error.add(err * err);
        self.max_abs_error = self.max_abs_error.max(abs_err);

        // Welford update of the target variance
        let delta = target - self.target_mean;
        self.target_mean += delta / self.scored as f64;
        self.target_m2 += delta * (target - self.target_mean);
    }

    /// Record one rejected row.
    pub fn reject(&mut self) {
        self.rejected += 1;
    }

    /// Final statistics.
    pub fn finish(&self) -> Metrics {
        if self.scored == 0 {
            return Metrics {
                scored: 0,
                rejected: self.rejected,
                mae: f64::NAN,
                rmse: f64::NAN,
                r_squared: f64::NAN,
                max_abs_error: f64::NAN,
            };
        }

        let n = self.scored as f64;
        let ss_res = self.sq_error.value();
        let r_squared = if self.target_m2 > 0.0 {
            1.0 - ss_res / self.target_m2
        } else if ss_res == 0.0 {
            1.0
        } else {
            f64::NEG_INFINITY
        };

        Metrics {
            scored: self.scored,
            rejected: self.rejected,
            mae: self.abs_error.value() / n,
            rmse: Float::sqrt(ss_res / n),
            r_squared,
            max_abs_error: self.max_abs_error,
        }
    }
}
