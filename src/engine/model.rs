//! The validated, immutable polynomial model.
//!
//! ## Purpose
//!
//! This module defines [`PolynomialModel`], the value every prediction runs
//! against. It bundles the feature expander, the standard scaler, the linear
//! combiner, the input ranges and descriptive metadata.
//!
//! ## Design notes
//!
//! * **Borrowed tables**: The model holds slices, not vectors. On firmware the
//!   tables are `'static` arrays in flash; on a host they borrow from a
//!   loaded artifact. Either way the model is `Copy` and needs no allocator.
//! * **Injected, not global**: Any number of models may coexist; nothing in
//!   the crate refers to a particular set of tables.
//! * **Validated once**: Only the builder constructs a model, after all
//!   table checks have passed.
//!
//! ## Invariants
//!
//! * `coefficients`, `means` and `scales` all have `(D+1)(D+2)/2` entries.
//! * Every scale is finite and non-zero; every table entry is finite.
//! * Both input ranges are finite with `min <= max`.

use num_traits::Float;

use crate::algorithms::combine::LinearCombiner;
use crate::algorithms::expansion::PolynomialFeatures;
use crate::algorithms::standardize::StandardScaler;
use crate::engine::executor::{FeatureStage, PredictionExecutor};
use crate::engine::output::{Prediction, Rejection};
use crate::engine::report::{FeatureDump, ModelSummary};
use crate::engine::validator::Validator;
use crate::primitives::buffer::FeatureBuffer;

// ============================================================================
// InputRange
// ============================================================================

/// Inclusive range `[min, max]` accepted for one model input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputRange {
    /// Smallest accepted value.
    pub min: f64,

    /// Largest accepted value.
    pub max: f64,
}

impl InputRange {
    /// Create a range. Not validated until the model is built.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True iff `min <= x <= max`. Always false for NaN.
    #[inline]
    pub fn contains(&self, x: f64) -> bool {
        x >= self.min && x <= self.max
    }
}

// ============================================================================
// ModelMetadata
// ============================================================================

/// Descriptive fields carried alongside the tables.
///
/// None of these affect predictions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelMetadata<'a> {
    /// Display name of the first input.
    pub a_name: &'a str,

    /// Display name of the second input.
    pub b_name: &'a str,

    /// Where the tables came from (fit run, file name, ...).
    pub source: Option<&'a str>,

    /// Mean absolute error on the training set, as reported by the fit.
    pub training_mae: Option<f64>,

    /// Mean absolute error on the validation set, as reported by the fit.
    pub validation_mae: Option<f64>,
}

impl Default for ModelMetadata<'_> {
    fn default() -> Self {
        Self {
            a_name: "a",
            b_name: "b",
            source: None,
            training_mae: None,
            validation_mae: None,
        }
    }
}

// ============================================================================
// PolynomialModel
// ============================================================================

/// A fitted bivariate polynomial regression model, ready to evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolynomialModel<'a> {
    features: PolynomialFeatures,
    scaler: StandardScaler<'a>,
    combiner: LinearCombiner<'a>,
    a_range: InputRange,
    b_range: InputRange,
    metadata: ModelMetadata<'a>,
}

impl<'a> PolynomialModel<'a> {
    /// Assemble a model from parts the builder has already validated.
    pub(crate) fn from_validated_parts(
        features: PolynomialFeatures,
        scaler: StandardScaler<'a>,
        combiner: LinearCombiner<'a>,
        a_range: InputRange,
        b_range: InputRange,
        metadata: ModelMetadata<'a>,
    ) -> Self {
        Self {
            features,
            scaler,
            combiner,
            a_range,
            b_range,
            metadata,
        }
    }

    // ========================================================================
    // Prediction
    // ========================================================================

    /// Predict the model output for `(a, b)`.
    ///
    /// All intermediate arithmetic is `f64`; the result is narrowed to `T`
    /// at the end. Out-of-range inputs yield [`Prediction::Rejected`] without
    /// computing any feature.
    #[inline]
    pub fn predict<T: Float>(&self, a: T, b: T) -> Prediction<T> {
        PredictionExecutor::run(self, a, b)
    }

    /// Predict, returning `-1.0` for rejected inputs.
    ///
    /// Matches the legacy firmware signature. Prefer [`Self::predict`].
    #[inline]
    pub fn predict_or_sentinel<T: Float>(&self, a: T, b: T) -> T {
        self.predict(a, b).or_sentinel()
    }

    /// True iff `(a, b)` would be accepted by [`Self::predict`].
    #[inline]
    pub fn accepts(&self, a: f64, b: f64) -> bool {
        Validator::validate_input_range(a, b, self.a_range, self.b_range)
    }

    /// The feature vector for `(a, b)` after the given pipeline stage.
    pub fn feature_vector<T: Float>(
        &self,
        a: T,
        b: T,
        stage: FeatureStage,
    ) -> Result<FeatureBuffer, Rejection> {
        let (a, b) = PredictionExecutor::gate(self, a, b)?;
        let mut buffer = FeatureBuffer::new();
        PredictionExecutor::features_into(self, a, b, stage, &mut buffer);
        Ok(buffer)
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Human-readable description of the model.
    pub fn summary(&self) -> ModelSummary<'_, 'a> {
        ModelSummary::new(self)
    }

    /// Human-readable dump of a feature vector produced by this model.
    pub fn dump<'f>(&'f self, features: &'f [f64]) -> FeatureDump<'f> {
        FeatureDump::new(
            features,
            self.features.degree(),
            self.metadata.a_name,
            self.metadata.b_name,
        )
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Total polynomial degree D.
    #[inline]
    pub fn degree(&self) -> usize {
        self.features.degree()
    }

    /// Number of features, `(D+1)(D+2)/2`.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.n_features()
    }

    /// The feature expander.
    #[inline]
    pub fn expander(&self) -> PolynomialFeatures {
        self.features
    }

    /// The standard scaler tables.
    #[inline]
    pub fn scaler(&self) -> StandardScaler<'a> {
        self.scaler
    }

    /// The coefficients and intercept.
    #[inline]
    pub fn combiner(&self) -> LinearCombiner<'a> {
        self.combiner
    }

    /// Coefficient table.
    #[inline]
    pub fn coefficients(&self) -> &'a [f64] {
        self.combiner.coefficients()
    }

    /// Intercept.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.combiner.intercept()
    }

    /// Accepted range of the first input.
    #[inline]
    pub fn a_range(&self) -> InputRange {
        self.a_range
    }

    /// Accepted range of the second input.
    #[inline]
    pub fn b_range(&self) -> InputRange {
        self.b_range
    }

    /// Descriptive metadata.
    #[inline]
    pub fn metadata(&self) -> &ModelMetadata<'a> {
        &self.metadata
    }
}
