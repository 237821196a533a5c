//! High-level API for building polynomial models.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder that collects the fitted tables and input ranges, checks
//! them once, and produces an immutable [`PolynomialModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; only metadata has defaults, every table
//!   must be supplied explicitly.
//! * **Borrowing**: The builder stores slices, so `'static` tables from flash
//!   and tables owned by a loaded artifact are handled the same way.
//! * **Validated**: All consistency checks run in [`PolynomialModelBuilder::build`].
//!   The prediction path trusts the result.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PolynomialModelBuilder`] via `Model::new()`.
//! 2. Chain configuration methods (`.degree()`, `.coefficients()`, ...).
//! 3. Call `.build()` to get a [`PolynomialModel`].

use log::{debug, warn};

use crate::primitives::buffer::feature_count;

// Publicly re-exported types
#[cfg(feature = "std")]
pub use crate::adapters::artifact::{ArtifactInput, ModelArtifact};
pub use crate::adapters::batch::BatchPredictor;
pub use crate::algorithms::combine::LinearCombiner;
pub use crate::algorithms::expansion::PolynomialFeatures;
pub use crate::algorithms::monomials::{Monomial, MonomialName, index_of, monomials};
pub use crate::algorithms::standardize::StandardScaler;
pub use crate::engine::executor::FeatureStage;
pub use crate::engine::model::{InputRange, ModelMetadata, PolynomialModel};
pub use crate::engine::output::{InputAxis, Prediction, REJECTED_SENTINEL, Rejection};
pub use crate::engine::report::{FeatureDump, ModelSummary};
pub use crate::engine::validator::Validator;
pub use crate::evaluation::metrics::{Metrics, MetricsAccumulator};
pub use crate::math::kahan::{KahanSum, compensated_dot, naive_dot};
pub use crate::math::powers::{PowerTable, fill_powers};
pub use crate::primitives::buffer::{FeatureBuffer, MAX_DEGREE, MAX_FEATURES};
pub use crate::primitives::errors::PolyError;

/// Number of monomial features for a model of total degree `degree`.
#[inline]
pub const fn n_features(degree: usize) -> usize {
    feature_count(degree)
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a [`PolynomialModel`].
#[derive(Debug, Clone, Default)]
pub struct PolynomialModelBuilder<'a> {
    /// Total polynomial degree D.
    pub degree: Option<usize>,

    /// One coefficient per feature, canonical order.
    pub coefficients: Option<&'a [f64]>,

    /// Intercept of the linear model.
    pub intercept: Option<f64>,

    /// Standard scaler means, one per feature.
    pub means: Option<&'a [f64]>,

    /// Standard scaler scales, one per feature.
    pub scales: Option<&'a [f64]>,

    /// Accepted range of the first input.
    pub a_range: Option<InputRange>,

    /// Accepted range of the second input.
    pub b_range: Option<InputRange>,

    /// Display names of the two inputs.
    pub input_names: Option<(&'a str, &'a str)>,

    /// Provenance of the tables.
    pub source: Option<&'a str>,

    /// Training-set MAE reported by the fit.
    pub training_mae: Option<f64>,

    /// Validation-set MAE reported by the fit.
    pub validation_mae: Option<f64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

/// Set an optional builder field, flagging it if it was already set.
macro_rules! set_once {
    ($self:ident, $field:ident, $value:expr) => {{
        if $self.$field.is_some() {
            $self.duplicate_param = Some(stringify!($field));
        }
        $self.$field = Some($value);
        $self
    }};
}

impl<'a> PolynomialModelBuilder<'a> {
    /// Create a new builder with nothing set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the total polynomial degree.
    pub fn degree(mut self, degree: usize) -> Self {
        set_once!(self, degree, degree)
    }

    /// Set the coefficient table.
    pub fn coefficients(mut self, coefficients: &'a [f64]) -> Self {
        set_once!(self, coefficients, coefficients)
    }

    /// Set the intercept.
    pub fn intercept(mut self, intercept: f64) -> Self {
        set_once!(self, intercept, intercept)
    }

    /// Set the standard scaler tables.
    pub fn scaler(mut self, means: &'a [f64], scales: &'a [f64]) -> Self {
        if self.means.is_some() || self.scales.is_some() {
            self.duplicate_param = Some("scaler");
        }
        self.means = Some(means);
        self.scales = Some(scales);
        self
    }

    /// Set the inclusive range of the first input.
    pub fn a_range(mut self, min: f64, max: f64) -> Self {
        set_once!(self, a_range, InputRange::new(min, max))
    }

    /// Set the inclusive range of the second input.
    pub fn b_range(mut self, min: f64, max: f64) -> Self {
        set_once!(self, b_range, InputRange::new(min, max))
    }

    /// Set display names for the two inputs (default `a`, `b`).
    pub fn input_names(mut self, a_name: &'a str, b_name: &'a str) -> Self {
        set_once!(self, input_names, (a_name, b_name))
    }

    /// Describe where the tables came from.
    pub fn source(mut self, source: &'a str) -> Self {
        set_once!(self, source, source)
    }

    /// Record the training-set MAE reported by the fit.
    pub fn training_mae(mut self, mae: f64) -> Self {
        set_once!(self, training_mae, mae)
    }

    /// Record the validation-set MAE reported by the fit.
    pub fn validation_mae(mut self, mae: f64) -> Self {
        set_once!(self, validation_mae, mae)
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<PolynomialModel<'a>, PolyError> {
        self.try_build().inspect_err(|err| {
            warn!("polynomial model rejected: {}", err);
        })
    }

    fn try_build(self) -> Result<PolynomialModel<'a>, PolyError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let degree = required(self.degree, "degree")?;
        let coefficients = required(self.coefficients, "coefficients")?;
        let intercept = required(self.intercept, "intercept")?;
        let means = required(self.means, "means")?;
        let scales = required(self.scales, "scales")?;
        let a_range = required(self.a_range, "a_range")?;
        let b_range = required(self.b_range, "b_range")?;

        // Shape
        Validator::validate_degree(degree)?;
        let n = feature_count(degree);
        Validator::validate_table_len("coefficients", coefficients.len(), n)?;
        Validator::validate_table_len("means", means.len(), n)?;
        Validator::validate_table_len("scales", scales.len(), n)?;

        // Values
        Validator::validate_scalar("intercept", intercept)?;
        Validator::validate_finite("coefficients", coefficients)?;
        Validator::validate_finite("means", means)?;
        Validator::validate_scales(scales)?;
        Validator::validate_range("a", a_range)?;
        Validator::validate_range("b", b_range)?;

        let (a_name, b_name) = self.input_names.unwrap_or(("a", "b"));
        let metadata = ModelMetadata {
            a_name,
            b_name,
            source: self.source,
            training_mae: self.training_mae,
            validation_mae: self.validation_mae,
        };

        debug!(
            "built polynomial model: degree={} features={} {}=[{}, {}] {}=[{}, {}]",
            degree, n, a_name, a_range.min, a_range.max, b_name, b_range.min, b_range.max
        );

        Ok(PolynomialModel::from_validated_parts(
            PolynomialFeatures::new(degree),
            StandardScaler::new(means, scales),
            LinearCombiner::new(coefficients, intercept),
            a_range,
            b_range,
            metadata,
        ))
    }
}

#[inline]
fn required<V>(value: Option<V>, parameter: &'static str) -> Result<V, PolyError> {
    value.ok_or(PolyError::MissingParameter { parameter })
}
