//! # polypredict: allocation-free polynomial regression inference
//!
//! Evaluates a fixed, precomputed bivariate polynomial regression model
//! within a microsecond-scale budget on small embedded processors, with the
//! same numbers on a host for validation.
//!
//! ## What does it compute?
//!
//! A model of total degree `D` maps two inputs `(a, b)` to one output:
//!
//! ```text
//! features  = [a^i b^j for k in 0..=D for (i, j) in (k,0), (k-1,1), .., (0,k)]
//! scaled[i] = (features[i] - mean[i]) / scale[i]
//! output    = intercept + Σ coefficient[i] * scaled[i]        (Kahan summation)
//! ```
//!
//! The tables (`coefficient`, `mean`, `scale`, `intercept`) and the accepted
//! input ranges come from an offline fit. This crate never trains or updates
//! them; it evaluates them exactly the way they were fitted.
//!
//! **Pipeline:**
//!
//! 1. **Validate**: reject `(a, b)` outside the model's inclusive ranges
//! 2. **Expand**: cached powers in `f64`, one multiply per monomial
//! 3. **Standardize**: per-feature `(x - mean) / scale`
//! 4. **Combine**: compensated dot product plus intercept, narrowed last
//!
//! ## Quick Start
//!
//! ```rust
//! use polypredict_rs::prelude::*;
//!
//! // Degree 2: features are [1, a, b, a^2, ab, b^2]
//! let coefficients = [2.0, 3.0, 5.0, 0.0, 1.0, 0.0];
//! let means = [0.0; 6];
//! let scales = [1.0; 6];
//!
//! let model = Model::new()
//!     .degree(2)
//!     .coefficients(&coefficients)
//!     .intercept(1.0)
//!     .scaler(&means, &scales)
//!     .a_range(-10.0, 10.0)
//!     .b_range(-10.0, 10.0)
//!     .build()?;
//!
//! // 1 + 2*1 + 3*2 + 5*3 + 1*(2*3) = 30
//! assert_eq!(model.predict(2.0_f32, 3.0_f32), Prediction::Value(30.0));
//!
//! // Out-of-range inputs are rejected, not computed
//! assert!(model.predict(11.0_f32, 0.0).is_rejected());
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Two different failure channels exist:
//!
//! - **`PolyError`** from `Model::build()` when the tables are
//!   inconsistent (wrong lengths, zero scales, NaNs, inverted ranges). This
//!   happens once, when the model is assembled.
//! - **`Prediction::Rejected`** from `predict` when an input is outside its
//!   range. This is a value, not an error: the pipeline has no panics and no
//!   error path, so it can run in interrupt context.
//!
//! ```rust
//! use polypredict_rs::prelude::*;
//! # let coefficients = [2.0, 3.0, 5.0, 0.0, 1.0, 0.0];
//! # let means = [0.0; 6];
//! # let scales = [1.0; 6];
//! # let model = Model::new().degree(2).coefficients(&coefficients).intercept(1.0)
//! #     .scaler(&means, &scales).a_range(-10.0, 10.0).b_range(-10.0, 10.0).build()?;
//!
//! match model.predict(2.0_f64, 42.0) {
//!     Prediction::Value(distance) => println!("distance = {}", distance),
//!     Prediction::Rejected(why) => println!("skipped reading: {}", why),
//! }
//!
//! // Firmware-compatible form: -1.0 on rejection
//! assert_eq!(model.predict_or_sentinel(2.0_f64, 42.0), -1.0);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! polypredict-rs = { version = "0.1", default-features = false }
//! ```
//!
//! On the device the tables are usually `'static` arrays generated by the
//! fitting tool. The model borrows them, so nothing is copied into RAM and
//! nothing is allocated:
//!
//! ```rust
//! use polypredict_rs::prelude::*;
//!
//! static COEFFICIENTS: [f64; 3] = [0.0, 1.5, -0.5];
//! static MEANS: [f64; 3] = [0.0, 10.0, 0.0];
//! static SCALES: [f64; 3] = [1.0, 2.0, 0.25];
//!
//! fn model() -> Result<PolynomialModel<'static>, PolyError> {
//!     Model::new()
//!         .degree(1)
//!         .coefficients(&COEFFICIENTS)
//!         .intercept(12.0)
//!         .scaler(&MEANS, &SCALES)
//!         .a_range(0.0, 20.0)
//!         .b_range(-1.0, 1.0)
//!         .input_names("under_y", "theta")
//!         .build()
//! }
//!
//! let model = model()?;
//! // 12 + 1.5 * (14 - 10) / 2 - 0.5 * 0.5 / 0.25 = 12 + 3 - 1 = 14
//! assert_eq!(model.predict_or_sentinel(14.0_f32, 0.5), 14.0);
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! **Tips for embedded usage:**
//! - Build the model once at start-up and keep it; `PolynomialModel` is `Copy`
//! - Inputs and outputs may be `f32`; the pipeline still runs in `f64`
//! - `FeatureBuffer` lives on the stack: budget about 2 KiB per call
//!
//! ## Builder Parameters
//!
//! | Parameter          | Required | Description                                         |
//! |--------------------|----------|-----------------------------------------------------|
//! | **degree**         | yes      | Total polynomial degree `D` (at most `MAX_DEGREE`)  |
//! | **coefficients**   | yes      | `(D+1)(D+2)/2` coefficients in canonical order      |
//! | **intercept**      | yes      | Constant added before the products                  |
//! | **scaler**         | yes      | Parallel `mean` / `scale` tables, scales non-zero   |
//! | **a_range**        | yes      | Inclusive `[min, max]` of the first input           |
//! | **b_range**        | yes      | Inclusive `[min, max]` of the second input          |
//! | **input_names**    | no       | Display names (default `a`, `b`)                    |
//! | **source**         | no       | Provenance string shown in summaries                |
//! | **training_mae**   | no       | Fit-time training error, shown in summaries         |
//! | **validation_mae** | no       | Fit-time validation error, shown in summaries       |
//!
//! Setting a parameter twice is an error (`PolyError::DuplicateParameter`).
//!
//! ## Monomial Order
//!
//! Coefficients are positional, so the feature order is part of the model's
//! contract. Features are grouped by ascending total degree; inside a group
//! the power of `a` descends:
//!
//! ```rust
//! use polypredict_rs::prelude::*;
//!
//! let names: Vec<String> = monomials(2)
//!     .iter()
//!     .map(|m| m.named("a", "b").to_string())
//!     .collect();
//! assert_eq!(names, ["1", "a", "b", "a^2", "a b", "b^2"]);
//! assert_eq!(n_features(17), 171);
//! ```
//!
//! ## Diagnostics
//!
//! `ModelSummary` and `FeatureDump` render a model and a feature vector for
//! debugging over a serial console or in host tools:
//!
//! ```rust
//! use polypredict_rs::prelude::*;
//! # let coefficients = [2.0, 3.0, 5.0, 0.0, 1.0, 0.0];
//! # let means = [0.0; 6];
//! # let scales = [1.0; 6];
//! # let model = Model::new().degree(2).coefficients(&coefficients).intercept(1.0)
//! #     .scaler(&means, &scales).a_range(-10.0, 10.0).b_range(-10.0, 10.0).build()?;
//!
//! println!("{}", model.summary());
//!
//! let features = model.feature_vector(2.0_f64, 3.0, FeatureStage::Expanded).unwrap();
//! assert_eq!(&features[..], &[1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);
//! println!("{}", model.dump(&features));
//! # Result::<(), PolyError>::Ok(())
//! ```
//!
//! ```text
//! === Polynomial Model (Degree 2) ===
//!   Polynomial degree: 2
//!   Feature count:     6
//!   Inputs:            a, b
//!   Range a            [-10, 10]
//!   Range b            [-10, 10]
//!   Intercept:         1.00000000
//!   Precision:         f64 working precision, Kahan summation
//! ```
//!
//! ## Batch Evaluation and Artifacts
//!
//! With `std`, models can be loaded from JSON and scored against measured
//! data, reporting the same MAE/RMSE the fit reported:
//!
//! ```rust
//! # #[cfg(feature = "std")] {
//! use polypredict_rs::prelude::*;
//!
//! let json = r#"{
//!     "degree": 1,
//!     "intercept": 0.0,
//!     "coefficients": [0.0, 1.0, 1.0],
//!     "scaler_mean": [0.0, 0.0, 0.0],
//!     "scaler_scale": [1.0, 1.0, 1.0],
//!     "a": { "name": "under_y", "min": 0.0, "max": 10.0 },
//!     "b": { "name": "theta", "min": 0.0, "max": 10.0 }
//! }"#;
//!
//! let artifact = ModelArtifact::from_json_str(json).unwrap();
//! let model = artifact.model().unwrap();
//!
//! let a = [1.0, 2.0, 50.0];
//! let b = [1.0, 2.0, 1.0];
//! let measured = [2.0, 4.5, 0.0];
//!
//! let metrics = BatchPredictor::new(&model).evaluate(&a, &b, &measured).unwrap();
//! assert_eq!(metrics.scored, 2);
//! assert_eq!(metrics.rejected, 1);
//! assert_eq!(metrics.mae, 0.25);
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate emits records through the [`log`](https://docs.rs/log) facade:
//! `debug` when a model is built or an artifact is loaded, `warn` when a
//! build is refused, `trace` for each rejected prediction. It never installs
//! a logger.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type and fixed-capacity buffers.
mod primitives;

// Layer 2: Math - power tables and compensated summation.
mod math;

// Layer 3: Algorithms - feature expansion, standardization and
// linear combination.
mod algorithms;

// Layer 4: Evaluation - accuracy metrics over labelled data.
mod evaluation;

// Layer 5: Engine - the validated model, input gating and the
// prediction pipeline.
mod engine;

// Layer 6: Adapters - batch evaluation and JSON artifacts.
mod adapters;

// High-level fluent API for building models.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use polypredict_rs::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::api::{ArtifactInput, ModelArtifact};
    pub use crate::api::{
        BatchPredictor, FeatureBuffer, FeatureDump, FeatureStage, InputAxis, InputRange,
        KahanSum, LinearCombiner, MAX_DEGREE, MAX_FEATURES, Metrics, MetricsAccumulator,
        Monomial, MonomialName, ModelMetadata, ModelSummary, PolyError,
        PolynomialFeatures, PolynomialModel, PolynomialModelBuilder,
        PolynomialModelBuilder as Model, PowerTable, Prediction, REJECTED_SENTINEL, Rejection,
        StandardScaler, Validator, compensated_dot, fill_powers, index_of, monomials,
        n_features, naive_dot,
    };
}
