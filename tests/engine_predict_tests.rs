//! Tests for end-to-end prediction.
//!
//! ## Test Organization
//!
//! 1. **Toy Model** - Hand-computed degree 2 outputs
//! 2. **Rejection** - Out-of-range and non-finite inputs, legacy sentinel
//! 3. **Degree 17** - Reference agreement, finiteness, precision, determinism
//! 4. **Feature Vectors** - Expanded and standardized stages
//! 5. **Reports** - Model summary and feature dump
//! 6. **Concurrency** - Independent models and shared use across threads

use approx::assert_relative_eq;
use polypredict_rs::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};

// ============================================================================
// Fixtures
// ============================================================================

static TOY_COEFFICIENTS: [f64; 6] = [2.0, 3.0, 5.0, 0.0, 1.0, 0.0];
static TOY_MEANS: [f64; 6] = [0.0; 6];
static TOY_SCALES: [f64; 6] = [1.0; 6];

/// Degree 2 model: 1 + 2 + 3a + 5b + ab on [-10, 10]^2.
fn toy_model() -> PolynomialModel<'static> {
    Model::new()
        .degree(2)
        .coefficients(&TOY_COEFFICIENTS)
        .intercept(1.0)
        .scaler(&TOY_MEANS, &TOY_SCALES)
        .a_range(-10.0, 10.0)
        .b_range(-10.0, 10.0)
        .build()
        .expect("Builder should succeed")
}

/// Owned degree 17 tables shaped like a distance-from-angle fit.
///
/// `a` spans [0, 20], `b` spans [-1, 1]. Scales are the largest magnitude
/// each monomial reaches on that box, so standardized features stay in
/// roughly [-1, 1].
struct Tables {
    coefficients: Vec<f64>,
    means: Vec<f64>,
    scales: Vec<f64>,
    intercept: f64,
}

const A_MAX: f64 = 20.0;
const B_MAX: f64 = 1.0;

fn degree17_tables(seed: u64) -> Tables {
    let mut rng = StdRng::seed_from_u64(seed);
    let coeff_dist = Normal::new(0.0, 1.0).unwrap();
    let mean_dist = Uniform::new(-0.1, 0.1).unwrap();

    let n = n_features(17);
    let coefficients: Vec<f64> = (0..n).map(|_| coeff_dist.sample(&mut rng)).collect();
    let means: Vec<f64> = (0..n).map(|_| mean_dist.sample(&mut rng)).collect();
    let scales: Vec<f64> = monomials(17)
        .iter()
        .map(|m| A_MAX.powi(m.a_power as i32) * B_MAX.powi(m.b_power as i32))
        .collect();

    Tables {
        coefficients,
        means,
        scales,
        intercept: 12.5,
    }
}

impl Tables {
    fn model(&self) -> PolynomialModel<'_> {
        Model::new()
            .degree(17)
            .coefficients(&self.coefficients)
            .intercept(self.intercept)
            .scaler(&self.means, &self.scales)
            .a_range(0.0, A_MAX)
            .b_range(-B_MAX, B_MAX)
            .input_names("under_y", "theta")
            .source("synthetic degree 17")
            .build()
            .expect("Builder should succeed")
    }

    /// Straightforward evaluation with `powi`, for comparison.
    fn reference(&self, a: f64, b: f64) -> f64 {
        let mut sum = self.intercept;
        for (idx, term) in monomials(17).iter().enumerate() {
            let raw = a.powi(term.a_power as i32) * b.powi(term.b_power as i32);
            sum += self.coefficients[idx] * (raw - self.means[idx]) / self.scales[idx];
        }
        sum
    }
}

fn random_inputs(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            (
                rng.random_range(0.0..=A_MAX),
                rng.random_range(-B_MAX..=B_MAX),
            )
        })
        .collect()
}

// ============================================================================
// Toy Model Tests
// ============================================================================

/// Test the hand-computed value at (2, 3).
///
/// 1 + 2*1 + 3*2 + 5*3 + 1*(2*3) = 30.
#[test]
fn test_toy_model_value() {
    let model = toy_model();
    assert_eq!(model.predict(2.0f64, 3.0), Prediction::Value(30.0));
    assert_eq!(model.predict(2.0f32, 3.0), Prediction::Value(30.0f32));
    assert_eq!(model.predict_or_sentinel(2.0f64, 3.0), 30.0);
}

/// Test the origin, where only the intercept and constant term remain.
#[test]
fn test_toy_model_origin() {
    let model = toy_model();
    assert_eq!(model.predict(0.0f64, 0.0).value(), Some(3.0));
}

/// Test that values on the bounds are computed, not rejected.
#[test]
fn test_toy_model_inclusive_bounds() {
    let model = toy_model();
    // 1 + 2 + 3*10 + 5*(-10) + 10*(-10) = -117
    assert_eq!(model.predict(10.0f64, -10.0), Prediction::Value(-117.0));
    // 1 + 2 - 30 + 50 - 100 = -77
    assert_eq!(model.predict(-10.0f64, 10.0), Prediction::Value(-77.0));
    assert!(model.accepts(10.0, 10.0));
    assert!(model.accepts(-10.0, -10.0));
}

/// Test that a legitimate output of -1.0 is distinguishable from rejection.
#[test]
fn test_minus_one_is_a_value() {
    let model = toy_model();
    // 1 + 2 + 3a + 5b + ab at a = 0: 3 + 5b = -1 when b = -0.8
    let prediction = model.predict(0.0f64, -0.8);
    assert!(!prediction.is_rejected());
    assert_relative_eq!(prediction.value().unwrap(), -1.0, epsilon = 1e-12);
}

// ============================================================================
// Rejection Tests
// ============================================================================

/// Test out-of-range inputs on each axis.
#[test]
fn test_out_of_range_rejected() {
    let model = toy_model();

    match model.predict(10.5f64, 0.0) {
        Prediction::Rejected(r) => {
            assert_eq!(r.axis, InputAxis::A);
            assert_eq!(r.value, 10.5);
        }
        other => panic!("expected rejection, got {:?}", other),
    }

    match model.predict(0.0f64, -10.5) {
        Prediction::Rejected(r) => assert_eq!(r.axis, InputAxis::B),
        other => panic!("expected rejection, got {:?}", other),
    }
}

/// Test values just beyond each bound.
#[test]
fn test_just_outside_bounds_rejected() {
    let model = toy_model();
    let eps = 10.0 * f64::EPSILON * 2.0;
    assert!(model.predict(-10.0 - eps, 0.0f64).is_rejected());
    assert!(model.predict(10.0 + eps, 0.0f64).is_rejected());
    assert!(model.predict(0.0f64, -10.0 - eps).is_rejected());
    assert!(model.predict(0.0f64, 10.0 + eps).is_rejected());
}

/// Test NaN and infinite inputs.
#[test]
fn test_non_finite_inputs_rejected() {
    let model = toy_model();
    assert!(model.predict(f64::NAN, 0.0).is_rejected());
    assert!(model.predict(0.0, f64::NAN).is_rejected());
    assert!(model.predict(f32::INFINITY, 0.0).is_rejected());
    assert!(model.predict(0.0, f32::NEG_INFINITY).is_rejected());
    assert!(!model.accepts(f64::NAN, 0.0));
}

/// Test the legacy -1.0 sentinel.
#[test]
fn test_sentinel_on_rejection() {
    let model = toy_model();
    assert_eq!(model.predict_or_sentinel(100.0f64, 0.0), -1.0);
    assert_eq!(model.predict_or_sentinel(100.0f32, 0.0), -1.0f32);
    assert_eq!(REJECTED_SENTINEL, -1.0);
    assert_eq!(model.predict(100.0f64, 0.0).or_sentinel(), REJECTED_SENTINEL);
}

/// Test conversion to Result for `?`-style callers.
#[test]
fn test_prediction_into_result() {
    let model = toy_model();
    assert_eq!(model.predict(2.0f64, 3.0).into_result(), Ok(30.0));
    let err = model.predict(0.0f64, 50.0).into_result().unwrap_err();
    assert_eq!(err.axis, InputAxis::B);
    assert_eq!(err.to_string(), "input b=50 is outside the model range");
}

// ============================================================================
// Degree 17 Tests
// ============================================================================

/// Test agreement with a direct powi-based evaluation.
#[test]
fn test_degree17_matches_reference() {
    let tables = degree17_tables(42);
    let model = tables.model();
    assert_eq!(model.n_features(), 171);

    for (a, b) in random_inputs(7, 500) {
        let got = model.predict(a, b).value().expect("input is in range");
        let expected = tables.reference(a, b);
        assert_relative_eq!(got, expected, epsilon = 1e-9, max_relative = 1e-9);
    }
}

/// Test that every in-range input, including the corners, is finite.
#[test]
fn test_degree17_outputs_finite() {
    let tables = degree17_tables(1);
    let model = tables.model();

    let corners = [
        (0.0, -B_MAX),
        (0.0, B_MAX),
        (A_MAX, -B_MAX),
        (A_MAX, B_MAX),
        (A_MAX / 2.0, 0.0),
    ];
    for (a, b) in corners.into_iter().chain(random_inputs(3, 2000)) {
        let value = model.predict(a, b).value().expect("input is in range");
        assert!(value.is_finite(), "non-finite output at ({}, {})", a, b);
    }
}

/// Test that f32 callers get the f64 result narrowed once.
#[test]
fn test_degree17_f32_matches_narrowed_f64() {
    let tables = degree17_tables(9);
    let model = tables.model();

    for (a, b) in random_inputs(11, 500) {
        let (a32, b32) = (a as f32, b as f32);
        let wide = model.predict(a32 as f64, b32 as f64);
        let narrow = model.predict(a32, b32);
        match (wide, narrow) {
            (Prediction::Value(w), Prediction::Value(n)) => assert_eq!(w as f32, n),
            (Prediction::Rejected(_), Prediction::Rejected(_)) => {}
            other => panic!("f32/f64 disagreement: {:?}", other),
        }
    }
}

/// Test bit-identical repeated calls.
#[test]
fn test_degree17_deterministic() {
    let tables = degree17_tables(5);
    let model = tables.model();
    let (a, b): (f64, f64) = (13.37, -0.42);

    let first = model.predict(a, b).value().unwrap();
    for _ in 0..1000 {
        let again = model.predict(a, b).value().unwrap();
        assert_eq!(again.to_bits(), first.to_bits());
    }
}

/// Test that the same tables loaded twice predict identically.
#[test]
fn test_degree17_rebuild_identical() {
    let first = degree17_tables(21);
    let second = degree17_tables(21);
    let (m1, m2) = (first.model(), second.model());
    for (a, b) in random_inputs(4, 100) {
        assert_eq!(m1.predict(a, b), m2.predict(a, b));
    }
}

// ============================================================================
// Feature Vector Tests
// ============================================================================

/// Test expanded and standardized feature vectors.
#[test]
fn test_feature_vector_stages() {
    let means = [0.0, 1.0, 1.0, 0.0, 0.0, 0.0];
    let scales = [1.0, 2.0, 2.0, 4.0, 3.0, 9.0];
    let model = Model::new()
        .degree(2)
        .coefficients(&TOY_COEFFICIENTS)
        .intercept(0.0)
        .scaler(&means, &scales)
        .a_range(-10.0, 10.0)
        .b_range(-10.0, 10.0)
        .build()
        .unwrap();

    let expanded = model
        .feature_vector(2.0f64, 3.0, FeatureStage::Expanded)
        .unwrap();
    assert_eq!(&expanded[..], &[1.0, 2.0, 3.0, 4.0, 6.0, 9.0]);

    let standardized = model
        .feature_vector(2.0f64, 3.0, FeatureStage::Standardized)
        .unwrap();
    assert_eq!(&standardized[..], &[1.0, 0.5, 1.0, 1.0, 2.0, 1.0]);

    assert_eq!(FeatureStage::default(), FeatureStage::Standardized);
}

/// Test that feature vectors are gated like predictions.
#[test]
fn test_feature_vector_rejected() {
    let model = toy_model();
    let err = model
        .feature_vector(20.0f64, 0.0, FeatureStage::Expanded)
        .unwrap_err();
    assert_eq!(err.axis, InputAxis::A);
}

/// Test that predict equals the combiner applied to the standardized vector.
#[test]
fn test_prediction_matches_stages() {
    let tables = degree17_tables(8);
    let model = tables.model();
    for (a, b) in random_inputs(12, 50) {
        let features = model
            .feature_vector(a, b, FeatureStage::Standardized)
            .unwrap();
        let combined = model.combiner().combine(&features);
        assert_eq!(model.predict(a, b), Prediction::Value(combined));
    }
}

// ============================================================================
// Report Tests
// ============================================================================

/// Test the model summary text.
#[test]
fn test_model_summary() {
    let tables = degree17_tables(2);
    let model = tables.model();
    let text = model.summary().to_string();

    assert!(text.starts_with("=== Polynomial Model (Degree 17) ==="));
    assert!(text.contains("Feature count:     171"));
    assert!(text.contains("Inputs:            under_y, theta"));
    assert!(text.contains("[0, 20]"));
    assert!(text.contains("[-1, 1]"));
    assert!(text.contains("Intercept:         12.50000000"));
    assert!(text.contains("Source:            synthetic degree 17"));
    assert!(!text.contains("Training MAE"));
}

/// Test the summary with fit errors recorded.
#[test]
fn test_model_summary_with_mae() {
    let model = Model::new()
        .degree(2)
        .coefficients(&TOY_COEFFICIENTS)
        .intercept(1.0)
        .scaler(&TOY_MEANS, &TOY_SCALES)
        .a_range(-10.0, 10.0)
        .b_range(-10.0, 10.0)
        .training_mae(0.25)
        .validation_mae(0.9)
        .build()
        .unwrap();
    let text = model.summary().to_string();
    assert!(text.contains("Training MAE:      0.250000"));
    assert!(text.contains("Validation MAE:    0.900000"));
}

/// Test a short dump lists every feature by name.
#[test]
fn test_feature_dump_short() {
    let model = toy_model();
    let features = model
        .feature_vector(2.0f64, 3.0, FeatureStage::Expanded)
        .unwrap();
    let text = model.dump(&features).to_string();

    assert!(text.starts_with("Feature values (6):"));
    assert!(text.contains("  Feature   0 (1): 1.000000"));
    assert!(text.contains("  Feature   4 (a b): 6.000000"));
    assert!(text.contains("  Feature   5 (b^2): 9.000000"));
    assert!(!text.contains("omitted"));
}

/// Test a 171-feature dump shows the first 20 and last 10.
#[test]
fn test_feature_dump_long() {
    let tables = degree17_tables(6);
    let model = tables.model();
    let features = model
        .feature_vector(1.0f64, 1.0, FeatureStage::Expanded)
        .unwrap();
    let text = model.dump(&features).to_string();

    assert!(text.starts_with("Feature values (first 20 and last 10 of 171):"));
    assert!(text.contains("  ... (141 features omitted) ..."));
    assert!(text.contains("  Feature  19 (under_y theta^4): 1.000000"));
    assert!(!text.contains("Feature  20 "));
    assert!(!text.contains("Feature 160 "));
    assert!(text.contains("  Feature 161 (under_y^9 theta^8): 1.000000"));
    assert!(text.contains("  Feature 170 (theta^17): 1.000000"));
    assert_eq!(text.lines().filter(|l| l.starts_with("  Feature ")).count(), 30);
}

// ============================================================================
// Concurrency Tests
// ============================================================================

/// Test that two models with different tables do not interfere.
#[test]
fn test_independent_models() {
    let first = degree17_tables(100);
    let second = degree17_tables(200);
    let (m1, m2) = (first.model(), second.model());

    let (a, b) = (5.0, 0.25);
    let v1 = m1.predict(a, b).value().unwrap();
    let v2 = m2.predict(a, b).value().unwrap();
    assert_ne!(v1, v2);
    assert_eq!(m1.predict(a, b).value(), Some(v1));
}

/// Test that concurrent callers see the same results as a single thread.
#[test]
fn test_shared_model_across_threads() {
    let tables = degree17_tables(77);
    let model = tables.model();
    let inputs = random_inputs(78, 200);
    let expected: Vec<_> = inputs.iter().map(|&(a, b)| model.predict(a, b)).collect();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                s.spawn(|| {
                    inputs
                        .iter()
                        .map(|&(a, b)| model.predict(a, b))
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
