//! Tests for the model builder.
//!
//! ## Test Organization
//!
//! 1. **Successful Builds** - Required and optional parameters
//! 2. **Missing Parameters** - Each required field
//! 3. **Duplicate Parameters** - Setting a field twice
//! 4. **Table Errors** - Lengths, values, scales, bounds, degree

use polypredict_rs::prelude::*;

static COEFFICIENTS: [f64; 6] = [2.0, 3.0, 5.0, 0.0, 1.0, 0.0];
static MEANS: [f64; 6] = [0.0; 6];
static SCALES: [f64; 6] = [1.0; 6];

/// A complete, valid degree 2 builder.
fn toy_builder<'a>() -> PolynomialModelBuilder<'a> {
    Model::new()
        .degree(2)
        .coefficients(&COEFFICIENTS)
        .intercept(1.0)
        .scaler(&MEANS, &SCALES)
        .a_range(-10.0, 10.0)
        .b_range(-10.0, 10.0)
}

// ============================================================================
// Successful Build Tests
// ============================================================================

/// Test a minimal build and its accessors.
#[test]
fn test_build_minimal() {
    let model = toy_builder().build().expect("Builder should succeed");
    assert_eq!(model.degree(), 2);
    assert_eq!(model.n_features(), 6);
    assert_eq!(model.intercept(), 1.0);
    assert_eq!(model.coefficients(), &COEFFICIENTS);
    assert_eq!(model.scaler().means(), &MEANS);
    assert_eq!(model.scaler().scales(), &SCALES);
    assert_eq!(model.a_range(), InputRange::new(-10.0, 10.0));
    assert_eq!(model.b_range(), InputRange::new(-10.0, 10.0));
    assert_eq!(model.metadata(), &ModelMetadata::default());
}

/// Test that optional metadata is carried through.
#[test]
fn test_build_with_metadata() {
    let model = toy_builder()
        .input_names("under_y", "theta")
        .source("polynomial_degree2")
        .training_mae(0.24)
        .validation_mae(0.90)
        .build()
        .expect("Builder should succeed");

    let meta = model.metadata();
    assert_eq!(meta.a_name, "under_y");
    assert_eq!(meta.b_name, "theta");
    assert_eq!(meta.source, Some("polynomial_degree2"));
    assert_eq!(meta.training_mae, Some(0.24));
    assert_eq!(meta.validation_mae, Some(0.90));
}

/// Test that setter order does not matter.
#[test]
fn test_build_order_independent() {
    let model = Model::new()
        .b_range(-10.0, 10.0)
        .scaler(&MEANS, &SCALES)
        .intercept(1.0)
        .a_range(-10.0, 10.0)
        .coefficients(&COEFFICIENTS)
        .degree(2)
        .build()
        .expect("Builder should succeed");
    assert_eq!(model, toy_builder().build().unwrap());
}

/// Test that a degree 0 model is just its intercept (plus constant term).
#[test]
fn test_build_degree_zero() {
    let model = Model::new()
        .degree(0)
        .coefficients(&[0.5])
        .intercept(2.0)
        .scaler(&[0.0], &[1.0])
        .a_range(0.0, 1.0)
        .b_range(0.0, 1.0)
        .build()
        .expect("Builder should succeed");
    assert_eq!(model.n_features(), 1);
    assert_eq!(model.predict(0.5f64, 0.5), Prediction::Value(2.5));
}

/// Test building at MAX_DEGREE.
#[test]
fn test_build_max_degree() {
    let coefficients = vec![0.0; MAX_FEATURES];
    let means = vec![0.0; MAX_FEATURES];
    let scales = vec![1.0; MAX_FEATURES];
    let model = Model::new()
        .degree(MAX_DEGREE)
        .coefficients(&coefficients)
        .intercept(3.0)
        .scaler(&means, &scales)
        .a_range(-1.0, 1.0)
        .b_range(-1.0, 1.0)
        .build()
        .expect("Builder should succeed");
    assert_eq!(model.predict(0.5f64, -0.5), Prediction::Value(3.0));
}

// ============================================================================
// Missing Parameter Tests
// ============================================================================

/// Test that an empty builder reports the first missing parameter.
#[test]
fn test_missing_everything() {
    assert_eq!(
        Model::new().build(),
        Err(PolyError::MissingParameter { parameter: "degree" })
    );
}

/// Test each required parameter in turn.
#[test]
fn test_missing_each_parameter() {
    let missing = |builder: PolynomialModelBuilder<'static>| match builder.build() {
        Err(PolyError::MissingParameter { parameter }) => parameter,
        other => panic!("expected MissingParameter, got {:?}", other),
    };

    let mut b = toy_builder();
    b.degree = None;
    assert_eq!(missing(b), "degree");

    let mut b = toy_builder();
    b.coefficients = None;
    assert_eq!(missing(b), "coefficients");

    let mut b = toy_builder();
    b.intercept = None;
    assert_eq!(missing(b), "intercept");

    let mut b = toy_builder();
    b.means = None;
    assert_eq!(missing(b), "means");

    let mut b = toy_builder();
    b.scales = None;
    assert_eq!(missing(b), "scales");

    let mut b = toy_builder();
    b.a_range = None;
    assert_eq!(missing(b), "a_range");

    let mut b = toy_builder();
    b.b_range = None;
    assert_eq!(missing(b), "b_range");
}

// ============================================================================
// Duplicate Parameter Tests
// ============================================================================

/// Test that setting a parameter twice fails.
#[test]
fn test_duplicate_parameters() {
    assert_eq!(
        toy_builder().degree(2).build(),
        Err(PolyError::DuplicateParameter { parameter: "degree" })
    );
    assert_eq!(
        toy_builder().intercept(0.0).build(),
        Err(PolyError::DuplicateParameter {
            parameter: "intercept"
        })
    );
    assert_eq!(
        toy_builder().scaler(&MEANS, &SCALES).build(),
        Err(PolyError::DuplicateParameter { parameter: "scaler" })
    );
    assert_eq!(
        toy_builder().a_range(0.0, 1.0).build(),
        Err(PolyError::DuplicateParameter { parameter: "a_range" })
    );
    assert_eq!(
        toy_builder().source("x").source("y").build(),
        Err(PolyError::DuplicateParameter { parameter: "source" })
    );
}

// ============================================================================
// Table Error Tests
// ============================================================================

/// Test degree above the compiled-in maximum.
#[test]
fn test_unsupported_degree() {
    let mut b = toy_builder();
    b.degree = Some(MAX_DEGREE + 1);
    assert_eq!(
        b.build(),
        Err(PolyError::UnsupportedDegree {
            got: MAX_DEGREE + 1,
            max: MAX_DEGREE
        })
    );
}

/// Test tables that do not match the degree.
#[test]
fn test_mismatched_tables() {
    let mut b = toy_builder();
    b.coefficients = Some(&COEFFICIENTS[..5]);
    assert_eq!(
        b.build(),
        Err(PolyError::MismatchedTables {
            table: "coefficients",
            got: 5,
            expected: 6
        })
    );

    let mut b = toy_builder();
    b.degree = Some(3);
    assert!(matches!(
        b.build(),
        Err(PolyError::MismatchedTables {
            expected: 10,
            ..
        })
    ));

    let mut b = toy_builder();
    b.scales = Some(&SCALES[..4]);
    assert!(matches!(
        b.build(),
        Err(PolyError::MismatchedTables { table: "scales", .. })
    ));
}

/// Test that a zero scale is refused at build time.
#[test]
fn test_zero_scale_rejected() {
    let scales = [1.0, 1.0, 1.0, 0.0, 1.0, 1.0];
    let result = Model::new()
        .degree(2)
        .coefficients(&COEFFICIENTS)
        .intercept(1.0)
        .scaler(&MEANS, &scales)
        .a_range(-10.0, 10.0)
        .b_range(-10.0, 10.0)
        .build();
    assert_eq!(
        result,
        Err(PolyError::InvalidScale {
            index: 3,
            value: 0.0
        })
    );
}

/// Test that non-finite tables are refused.
#[test]
fn test_non_finite_tables_rejected() {
    let coefficients = [2.0, f64::NAN, 5.0, 0.0, 1.0, 0.0];
    let mut b = toy_builder();
    b.coefficients = Some(&coefficients);
    assert!(matches!(
        b.build(),
        Err(PolyError::InvalidNumericValue {
            name: "coefficients",
            index: 1,
            ..
        })
    ));

    let means = [0.0, 0.0, 0.0, 0.0, 0.0, f64::INFINITY];
    let mut b = toy_builder();
    b.means = Some(&means);
    assert!(matches!(
        b.build(),
        Err(PolyError::InvalidNumericValue {
            name: "means",
            index: 5,
            ..
        })
    ));

    let mut b = toy_builder();
    b.intercept = Some(f64::NEG_INFINITY);
    assert!(matches!(
        b.build(),
        Err(PolyError::InvalidNumericValue {
            name: "intercept",
            ..
        })
    ));
}

/// Test that inverted or non-finite ranges are refused.
#[test]
fn test_invalid_bounds_rejected() {
    let mut b = toy_builder();
    b.a_range = Some(InputRange::new(10.0, -10.0));
    assert_eq!(
        b.build(),
        Err(PolyError::InvalidBounds {
            input: "a",
            min: 10.0,
            max: -10.0
        })
    );

    let mut b = toy_builder();
    b.b_range = Some(InputRange::new(f64::NEG_INFINITY, 0.0));
    assert!(matches!(
        b.build(),
        Err(PolyError::InvalidBounds { input: "b", .. })
    ));
}
