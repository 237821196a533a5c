//! Layer 5: Engine
//!
//! Core execution logic for model evaluation.
//!
//! This layer owns the validated model type and orchestrates the numeric
//! stages from the algorithms layer into a single prediction call.
//!
//! # Module Organization
//!
//! - **model**: The immutable `PolynomialModel` and its input ranges
//! - **executor**: The validate → expand → standardize → combine pipeline
//! - **validator**: Input gating and build-time table checks
//! - **output**: The tagged `Prediction` result
//! - **report**: `Display` summaries of a model and its feature vectors
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation (metrics)
//!   ↓
//! Layer 3: Algorithms (monomials, expansion, standardize, combine)
//!   ↓
//! Layer 2: Math (powers, kahan)
//!   ↓
//! Layer 1: Primitives (errors, buffer)
//! ```

/// Pipeline execution.
pub mod executor;

/// The validated model.
pub mod model;

/// Human-readable model and feature reports.
pub mod report;

/// Prediction result types.
pub mod output;

/// Validation utilities.
///
/// Provides:
/// - Inclusive range gating for prediction inputs
/// - Table length, finiteness and scale checks
/// - Batch slice consistency checks
pub mod validator;
