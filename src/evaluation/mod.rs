//! Layer 4: Evaluation
//!
//! Post-hoc model evaluation.
//!
//! This layer scores predictions against measured targets:
//! - Mean absolute error and root mean squared error
//! - Coefficient of determination (R^2)
//! - Worst-case absolute error and rejected-row counts
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine (model, executor, output, report, validator)
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms (monomials, expansion, standardize, combine)
//!   ↓
//! Layer 2: Math (powers, kahan)
//!   ↓
//! Layer 1: Primitives (errors, buffer)
//! ```

/// Error metrics for labelled datasets.
///
/// Provides:
/// - Streaming `MetricsAccumulator`
/// - `Metrics` summary with `Display`
pub mod metrics;
