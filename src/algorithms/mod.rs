//! Layer 3: Algorithms
//!
//! The three numeric stages of the prediction pipeline.
//!
//! This layer implements feature expansion, standardization and the
//! compensated linear combination. It holds the numeric policy of the crate
//! but is orchestrated by the engine layer.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters (batch, artifact)
//!   ↓
//! Layer 5: Engine (model, executor, output, report, validator)
//!   ↓
//! Layer 4: Evaluation (metrics)
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math (powers, kahan)
//!   ↓
//! Layer 1: Primitives (errors, buffer)
//! ```

/// Canonical monomial order.
///
/// Provides:
/// - Compile-time order table for every supported degree
/// - Index lookup and human-readable term names
pub mod monomials;

/// Polynomial feature expansion.
///
/// Provides:
/// - `PolynomialFeatures` expander writing into stack buffers
pub mod expansion;

/// Per-feature standardization.
pub mod standardize;

/// Compensated linear combination.
pub mod combine;
