//! Layer 1: Primitives
//!
//! Core building blocks and types.
//!
//! This layer provides the error type and the fixed-capacity buffers used
//! throughout the crate. It has zero internal dependencies within the crate.
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
//! Layer 3: Algorithms (monomials, expansion, standardize, combine)
//!   ↓
//! Layer 2: Math (powers, kahan)
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Fixed-capacity buffers.
///
/// Provides:
/// - `FeatureBuffer`, the per-call stack feature vector
/// - Compile-time capacity limits (`MAX_DEGREE`, `MAX_FEATURES`)
pub mod buffer;

/// Shared error types.
///
/// Provides:
/// - Unified `PolyError` enum
/// - `Display` and `std::error::Error` implementations
pub mod errors;
