//! Layer 6: Adapters
//!
//! Ways of feeding models and inputs into the engine.
//!
//! # Module Organization
//!
//! - **batch**: Many input pairs at once, with optional scoring
//! - **artifact**: JSON model files (requires `std`)
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters ← You are here
//!   ↓
//! Layer 5: Engine (model, executor, output, report, validator)
//!   ↓
//! Layer 4: Evaluation (metrics)
//!   ↓
//! Layer 3: Algorithms (monomials, expansion, standardize, combine)
//!   ↓
//! Layer 2: Math (powers, kahan)
//!   ↓
//! Layer 1: Primitives (errors, buffer)
//! ```

/// Batch prediction and evaluation.
pub mod batch;

/// JSON model artifacts.
#[cfg(feature = "std")]
pub mod artifact;
