//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numeric building blocks used by the pipeline:
//! - Incremental power tables for feature expansion
//! - Kahan compensated summation for the linear combination
//!
//! These have no model-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 7: API
//!   ↓
//! Layer 6: Adapters
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Incremental power tables.
pub mod powers;

/// Compensated (Kahan) summation.
pub mod kahan;
