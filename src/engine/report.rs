//! Human-readable model and feature reports.
//!
//! ## Purpose
//!
//! This module provides `Display` views used for offline debugging: a
//! summary of a model's metadata and a dump of a computed feature vector.
//! Neither is part of the prediction contract; firmware builds can ignore
//! them entirely.
//!
//! ## Design notes
//!
//! * Both types borrow; formatting writes straight into the caller's
//!   `Formatter`, so they work with `core::fmt::Write` sinks such as a serial
//!   port wrapper.
//! * Long feature vectors show the first 20 and last 10 entries.

use core::fmt;

use crate::algorithms::monomials::monomials;
use crate::engine::model::PolynomialModel;

/// Leading entries shown by [`FeatureDump`].
const DUMP_HEAD: usize = 20;

/// Trailing entries shown by [`FeatureDump`] when the vector is long.
const DUMP_TAIL: usize = 10;

// ============================================================================
// ModelSummary
// ============================================================================

/// Display view of a model's shape and metadata.
#[derive(Debug, Clone, Copy)]
pub struct ModelSummary<'m, 'a> {
    model: &'m PolynomialModel<'a>,
}

impl<'m, 'a> ModelSummary<'m, 'a> {
    /// Summarize `model`.
    pub fn new(model: &'m PolynomialModel<'a>) -> Self {
        Self { model }
    }
}

impl fmt::Display for ModelSummary<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        let meta = model.metadata();
        let (a_range, b_range) = (model.a_range(), model.b_range());

        writeln!(f, "=== Polynomial Model (Degree {}) ===", model.degree())?;
        writeln!(f, "  Polynomial degree: {}", model.degree())?;
        writeln!(f, "  Feature count:     {}", model.n_features())?;
        writeln!(f, "  Inputs:            {}, {}", meta.a_name, meta.b_name)?;
        writeln!(
            f,
            "  Range {:<12} [{}, {}]",
            meta.a_name, a_range.min, a_range.max
        )?;
        writeln!(
            f,
            "  Range {:<12} [{}, {}]",
            meta.b_name, b_range.min, b_range.max
        )?;
        writeln!(f, "  Intercept:         {:.8}", model.intercept())?;
        if let Some(mae) = meta.training_mae {
            writeln!(f, "  Training MAE:      {:.6}", mae)?;
        }
        if let Some(mae) = meta.validation_mae {
            writeln!(f, "  Validation MAE:    {:.6}", mae)?;
        }
        if let Some(source) = meta.source {
            writeln!(f, "  Source:            {}", source)?;
        }
        writeln!(f, "  Precision:         f64 working precision, Kahan summation")
    }
}

// ============================================================================
// FeatureDump
// ============================================================================

/// Display view of a feature vector with term names.
#[derive(Debug, Clone, Copy)]
pub struct FeatureDump<'f> {
    features: &'f [f64],
    degree: usize,
    a_name: &'f str,
    b_name: &'f str,
}

impl<'f> FeatureDump<'f> {
    /// Dump `features`, naming terms by the canonical order for `degree`.
    pub fn new(features: &'f [f64], degree: usize, a_name: &'f str, b_name: &'f str) -> Self {
        Self {
            features,
            degree,
            a_name,
            b_name,
        }
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        let value = self.features[idx];
        match monomials(self.degree).get(idx) {
            Some(term) => writeln!(
                f,
                "  Feature {:>3} ({}): {:.6}",
                idx,
                term.named(self.a_name, self.b_name),
                value
            ),
            None => writeln!(f, "  Feature {:>3}: {:.6}", idx, value),
        }
    }
}

impl fmt::Display for FeatureDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.features.len();
        if n <= DUMP_HEAD + DUMP_TAIL {
            writeln!(f, "Feature values ({}):", n)?;
            for idx in 0..n {
                self.write_row(f, idx)?;
            }
            return Ok(());
        }

        writeln!(
            f,
            "Feature values (first {} and last {} of {}):",
            DUMP_HEAD, DUMP_TAIL, n
        )?;
        for idx in 0..DUMP_HEAD {
            self.write_row(f, idx)?;
        }
        writeln!(f, "  ... ({} features omitted) ...", n - DUMP_HEAD - DUMP_TAIL)?;
        for idx in n - DUMP_TAIL..n {
            self.write_row(f, idx)?;
        }
        Ok(())
    }
}
