//! JSON model artifacts.
//!
//! ## Purpose
//!
//! This module reads and writes the model tables as a JSON document so a host
//! tool can load the exact numbers that are flashed to the device, run the
//! batch evaluator on them, or regenerate firmware tables. The prediction
//! path never sees this type; it borrows a [`PolynomialModel`] from it.
//!
//! ## Format
//!
//! ```json
//! {
//!   "degree": 2,
//!   "intercept": 1.0,
//!   "coefficients": [2.0, 3.0, 5.0, 0.0, 1.0, 0.0],
//!   "scaler_mean":  [0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
//!   "scaler_scale": [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
//!   "a": { "name": "under_y", "min": -10.0, "max": 10.0 },
//!   "b": { "name": "theta",   "min": -10.0, "max": 10.0 },
//!   "source": "polynomial_degree2_mae0.90",
//!   "training_mae": 0.24,
//!   "validation_mae": 0.90
//! }
//! ```
//!
//! `name`, `source` and the MAE fields are optional.
//!
//! ## Invariants
//!
//! * Loading only parses; table consistency is checked by [`ModelArtifact::model`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::string::{String, ToString};
use std::vec::Vec;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::api::PolynomialModelBuilder;
use crate::engine::model::PolynomialModel;
use crate::primitives::errors::PolyError;

// ============================================================================
// Artifact Types
// ============================================================================

/// Name and accepted range of one model input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactInput {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Smallest accepted value.
    pub min: f64,

    /// Largest accepted value.
    pub max: f64,
}

/// Owned, serializable form of a fitted model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Total polynomial degree.
    pub degree: usize,

    /// Intercept of the linear model.
    pub intercept: f64,

    /// Coefficients in canonical monomial order.
    pub coefficients: Vec<f64>,

    /// Standard scaler means.
    pub scaler_mean: Vec<f64>,

    /// Standard scaler scales.
    pub scaler_scale: Vec<f64>,

    /// First input.
    pub a: ArtifactInput,

    /// Second input.
    pub b: ArtifactInput,

    /// Provenance of the tables.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Training-set MAE reported by the fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_mae: Option<f64>,

    /// Validation-set MAE reported by the fit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_mae: Option<f64>,
}

impl ModelArtifact {
    // ========================================================================
    // Loading
    // ========================================================================

    /// Parse an artifact from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, PolyError> {
        serde_json::from_str(json).map_err(|e| PolyError::Artifact(e.to_string()))
    }

    /// Parse an artifact from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PolyError> {
        serde_json::from_reader(reader).map_err(|e| PolyError::Artifact(e.to_string()))
    }

    /// Read and parse an artifact file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PolyError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| PolyError::Artifact(format!("{}: {}", path.display(), e)))?;
        let artifact = Self::from_reader(BufReader::new(file))?;
        debug!(
            "loaded model artifact {} (degree {})",
            path.display(),
            artifact.degree
        );
        Ok(artifact)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, PolyError> {
        serde_json::to_string_pretty(self).map_err(|e| PolyError::Artifact(e.to_string()))
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Validate the tables and borrow them as a model.
    pub fn model(&self) -> Result<PolynomialModel<'_>, PolyError> {
        let mut builder = PolynomialModelBuilder::new()
            .degree(self.degree)
            .intercept(self.intercept)
            .coefficients(&self.coefficients)
            .scaler(&self.scaler_mean, &self.scaler_scale)
            .a_range(self.a.min, self.a.max)
            .b_range(self.b.min, self.b.max)
            .input_names(
                self.a.name.as_deref().unwrap_or("a"),
                self.b.name.as_deref().unwrap_or("b"),
            );
        if let Some(source) = self.source.as_deref() {
            builder = builder.source(source);
        }
        if let Some(mae) = self.training_mae {
            builder = builder.training_mae(mae);
        }
        if let Some(mae) = self.validation_mae {
            builder = builder.validation_mae(mae);
        }
        builder.build()
    }

    /// Copy a model's tables into an owned artifact.
    pub fn from_model(model: &PolynomialModel<'_>) -> Self {
        let meta = model.metadata();
        let (a_range, b_range) = (model.a_range(), model.b_range());
        Self {
            degree: model.degree(),
            intercept: model.intercept(),
            coefficients: model.coefficients().to_vec(),
            scaler_mean: model.scaler().means().to_vec(),
            scaler_scale: model.scaler().scales().to_vec(),
            a: ArtifactInput {
                name: Some(meta.a_name.to_string()),
                min: a_range.min,
                max: a_range.max,
            },
            b: ArtifactInput {
                name: Some(meta.b_name.to_string()),
                min: b_range.min,
                max: b_range.max,
            },
            source: meta.source.map(str::to_string),
            training_mae: meta.training_mae,
            validation_mae: meta.validation_mae,
        }
    }
}
