use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COLUMNS;
use crate::features::FeatureVector;
use crate::math::{dot, sigmoid};
use crate::predictor::PredictError;

/// Pre-trained survival classifier — a logistic regression exported to JSON.
///
/// The artifact declares its own feature columns; an incoming vector must
/// match them exactly (set and order) or prediction fails with both lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalModel {
    /// Human-readable model identifier.
    pub model_id: String,
    /// Semantic version of the artifact.
    pub model_version: String,
    /// Feature columns, in training order. `weights` is positionally aligned.
    pub columns: Vec<String>,
    /// Weight per column.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub bias: f64,
    /// Probability ≥ threshold → predicted "survived".
    pub threshold: f64,
}

impl SurvivalModel {
    /// Structural soundness: weight/column agreement, finite parameters,
    /// threshold in range.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.columns.is_empty() {
            return Err(ModelError::NoColumns);
        }
        if self.weights.len() != self.columns.len() {
            return Err(ModelError::DimensionMismatch {
                columns: self.columns.len(),
                weights: self.weights.len(),
            });
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ModelError::InvalidThreshold(self.threshold));
        }
        for (i, &w) in self.weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(ModelError::NonFiniteWeight { index: i, value: w });
            }
        }
        if !self.bias.is_finite() {
            return Err(ModelError::NonFiniteBias(self.bias));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(ModelError::ParseJson)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(ModelError::Io)?;
        Self::from_json(&content)
    }

    /// Estimated probability of class "survived" for an encoded vector.
    ///
    /// The vector must carry exactly this model's columns in this model's
    /// order; anything else is a wiring bug between the schema artifact and
    /// the model artifact, surfaced with both column lists for diagnosis.
    pub fn predict_probability(&self, vector: &FeatureVector) -> Result<f64, PredictError> {
        if vector.columns() != self.columns.as_slice() {
            return Err(PredictError::ColumnMismatch {
                produced: vector.columns().to_vec(),
                expected: self.columns.clone(),
            });
        }
        let z = dot(&self.weights, vector.values()) + self.bias;
        Ok(sigmoid(z))
    }
}

/// Bundled fallback model — coefficients fit on the standard Titanic
/// training split with the canonical 19-column encoding. Lets the demo run
/// with no artifact on disk.
impl Default for SurvivalModel {
    fn default() -> Self {
        Self {
            model_id: "lifeboat-bundled-v1".to_string(),
            model_version: "1.0.0".to_string(),
            columns: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
            weights: vec![
                -1.10, // Pclass               — each class step down costs survival odds
                -2.60, // Sex_male             — dominant signal in the dataset
                -0.05, // Embarked_Q
                -0.40, // Embarked_S
                0.10,  // Fare_log
                -0.30, // SibSp_clean
                -0.10, // Parch_clean
                -0.50, // Title_Mr
                0.40,  // Title_Mrs
                0.30,  // Title_Miss
                1.20,  // Title_Master         — "women and children first"
                -0.20, // Title_Rare
                0.80,  // AgeGroup_Child
                0.20,  // AgeGroup_Teen
                0.00,  // AgeGroup_YoungAdult
                -0.20, // AgeGroup_Adult
                -0.80, // AgeGroup_Senior
                -0.15, // FamilySize
                -0.20, // IsAlone
            ],
            bias: 1.20,
            threshold: 0.5,
        }
    }
}

#[derive(Debug)]
pub enum ModelError {
    NoColumns,
    DimensionMismatch { columns: usize, weights: usize },
    InvalidThreshold(f64),
    NonFiniteWeight { index: usize, value: f64 },
    NonFiniteBias(f64),
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "model declares no feature columns"),
            Self::DimensionMismatch { columns, weights } => {
                write!(
                    f,
                    "model has {columns} columns but {weights} weights"
                )
            }
            Self::InvalidThreshold(t) => write!(f, "threshold {t} not in [0, 1]"),
            Self::NonFiniteWeight { index, value } => {
                write!(f, "non-finite weight at index {index}: {value}")
            }
            Self::NonFiniteBias(b) => write!(f, "non-finite bias: {b}"),
            Self::ParseJson(e) => write!(f, "model JSON parse error: {e}"),
            Self::Io(e) => write!(f, "model file IO error: {e}"),
        }
    }
}

impl std::error::Error for ModelError {}
