use std::fmt;

use tracing::{debug, warn};

use crate::features::encode;
use crate::model::{ModelError, SurvivalModel};
use crate::schema::FeatureSchema;
use crate::types::{InputError, PassengerInput};

/// The adapter around the loaded model + schema. Built once at startup,
/// read-only afterwards; each submission runs one encode-then-predict cycle.
#[derive(Debug, Clone)]
pub struct Predictor {
    model: SurvivalModel,
    schema: FeatureSchema,
}

/// Outcome of one prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Probability ≥ model threshold.
    pub survived: bool,
    /// Estimated probability of surviving, in [0, 1].
    pub probability: f64,
}

impl Predictor {
    pub fn new(model: SurvivalModel, schema: FeatureSchema) -> Result<Self, ModelError> {
        model.validate()?;
        if schema.columns() != model.columns.as_slice() {
            // Every predict will fail with ColumnMismatch; say so up front.
            warn!(
                schema_columns = schema.len(),
                model_columns = model.columns.len(),
                "schema artifact does not match model columns"
            );
        }
        Ok(Self { model, schema })
    }

    pub fn model_id(&self) -> &str {
        &self.model.model_id
    }

    pub fn model_version(&self) -> &str {
        &self.model.model_version
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Validate, encode against the schema, and run the model.
    ///
    /// Both failure modes are deterministic for a given input, so callers
    /// should correct the input or the artifacts rather than retry.
    pub fn predict(&self, input: &PassengerInput) -> Result<Prediction, PredictError> {
        input.validate()?;
        let vector = encode(input, &self.schema);
        let probability = self.model.predict_probability(&vector)?;
        let survived = probability >= self.model.threshold;
        debug!(
            probability,
            survived,
            age = input.age,
            sex = input.sex.as_str(),
            title = input.title.as_str(),
            "prediction complete"
        );
        Ok(Prediction {
            survived,
            probability,
        })
    }
}

#[derive(Debug)]
pub enum PredictError {
    /// A form field escaped its declared domain.
    InvalidInput(InputError),
    /// The encoded vector's columns do not match what the model expects.
    ColumnMismatch {
        produced: Vec<String>,
        expected: Vec<String>,
    },
}

impl From<InputError> for PredictError {
    fn from(e: InputError) -> Self {
        Self::InvalidInput(e)
    }
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(e) => write!(f, "invalid input: {e}"),
            Self::ColumnMismatch { produced, expected } => {
                write!(
                    f,
                    "feature columns do not match model: produced [{}], expected [{}]",
                    produced.join(", "),
                    expected.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for PredictError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidInput(e) => Some(e),
            Self::ColumnMismatch { .. } => None,
        }
    }
}
