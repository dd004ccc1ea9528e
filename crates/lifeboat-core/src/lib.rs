mod constants;
mod features;
mod math;
mod model;
mod predictor;
mod schema;
mod types;

pub use constants::{FEATURE_COLUMNS, FEATURE_COUNT};
pub use features::{encode, FeatureVector};
pub use model::{ModelError, SurvivalModel};
pub use predictor::{PredictError, Prediction, Predictor};
pub use schema::{FeatureSchema, SchemaError};
pub use types::{EmbarkPort, InputError, PassengerInput, Sex, Title};

#[cfg(test)]
mod tests_properties;
