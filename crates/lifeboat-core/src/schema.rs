use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COLUMNS;

/// Ordered list of feature columns the trained model expects — the
/// `feature_columns` artifact exported next to the model. Loaded once at
/// startup and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Result<Self, SchemaError> {
        let schema = Self { columns };
        schema.validate()?;
        Ok(schema)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if self.columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        let mut seen = HashSet::new();
        for col in &self.columns {
            if !seen.insert(col.as_str()) {
                return Err(SchemaError::DuplicateColumn(col.clone()));
            }
        }
        Ok(())
    }

    /// Parse from the JSON artifact: a plain array of column names.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_str(json).map_err(SchemaError::ParseJson)?;
        schema.validate()?;
        Ok(schema)
    }

    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(SchemaError::Io)?;
        Self::from_json(&content)
    }
}

/// The canonical training schema, for running without an artifact on disk.
impl Default for FeatureSchema {
    fn default() -> Self {
        Self {
            columns: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug)]
pub enum SchemaError {
    Empty,
    DuplicateColumn(String),
    ParseJson(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "schema has no columns"),
            Self::DuplicateColumn(c) => write!(f, "duplicate schema column: {c}"),
            Self::ParseJson(e) => write!(f, "schema JSON parse error: {e}"),
            Self::Io(e) => write!(f, "schema file IO error: {e}"),
        }
    }
}

impl std::error::Error for SchemaError {}
