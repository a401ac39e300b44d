#![deny(missing_docs)]

//! # Document Source
//!
//! Interface to the external generator that produces the raw API description.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Produces a raw OpenAPI document.
///
/// Abstracted so the pipeline can run against a generator's file output,
/// an embedding application, or a fixture in tests.
pub trait DocumentSource {
    /// Returns the raw document tree.
    fn generate(&self) -> AppResult<Value>;
}

/// Reads the generator output from a JSON or YAML file.
///
/// `.json` files go through `serde_json`; anything else is parsed as YAML.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn generate(&self) -> AppResult<Value> {
        if !self.path.exists() {
            return Err(AppError::General(format!(
                "Generator output not found: {:?}",
                self.path
            )));
        }

        let content = fs::read_to_string(&self.path)?;

        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("yaml");
        let parsed: Result<Value, String> = match ext {
            "json" => serde_json::from_str(&content).map_err(|e| e.to_string()),
            _ => serde_yaml::from_str(&content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| {
            AppError::InvalidDocument(format!("Failed to parse {:?}: {}", self.path, e))
        })
    }
}

/// An already materialized document.
#[derive(Debug, Clone)]
pub struct ValueSource(pub Value);

impl DocumentSource for ValueSource {
    fn generate(&self) -> AppResult<Value> {
        Ok(self.0.clone())
    }
}
