//! The persisted form of a pipeline run.
//!
//! Metadata is an ordered list of steps, serialized as pretty JSON so a later
//! invocation (or another process) can replay the pipeline in reverse. Step
//! order is part of the contract and is preserved exactly.

use crate::error::{Result, TextveilError};
use crate::step::{Step, TransformKind};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// An ordered pipeline run: the steps applied during encoding, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    steps: Vec<Step>,
}

impl Metadata {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse metadata from JSON.
    ///
    /// Step names are checked against the catalog before the typed parse, so
    /// foreign metadata reports which transformation is unknown instead of a
    /// generic deserialization error. Parameter domains are validated too.
    pub fn from_json(data: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(data)?;
        let steps = raw
            .get("steps")
            .and_then(Value::as_array)
            .ok_or_else(|| TextveilError::Decode("metadata has no steps list".to_string()))?;
        for step in steps {
            let name = step
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| TextveilError::Decode("step has no name".to_string()))?;
            name.parse::<TransformKind>()?;
        }

        let metadata: Metadata = serde_json::from_value(raw)?;
        for step in &metadata.steps {
            step.validate()?;
        }
        Ok(metadata)
    }

    /// Write metadata JSON to a file
    pub fn write(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Read and validate metadata JSON from a file
    pub fn read(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }
}
