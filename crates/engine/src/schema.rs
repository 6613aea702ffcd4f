//! Schema Validator Adapter
//!
//! Documents may carry a JSON Schema. The repository checks content against
//! it at creation and on demand through the [`SchemaValidator`] seam; the
//! default implementation compiles schemas with `jsonschema` under Draft 7.

use jsonschema::{Draft, JSONSchema};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a schema check failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The schema itself is not a valid JSON Schema
    #[error("invalid JSON schema: {0}")]
    InvalidSchema(String),

    /// Content does not satisfy the schema
    #[error("schema validation failed: {0}")]
    Violation(String),
}

/// Checks JSON content against JSON Schemas
pub trait SchemaValidator: Send + Sync {
    /// Verify the schema is well-formed
    fn check_schema(&self, schema: &Value) -> Result<(), SchemaError>;

    /// Verify `content` satisfies `schema`
    fn validate(&self, content: &Value, schema: &Value) -> Result<(), SchemaError>;
}

/// Draft 7 validator backed by the `jsonschema` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSchemaValidator;

impl JsonSchemaValidator {
    fn compile(schema: &Value) -> Result<JSONSchema, SchemaError> {
        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|e| SchemaError::InvalidSchema(e.to_string()))
    }
}

impl SchemaValidator for JsonSchemaValidator {
    fn check_schema(&self, schema: &Value) -> Result<(), SchemaError> {
        Self::compile(schema).map(|_| ())
    }

    fn validate(&self, content: &Value, schema: &Value) -> Result<(), SchemaError> {
        let compiled = Self::compile(schema)?;
        let messages: Vec<String> = match compiled.validate(content) {
            Ok(()) => return Ok(()),
            Err(errors) => errors
                .map(|e| e.to_string())
                .collect(),
        };
        Err(SchemaError::Violation(messages.join("; ")))
    }
}

/// Outcome of an on-demand validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaCheck {
    /// True if content satisfies the schema
    pub valid: bool,
    /// Human-readable result
    pub message: String,
}

impl SchemaCheck {
    /// Fold a validator result into a check
    pub fn from_result(result: Result<(), SchemaError>) -> Self {
        match result {
            Ok(()) => SchemaCheck {
                valid: true,
                message: "document content is valid".to_string(),
            },
            Err(e) => SchemaCheck {
                valid: false,
                message: e.to_string(),
            },
        }
    }
}
