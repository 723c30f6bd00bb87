//! Error types for spark-schema-bridge
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for spark-schema-bridge
#[derive(Error, Debug)]
pub enum Error {
    /// A `$ref` names a definition absent from the schema's definitions table
    #[error("Definition '{reference}' does not exist")]
    MissingDefinition { reference: String },

    /// An enum definition declares a base type outside {string, number, integer}
    #[error("Unsupported enum type '{base_type}' for definition '{definition}'")]
    UnsupportedEnumType {
        definition: String,
        base_type: String,
    },

    /// A field descriptor's type token (or format combination) has no mapping rule
    #[error("Type '{token}' is not supported")]
    UnsupportedType { token: String },

    /// The input document does not deserialize into a schema
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing-definition error
    pub fn missing_definition(reference: impl Into<String>) -> Self {
        Self::MissingDefinition {
            reference: reference.into(),
        }
    }

    /// Create an unsupported-enum-type error
    pub fn unsupported_enum_type(
        definition: impl Into<String>,
        base_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedEnumType {
            definition: definition.into(),
            base_type: base_type.into(),
        }
    }

    /// Create an unsupported-type error
    pub fn unsupported_type(token: impl Into<String>) -> Self {
        Self::UnsupportedType {
            token: token.into(),
        }
    }
}

/// Result type alias for spark-schema-bridge
pub type Result<T> = std::result::Result<T, Error>;
