//! # Spark Schema Bridge
//!
//! Translate the JSON-Schema-style documents emitted by data-model
//! definition libraries into Spark `StructType` schemas.
//!
//! ## Features
//!
//! - **Full Type Mapping**: Primitives, date/time formats, arrays, maps,
//!   nested records and enums
//! - **Named Definitions**: `$ref` resolution with a per-call cache, so a
//!   definition's body is processed once
//! - **Cycle Breaking**: Self-referential definitions resolve to a generic
//!   map placeholder instead of recursing forever
//! - **Union Merging**: `anyOf` struct alternatives fold into a single
//!   struct with per-field nullability
//! - **Spark JSON Output**: Serializes to the exact form
//!   `StructType.fromJson` consumes
//!
//! ## Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use spark_schema_bridge::{translate_value, Result};
//!
//! fn main() -> Result<()> {
//!     // A schema as produced by introspecting a data-model class
//!     let document = json!({
//!         "title": "User",
//!         "properties": {
//!             "id": {"type": "integer"},
//!             "name": {"type": "string"}
//!         },
//!         "required": ["id"]
//!     });
//!
//!     let schema = translate_value(&document)?;
//!     println!("{}", schema.to_json_pretty());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! translate(schema) ──► Field Builder ──► ordered StructField list
//!                          │
//!                          ├─► Type Mapper ──► Definition Resolver
//!                          │       (primitives, $ref, array, map)
//!                          │
//!                          └─► Union Merger (anyOf at the field level)
//!                                  └─► Type Mapper / Field Builder
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(missing_docs)] // TODO: document the serde field attributes before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Input schema model
pub mod schema;

/// Spark schema output model
pub mod spark;

/// The schema translator
pub mod translate;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use schema::{Definition, FieldDescriptor, ModelSchema, StructNode};
pub use spark::{AtomicType, FieldMetadata, SparkType, StructField, StructType};
pub use translate::{translate, translate_value};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
