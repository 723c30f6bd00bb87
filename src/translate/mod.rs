//! Schema translation
//!
//! One recursive top-down traversal turning a [`ModelSchema`] into a Spark
//! [`StructType`]:
//!
//! - the field builder walks a node's properties in order and computes
//!   nullability from required/default rules;
//! - the type mapper resolves one descriptor to a Spark type plus metadata,
//!   recursing into definitions, arrays and maps;
//! - the union merger folds `anyOf` struct alternatives into a single
//!   struct with per-field nullability;
//! - the definition resolver looks up named types by `$ref`.
//!
//! Named definitions are resolved at most once per call; a definition that
//! refers back to itself before resolution completes is replaced by a
//! generic string-to-string map placeholder instead of recursing forever.

mod fields;
mod mapper;
mod union;


use std::collections::HashMap;

use serde_json::Value;

use crate::error::Result;
use crate::schema::ModelSchema;
use crate::spark::{SparkType, StructType};

/// Resolution state of a named definition within one translation call
enum Resolution {
    /// The definition's body is currently being resolved
    InProgress,
    /// Resolution finished with this type
    Done(SparkType),
}

/// Traversal state for a single translation call
///
/// Holds the input schema and the per-call resolution cache. A fresh
/// translator is built for every top-level call, so concurrent translations
/// never share state.
struct Translator<'a> {
    schema: &'a ModelSchema,
    resolved: HashMap<String, Resolution>,
}

impl<'a> Translator<'a> {
    fn new(schema: &'a ModelSchema) -> Self {
        Self {
            schema,
            resolved: HashMap::new(),
        }
    }
}

/// Translate a schema document into a Spark struct schema
///
/// The single core operation: processes the root node as a struct and
/// returns the ordered field list. Any unresolvable reference, enum base
/// type or type token aborts the whole translation; no partial result is
/// produced.
pub fn translate(schema: &ModelSchema) -> Result<StructType> {
    let mut translator = Translator::new(schema);
    let fields = translator.build_fields(&schema.root)?;
    Ok(StructType { fields })
}

/// Translate a raw JSON document into a Spark struct schema
///
/// Convenience wrapper for hosts holding the schema as a
/// [`serde_json::Value`], the form model-introspection libraries hand out.
pub fn translate_value(value: &Value) -> Result<StructType> {
    let schema: ModelSchema = serde_json::from_value(value.clone())?;
    translate(&schema)
}
