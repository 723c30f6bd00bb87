//! Spark schema types

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;

/// Atomic Spark type token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomicType {
    String,
    Double,
    Long,
    Boolean,
    Timestamp,
    Date,
}

impl AtomicType {
    /// The token Spark uses for this type in schema JSON
    pub fn token(self) -> &'static str {
        match self {
            AtomicType::String => "string",
            AtomicType::Double => "double",
            AtomicType::Long => "long",
            AtomicType::Boolean => "boolean",
            AtomicType::Timestamp => "timestamp",
            AtomicType::Date => "date",
        }
    }
}

impl std::fmt::Display for AtomicType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl Serialize for AtomicType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

/// A resolved Spark type: atomic token or composite
///
/// Serializes to the exact JSON forms Spark expects: atomic types as bare
/// strings, composites as tagged objects.
#[derive(Debug, Clone, PartialEq)]
pub enum SparkType {
    /// Primitive type, serialized as a bare token
    Atomic(AtomicType),
    /// Array of elements
    Array {
        element_type: Box<SparkType>,
        contains_null: bool,
    },
    /// String-keyed map
    Map {
        value_type: Box<SparkType>,
        value_contains_null: bool,
    },
    /// Nested record
    Struct(StructType),
}

impl SparkType {
    /// Array type; elements are always nullable
    pub fn array(element_type: SparkType) -> Self {
        SparkType::Array {
            element_type: Box::new(element_type),
            contains_null: true,
        }
    }

    /// String-keyed map type; values are always nullable
    pub fn map(value_type: SparkType) -> Self {
        SparkType::Map {
            value_type: Box::new(value_type),
            value_contains_null: true,
        }
    }

    /// The fixed placeholder substituted for recursive definitions: a
    /// string-to-string map with nullable values
    pub fn recursive_placeholder() -> Self {
        SparkType::map(SparkType::Atomic(AtomicType::String))
    }

    /// Whether this is a struct type
    pub fn is_struct(&self) -> bool {
        matches!(self, SparkType::Struct(_))
    }
}

impl Serialize for SparkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SparkType::Atomic(atomic) => atomic.serialize(serializer),
            SparkType::Array {
                element_type,
                contains_null,
            } => {
                let mut map = serializer.serialize_map(Some(3))?;
                map.serialize_entry("type", "array")?;
                map.serialize_entry("elementType", element_type)?;
                map.serialize_entry("containsNull", contains_null)?;
                map.end()
            }
            SparkType::Map {
                value_type,
                value_contains_null,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("type", "map")?;
                map.serialize_entry("keyType", "string")?;
                map.serialize_entry("valueType", value_type)?;
                map.serialize_entry("valueContainsNull", value_contains_null)?;
                map.end()
            }
            SparkType::Struct(struct_type) => struct_type.serialize(serializer),
        }
    }
}

/// An ordered struct schema, the shape of the top-level translation result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StructType {
    /// Fields in declaration order
    pub fields: Vec<StructField>,
}

impl StructType {
    /// Convert to a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// Convert to a pretty JSON string
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

impl Serialize for StructType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "struct")?;
        map.serialize_entry("fields", &self.fields)?;
        map.end()
    }
}

/// One field of a struct schema
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructField {
    /// Field name
    pub name: String,

    /// Resolved field type
    #[serde(rename = "type")]
    pub data_type: SparkType,

    /// Whether the field's value may be absent/empty
    pub nullable: bool,

    /// Field metadata
    pub metadata: FieldMetadata,
}

/// Metadata attached to a struct field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMetadata {
    /// Declared default value; `Some(Value::Null)` records an explicit
    /// `null` default, distinct from no default at all
    pub default: Option<Value>,

    /// Logical type hint (e.g. `uuid`)
    pub logical_type: Option<String>,

    /// Title of the enclosing struct; always serialized, `null` when the
    /// enclosing node is untitled
    pub parent_class: Option<String>,
}

impl FieldMetadata {
    /// Whether a default value is recorded (explicit `null` counts)
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

impl Serialize for FieldMetadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 1 + usize::from(self.default.is_some()) + usize::from(self.logical_type.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        if let Some(default) = &self.default {
            map.serialize_entry("default", default)?;
        }
        if let Some(logical_type) = &self.logical_type {
            map.serialize_entry("logicalType", logical_type)?;
        }
        map.serialize_entry("parentClass", &self.parent_class)?;
        map.end()
    }
}
