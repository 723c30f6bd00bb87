//! Schema document types

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Reference prefix used by `$ref` strings pointing at the definitions table
const DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Extract the definition name from a `$ref` string
///
/// References conventionally carry the `#/definitions/` prefix; a bare name
/// is accepted as-is.
pub fn definition_name(reference: &str) -> &str {
    reference.strip_prefix(DEFINITIONS_PREFIX).unwrap_or(reference)
}

/// Full input schema document
///
/// The root node is itself a struct-like node; `definitions` holds the named
/// types it (transitively) references.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ModelSchema {
    /// Named reusable record/enum types, looked up by `$ref`
    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,

    /// The root struct node (title/properties/required)
    #[serde(flatten)]
    pub root: StructNode,
}

/// A struct-like schema node: the root document body or a nested definition
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StructNode {
    /// Type name of the node, recorded as `parentClass` on its fields
    pub title: Option<String>,

    /// Declared fields, in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, FieldDescriptor>,

    /// Names of fields that must be present
    #[serde(default)]
    pub required: Vec<String>,
}

/// A named definition: either an enum or a nested record
///
/// Enum definitions carry an `enum` marker plus a primitive base type;
/// everything else is treated as a struct node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Definition {
    Enum(EnumDefinition),
    Struct(StructNode),
}

/// An enum definition
///
/// Only the base `type` token matters for translation; the values list is
/// the marker that distinguishes enums from nested records.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnumDefinition {
    /// Declared enum values (marker only, not inspected)
    #[serde(rename = "enum")]
    pub values: Vec<Value>,

    /// Primitive base type of the enum (`string`, `number` or `integer`)
    #[serde(rename = "type")]
    pub base_type: Option<String>,
}

/// Describes one field's declared type
///
/// A single record holding every key a descriptor may carry; [`shape`]
/// classifies it into the variant the mapper dispatches on.
///
/// [`shape`]: FieldDescriptor::shape
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FieldDescriptor {
    /// Field title (carried by generators, not used in translation)
    pub title: Option<String>,

    /// Primitive or composite type token
    #[serde(rename = "type")]
    pub type_token: Option<String>,

    /// Format annotation refining a primitive type
    pub format: Option<String>,

    /// Reference to a named definition
    #[serde(rename = "$ref")]
    pub reference: Option<String>,

    /// Element descriptor for `array` types
    pub items: Option<Box<FieldDescriptor>>,

    /// Value descriptor for `object` (map) types
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<Box<FieldDescriptor>>,

    /// Union alternatives
    #[serde(rename = "anyOf")]
    pub any_of: Option<Vec<FieldDescriptor>>,

    /// Declared default value; an explicit `"default": null` is
    /// distinguished from an absent key
    #[serde(default, deserialize_with = "explicit_value")]
    pub default: Option<Value>,
}

/// The shapes a field descriptor can take, dispatched exhaustively by the
/// type mapper
///
/// `Unknown` is the fallthrough for tokens with no mapping rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DescriptorShape<'a> {
    /// Reference to a named definition
    Ref(&'a str),
    /// Array with an element descriptor
    Array(&'a FieldDescriptor),
    /// Object treated as a string-keyed map, with an optional value descriptor
    Object(Option<&'a FieldDescriptor>),
    /// Union of alternatives (no explicit type token)
    Union(&'a [FieldDescriptor]),
    /// String, possibly refined by a format annotation
    String { format: Option<&'a str> },
    /// JSON number
    Number,
    /// JSON integer
    Integer,
    /// JSON boolean
    Boolean,
    /// Anything else; carries the offending token when one is present
    Unknown(Option<&'a str>),
}

impl FieldDescriptor {
    /// Classify this descriptor into the shape the mapper dispatches on
    ///
    /// A `$ref` wins over any other key. An explicit type token wins over
    /// `anyOf`; a descriptor with neither is `Unknown`. An `array` without
    /// an `items` descriptor has no mapping rule and falls through.
    pub fn shape(&self) -> DescriptorShape<'_> {
        if let Some(reference) = self.reference.as_deref() {
            return DescriptorShape::Ref(reference);
        }
        match self.type_token.as_deref() {
            Some("array") => match self.items.as_deref() {
                Some(items) => DescriptorShape::Array(items),
                None => DescriptorShape::Unknown(Some("array")),
            },
            Some("object") => DescriptorShape::Object(self.additional_properties.as_deref()),
            Some("string") => DescriptorShape::String {
                format: self.format.as_deref(),
            },
            Some("number") => DescriptorShape::Number,
            Some("integer") => DescriptorShape::Integer,
            Some("boolean") => DescriptorShape::Boolean,
            Some(other) => DescriptorShape::Unknown(Some(other)),
            None => match self.any_of.as_deref() {
                Some(alternatives) => DescriptorShape::Union(alternatives),
                None => DescriptorShape::Unknown(None),
            },
        }
    }
}

/// Deserialize a value so that explicit `null` becomes `Some(Value::Null)`
/// while an absent key stays `None`
fn explicit_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
