//! Type mapping and definition resolution

use tracing::debug;

use super::{Resolution, Translator};
use crate::error::{Error, Result};
use crate::schema::{definition_name, Definition, DescriptorShape, FieldDescriptor};
use crate::spark::{AtomicType, FieldMetadata, SparkType, StructType};

impl<'a> Translator<'a> {
    /// Definition resolver: pure lookup of a named definition
    fn resolve_definition(&self, name: &str) -> Result<&'a Definition> {
        self.schema
            .definitions
            .get(name)
            .ok_or_else(|| Error::missing_definition(name))
    }

    /// Map one field descriptor to its Spark type plus metadata
    pub(super) fn map_descriptor(
        &mut self,
        descriptor: &FieldDescriptor,
    ) -> Result<(SparkType, FieldMetadata)> {
        let mut metadata = FieldMetadata {
            default: descriptor.default.clone(),
            ..FieldMetadata::default()
        };

        let spark_type = match descriptor.shape() {
            DescriptorShape::Ref(reference) => self.reference_type(reference)?,
            DescriptorShape::Array(items) => {
                // The element's metadata stays with the element; only the
                // array descriptor's own default survives on the field.
                let (element_type, _) = self.map_descriptor(items)?;
                SparkType::array(element_type)
            }
            DescriptorShape::String { format } => match format {
                Some("date-time") => SparkType::Atomic(AtomicType::Timestamp),
                Some("date") => SparkType::Atomic(AtomicType::Date),
                Some("uuid") => {
                    metadata.logical_type = Some("uuid".to_string());
                    SparkType::Atomic(AtomicType::String)
                }
                // Spark has no time-of-day type; the format stays
                // unsupported until one is defined upstream.
                Some("time") => return Err(Error::unsupported_type("time")),
                _ => SparkType::Atomic(AtomicType::String),
            },
            DescriptorShape::Number => SparkType::Atomic(AtomicType::Double),
            // Source integers may exceed 32 bits
            DescriptorShape::Integer => SparkType::Atomic(AtomicType::Long),
            DescriptorShape::Boolean => SparkType::Atomic(AtomicType::Boolean),
            // Unions reached through generic recursion degrade to string;
            // the field-level path expands them instead (see union.rs)
            DescriptorShape::Union(_) => SparkType::Atomic(AtomicType::String),
            DescriptorShape::Object(value_descriptor) => {
                let value_type = match value_descriptor {
                    None => SparkType::Atomic(AtomicType::String),
                    Some(value_descriptor) => self.map_descriptor(value_descriptor)?.0,
                };
                SparkType::map(value_type)
            }
            DescriptorShape::Unknown(token) => {
                return Err(Error::unsupported_type(token.unwrap_or("<none>")));
            }
        };

        Ok((spark_type, metadata))
    }

    /// Resolve a `$ref`, consulting and updating the per-call cache
    fn reference_type(&mut self, reference: &str) -> Result<SparkType> {
        let class_name = definition_name(reference);
        match self.resolved.get(class_name) {
            Some(Resolution::Done(resolved)) => Ok(resolved.clone()),
            Some(Resolution::InProgress) => {
                // The definition refers back to itself before resolution
                // finished; break the recursion with the generic placeholder
                // and let later references reuse it.
                debug!(
                    "recursive reference to '{class_name}', substituting map placeholder"
                );
                let placeholder = SparkType::recursive_placeholder();
                self.resolved
                    .insert(class_name.to_string(), Resolution::Done(placeholder.clone()));
                Ok(placeholder)
            }
            None => {
                debug!("resolving definition '{class_name}'");
                self.resolved
                    .insert(class_name.to_string(), Resolution::InProgress);
                let resolved = self.definition_type(class_name)?;
                self.resolved
                    .insert(class_name.to_string(), Resolution::Done(resolved.clone()));
                Ok(resolved)
            }
        }
    }

    /// Resolve a named definition's body to a Spark type
    fn definition_type(&mut self, name: &str) -> Result<SparkType> {
        match self.resolve_definition(name)? {
            Definition::Enum(enum_definition) => match enum_definition.base_type.as_deref() {
                Some("string") => Ok(SparkType::Atomic(AtomicType::String)),
                Some("number") => Ok(SparkType::Atomic(AtomicType::Double)),
                Some("integer") => Ok(SparkType::Atomic(AtomicType::Long)),
                other => Err(Error::unsupported_enum_type(
                    name,
                    other.unwrap_or("<none>"),
                )),
            },
            Definition::Struct(node) => {
                let fields = self.build_fields(node)?;
                Ok(SparkType::Struct(StructType { fields }))
            }
        }
    }
}
