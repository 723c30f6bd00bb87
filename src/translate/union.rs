//! Union (`anyOf`) merging

use indexmap::IndexMap;
use tracing::debug;

use super::Translator;
use crate::error::{Error, Result};
use crate::schema::FieldDescriptor;
use crate::spark::{FieldMetadata, SparkType, StructField, StructType};

impl Translator<'_> {
    /// Merge a field's `anyOf` alternatives into a single type
    ///
    /// When the first alternative resolves to a struct, every alternative is
    /// expected to, and their fields are merged by name into one struct.
    /// Otherwise the union collapses to the first alternative's type and
    /// metadata; later alternatives are not inspected. That fallback drops
    /// information when a primitive precedes struct alternatives, and is
    /// kept as-is for compatibility with the source behavior.
    pub(super) fn merge_union(
        &mut self,
        alternatives: &[FieldDescriptor],
        parent_class: Option<&str>,
    ) -> Result<(SparkType, FieldMetadata)> {
        let Some(first) = alternatives.first() else {
            return Err(Error::unsupported_type("anyOf"));
        };
        let (first_type, first_metadata) = self.map_descriptor(first)?;
        if !first_type.is_struct() {
            return Ok((first_type, first_metadata));
        }

        debug!("merging {} union alternatives into a struct", alternatives.len());

        // Group each field's occurrences by name, keeping first-occurrence
        // order across the alternatives.
        let mut occurrences: IndexMap<String, Vec<StructField>> = IndexMap::new();
        for alternative in alternatives {
            let (alternative_type, _) = self.map_descriptor(alternative)?;
            let SparkType::Struct(struct_type) = alternative_type else {
                // A struct-led union with a non-struct alternative has no
                // merged shape; abort rather than guess.
                return Err(Error::unsupported_type("anyOf"));
            };
            for field in struct_type.fields {
                occurrences.entry(field.name.clone()).or_default().push(field);
            }
        }

        let mut fields = Vec::with_capacity(occurrences.len());
        for (_, group) in occurrences {
            // A field absent from some alternatives must be nullable; one
            // present everywhere stays non-nullable only when every
            // occurrence was non-nullable.
            let nullable = if group.len() == alternatives.len() {
                group.iter().any(|field| field.nullable)
            } else {
                true
            };
            let Some(mut field) = group.into_iter().next() else {
                continue;
            };
            field.nullable = nullable;
            field.metadata.parent_class = parent_class.map(String::from);
            fields.push(field);
        }

        Ok((SparkType::Struct(StructType { fields }), first_metadata))
    }
}
