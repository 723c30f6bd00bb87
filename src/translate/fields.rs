//! Field list assembly

use super::Translator;
use crate::error::Result;
use crate::schema::StructNode;
use crate::spark::StructField;

impl Translator<'_> {
    /// Build the ordered field list for one struct-like node
    ///
    /// Union fields (any descriptor carrying `anyOf`) go through the union
    /// merger; everything else goes through the type mapper. A field is
    /// non-nullable when it carries a default or its name is in the node's
    /// `required` set.
    pub(super) fn build_fields(&mut self, node: &StructNode) -> Result<Vec<StructField>> {
        let parent_class = node.title.as_deref();
        let mut fields = Vec::with_capacity(node.properties.len());

        for (name, descriptor) in &node.properties {
            let (data_type, mut metadata) = match descriptor.any_of.as_deref() {
                Some(alternatives) => self.merge_union(alternatives, parent_class)?,
                None => self.map_descriptor(descriptor)?,
            };

            let required = node.required.iter().any(|required| required == name);
            let nullable = !metadata.has_default() && !required;
            metadata.parent_class = parent_class.map(String::from);

            fields.push(StructField {
                name: name.clone(),
                data_type,
                nullable,
                metadata,
            });
        }

        Ok(fields)
    }
}
