//! Input schema model
//!
//! Typed representation of the JSON-Schema-style documents emitted by
//! data-model definition libraries when introspecting model classes.
//!
//! # Features
//!
//! - **Ordered Properties**: Property maps keep declaration order
//! - **Named Definitions**: `definitions` table of reusable record/enum types
//! - **Shape Classification**: Field descriptors project onto an explicit
//!   tagged variant for exhaustive dispatch

mod types;

pub use types::{
    definition_name, Definition, DescriptorShape, EnumDefinition, FieldDescriptor, ModelSchema,
    StructNode,
};
