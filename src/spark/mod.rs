//! Spark schema output model
//!
//! Typed representation of Spark `StructType` schema documents, serialized
//! to the JSON form `StructType.fromJson` consumes.

mod types;

pub use types::{AtomicType, FieldMetadata, SparkType, StructField, StructType};

#[cfg(test)]
mod tests;
