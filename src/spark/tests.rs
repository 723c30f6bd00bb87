//! Output model serialization tests

use super::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

#[test_case(AtomicType::String, "string")]
#[test_case(AtomicType::Double, "double")]
#[test_case(AtomicType::Long, "long")]
#[test_case(AtomicType::Boolean, "boolean")]
#[test_case(AtomicType::Timestamp, "timestamp")]
#[test_case(AtomicType::Date, "date")]
fn test_atomic_serializes_as_bare_token(atomic: AtomicType, token: &str) {
    assert_eq!(
        serde_json::to_value(SparkType::Atomic(atomic)).unwrap(),
        json!(token)
    );
    assert_eq!(atomic.to_string(), token);
}

#[test]
fn test_array_serialization() {
    let array = SparkType::array(SparkType::Atomic(AtomicType::Long));
    assert_eq!(
        serde_json::to_value(&array).unwrap(),
        json!({
            "type": "array",
            "elementType": "long",
            "containsNull": true
        })
    );
}

#[test]
fn test_map_serialization() {
    let map = SparkType::map(SparkType::Atomic(AtomicType::Double));
    assert_eq!(
        serde_json::to_value(&map).unwrap(),
        json!({
            "type": "map",
            "keyType": "string",
            "valueType": "double",
            "valueContainsNull": true
        })
    );
}

#[test]
fn test_recursive_placeholder_is_string_map() {
    assert_eq!(
        serde_json::to_value(SparkType::recursive_placeholder()).unwrap(),
        json!({
            "type": "map",
            "keyType": "string",
            "valueType": "string",
            "valueContainsNull": true
        })
    );
}

#[test]
fn test_struct_serialization() {
    let schema = StructType {
        fields: vec![StructField {
            name: "id".to_string(),
            data_type: SparkType::Atomic(AtomicType::Long),
            nullable: false,
            metadata: FieldMetadata {
                parent_class: Some("User".to_string()),
                ..FieldMetadata::default()
            },
        }],
    };

    assert_eq!(
        schema.to_json(),
        json!({
            "type": "struct",
            "fields": [{
                "name": "id",
                "type": "long",
                "nullable": false,
                "metadata": {"parentClass": "User"}
            }]
        })
    );
}

#[test]
fn test_nested_composite_serialization() {
    let nested = SparkType::array(SparkType::map(SparkType::Atomic(AtomicType::String)));
    assert_eq!(
        serde_json::to_value(&nested).unwrap(),
        json!({
            "type": "array",
            "elementType": {
                "type": "map",
                "keyType": "string",
                "valueType": "string",
                "valueContainsNull": true
            },
            "containsNull": true
        })
    );
}

#[test]
fn test_metadata_serialization() {
    // No default, untitled parent: only the parentClass key, as null
    let empty = FieldMetadata::default();
    assert_eq!(
        serde_json::to_value(&empty).unwrap(),
        json!({"parentClass": null})
    );

    // Explicit null default is a present key
    let null_default = FieldMetadata {
        default: Some(serde_json::Value::Null),
        ..FieldMetadata::default()
    };
    let value = serde_json::to_value(&null_default).unwrap();
    assert!(value.as_object().unwrap().contains_key("default"));
    assert_eq!(value["default"], serde_json::Value::Null);

    let full = FieldMetadata {
        default: Some(json!("00000000-0000-0000-0000-000000000000")),
        logical_type: Some("uuid".to_string()),
        parent_class: Some("User".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&full).unwrap(),
        json!({
            "default": "00000000-0000-0000-0000-000000000000",
            "logicalType": "uuid",
            "parentClass": "User"
        })
    );
}

#[test]
fn test_has_default_counts_explicit_null() {
    assert!(!FieldMetadata::default().has_default());
    assert!(FieldMetadata {
        default: Some(serde_json::Value::Null),
        ..FieldMetadata::default()
    }
    .has_default());
}

#[test]
fn test_to_json_pretty_round_trips() {
    let schema = StructType { fields: vec![] };
    let parsed: serde_json::Value = serde_json::from_str(&schema.to_json_pretty()).unwrap();
    assert_eq!(parsed, json!({"type": "struct", "fields": []}));
}
