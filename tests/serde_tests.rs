//! Serialization tests for the `serde` feature.

use clazz::prelude::*;
use rstest::rstest;
use serde_json::json;

fn point() -> Class {
    PrototypeSpec::new()
        .named("Point")
        .field("x", 0)
        .field("y", 0)
        .member("setX", setter("x"))
        .build()
        .unwrap()
}

/// Instances serialize their resolved fields, methods excluded
#[rstest]
fn test_instance_serializes_resolved_fields() {
    let instance = point().create(fields! { x: 1 }).unwrap();

    let serialized = serde_json::to_value(&instance).unwrap();

    assert_eq!(serialized, json!({ "x": 1.0, "y": 0.0 }));
}

/// Nested objects serialize as nested maps
#[rstest]
fn test_nested_instance() {
    let circle = PrototypeSpec::new()
        .field("center", point().instance())
        .field("label", "unit")
        .field("filled", false)
        .build()
        .unwrap();

    let serialized = serde_json::to_value(circle.instance()).unwrap();

    assert_eq!(
        serialized,
        json!({ "center": { "x": 0.0, "y": 0.0 }, "filled": false, "label": "unit" })
    );
}

/// Class options round-trip through JSON and fill in missing keys
#[rstest]
fn test_class_options_deserialize() {
    let options: ClassOptions =
        serde_json::from_value(json!({ "reject_unknown_fields": true })).unwrap();

    assert_eq!(options, ClassOptions::strict());
    assert_eq!(
        serde_json::from_str::<ClassOptions>(&serde_json::to_string(&ClassOptions::unchecked()).unwrap())
            .unwrap(),
        ClassOptions::unchecked()
    );
}

/// Type tags serialize in lowercase
#[rstest]
fn test_type_tag_serializes_lowercase() {
    assert_eq!(serde_json::to_value(TypeTag::Function).unwrap(), json!("function"));
}
