use css_style_attr::{CHILDREN_SELECTOR, Property, StyleMapping};
use serde_json::{Value, json, to_value};

#[test]
fn serializes_camel_case_keys_and_nested_rules() {
    let mapping = StyleMapping::new()
        .set(Property::Display, "inline-grid")
        .set(Property::GridTemplateColumns, "repeat(2, 1fr)")
        .with_rule(
            CHILDREN_SELECTOR,
            StyleMapping::new().set(Property::Outline, "1px dotted green"),
        );

    let value = to_value(&mapping).unwrap_or(Value::Null);
    assert_eq!(
        value,
        json!({
            "display": "inline-grid",
            "gridTemplateColumns": "repeat(2, 1fr)",
            "& > *": { "outline": "1px dotted green" }
        })
    );
}

#[test]
fn empty_mapping_is_empty_object() {
    let value = to_value(StyleMapping::new()).unwrap_or(Value::Null);
    assert_eq!(value, json!({}));
}
