use jsonschema::JSONSchema;
use nanofaker_core::{LocaleDefinition, english};
use schemars::schema_for;
use serde_json::json;

fn compiled_schema() -> JSONSchema {
    let schema = schema_for!(LocaleDefinition);
    let schema_json = serde_json::to_value(&schema).expect("serialize generated schema");
    JSONSchema::compile(&schema_json).expect("compile locale schema")
}

#[test]
fn bundled_locale_matches_schema() {
    let schema = compiled_schema();
    let en = serde_json::to_value(english().as_ref()).expect("serialize en");
    assert!(schema.is_valid(&en));
}

#[test]
fn partial_variant_matches_schema() {
    let schema = compiled_schema();
    let variant = json!({
        "title": "English (United Kingdom)",
        "phone": {"formats": ["0#### ######"]}
    });
    assert!(schema.is_valid(&variant));
}

#[test]
fn mistyped_section_fails_schema() {
    let schema = compiled_schema();
    let broken = json!({"address": {"city": "London"}});
    assert!(!schema.is_valid(&broken));
}
