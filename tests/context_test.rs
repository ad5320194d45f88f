use ezpresso::context::{build_context, capitalize};
use ezpresso::error::Error;
use ezpresso::fields::FieldSpec;
use serde_json::json;

#[test]
fn test_capitalize_first_char_only() {
    assert_eq!(capitalize("user"), "User");
    assert_eq!(capitalize("User"), "User");
    assert_eq!(capitalize("uSeR"), "USeR");
    assert_eq!(capitalize("x"), "X");
    assert_eq!(capitalize(""), "");
}

#[test]
fn test_capitalize_non_ascii_first_char() {
    assert_eq!(capitalize("éclair"), "Éclair");
}

#[test]
fn test_context_without_fields() {
    let context = build_context("user", None).unwrap();

    assert_eq!(context["name"], json!("user"));
    assert_eq!(context["Name"], json!("User"));
    assert!(context.get("fields").is_none());
}

#[test]
fn test_context_with_fields_preserves_order() {
    let fields = vec![
        FieldSpec { name: "email".to_string(), type_tag: "String".to_string(), required: true },
        FieldSpec { name: "age".to_string(), type_tag: "Number".to_string(), required: false },
    ];

    let context = build_context("user", Some(&fields)).unwrap();

    assert_eq!(
        context["fields"],
        json!([
            { "name": "email", "type": "String", "required": true },
            { "name": "age", "type": "Number", "required": false },
        ])
    );
}

#[test]
fn test_empty_fields_key_is_present_for_models() {
    let context = build_context("user", Some(&[])).unwrap();
    assert_eq!(context["fields"], json!([]));
}

#[test]
fn test_empty_entity_name_is_rejected() {
    assert!(matches!(build_context("", None), Err(Error::EmptyEntityName)));
    assert!(matches!(build_context("   ", None), Err(Error::EmptyEntityName)));
}
