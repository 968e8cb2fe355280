use deepneurax_content::{normalize_entity, NormalizedEntity};
use serde_json::json;

fn make_entity(fields: serde_json::Value) -> NormalizedEntity {
    normalize_entity(&fields).expect("object normalizes")
}

// ── Field accessors ──────────────────────────────────────────────

#[test]
fn id_is_exposed() {
    let e = make_entity(json!({"id": 7, "title": "Hello"}));
    assert_eq!(e.id(), Some(&json!(7)));
}

#[test]
fn id_missing_returns_none() {
    let e = make_entity(json!({"title": "Hello"}));
    assert_eq!(e.id(), None);
}

#[test]
fn get_str_returns_string_field() {
    let e = make_entity(json!({"title": "My Post", "order": 5}));
    assert_eq!(e.get_str("title"), Some("My Post"));
}

#[test]
fn get_str_returns_none_for_non_string() {
    let e = make_entity(json!({"order": 5}));
    assert_eq!(e.get_str("order"), None);
}

#[test]
fn get_str_with_empty_string_value() {
    let e = make_entity(json!({"slug": ""}));
    assert_eq!(e.get_str("slug"), Some(""));
}

#[test]
fn get_bool_returns_boolean_field() {
    let e = make_entity(json!({"isActive": false}));
    assert_eq!(e.get_bool("isActive"), Some(false));
    assert_eq!(e.get_bool("missing"), None);
}

#[test]
fn get_number_returns_numeric_field() {
    let e = make_entity(json!({"order": 3, "ratio": 0.5}));
    assert_eq!(e.get_number("order"), Some(3.0));
    assert_eq!(e.get_number("ratio"), Some(0.5));
    assert_eq!(e.get_number("title"), None);
}

// ── Mutation ─────────────────────────────────────────────────────

#[test]
fn insert_replaces_field() {
    let mut e = make_entity(json!({"title": "old"}));
    let previous = e.insert("title", json!("new"));
    assert_eq!(previous, Some(json!("old")));
    assert_eq!(e.get_str("title"), Some("new"));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serializes_as_plain_object() {
    let e = make_entity(json!({"id": 1, "title": "x"}));
    let value = serde_json::to_value(&e).unwrap();
    assert_eq!(value, json!({"id": 1, "title": "x"}));
}

#[test]
fn into_value_matches_fields() {
    let e = make_entity(json!({"id": 2, "tags": ["a"]}));
    let fields = e.fields().clone();
    assert_eq!(e.into_value(), serde_json::Value::Object(fields));
}

#[test]
fn clone_is_independent() {
    let e = make_entity(json!({"title": "original"}));
    let mut cloned = e.clone();
    cloned.insert("title", json!("modified"));

    assert_eq!(e.get_str("title"), Some("original"));
    assert_eq!(cloned.get_str("title"), Some("modified"));
}
