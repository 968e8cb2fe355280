//! Strapi query-string encoding.
//!
//! Strapi parses nested parameters in bracket notation:
//! `{ populate: { items: { populate: "image" } } }` becomes
//! `populate[items][populate]=image`, arrays use indices
//! (`populate[0]=images`). Only values are percent-encoded; keys keep their
//! brackets and operators (`filters[slug][$eq]=...`) verbatim.

use serde_json::Value;

/// Encodes a JSON object as a Strapi query string (without the leading `?`).
///
/// Non-object input and empty objects encode to an empty string.
pub fn encode_query(params: &Value) -> String {
    let mut pairs = Vec::new();
    if let Value::Object(map) = params {
        for (key, value) in map {
            push_pairs(key.clone(), value, &mut pairs);
        }
    }
    pairs.join("&")
}

fn push_pairs(prefix: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (key, nested) in map {
                push_pairs(format!("{prefix}[{key}]"), nested, pairs);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                push_pairs(format!("{prefix}[{index}]"), item, pairs);
            }
        }
        Value::Null => pairs.push(format!("{prefix}=")),
        Value::String(s) => pairs.push(format!("{prefix}={}", urlencoding::encode(s))),
        Value::Bool(_) | Value::Number(_) => pairs.push(format!("{prefix}={value}")),
    }
}
