use serde_json::Value;

use crate::entity::NormalizedEntity;
use crate::shape::{unwrap_entity, EntityShape, Fields, ListPolicy, Wrapped, ID_KEY};

/// Converts one raw CMS entity into canonical flat form.
///
/// - `null` and non-objects yield `None`.
/// - `{ id, attributes }` becomes `{ id, ...attributes }`; an `id` inside
///   `attributes` takes precedence.
/// - Flat entities pass through unchanged.
/// - `{ data: entity }` is unwrapped first; `{ data: null }` and
///   `{ data: [...] }` are not single entities and yield `None`.
///
/// Relation and media fields are not touched.
pub fn normalize_entity(raw: &Value) -> Option<NormalizedEntity> {
    match unwrap_entity(raw, ListPolicy::Reject)? {
        EntityShape::Flat(fields) => Some(NormalizedEntity::from_fields(fields.clone())),
        EntityShape::Nested { id, attributes } => {
            let mut fields = Fields::new();
            if let Some(id) = id {
                fields.insert(ID_KEY.to_string(), id.clone());
            }
            for (key, value) in attributes {
                fields.insert(key.clone(), value.clone());
            }
            Some(NormalizedEntity::from_fields(fields))
        }
        EntityShape::Wrapped(_) => None,
    }
}

/// Normalizes a list of entities, given bare or as `{ data: [...] }`.
///
/// Any other input yields an empty list. Members that do not normalize are
/// dropped; order is preserved.
pub fn normalize_collection(raw: &Value) -> Vec<NormalizedEntity> {
    let items: &[Value] = match raw {
        Value::Array(items) => items,
        other => match EntityShape::of(other) {
            Some(EntityShape::Wrapped(Wrapped::Many(items))) => items,
            _ => &[],
        },
    };

    items.iter().filter_map(normalize_entity).collect()
}
