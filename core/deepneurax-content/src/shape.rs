//! Structural classification of raw CMS values.
//!
//! Detection is by key presence only (`attributes`, `data`), never by a
//! configured CMS version, so both response generations are accepted at once.

use serde_json::{Map, Value};

/// Field map of a single CMS entity.
pub type Fields = Map<String, Value>;

pub(crate) const ID_KEY: &str = "id";
const ATTRIBUTES_KEY: &str = "attributes";
const DATA_KEY: &str = "data";
const META_KEY: &str = "meta";

/// The shape a raw JSON object takes in a CMS response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityShape<'a> {
    /// `{ id, ...fields }`
    Flat(&'a Fields),
    /// `{ id, attributes: { ...fields } }`
    Nested {
        id: Option<&'a Value>,
        attributes: &'a Fields,
    },
    /// `{ data: <entity | list | null>, meta? }`
    Wrapped(Wrapped<'a>),
}

/// Payload of a `{ data: ... }` wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wrapped<'a> {
    Empty,
    One(&'a Value),
    Many(&'a [Value]),
}

/// What [`unwrap_entity`] does when a wrapper holds a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPolicy {
    /// A list is not a single entity.
    Reject,
    /// Descend into the first element (media fields).
    First,
}

impl<'a> EntityShape<'a> {
    /// Classifies `value`. Returns `None` for anything that is not a JSON object.
    pub fn of(value: &'a Value) -> Option<Self> {
        let object = value.as_object()?;

        if let Some(Value::Object(attributes)) = object.get(ATTRIBUTES_KEY) {
            return Some(Self::Nested {
                id: object.get(ID_KEY),
                attributes,
            });
        }

        if is_wrapper(object) {
            let wrapped = match &object[DATA_KEY] {
                Value::Null => Wrapped::Empty,
                Value::Array(items) => Wrapped::Many(items),
                other => Wrapped::One(other),
            };
            return Some(Self::Wrapped(wrapped));
        }

        Some(Self::Flat(object))
    }

    /// The entity's own fields. Wrappers have none.
    pub fn fields(&self) -> Option<&'a Fields> {
        match *self {
            Self::Flat(fields) => Some(fields),
            Self::Nested { attributes, .. } => Some(attributes),
            Self::Wrapped(_) => None,
        }
    }
}

/// A wrapper carries `data` and at most `meta`. An object with an `id` is an
/// entity even if one of its fields happens to be called `data`.
fn is_wrapper(object: &Fields) -> bool {
    object.contains_key(DATA_KEY)
        && !object.contains_key(ID_KEY)
        && object.keys().all(|k| k == DATA_KEY || k == META_KEY)
}

/// Follows `data` wrappers down to a single flat or nested entity.
///
/// The result is never [`EntityShape::Wrapped`].
pub fn unwrap_entity(value: &Value, lists: ListPolicy) -> Option<EntityShape<'_>> {
    match EntityShape::of(value)? {
        EntityShape::Wrapped(Wrapped::Empty) => None,
        EntityShape::Wrapped(Wrapped::One(inner)) => unwrap_entity(inner, lists),
        EntityShape::Wrapped(Wrapped::Many(items)) => match lists {
            ListPolicy::First => unwrap_entity(items.first()?, lists),
            ListPolicy::Reject => None,
        },
        shape => Some(shape),
    }
}
