use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shape::{Fields, ID_KEY};

/// A CMS entity in canonical flat form: `{ id, ...fields }`.
///
/// Produced by [`crate::normalize_entity`]. Relation and media fields are left
/// as the CMS sent them; page code resolves them explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedEntity(Fields);

impl NormalizedEntity {
    pub(crate) fn from_fields(fields: Fields) -> Self {
        Self(fields)
    }

    /// The entity id, if the CMS sent one.
    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_KEY)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Extract a string field. Empty strings are returned as-is.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Extract a boolean field.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// Extract a numeric field as `f64`.
    pub fn get_number(&self, key: &str) -> Option<f64> {
        self.0.get(key).and_then(Value::as_f64)
    }

    /// Replaces (or adds) a field.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn fields(&self) -> &Fields {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<NormalizedEntity> for Value {
    fn from(entity: NormalizedEntity) -> Self {
        entity.into_value()
    }
}
