use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::field::{field_text, is_present};

/// Open field-name -> value mapping as submitted by a configuration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigurationRecord(Map<String, Value>);

impl ConfigurationRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(field.into(), value.into())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn is_present(&self, field: &str) -> bool {
        self.0.get(field).is_some_and(is_present)
    }

    /// Field value as text, `None` when missing or falsy
    pub fn text(&self, field: &str) -> Option<String> {
        field_text(self.0.get(field))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for ConfigurationRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Non-object values carry no fields, so they become an empty record.
impl From<Value> for ConfigurationRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}
