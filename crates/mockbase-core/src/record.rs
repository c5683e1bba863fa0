//! Open-ended records: one row of a table.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Field every record is keyed by.
pub const ID_FIELD: &str = "id";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(fields: BTreeMap<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record from an arbitrary JSON payload. Anything that is not an
    /// object yields an empty record.
    pub fn from_json(payload: serde_json::Value) -> Self {
        Self::from_value(Value::from(payload))
    }

    /// Same as [`Record::from_json`] for an already-converted value.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Map(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    /// Builder-style field setter.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn id(&self) -> Option<&Value> {
        self.fields.get(ID_FIELD)
    }

    /// True when the id field is present and usable as a key
    /// (not null, not an empty string).
    pub fn has_id(&self) -> bool {
        match self.id() {
            None | Some(Value::Null) => false,
            Some(Value::Str(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(field.into(), value.into())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Copy every field of `patch` onto this record, leaving the id untouched.
    pub fn merge(&mut self, patch: &Record) {
        for (field, value) in &patch.fields {
            if field == ID_FIELD {
                continue;
            }
            self.fields.insert(field.clone(), value.clone());
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_map(self) -> BTreeMap<String, Value> {
        self.fields
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::from(Value::Map(self.fields.clone()))
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(fields: BTreeMap<String, Value>) -> Self {
        Self::from_map(fields)
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Map(record.fields)
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
