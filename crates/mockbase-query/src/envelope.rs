//! `{ data, error }` result envelopes.

use serde::{Deserialize, Serialize};

use mockbase_core::error::ErrorKind;
use mockbase_core::record::Record;

/// Payload of an envelope. `One` serializes as an object or `null`,
/// `Many` always as an array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Data {
    Many(Vec<Record>),
    One(Option<Record>),
}

impl Data {
    /// Uniform slice view: `One(None)` is empty, `One(Some(r))` has one row.
    pub fn records(&self) -> &[Record] {
        match self {
            Data::Many(rows) => rows,
            Data::One(Some(row)) => std::slice::from_ref(row),
            Data::One(None) => &[],
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Data::One(None))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub data: Data,
    pub error: Option<ErrorKind>,
}

impl ResultEnvelope {
    pub fn ok(data: Data) -> Self {
        Self { data, error: None }
    }

    pub fn many(rows: Vec<Record>) -> Self {
        Self::ok(Data::Many(rows))
    }

    pub fn one(row: Option<Record>) -> Self {
        Self::ok(Data::One(row))
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn records(&self) -> &[Record] {
        self.data.records()
    }

    /// The single-row payload, if this envelope holds one.
    pub fn as_one(&self) -> Option<&Record> {
        match &self.data {
            Data::One(row) => row.as_ref(),
            Data::Many(_) => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        let data = match &self.data {
            Data::Many(rows) => serde_json::Value::Array(rows.iter().map(Record::to_json).collect()),
            Data::One(Some(row)) => row.to_json(),
            Data::One(None) => serde_json::Value::Null,
        };
        let error = match self.error {
            Some(kind) => serde_json::to_value(kind).unwrap_or(serde_json::Value::Null),
            None => serde_json::Value::Null,
        };
        serde_json::json!({ "data": data, "error": error })
    }
}

/// Payload of `auth().get_user()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub user: Option<Record>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserEnvelope {
    pub data: AuthUser,
}

impl UserEnvelope {
    pub fn user(&self) -> Option<&Record> {
        self.data.user.as_ref()
    }
}
