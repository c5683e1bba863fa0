//! Query descriptors: accumulated, not-yet-executed query intent.
//!
//! A `Query` never touches the store. Each shaping call consumes the
//! descriptor and hands back a new one, so a partially built query can only be
//! reused through an explicit `clone()`.
//!
//! Invariants:
//! - `table` is fixed at construction and always non-empty.
//! - At most one equality filter is held; a later `eq` replaces an earlier one.
//! - `select` and `order` are recorded for introspection but never narrow
//!   fields or reorder rows.

use serde::{Deserialize, Serialize};

use mockbase_core::error::Result;
use mockbase_core::table::TableName;
use mockbase_core::value::Value;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cardinality {
    #[default]
    Many,
    One,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EqFilter {
    pub field: String,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderOptions {
    pub ascending: bool,
}

impl Default for OrderOptions {
    fn default() -> Self {
        Self { ascending: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub field: String,
    pub ascending: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    table: TableName,
    columns: Option<String>,
    filter: Option<EqFilter>,
    order: Option<OrderSpec>,
    cardinality: Cardinality,
}

impl Query {
    /// Start a query against `table`. Fails with `InvalidTableName` when the
    /// name is empty.
    pub fn from_table(table: impl Into<String>) -> Result<Self> {
        Ok(Self::for_table(TableName::new(table)?))
    }

    pub fn for_table(table: TableName) -> Self {
        Self {
            table,
            columns: None,
            filter: None,
            order: None,
            cardinality: Cardinality::Many,
        }
    }

    /// Record a column list. Resolution still returns whole records.
    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    /// Set the equality filter, replacing any previous one.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.filter = Some(EqFilter {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    /// Record an ordering. Rows keep their stored order regardless.
    pub fn order(mut self, field: impl Into<String>, options: OrderOptions) -> Self {
        self.order = Some(OrderSpec {
            field: field.into(),
            ascending: options.ascending,
        });
        self
    }

    pub fn single(mut self) -> Self {
        self.cardinality = Cardinality::One;
        self
    }

    pub fn table(&self) -> &TableName {
        &self.table
    }

    pub fn columns(&self) -> Option<&str> {
        self.columns.as_deref()
    }

    pub fn filter(&self) -> Option<&EqFilter> {
        self.filter.as_ref()
    }

    pub fn ordering(&self) -> Option<&OrderSpec> {
        self.order.as_ref()
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }
}
