//! Resolution of descriptors against a `TableStore`, plus the write paths.
//!
//! Reads never fail: no matches degrade to `null` (single) or `[]` (many).
//! Writes never fail either: a payload that is not a mapping reduces to a
//! record holding just a generated id (insert) or to a no-op (update).

use tracing::debug;

use mockbase_core::record::{Record, ID_FIELD};
use mockbase_core::table::TableName;
use mockbase_core::value::Value;
use mockbase_store::clock::Clock;
use mockbase_store::store::TableStore;

use crate::descriptor::{Cardinality, EqFilter, Query};
use crate::envelope::{Data, ResultEnvelope};

/// Loose equality on one field. Records without the field never match.
pub fn matches(record: &Record, filter: &EqFilter) -> bool {
    record
        .get(&filter.field)
        .is_some_and(|v| v.loose_eq(&filter.value))
}

fn accepts(query: &Query, record: &Record) -> bool {
    query.filter().map_or(true, |f| matches(record, f))
}

/// Resolve `query` against the current contents of `store`.
pub fn resolve(store: &TableStore, query: &Query) -> ResultEnvelope {
    let table = query.table().as_str();
    let data = store.with_table(table, |rows| {
        let mut hits = rows.iter().filter(|r| accepts(query, r));
        match query.cardinality() {
            Cardinality::One => Data::One(hits.next().cloned()),
            Cardinality::Many => Data::Many(hits.cloned().collect()),
        }
    });
    debug!(
        table,
        filter = ?query.filter(),
        cardinality = ?query.cardinality(),
        rows = data.records().len(),
        "query resolved"
    );
    ResultEnvelope::ok(data)
}

/// `"{table}_{millis}"`. Two calls within one millisecond yield the same id.
pub fn generate_id(table: &TableName, clock: &dyn Clock) -> String {
    format!("{}_{}", table, clock.now_millis())
}

/// Append `payload` to `table`, generating an id when it has none.
pub fn insert(
    store: &TableStore,
    clock: &dyn Clock,
    table: &TableName,
    payload: impl Into<Value>,
) -> ResultEnvelope {
    let mut record = Record::from_value(payload.into());
    if !record.has_id() {
        record.insert(ID_FIELD, generate_id(table, clock));
    }
    store.append_record(table.as_str(), record.clone());
    debug!(table = %table, id = ?record.id(), "record inserted");
    ResultEnvelope::many(vec![record])
}

/// Merge `patch` into every record the query's filter accepts (every record
/// when there is no filter). Existing ids are never rewritten.
pub fn update(store: &TableStore, query: &Query, patch: impl Into<Value>) -> ResultEnvelope {
    let patch = Record::from_value(patch.into());
    if patch.is_empty() {
        return ResultEnvelope::many(Vec::new());
    }
    let table = query.table().as_str();
    let updated = store.update_matching(table, |r| accepts(query, r), &patch);
    debug!(table, filter = ?query.filter(), rows = updated.len(), "records updated");
    ResultEnvelope::many(updated)
}
