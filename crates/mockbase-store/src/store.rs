//! In-memory table store.
//!
//! Maps table names to ordered record sequences. Tables appear on first write
//! (or when a fixture set names them) and live for as long as any handle does.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use mockbase_core::record::Record;
use tracing::{trace, warn};

use crate::fixtures::FixtureSet;

type Tables = HashMap<String, Vec<Record>>;

/// Thread-safe table store. Clones share the same tables.
#[derive(Clone, Default)]
pub struct TableStore {
    tables: Arc<Mutex<Tables>>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated from a fixture set, keeping each table's order.
    pub fn from_fixtures(fixtures: FixtureSet) -> Self {
        let tables: Tables = fixtures.into_tables().into_iter().collect();
        trace!(tables = tables.len(), "store seeded from fixtures");
        Self {
            tables: Arc::new(Mutex::new(tables)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        // A panic while holding the lock cannot leave a table half-written:
        // every mutation below is a single push or an in-place field merge.
        self.tables.lock().unwrap_or_else(|poisoned| {
            warn!("table store lock was poisoned; continuing with inner state");
            poisoned.into_inner()
        })
    }

    /// Snapshot of a table. Unknown tables read as empty.
    pub fn get_table(&self, name: &str) -> Vec<Record> {
        self.lock().get(name).cloned().unwrap_or_default()
    }

    /// Run `f` over a table's records without cloning the whole sequence.
    pub fn with_table<R>(&self, name: &str, f: impl FnOnce(&[Record]) -> R) -> R {
        let tables = self.lock();
        f(tables.get(name).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Append a record, creating the table if needed.
    pub fn append_record(&self, name: &str, record: Record) {
        let mut tables = self.lock();
        let table = tables.entry(name.to_string()).or_default();
        table.push(record);
        trace!(table = name, rows = table.len(), "record appended");
    }

    /// Merge `patch` into every record `matches` accepts, in place.
    /// Returns the updated records in table order.
    pub fn update_matching(
        &self,
        name: &str,
        matches: impl Fn(&Record) -> bool,
        patch: &Record,
    ) -> Vec<Record> {
        let mut tables = self.lock();
        let Some(table) = tables.get_mut(name) else {
            return Vec::new();
        };
        let mut updated = Vec::new();
        for record in table.iter_mut().filter(|r| matches(r)) {
            record.merge(patch);
            updated.push(record.clone());
        }
        trace!(table = name, rows = updated.len(), "records updated");
        updated
    }

    /// Make sure a table exists (possibly empty).
    pub fn create_table(&self, name: &str) {
        self.lock().entry(name.to_string()).or_default();
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.lock().contains_key(name)
    }

    /// Number of records in a table (0 for unknown tables).
    pub fn len(&self, name: &str) -> usize {
        self.lock().get(name).map_or(0, Vec::len)
    }

    /// Sorted table names.
    pub fn table_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().keys().cloned().collect();
        names.sort();
        names
    }
}
