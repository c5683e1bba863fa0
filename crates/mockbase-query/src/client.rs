//! Caller-facing surface: `client.from(table)` → chain → terminal call.

use std::sync::Arc;

use mockbase_core::config::StoreConfig;
use mockbase_core::error::Result;
use mockbase_core::value::Value;
use mockbase_store::clock::{Clock, SystemClock};
use mockbase_store::fixtures::FixtureSet;
use mockbase_store::store::TableStore;

use crate::descriptor::{OrderOptions, Query};
use crate::envelope::{AuthUser, ResultEnvelope, UserEnvelope};
use crate::exec;

/// Mock database client. Cheap to clone; clones share the store.
#[derive(Clone)]
pub struct Client {
    store: TableStore,
    clock: Arc<dyn Clock>,
    auth_table: String,
}

impl Client {
    pub fn new(store: TableStore) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            auth_table: StoreConfig::default().auth_table,
        }
    }

    /// Build a client from config, seeding the store from the configured
    /// fixture file if there is one.
    pub fn from_config(cfg: &StoreConfig) -> Result<Self> {
        let store = match &cfg.fixtures {
            Some(path) => TableStore::from_fixtures(FixtureSet::load(path)?),
            None => TableStore::new(),
        };
        Ok(Self::new(store).with_auth_table(cfg.auth_table.clone()))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_auth_table(mut self, table: impl Into<String>) -> Self {
        self.auth_table = table.into();
        self
    }

    pub fn store(&self) -> &TableStore {
        &self.store
    }

    /// Start a query. Fails with `InvalidTableName` for an empty name.
    pub fn from(&self, table: &str) -> Result<TableQuery<'_>> {
        Ok(TableQuery {
            client: self,
            query: Query::from_table(table)?,
        })
    }

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }
}

/// A descriptor bound to the client that will resolve it.
#[derive(Clone)]
pub struct TableQuery<'a> {
    client: &'a Client,
    query: Query,
}

impl<'a> TableQuery<'a> {
    pub fn select(self, columns: impl Into<String>) -> Self {
        self.map(|q| q.select(columns))
    }

    pub fn eq(self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.map(|q| q.eq(field, value))
    }

    pub fn order(self, field: impl Into<String>, options: OrderOptions) -> Self {
        self.map(|q| q.order(field, options))
    }

    pub fn single(self) -> Self {
        self.map(Query::single)
    }

    fn map(self, f: impl FnOnce(Query) -> Query) -> Self {
        Self {
            client: self.client,
            query: f(self.query),
        }
    }

    pub fn descriptor(&self) -> &Query {
        &self.query
    }

    /// Run the query against the store's current contents.
    pub fn resolve(&self) -> ResultEnvelope {
        exec::resolve(&self.client.store, &self.query)
    }

    pub fn insert(&self, payload: impl Into<Value>) -> ResultEnvelope {
        exec::insert(
            &self.client.store,
            self.client.clock.as_ref(),
            self.query.table(),
            payload,
        )
    }

    pub fn update(&self, patch: impl Into<Value>) -> ResultEnvelope {
        exec::update(&self.client.store, &self.query, patch)
    }
}

/// Stand-in for session lookup: the first record of the auth table is
/// "the signed-in user".
pub struct Auth<'a> {
    client: &'a Client,
}

impl Auth<'_> {
    pub fn get_user(&self) -> UserEnvelope {
        let user = self
            .client
            .store
            .with_table(&self.client.auth_table, |rows| rows.first().cloned());
        UserEnvelope {
            data: AuthUser { user },
        }
    }
}
