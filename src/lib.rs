#![forbid(unsafe_code)]
//! mockbase: an in-memory stand-in for a hosted database client.
//!
//! Re-exports the workspace crates under one name:
//! - `model`: values, records, table names, errors, configuration
//! - `store`: the shared table store, fixtures, clocks
//! - `query`: descriptors, resolution, envelopes, and the `Client`

pub use mockbase_core as model;
pub use mockbase_query as query;
pub use mockbase_store as store;

pub use mockbase_query::{Client, ResultEnvelope};
