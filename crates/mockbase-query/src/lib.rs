#![forbid(unsafe_code)]
//! mockbase-query: fluent query descriptors resolved against a `TableStore`.
//!
//! ```text
//! client.from("hotels")?.select("*").eq("active", true).order("name", Default::default()).resolve()
//! ```
//!
//! - `descriptor`: the immutable query intent (`Query`) and its directives.
//! - `exec`: resolution, insertion, and update against the store.
//! - `envelope`: the `{ data, error }` result shapes.
//! - `client`: the caller-facing surface that binds descriptors to a store.
//!
//! Everything here is synchronous; terminal calls return immediately.

pub mod client;
pub mod descriptor;
pub mod envelope;
pub mod exec;

pub use client::{Auth, Client, TableQuery};
pub use descriptor::{Cardinality, EqFilter, OrderOptions, OrderSpec, Query};
pub use envelope::{AuthUser, Data, ResultEnvelope, UserEnvelope};
