#![forbid(unsafe_code)]
//! mockbase-store: the process-wide table store and what feeds it.
//!
//! The store is a cloneable handle over one mutex-guarded table map. Every
//! clone sees the same tables, so build one per process (or per test) and
//! thread it through the callers that need it.

pub mod clock;
pub mod fixtures;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use fixtures::FixtureSet;
pub use store::TableStore;
