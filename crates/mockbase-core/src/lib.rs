#![forbid(unsafe_code)]
//! mockbase-core: values, records, table names, errors, and configuration.
//!
//! Pure data only. The shared table store lives in `mockbase-store` and the
//! fluent query surface in `mockbase-query`.

pub mod config;
pub mod error;
pub mod prelude;
pub mod record;
pub mod table;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use record::Record;
pub use table::TableName;
pub use value::Value;
