//! Convenient re-exports for downstream crates.

pub use crate::config::StoreConfig;
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::record::{Record, ID_FIELD};
pub use crate::table::TableName;
pub use crate::value::Value;
