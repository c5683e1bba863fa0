//! Store configuration that downstream crates can serialize/deserialize.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Fixture file (JSON or YAML) used to pre-populate the tables.
    /// `None` starts with an empty store.
    pub fixtures: Option<PathBuf>,

    /// Table whose first record stands in for the authenticated user.
    pub auth_table: String,

    /// `tracing-subscriber` filter directive used by the binary layer.
    pub log_filter: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            fixtures: None,
            auth_table: "profiles".to_string(),
            log_filter: "warn".to_string(),
        }
    }
}

impl StoreConfig {
    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `MOCKBASE_FIXTURES`: path to the fixture file
    /// - `MOCKBASE_AUTH_TABLE`: table backing `auth().get_user()`
    /// - `MOCKBASE_LOG`: log filter directive
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] with an injectable lookup, so tests
    /// need not touch the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        if let Some(s) = get("MOCKBASE_FIXTURES") {
            cfg.fixtures = Some(PathBuf::from(s));
        }

        if let Some(s) = get("MOCKBASE_AUTH_TABLE") {
            cfg.auth_table = s;
        }

        if let Some(s) = get("MOCKBASE_LOG") {
            cfg.log_filter = s;
        }

        cfg
    }
}
