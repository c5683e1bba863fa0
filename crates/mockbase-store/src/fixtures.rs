//! Fixture sets: the static data a store starts from.
//!
//! A fixture file is a single mapping from table name to a list of records:
//!
//! ```yaml
//! hotels:
//!   - { id: "hotel_1", name: "Hotel Central", active: true }
//!   - { id: "hotel_2", name: "Pousada Sol", active: true }
//! notifications: []
//! ```
//!
//! JSON with the same shape is accepted too. Files ending in `.yaml`/`.yml`
//! are read as YAML, anything else as JSON.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::trace;

use mockbase_core::error::{Error, Result};
use mockbase_core::record::{Record, ID_FIELD};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FixtureSet {
    tables: BTreeMap<String, Vec<Record>>,
}

impl FixtureSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table setter (replaces an existing table of that name).
    pub fn with_table(mut self, name: impl Into<String>, records: Vec<Record>) -> Self {
        self.tables.insert(name.into(), records);
        self
    }

    pub fn parse_json(src: &str) -> Result<Self> {
        let set: FixtureSet = serde_json::from_str(src)?;
        set.validate()?;
        Ok(set)
    }

    pub fn parse_yaml(src: &str) -> Result<Self> {
        let set: FixtureSet = serde_yaml::from_str(src)?;
        set.validate()?;
        Ok(set)
    }

    /// Read and validate a fixture file.
    pub fn load(path: &Path) -> Result<Self> {
        let src = fs::read_to_string(path)
            .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let set = if is_yaml {
            Self::parse_yaml(&src)?
        } else {
            Self::parse_json(&src)?
        };
        trace!(path = %path.display(), tables = set.tables.len(), "fixtures loaded");
        Ok(set)
    }

    /// Check that table names are non-empty and every record carries an id
    /// that is unique within its table.
    pub fn validate(&self) -> Result<()> {
        for (table, records) in &self.tables {
            if table.is_empty() {
                return Err(Error::InvalidTableName);
            }
            let mut seen = HashSet::with_capacity(records.len());
            for (idx, record) in records.iter().enumerate() {
                if !record.has_id() {
                    return Err(Error::Fixture(format!(
                        "table '{table}' record #{idx} has no usable '{ID_FIELD}'"
                    )));
                }
                // ids compare loosely, same as equality filters
                let key = record.id().map(ToString::to_string).unwrap_or_default();
                if !seen.insert(key.clone()) {
                    return Err(Error::Fixture(format!(
                        "table '{table}' has duplicate {ID_FIELD} '{key}'"
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn table(&self, name: &str) -> Option<&[Record]> {
        self.tables.get(name).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn into_tables(self) -> BTreeMap<String, Vec<Record>> {
        self.tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockbase_core::error::ErrorKind;
    use mockbase_core::value::Value;
    use std::io::Write;

    const YAML: &str = r#"
hotels:
  - { id: "hotel_1", name: "Hotel Central", active: true }
  - { id: "hotel_2", name: "Pousada Sol", active: false }
intelligent_profiles:
  - id: ip_1
    name: Visitante Frequente
    score: 92
notifications: []
"#;

    #[test]
    fn parse_yaml_fixture() {
        let set = FixtureSet::parse_yaml(YAML).unwrap();
        assert_eq!(
            set.table_names().collect::<Vec<_>>(),
            vec!["hotels", "intelligent_profiles", "notifications"]
        );
        let hotels = set.table("hotels").unwrap();
        assert_eq!(hotels[1].get("active"), Some(&Value::Bool(false)));
        let ip = &set.table("intelligent_profiles").unwrap()[0];
        assert_eq!(ip.get("score"), Some(&Value::I64(92)));
        assert!(set.table("notifications").unwrap().is_empty());
    }

    #[test]
    fn parse_json_fixture() {
        let set = FixtureSet::parse_json(
            r#"{"events":[{"id":"ev_1","name":"Concerto","start_date":"2025-12-10"}]}"#,
        )
        .unwrap();
        assert_eq!(set.table("events").unwrap().len(), 1);
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = FixtureSet::parse_json(r#"{"events":[{"name":"Concerto"}]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fixture);
        assert!(err.to_string().contains("record #0"));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = FixtureSet::parse_json(r#"{"hotels":[{"id":"h"},{"id":"h"}]}"#).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn same_id_in_different_tables_is_fine() {
        assert!(FixtureSet::parse_json(r#"{"a":[{"id":1}],"b":[{"id":1}]}"#).is_ok());
    }

    #[test]
    fn non_object_record_is_rejected() {
        let err = FixtureSet::parse_json(r#"{"hotels":["hotel_1"]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Fixture);
    }

    #[test]
    fn empty_table_name_is_rejected() {
        let err = FixtureSet::parse_json(r#"{"":[]}"#).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidTableName);
    }

    #[test]
    fn load_picks_format_by_extension() {
        let mut yaml = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        yaml.write_all(YAML.as_bytes()).unwrap();
        assert_eq!(FixtureSet::load(yaml.path()).unwrap().table("hotels").unwrap().len(), 2);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        json.write_all(br#"{"campaigns":[]}"#).unwrap();
        assert!(FixtureSet::load(json.path()).unwrap().table("campaigns").is_some());
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = FixtureSet::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
