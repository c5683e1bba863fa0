use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical result for core.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid table name: table names must not be empty")]
    InvalidTableName,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Fixture error: {0}")]
    Fixture(String),

    // The core crate does not do I/O, but higher layers may map their I/O
    // errors into this variant for convenience.
    #[error("I/O-like error (mapped into core): {0}")]
    Io(String),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidTableName => ErrorKind::InvalidTableName,
            Error::Config(_) => ErrorKind::Config,
            Error::Fixture(_) => ErrorKind::Fixture,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Fixture(e.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(e: serde_yaml::Error) -> Self {
        Error::Fixture(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Payload-free error tag carried in a result envelope's `error` slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    InvalidTableName,
    Config,
    Fixture,
    Io,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(Error::InvalidTableName.kind(), ErrorKind::InvalidTableName);
        assert_eq!(Error::Fixture("x".into()).kind(), ErrorKind::Fixture);
    }

    #[test]
    fn json_errors_map_to_fixture() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::Fixture);
    }

    #[test]
    fn kind_serializes_as_string() {
        let json = serde_json::to_string(&ErrorKind::InvalidTableName).unwrap();
        assert_eq!(json, "\"InvalidTableName\"");
    }
}
