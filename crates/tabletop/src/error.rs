//! Error types for tabletop operations.

use crate::domain::FamilyId;
use std::io;
use thiserror::Error;

/// The error type for tabletop operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Catalog error.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Family not found.
    #[error("Family not found: {0}")]
    FamilyNotFound(FamilyId),
}

/// Errors from locating, reading or writing the project configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `.tabletop/` directory in the working directory or its parents.
    #[error("Not a tabletop catalog (or any of the parent directories). Run 'tabletop init' first")]
    NotInitialized,

    /// `init` found an existing `.tabletop/` directory.
    #[error("Tabletop is already initialized in this directory. Found existing '{0}'")]
    AlreadyInitialized(String),

    /// The catalog name failed validation.
    #[error("Invalid catalog name: {0}")]
    InvalidName(String),

    /// The config file is not valid YAML for the expected schema.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Errors from reading catalog data files.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A data file could not be read as line-oriented text.
    #[error("Invalid data file format: {0}")]
    InvalidFormat(String),

    /// A record could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

impl From<tabletop_jsonl::Error> for Error {
    fn from(err: tabletop_jsonl::Error) -> Self {
        match err {
            tabletop_jsonl::Error::Io(io_err) => Error::Io(io_err),
            tabletop_jsonl::Error::Json(json_err) => Error::Json(json_err),
            tabletop_jsonl::Error::InvalidFormat(msg) => CatalogError::InvalidFormat(msg).into(),
        }
    }
}

/// A specialized Result type for tabletop operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_not_found_names_the_family() {
        let err = Error::FamilyNotFound(FamilyId::new("catan"));
        assert_eq!(err.to_string(), "Family not found: catan");
    }

    #[test]
    fn config_errors_display_transparently() {
        let err: Error = ConfigError::NotInitialized.into();
        assert!(err.to_string().starts_with("Not a tabletop catalog"));
    }

    #[test]
    fn jsonl_invalid_format_becomes_catalog_error() {
        let err: Error = tabletop_jsonl::Error::InvalidFormat("bad bytes".into()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::InvalidFormat(_))));
    }
}
