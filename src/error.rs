use std::io;
use thiserror::Error;

/// Result type for collection admin operations
pub type Result<T> = std::result::Result<T, AdminError>;

/// Errors that can occur while resolving an endpoint or talking to Qdrant
#[derive(Error, Debug)]
pub enum AdminError {
    /// Error originating from the Qdrant client
    #[error("Qdrant client error: {0}")]
    QdrantError(Box<qdrant_client::QdrantError>),

    /// The requested endpoint profile is not present in the configuration.
    #[error("Endpoint '{0}' is not configured")]
    EndpointNotFound(String),

    /// Error related to application configuration (e.g., missing URL, unset env var).
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("IO error: {0}")]
    /// A generic I/O error, often wrapping `std::io::Error`.
    IOError(#[from] io::Error),

    #[error("TOML error: {0}")]
    /// The configuration file is not valid TOML or does not match the expected layout.
    TomlError(#[from] toml::de::Error),

    #[error("Other error: {0}")]
    /// A catch-all error type for unclassified errors.
    Other(String),
}

// Manual From implementation for QdrantError
impl From<qdrant_client::QdrantError> for AdminError {
    fn from(err: qdrant_client::QdrantError) -> Self {
        AdminError::QdrantError(Box::new(err))
    }
}
