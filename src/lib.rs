#![warn(missing_docs)] // Enforce documentation for all public items

//! `collection-admin` creates, recreates and lists collections on a Qdrant server.
//!
//! It provides:
//! - Endpoint profiles loaded from TOML (`config`)
//! - A mockable collection-level Qdrant interface (`qdrant_client_trait`)
//! - An endpoint-bound client that fills in default collection names (`vector_client`)
//! - The positional command-line dispatcher and its handlers (`cli`)
//! - Error handling (`error`)
//!
//! ## Usage
//!
//! ```text
//! collection-admin create [collection_name] [vector_size] [endpoint_name]
//! collection-admin recreate [collection_name] [vector_size] [endpoint_name]
//! collection-admin list [endpoint_name]
//! ```
//!
//! Every operation catches its own errors, prints a one-line message and reports
//! `false`; the process still exits normally.

/// Command-line parsing and command handlers.
#[allow(missing_docs)]
pub mod cli;
/// Endpoint configuration management.
pub mod config;
/// Shared defaults.
pub mod constants;
/// Defines the core error types and Result alias.
pub mod error;
/// Trait defining the interface for a Qdrant client, enabling mocking.
pub mod qdrant_client_trait;
/// Endpoint-bound collection client.
pub mod vector_client;

#[cfg(test)]
/// Utilities specific to testing within the library.
pub mod test_utils;

pub use config::{load_config, AppConfig, EndpointConfig};
pub use constants::*;
pub use error::{AdminError, Result};
pub use qdrant_client_trait::QdrantClientTrait;
pub use vector_client::{Connect, QdrantVectorClient};
