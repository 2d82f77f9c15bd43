use crate::error::{AdminError, Result};
use crate::qdrant_client_trait::MockQdrantClientTrait;
use crate::vector_client::{Connect, QdrantVectorClient};
use std::sync::{Arc, Mutex};

/// A `Connect` implementation that hands out a prepared mock client and
/// records the endpoint name of every connection attempt.
pub struct RecordingConnector {
    client: Arc<MockQdrantClientTrait>,
    default_endpoint: String,
    default_collection_name: String,
    connect_error: Option<String>,
    endpoints: Mutex<Vec<Option<String>>>,
}

impl RecordingConnector {
    /// Creates a connector that resolves `None` to `qdrant_local` / `nlweb_collection`.
    pub fn new(mock: MockQdrantClientTrait) -> Self {
        Self {
            client: Arc::new(mock),
            default_endpoint: "qdrant_local".to_string(),
            default_collection_name: "nlweb_collection".to_string(),
            connect_error: None,
            endpoints: Mutex::new(Vec::new()),
        }
    }

    /// Makes every `connect` call fail with the given message.
    pub fn failing(message: &str) -> Self {
        let mut connector = Self::new(MockQdrantClientTrait::new());
        connector.connect_error = Some(message.to_string());
        connector
    }

    /// Returns the endpoint names passed to `connect`, in call order.
    pub fn connected_endpoints(&self) -> Vec<Option<String>> {
        self.endpoints.lock().unwrap().clone()
    }
}

impl Connect for RecordingConnector {
    type Client = MockQdrantClientTrait;

    fn connect(&self, endpoint_name: Option<&str>) -> Result<QdrantVectorClient<MockQdrantClientTrait>> {
        self.endpoints.lock().unwrap().push(endpoint_name.map(str::to_string));
        if let Some(message) = &self.connect_error {
            return Err(AdminError::Other(message.clone()));
        }
        Ok(QdrantVectorClient::new(
            endpoint_name.unwrap_or(&self.default_endpoint),
            self.default_collection_name.as_str(),
            self.client.clone(),
        ))
    }
}

/// Disables ANSI colouring so captured output can be compared as plain text.
pub fn plain_output() -> Vec<u8> {
    colored::control::set_override(false);
    Vec::new()
}

/// Converts captured output into a `String`.
pub fn output_string(out: Vec<u8>) -> String {
    String::from_utf8(out).expect("output is valid UTF-8")
}
