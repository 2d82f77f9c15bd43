//! An endpoint-bound view of a Qdrant server.
//!
//! [`QdrantVectorClient`] pairs a low-level [`QdrantClientTrait`] implementation with the
//! endpoint it was built for and that endpoint's default collection, so callers can pass
//! `None` for the collection name and get the configured one.
//! [`Connect`] is the seam that builds such a client from an endpoint name.

use std::sync::Arc;
use std::time::Duration;
use qdrant_client::Qdrant;
use crate::config::AppConfig;
use crate::error::Result;
use crate::qdrant_client_trait::QdrantClientTrait;

/// Builds a [`QdrantVectorClient`] for a named endpoint.
pub trait Connect {
    /// Low-level client the built wrapper talks through.
    type Client: QdrantClientTrait + Send + Sync + 'static;

    /// Connects to `endpoint_name`, or to the preferred endpoint when `None`.
    fn connect(&self, endpoint_name: Option<&str>) -> Result<QdrantVectorClient<Self::Client>>;
}

impl Connect for AppConfig {
    type Client = Qdrant;

    fn connect(&self, endpoint_name: Option<&str>) -> Result<QdrantVectorClient<Qdrant>> {
        let (name, endpoint) = self.endpoint(endpoint_name)?;
        let url = endpoint.resolve_url(name)?;
        log::debug!("Building Qdrant client for endpoint '{name}' at {url}");

        let mut builder = Qdrant::from_url(&url);
        if let Some(api_key) = endpoint.resolve_api_key(name)? {
            builder = builder.api_key(api_key);
        }
        if let Some(secs) = endpoint.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        Ok(QdrantVectorClient::new(
            name,
            endpoint.default_collection_name(),
            Arc::new(client),
        ))
    }
}

/// Collection operations against one endpoint.
pub struct QdrantVectorClient<C> {
    endpoint_name: String,
    default_collection_name: String,
    client: Arc<C>,
}

impl<C> QdrantVectorClient<C>
where
    C: QdrantClientTrait + Send + Sync + 'static,
{
    /// Wraps an existing low-level client.
    pub fn new(
        endpoint_name: impl Into<String>,
        default_collection_name: impl Into<String>,
        client: Arc<C>,
    ) -> Self {
        Self {
            endpoint_name: endpoint_name.into(),
            default_collection_name: default_collection_name.into(),
            client,
        }
    }

    /// Name of the endpoint this client was built for.
    pub fn endpoint_name(&self) -> &str {
        &self.endpoint_name
    }

    /// Collection used when an operation is given no name.
    pub fn default_collection_name(&self) -> &str {
        &self.default_collection_name
    }

    /// Resolves an optional collection name against the endpoint default.
    pub fn collection_name<'a>(&'a self, collection_name: Option<&'a str>) -> &'a str {
        collection_name.unwrap_or(&self.default_collection_name)
    }

    /// Checks whether the collection exists.
    pub async fn collection_exists(&self, collection_name: Option<&str>) -> Result<bool> {
        let name = self.collection_name(collection_name);
        self.client.collection_exists(name.to_string()).await
    }

    /// Creates the collection with `vector_size`-dimensional cosine vectors.
    ///
    /// Returns `Ok(false)` without touching the server's schema if the collection
    /// already exists. The check and the create are two separate requests.
    pub async fn create_collection(&self, collection_name: Option<&str>, vector_size: u64) -> Result<bool> {
        let name = self.collection_name(collection_name);
        if self.client.collection_exists(name.to_string()).await? {
            log::info!("Collection '{name}' already exists on '{}'", self.endpoint_name);
            return Ok(false);
        }
        log::info!("Creating collection '{name}' (size {vector_size}) on '{}'", self.endpoint_name);
        self.client.create_collection(name.to_string(), vector_size).await
    }

    /// Drops the collection if present, then creates it again.
    pub async fn recreate_collection(&self, collection_name: Option<&str>, vector_size: u64) -> Result<bool> {
        let name = self.collection_name(collection_name);
        if self.client.collection_exists(name.to_string()).await? {
            log::info!("Deleting collection '{name}' on '{}'", self.endpoint_name);
            if !self.client.delete_collection(name.to_string()).await? {
                log::warn!("Delete of collection '{name}' was acknowledged but returned false");
            }
        }
        log::info!("Creating collection '{name}' (size {vector_size}) on '{}'", self.endpoint_name);
        self.client.create_collection(name.to_string(), vector_size).await
    }

    /// Lists collection names as reported by the server.
    pub async fn list_collections(&self) -> Result<Vec<String>> {
        self.client.list_collections().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndpointConfig;
    use crate::error::AdminError;
    use crate::qdrant_client_trait::MockQdrantClientTrait;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn wrap(mock: MockQdrantClientTrait) -> QdrantVectorClient<MockQdrantClientTrait> {
        QdrantVectorClient::new("local", "nlweb_collection", Arc::new(mock))
    }

    #[tokio::test]
    async fn test_collection_exists_uses_default_name() {
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_collection_exists()
            .with(eq("nlweb_collection".to_string()))
            .times(1)
            .returning(|_| Ok(true));

        let client = wrap(mock);
        assert!(client.collection_exists(None).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_collection_skips_existing() {
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_collection_exists()
            .with(eq("docs".to_string()))
            .times(1)
            .returning(|_| Ok(true));
        mock.expect_create_collection().times(0);

        let client = wrap(mock);
        assert!(!client.create_collection(Some("docs"), 768).await.unwrap());
    }

    #[tokio::test]
    async fn test_create_collection_new() {
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_collection_exists()
            .times(1)
            .returning(|_| Ok(false));
        mock.expect_create_collection()
            .with(eq("docs".to_string()), eq(768u64))
            .times(1)
            .returning(|_, _| Ok(true));

        let client = wrap(mock);
        assert!(client.create_collection(Some("docs"), 768).await.unwrap());
    }

    #[tokio::test]
    async fn test_recreate_collection_deletes_then_creates() {
        let mut seq = Sequence::new();
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_collection_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        mock.expect_delete_collection()
            .with(eq("docs".to_string()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        mock.expect_create_collection()
            .with(eq("docs".to_string()), eq(1536u64))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));

        let client = wrap(mock);
        assert!(client.recreate_collection(Some("docs"), 1536).await.unwrap());
    }

    #[tokio::test]
    async fn test_recreate_collection_when_absent() {
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_collection_exists().returning(|_| Ok(false));
        mock.expect_delete_collection().times(0);
        mock.expect_create_collection()
            .with(eq("nlweb_collection".to_string()), eq(1536u64))
            .times(1)
            .returning(|_, _| Ok(true));

        let client = wrap(mock);
        assert!(client.recreate_collection(None, 1536).await.unwrap());
    }

    #[tokio::test]
    async fn test_errors_propagate() {
        let mut mock = MockQdrantClientTrait::new();
        mock.expect_list_collections()
            .returning(|| Err(AdminError::Other("connection refused".to_string())));

        let client = wrap(mock);
        let err = client.list_collections().await.unwrap_err();
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_connect_reports_unset_url_env() {
        let mut config = AppConfig::default();
        config.endpoints.insert(
            "remote".to_string(),
            EndpointConfig {
                url_env: Some("COLLECTION_ADMIN_TEST_CONNECT_URL_UNSET".to_string()),
                collection_name: Some("docs".to_string()),
                ..Default::default()
            },
        );

        let result = config.connect(Some("remote"));
        assert!(matches!(result, Err(AdminError::ConfigurationError(msg)) if msg.contains("remote")));
    }

    #[test]
    fn test_connect_unknown_endpoint() {
        let config = AppConfig::default();
        let result = config.connect(Some("missing"));
        assert!(matches!(result, Err(AdminError::EndpointNotFound(_))));
    }
}
