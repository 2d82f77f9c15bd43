use async_trait::async_trait;
use qdrant_client::qdrant::{CreateCollectionBuilder, DeleteCollection, Distance, VectorParamsBuilder};
use qdrant_client::Qdrant;
use crate::error::{AdminError, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
/// Trait defining the collection-level interface of a Qdrant client.
/// This allows for mocking the client in tests.
pub trait QdrantClientTrait: Send + Sync {
    /// Checks if a collection exists.
    async fn collection_exists(&self, collection_name: String) -> Result<bool>;
    /// Creates a collection holding one unnamed dense vector per point.
    async fn create_collection(&self, collection_name: String, vector_size: u64) -> Result<bool>;
    /// Deletes a collection from the Qdrant server.
    async fn delete_collection(&self, collection_name: String) -> Result<bool>;
    /// Lists the names of all collections, in the order the server reports them.
    async fn list_collections(&self) -> Result<Vec<String>>;
}

#[async_trait]
impl QdrantClientTrait for Qdrant {
    async fn collection_exists(&self, collection_name: String) -> Result<bool> {
        self.collection_exists(collection_name).await.map_err(AdminError::from)
    }

    async fn create_collection(&self, collection_name: String, vector_size: u64) -> Result<bool> {
        let request = CreateCollectionBuilder::new(collection_name)
            .vectors_config(VectorParamsBuilder::new(vector_size, Distance::Cosine));
        let response = self.create_collection(request).await.map_err(AdminError::from)?;
        Ok(response.result)
    }

    async fn delete_collection(&self, collection_name: String) -> Result<bool> {
        let request = DeleteCollection {
            collection_name,
            ..Default::default()
        };
        Ok(self.delete_collection(request).await.map_err(AdminError::from)?.result)
    }

    async fn list_collections(&self) -> Result<Vec<String>> {
        let response = self.list_collections().await.map_err(AdminError::from)?;
        let collection_names = response.collections
            .into_iter()
            .map(|collection| collection.name)
            .collect();
        Ok(collection_names)
    }
}
