use async_trait::async_trait;

use super::{SearchResult, VectorStoreError};
use crate::domain::Embedding;

/// Read-only similarity search over an already built index.
#[async_trait]
pub trait VectorStore: Send + Sync {
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;

    async fn count(&self) -> Result<usize, VectorStoreError>;
}
