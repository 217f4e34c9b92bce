use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::{Chunk, DocumentId, Embedding};

/// Returns one fixed chunk for every query.
pub struct MockVectorStore;

#[async_trait::async_trait]
impl VectorStore for MockVectorStore {
    async fn search(
        &self,
        _embedding: &Embedding,
        _top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        Ok(vec![SearchResult {
            chunk: Chunk::new(
                "Rust is a systems programming language focused on safety and performance."
                    .to_string(),
                DocumentId::new(),
                Some(1),
                0,
            ),
            score: 0.95,
        }])
    }

    async fn count(&self) -> Result<usize, VectorStoreError> {
        Ok(1)
    }
}

/// An index with nothing in it.
pub struct EmptyVectorStore;

#[async_trait::async_trait]
impl VectorStore for EmptyVectorStore {
    async fn search(
        &self,
        _embedding: &Embedding,
        _top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        Ok(Vec::new())
    }

    async fn count(&self) -> Result<usize, VectorStoreError> {
        Ok(0)
    }
}
