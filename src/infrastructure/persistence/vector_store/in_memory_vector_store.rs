use async_trait::async_trait;
use tracing::instrument;

use crate::application::ports::{SearchResult, VectorStore, VectorStoreError};
use crate::domain::{Embedding, VectorIndex};

/// Serves similarity queries from a fully loaded [`VectorIndex`].
pub struct InMemoryVectorStore {
    index: VectorIndex,
}

impl InMemoryVectorStore {
    pub fn new(index: VectorIndex) -> Self {
        Self { index }
    }

    pub fn index(&self) -> &VectorIndex {
        &self.index
    }
}

#[async_trait]
impl VectorStore for InMemoryVectorStore {
    #[instrument(skip(self, embedding))]
    async fn search(
        &self,
        embedding: &Embedding,
        top_k: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        if self.index.is_empty() {
            return Ok(Vec::new());
        }

        if embedding.dimensions() != self.index.dimensions() {
            return Err(VectorStoreError::DimensionMismatch {
                expected: self.index.dimensions(),
                actual: embedding.dimensions(),
            });
        }

        Ok(self
            .index
            .query(embedding, top_k)
            .into_iter()
            .map(|neighbor| SearchResult {
                score: neighbor.similarity(),
                chunk: neighbor.entry.chunk.clone(),
            })
            .collect())
    }

    async fn count(&self) -> Result<usize, VectorStoreError> {
        Ok(self.index.len())
    }
}
