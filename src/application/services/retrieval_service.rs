use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{Embedder, RetrievalError, Retriever, VectorStore};
use crate::domain::Chunk;

pub const DEFAULT_TOP_K: usize = 3;

/// Embeds the query and returns the `top_k` nearest chunks unchanged.
pub struct VectorStoreRetriever<V>
where
    V: VectorStore + ?Sized,
{
    embedder: Arc<dyn Embedder>,
    vector_store: Arc<V>,
    top_k: usize,
}

impl<V> VectorStoreRetriever<V>
where
    V: VectorStore + ?Sized,
{
    pub fn new(embedder: Arc<dyn Embedder>, vector_store: Arc<V>, top_k: usize) -> Self {
        Self {
            embedder,
            vector_store,
            top_k,
        }
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

#[async_trait]
impl<V> Retriever for VectorStoreRetriever<V>
where
    V: VectorStore + ?Sized,
{
    #[tracing::instrument(skip(self, query), fields(top_k = self.top_k))]
    async fn retrieve(&self, query: &str) -> Result<Vec<Chunk>, RetrievalError> {
        let query_embedding = self.embedder.embed(query).await?;

        let results = self
            .vector_store
            .search(&query_embedding, self.top_k)
            .await?;

        tracing::debug!(
            retrieved = results.len(),
            best_score = results.first().map(|r| r.score),
            "Retrieved chunks"
        );

        Ok(results.into_iter().map(|r| r.chunk).collect())
    }
}
