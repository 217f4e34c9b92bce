use async_trait::async_trait;
use futures::StreamExt;
use futures::stream::{self, BoxStream};

use super::{EmbedderError, VectorStoreError};
use crate::domain::Chunk;

/// Turns a question into its most similar chunks, best match first.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn retrieve(&self, query: &str) -> Result<Vec<Chunk>, RetrievalError>;

    /// Deferred form of [`Retriever::retrieve`]; yields the same chunks in the same order.
    fn retrieve_stream<'a>(&'a self, query: &'a str) -> BoxStream<'a, Result<Chunk, RetrievalError>> {
        stream::once(self.retrieve(query))
            .flat_map(|result| {
                let items: Vec<Result<Chunk, RetrievalError>> = match result {
                    Ok(chunks) => chunks.into_iter().map(Ok).collect(),
                    Err(e) => vec![Err(e)],
                };
                stream::iter(items)
            })
            .boxed()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("search: {0}")]
    Search(#[from] VectorStoreError),
}
