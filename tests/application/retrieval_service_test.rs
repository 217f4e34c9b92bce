use std::sync::Arc;

use docqa::application::ports::{Embedder, Retriever};
use docqa::application::services::{DEFAULT_TOP_K, VectorStoreRetriever};
use docqa::domain::VectorIndex;
use docqa::infrastructure::llm::MockEmbedder;
use docqa::infrastructure::persistence::{EmptyVectorStore, InMemoryVectorStore};
use futures::TryStreamExt;

use crate::helpers::{CountingEmbedder, chunk};

const PASSAGES: [&str; 5] = [
    "Apples grow on trees in orchards during autumn.",
    "Bananas are a tropical fruit rich in potassium.",
    "The Rust borrow checker enforces ownership rules.",
    "Tokio is an asynchronous runtime for Rust programs.",
    "Oranges and lemons are citrus fruit.",
];

async fn retriever_over_passages(
    top_k: usize,
) -> (VectorStoreRetriever<InMemoryVectorStore>, Arc<CountingEmbedder>) {
    let embedder = Arc::new(CountingEmbedder::new());
    let chunks: Vec<_> = PASSAGES.iter().map(|p| chunk(p, 1)).collect();
    let texts: Vec<&str> = PASSAGES.to_vec();
    let embeddings = MockEmbedder.embed_batch(&texts).await.unwrap();
    let index = VectorIndex::new(chunks, embeddings).unwrap();

    let retriever = VectorStoreRetriever::new(
        Arc::clone(&embedder) as Arc<dyn Embedder>,
        Arc::new(InMemoryVectorStore::new(index)),
        top_k,
    );
    (retriever, embedder)
}

#[tokio::test]
async fn given_question_when_retrieving_then_returns_top_k_best_first() {
    let (retriever, embedder) = retriever_over_passages(DEFAULT_TOP_K).await;

    let chunks = retriever.retrieve("Which Rust runtime is asynchronous?").await.unwrap();

    assert_eq!(chunks.len(), DEFAULT_TOP_K);
    assert!(chunks[0].text.contains("Tokio"));
    assert_eq!(embedder.calls(), 1);
}

#[tokio::test]
async fn given_same_question_when_retrieving_twice_then_results_are_identical() {
    let (retriever, _) = retriever_over_passages(DEFAULT_TOP_K).await;

    let first = retriever.retrieve("citrus fruit").await.unwrap();
    let second = retriever.retrieve("citrus fruit").await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn given_stream_style_when_retrieving_then_matches_direct_style() {
    let (retriever, _) = retriever_over_passages(DEFAULT_TOP_K).await;

    let direct = retriever.retrieve("ownership in Rust").await.unwrap();
    let streamed: Vec<_> = retriever
        .retrieve_stream("ownership in Rust")
        .try_collect()
        .await
        .unwrap();

    assert_eq!(direct, streamed);
}

#[tokio::test]
async fn given_top_k_above_index_size_when_retrieving_then_returns_every_chunk() {
    let (retriever, _) = retriever_over_passages(10).await;

    let chunks = retriever.retrieve("fruit").await.unwrap();

    assert_eq!(chunks.len(), PASSAGES.len());
    assert_eq!(retriever.top_k(), 10);
}

#[tokio::test]
async fn given_empty_store_when_retrieving_then_returns_no_chunks() {
    let retriever = VectorStoreRetriever::new(
        Arc::new(MockEmbedder) as Arc<dyn Embedder>,
        Arc::new(EmptyVectorStore),
        DEFAULT_TOP_K,
    );

    assert!(retriever.retrieve("anything").await.unwrap().is_empty());
}
