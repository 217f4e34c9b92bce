use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use docqa::application::ports::{
    Embedder, EmbedderError, LlmClient, LlmClientError, RetrievalError, Retriever,
};
use docqa::domain::{Chunk, DocumentId, Embedding, GeneratedText};
use docqa::infrastructure::llm::MockEmbedder;

pub fn chunk(text: &str, page: u32) -> Chunk {
    Chunk::new(text.to_string(), DocumentId::new(), Some(page), 0)
}

/// Returns a fixed list of chunks and counts how often it was asked.
pub struct StaticRetriever {
    chunks: Vec<Chunk>,
    calls: AtomicUsize,
}

impl StaticRetriever {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self {
            chunks,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Retriever for StaticRetriever {
    async fn retrieve(&self, _query: &str) -> Result<Vec<Chunk>, RetrievalError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.chunks.clone())
    }
}

/// Records every prompt and answers with a canned reply.
pub struct RecordingLlmClient {
    reply: Result<String, ()>,
    prompts: Mutex<Vec<String>>,
}

impl RecordingLlmClient {
    pub fn answering(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: Err(()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlmClient {
    async fn complete(&self, prompt: &str) -> Result<GeneratedText, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.reply {
            Ok(text) => Ok(GeneratedText::new(text.clone())),
            Err(()) => Err(LlmClientError::ApiRequestFailed("upstream down".to_string())),
        }
    }
}

/// [`MockEmbedder`] that counts calls.
pub struct CountingEmbedder {
    inner: MockEmbedder,
    calls: AtomicUsize,
}

impl CountingEmbedder {
    pub fn new() -> Self {
        Self {
            inner: MockEmbedder,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Embedder for CountingEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text).await
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.embed_batch(texts).await
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
