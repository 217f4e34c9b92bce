use crate::application::ports::{Embedder, EmbedderError};
use crate::domain::Embedding;

pub const MOCK_EMBEDDING_DIMENSIONS: usize = 384;

/// Deterministic bag-of-words embedder: each lowercase alphanumeric token is
/// hashed into one of 384 buckets and the counts are L2-normalized.
/// Texts sharing words land close together, which is enough for tests.
pub struct MockEmbedder;

impl MockEmbedder {
    fn vectorize(text: &str) -> Embedding {
        let mut values = vec![0.0f32; MOCK_EMBEDDING_DIMENSIONS];

        for token in text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            let bucket = fnv1a(&token.to_lowercase()) as usize % MOCK_EMBEDDING_DIMENSIONS;
            values[bucket] += 1.0;
        }

        Embedding::new(values).normalized()
    }
}

fn fnv1a(token: &str) -> u64 {
    token.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
    })
}

#[async_trait::async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Embedding, EmbedderError> {
        Ok(Self::vectorize(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Embedding>, EmbedderError> {
        Ok(texts.iter().map(|t| Self::vectorize(t)).collect())
    }

    fn model_name(&self) -> &str {
        "mock-bag-of-words"
    }
}
