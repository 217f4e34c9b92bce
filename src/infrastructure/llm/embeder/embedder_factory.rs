use std::sync::Arc;

use crate::application::ports::Embedder;

use super::OpenAiEmbedder;

pub struct EmbedderFactory;

#[derive(Debug, thiserror::Error)]
pub enum EmbedderFactoryError {
    #[error("missing API key: OpenAI embedder requires OPENAI_API_KEY")]
    MissingApiKey,
}

impl EmbedderFactory {
    pub fn create(
        model: String,
        api_key: Option<String>,
        base_url: Option<String>,
    ) -> Result<Arc<dyn Embedder>, EmbedderFactoryError> {
        let key = api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or(EmbedderFactoryError::MissingApiKey)?;

        tracing::info!(model = %model, "Using OpenAI embedding model");

        let embedder = OpenAiEmbedder::new(key, model);
        let embedder = match base_url {
            Some(url) => embedder.with_base_url(url),
            None => embedder,
        };

        Ok(Arc::new(embedder))
    }
}
