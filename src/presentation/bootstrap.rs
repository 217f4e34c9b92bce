use std::sync::Arc;

use futures::FutureExt;

use crate::application::ports::{
    Embedder, IndexRepository, IndexRepositoryError, LlmClient, Retriever,
};
use crate::application::services::{
    AnsweringService, IndexBuilder, InitializationError, Initializer, PromptTemplate,
    VectorStoreRetriever,
};
use crate::domain::VectorIndex;
use crate::infrastructure::llm::{EmbedderFactory, OpenAiClient};
use crate::infrastructure::persistence::{InMemoryVectorStore, LocalIndexRepository};
use crate::infrastructure::text_processing::{CompositeFileLoader, RecursiveCharacterSplitter};
use crate::presentation::config::Settings;

/// The pipeline the server runs; adapters are erased so the loaded and the
/// freshly built paths share one type.
pub type ServingPipeline = AnsweringService<dyn Retriever, dyn LlmClient>;

pub fn pipeline_initializer(settings: Settings) -> Initializer<ServingPipeline> {
    Arc::new(move || {
        let settings = settings.clone();
        async move { initialize_pipeline(&settings).await }.boxed()
    })
}

/// Wires the OpenAI adapters around the persisted index.
pub async fn initialize_pipeline(
    settings: &Settings,
) -> Result<Arc<ServingPipeline>, InitializationError> {
    let api_key = settings
        .api_key()
        .map_err(|e| InitializationError::Configuration(e.to_string()))?
        .to_string();
    let prompt_template = PromptTemplate::new(settings.rag.prompt_template.clone())?;

    let embedder = EmbedderFactory::create(
        settings.embeddings.model.clone(),
        Some(api_key.clone()),
        settings.llm.base_url.clone(),
    )
    .map_err(|e| InitializationError::Configuration(e.to_string()))?;

    let repository = LocalIndexRepository::new(settings.index.dir.clone());
    let index = load_or_build_index(settings, &repository, Arc::clone(&embedder)).await?;

    if let Some(stored) = index
        .embedding_model()
        .filter(|stored| *stored != embedder.model_name())
    {
        tracing::warn!(
            stored,
            configured = embedder.model_name(),
            "Index was built with a different embedding model"
        );
    }

    tracing::info!(
        chunks = index.len(),
        dimensions = index.dimensions(),
        top_k = settings.rag.top_k,
        "Vector index ready"
    );

    let vector_store = Arc::new(InMemoryVectorStore::new(index));
    let retriever: Arc<dyn Retriever> = Arc::new(VectorStoreRetriever::new(
        embedder,
        vector_store,
        settings.rag.top_k,
    ));

    let mut llm_client = OpenAiClient::new(api_key, settings.llm.chat_model.clone())
        .with_temperature(settings.llm.temperature)
        .with_max_tokens(settings.llm.max_tokens);
    if let Some(base_url) = &settings.llm.base_url {
        llm_client = llm_client.with_base_url(base_url.clone());
    }
    let llm_client: Arc<dyn LlmClient> = Arc::new(llm_client);

    Ok(Arc::new(
        AnsweringService::new(retriever, llm_client, prompt_template)
            .with_preview_chars(settings.rag.preview_chars)
            .with_prompt_token_warning(settings.rag.prompt_token_warning),
    ))
}

async fn load_or_build_index(
    settings: &Settings,
    repository: &dyn IndexRepository,
    embedder: Arc<dyn Embedder>,
) -> Result<VectorIndex, InitializationError> {
    match repository.load().await {
        Ok(index) => Ok(index),
        Err(IndexRepositoryError::Missing(what)) if settings.index.build_if_missing => {
            tracing::warn!(
                missing = %what,
                source = %settings.index.source_document.display(),
                "Index not found; building in memory from the source document"
            );

            let builder = IndexBuilder::new(
                Arc::new(CompositeFileLoader::with_default_adapters()),
                embedder,
                Arc::new(RecursiveCharacterSplitter::new(
                    settings.chunking.chunk_size,
                    settings.chunking.chunk_overlap,
                )),
            )
            .with_batch_size(settings.embeddings.batch_size);

            let (index, pages) = builder.build(&settings.index.source_document).await?;
            tracing::info!(pages, chunks = index.len(), "In-memory index built");
            Ok(index)
        }
        Err(e) => Err(e.into()),
    }
}
