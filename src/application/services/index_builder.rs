use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::{
    Embedder, EmbedderError, FileLoader, FileLoaderError, IndexRepository, IndexRepositoryError,
    TextSplitter, TextSplitterError,
};
use crate::domain::{Chunk, ContentType, Document, Embedding, VectorIndex, VectorIndexError};

pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 64;

/// Offline pipeline: source document -> pages -> chunks -> embeddings -> index.
pub struct IndexBuilder<F, T: ?Sized>
where
    F: FileLoader + ?Sized,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    embedder: Arc<dyn Embedder>,
    text_splitter: Arc<T>,
    batch_size: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSummary {
    pub location: PathBuf,
    pub pages: usize,
    pub chunks: usize,
    pub dimensions: usize,
}

impl<F, T: ?Sized> IndexBuilder<F, T>
where
    F: FileLoader + ?Sized,
    T: TextSplitter,
{
    pub fn new(file_loader: Arc<F>, embedder: Arc<dyn Embedder>, text_splitter: Arc<T>) -> Self {
        Self {
            file_loader,
            embedder,
            text_splitter,
            batch_size: DEFAULT_EMBEDDING_BATCH_SIZE,
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Builds the index in memory without touching any index directory.
    #[tracing::instrument(skip(self, source), fields(source = %source.display()))]
    pub async fn build(&self, source: &Path) -> Result<(VectorIndex, usize), IndexBuildError> {
        if !tokio::fs::try_exists(source).await.unwrap_or(false) {
            return Err(IndexBuildError::MissingSource(source.to_path_buf()));
        }

        let content_type = ContentType::from_path(source).ok_or_else(|| {
            IndexBuildError::FileLoading(FileLoaderError::UnsupportedContentType(
                source.display().to_string(),
            ))
        })?;

        let data = tokio::fs::read(source)
            .await
            .map_err(|e| IndexBuildError::SourceUnreadable(source.to_path_buf(), e))?;

        let filename = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());
        let document = Document::new(filename, content_type, data.len() as u64);

        let pages = self.file_loader.extract_pages(&data, &document).await?;
        tracing::info!(pages = pages.len(), "Loaded document pages");

        let chunks = self.text_splitter.split(&pages, document.id).await?;
        tracing::info!(chunks = chunks.len(), "Split document into chunks");

        if chunks.is_empty() {
            return Err(IndexBuildError::EmptyDocument(document.filename));
        }

        let embeddings = self.embed_chunks(&chunks).await?;

        let index = VectorIndex::new(chunks, embeddings)?
            .with_embedding_model(self.embedder.model_name());

        Ok((index, pages.len()))
    }

    /// Builds the index and persists it through `repository`.
    ///
    /// An existing index directory is only replaced when `overwrite` is set;
    /// otherwise it is left untouched.
    pub async fn build_and_save(
        &self,
        source: &Path,
        repository: &dyn IndexRepository,
        overwrite: bool,
    ) -> Result<IndexSummary, IndexBuildError> {
        if !tokio::fs::try_exists(source).await.unwrap_or(false) {
            return Err(IndexBuildError::MissingSource(source.to_path_buf()));
        }

        let location = repository.location().to_path_buf();
        if tokio::fs::try_exists(&location).await.unwrap_or(false) {
            if !overwrite {
                return Err(IndexBuildError::DirectoryExists(location));
            }
            tracing::warn!(dir = %location.display(), "Removing existing index directory");
            tokio::fs::remove_dir_all(&location)
                .await
                .map_err(|e| IndexBuildError::Storage(IndexRepositoryError::Io(e)))?;
        }

        let (index, pages) = self.build(source).await?;

        tracing::info!(dir = %location.display(), "Persisting index");
        repository.save(&index).await?;

        Ok(IndexSummary {
            location,
            pages,
            chunks: index.len(),
            dimensions: index.dimensions(),
        })
    }

    async fn embed_chunks(&self, chunks: &[Chunk]) -> Result<Vec<Embedding>, IndexBuildError> {
        let mut embeddings = Vec::with_capacity(chunks.len());

        for (batch_number, batch) in chunks.chunks(self.batch_size).enumerate() {
            let texts: Vec<&str> = batch.iter().map(|c| c.text.as_str()).collect();
            let batch_embeddings = self.embedder.embed_batch(&texts).await?;

            if batch_embeddings.len() != texts.len() {
                return Err(IndexBuildError::Embedding(EmbedderError::InvalidResponse(
                    format!(
                        "expected {} embeddings, got {}",
                        texts.len(),
                        batch_embeddings.len()
                    ),
                )));
            }

            tracing::debug!(batch = batch_number, size = texts.len(), "Embedded batch");
            embeddings.extend(batch_embeddings);
        }

        Ok(embeddings)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IndexBuildError {
    #[error("source document not found: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("cannot read source document {path}: {1}", path = .0.display())]
    SourceUnreadable(PathBuf, std::io::Error),
    #[error("index directory '{}' already exists; rerun with --force to overwrite it", .0.display())]
    DirectoryExists(PathBuf),
    #[error("no text to index in {0}")]
    EmptyDocument(String),
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("embedding: {0}")]
    Embedding(#[from] EmbedderError),
    #[error("index: {0}")]
    Index(#[from] VectorIndexError),
    #[error("storage: {0}")]
    Storage(#[from] IndexRepositoryError),
}
