mod embedder;
mod file_loader;
mod index_repository;
mod llm_client;
mod retriever;
mod search_result;
mod text_splitter;
mod vector_store;
mod vector_store_error;

pub use embedder::{Embedder, EmbedderError};
pub use file_loader::{FileLoader, FileLoaderError};
pub use index_repository::{IndexRepository, IndexRepositoryError};
pub use llm_client::{LlmClient, LlmClientError};
pub use retriever::{RetrievalError, Retriever};
pub use search_result::SearchResult;
pub use text_splitter::{TextSplitter, TextSplitterError};
pub use vector_store::VectorStore;
pub use vector_store_error::VectorStoreError;
