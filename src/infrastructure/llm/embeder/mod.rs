mod embedder_factory;
mod mock_embedder;
mod openai_embedder;

pub use embedder_factory::{EmbedderFactory, EmbedderFactoryError};
pub use mock_embedder::{MOCK_EMBEDDING_DIMENSIONS, MockEmbedder};
pub use openai_embedder::{DEFAULT_EMBEDDING_MODEL, OpenAiEmbedder};
