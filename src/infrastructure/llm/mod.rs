mod embeder;
mod mock_llm_client;
mod openai_client;

pub use embeder::{
    DEFAULT_EMBEDDING_MODEL, EmbedderFactory, EmbedderFactoryError, MOCK_EMBEDDING_DIMENSIONS,
    MockEmbedder, OpenAiEmbedder,
};
pub use mock_llm_client::{MOCK_ANSWER, MockLlmClient};
pub use openai_client::{DEFAULT_CHAT_MODEL, DEFAULT_OPENAI_BASE_URL, OpenAiClient};
