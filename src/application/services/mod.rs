mod answering_service;
mod index_builder;
mod prompt_template;
mod qa_context;
mod retrieval_service;
mod token_counter;

pub use answering_service::{AnsweringError, AnsweringService, DEFAULT_PROMPT_TOKEN_WARNING};
pub use index_builder::{
    DEFAULT_EMBEDDING_BATCH_SIZE, IndexBuildError, IndexBuilder, IndexSummary,
};
pub use prompt_template::{DEFAULT_PROMPT_TEMPLATE, PromptTemplate, PromptTemplateError};
pub use qa_context::{InitializationError, Initializer, QaContext};
pub use retrieval_service::{DEFAULT_TOP_K, VectorStoreRetriever};
pub use token_counter::count_tokens;
