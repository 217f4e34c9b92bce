use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError, RetrievalError, Retriever};
use crate::domain::{Answer, Chunk, DEFAULT_PREVIEW_CHARS, SourcePreview};

use super::PromptTemplate;
use super::count_tokens;

const CONTEXT_SEPARATOR: &str = "\n\n";
pub const DEFAULT_PROMPT_TOKEN_WARNING: usize = 4096;

/// Request-time core: question in, grounded answer out.
///
/// Stateless per call; one instance is shared by every request.
pub struct AnsweringService<R, L>
where
    R: Retriever + ?Sized,
    L: LlmClient + ?Sized,
{
    retriever: Arc<R>,
    llm_client: Arc<L>,
    prompt_template: PromptTemplate,
    preview_chars: usize,
    prompt_token_warning: usize,
}

impl<R, L> AnsweringService<R, L>
where
    R: Retriever + ?Sized,
    L: LlmClient + ?Sized,
{
    pub fn new(retriever: Arc<R>, llm_client: Arc<L>, prompt_template: PromptTemplate) -> Self {
        Self {
            retriever,
            llm_client,
            prompt_template,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            prompt_token_warning: DEFAULT_PROMPT_TOKEN_WARNING,
        }
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn with_prompt_token_warning(mut self, tokens: usize) -> Self {
        self.prompt_token_warning = tokens;
        self
    }

    pub async fn answer(&self, question: &str) -> Result<Answer, AnsweringError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AnsweringError::InvalidInput);
        }

        let chunks = self.retriever.retrieve(question).await?;
        if chunks.is_empty() {
            tracing::warn!("No chunks retrieved; answering with empty context");
        }

        let prompt = self.build_prompt(&chunks, question);
        let prompt_tokens = count_tokens(&prompt);
        if prompt_tokens > self.prompt_token_warning {
            tracing::warn!(
                prompt_tokens,
                limit = self.prompt_token_warning,
                "Prompt exceeds the configured token warning threshold"
            );
        } else {
            tracing::debug!(prompt_tokens, "Prompt assembled");
        }

        let generated = self.llm_client.complete(&prompt).await?;

        let sources = chunks
            .iter()
            .map(|chunk| SourcePreview::from_chunk(chunk, self.preview_chars))
            .collect();

        Ok(Answer {
            question: question.to_string(),
            text: generated.text,
            sources,
        })
    }

    pub fn build_prompt(&self, chunks: &[Chunk], question: &str) -> String {
        let context = chunks
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);

        self.prompt_template.render(&context, question)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnsweringError {
    #[error("Question is required")]
    InvalidInput,
    #[error("retrieval: {0}")]
    Retrieval(#[from] RetrievalError),
    #[error("completion: {0}")]
    Completion(#[from] LlmClientError),
}
