use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::GeneratedText;

pub const MOCK_ANSWER: &str = "Mock answer";

pub struct MockLlmClient;

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, _prompt: &str) -> Result<GeneratedText, LlmClientError> {
        Ok(GeneratedText::new(MOCK_ANSWER))
    }
}
