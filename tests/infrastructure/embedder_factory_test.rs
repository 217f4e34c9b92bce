use docqa::application::ports::Embedder;
use docqa::infrastructure::llm::{DEFAULT_EMBEDDING_MODEL, EmbedderFactory, EmbedderFactoryError};

#[test]
fn given_api_key_when_creating_then_succeeds_with_configured_model() {
    let result = EmbedderFactory::create(
        DEFAULT_EMBEDDING_MODEL.to_string(),
        Some("sk-test-key".to_string()),
        None,
    );

    assert_eq!(result.unwrap().model_name(), DEFAULT_EMBEDDING_MODEL);
}

#[test]
fn given_no_api_key_when_creating_then_returns_missing_api_key() {
    let result = EmbedderFactory::create(DEFAULT_EMBEDDING_MODEL.to_string(), None, None);

    assert!(matches!(result, Err(EmbedderFactoryError::MissingApiKey)));
}

#[test]
fn given_blank_api_key_when_creating_then_returns_error() {
    let result = EmbedderFactory::create(
        DEFAULT_EMBEDDING_MODEL.to_string(),
        Some("  ".to_string()),
        Some("http://localhost:1234/v1".to_string()),
    );

    assert!(result.is_err());
}
