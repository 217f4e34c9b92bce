use std::path::Path;

use docqa::application::ports::{Embedder, IndexRepository, IndexRepositoryError};
use docqa::application::services::{IndexBuildError, InitializationError};
use docqa::domain::VectorIndex;
use docqa::infrastructure::llm::MockEmbedder;
use docqa::infrastructure::persistence::LocalIndexRepository;
use docqa::presentation::{Settings, initialize_pipeline};

use crate::helpers::chunk;

fn settings_for(index_dir: &Path) -> Settings {
    let mut settings = Settings::default();
    settings.llm.api_key = Some("sk-test".to_string());
    settings.index.dir = index_dir.to_path_buf();
    settings.index.source_document = index_dir.with_file_name("absent.pdf");
    settings.index.build_if_missing = false;
    settings
}

#[tokio::test]
async fn given_missing_index_dir_when_initializing_then_reports_missing_index() {
    let dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&dir.path().join("faiss_index"));

    let result = initialize_pipeline(&settings).await;

    let Err(error) = result else {
        panic!("pipeline must not become ready without an index");
    };
    assert!(matches!(
        error,
        InitializationError::Index(IndexRepositoryError::Missing(_))
    ));
    assert!(!error.is_fatal());
}

#[tokio::test]
async fn given_empty_index_dir_when_initializing_then_reports_missing_index() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("faiss_index");
    std::fs::create_dir_all(&index_dir).unwrap();

    let result = initialize_pipeline(&settings_for(&index_dir)).await;

    assert!(matches!(
        result,
        Err(InitializationError::Index(IndexRepositoryError::Missing(_)))
    ));
}

#[tokio::test]
async fn given_build_if_missing_without_source_when_initializing_then_reports_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_for(&dir.path().join("faiss_index"));
    settings.index.build_if_missing = true;

    let result = initialize_pipeline(&settings).await;

    assert!(matches!(
        result,
        Err(InitializationError::Build(IndexBuildError::MissingSource(_)))
    ));
    assert!(!dir.path().join("faiss_index").exists());
}

#[tokio::test]
async fn given_no_api_key_when_initializing_then_fails_fatally() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_for(&dir.path().join("faiss_index"));
    settings.llm.api_key = Some("   ".to_string());

    let Err(error) = initialize_pipeline(&settings).await else {
        panic!("blank key must be rejected");
    };

    assert!(matches!(error, InitializationError::Configuration(_)));
    assert!(error.is_fatal());
}

#[tokio::test]
async fn given_saved_index_from_other_model_when_initializing_then_still_becomes_ready() {
    let dir = tempfile::tempdir().unwrap();
    let index_dir = dir.path().join("faiss_index");
    let chunks = vec![chunk("Topic A lives here", 1), chunk("Topic B lives there", 2)];
    let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
    let embeddings = MockEmbedder.embed_batch(&texts).await.unwrap();
    let index = VectorIndex::new(chunks, embeddings)
        .unwrap()
        .with_embedding_model(MockEmbedder.model_name());
    LocalIndexRepository::new(index_dir.clone()).save(&index).await.unwrap();

    let result = initialize_pipeline(&settings_for(&index_dir)).await;

    assert!(result.is_ok());
}
