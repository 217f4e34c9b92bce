use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{IndexRepository, LlmClient, Retriever};
use crate::infrastructure::persistence::LocalIndexRepository;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub readiness: String,
    pub vectorstore_initialized: bool,
    pub qa_chain_initialized: bool,
    pub faiss_index_dir: String,
    pub faiss_index_files_present: bool,
}

/// Always 200; readiness is reported in the body.
pub async fn health_handler<R, L>(State(state): State<AppState<R, L>>) -> impl IntoResponse
where
    R: Retriever + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let repository = LocalIndexRepository::new(state.settings.index.dir.clone());
    let ready = state.qa.is_ready();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            readiness: state.qa.readiness().to_string(),
            vectorstore_initialized: ready,
            qa_chain_initialized: ready,
            faiss_index_dir: repository.location().display().to_string(),
            faiss_index_files_present: repository.files_present(),
        }),
    )
}

