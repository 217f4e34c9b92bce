use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, Retriever};
use crate::application::services::AnsweringError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

const QUESTION_REQUIRED: &str = "Question is required";
const NOT_INITIALIZED: &str = "QA system not initialized";
const PREVIEW_SUFFIX: &str = "...";

#[derive(Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub question: String,
}

#[derive(Serialize)]
pub struct AskResponse {
    pub question: String,
    pub answer: String,
    pub sources: Vec<String>,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

#[tracing::instrument(skip(state, payload))]
pub async fn ask_handler<R, L>(
    State(state): State<AppState<R, L>>,
    payload: Result<Json<AskRequest>, JsonRejection>,
) -> Response
where
    R: Retriever + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    // An unreadable body carries no question, so it gets the same 400 as an empty one.
    let question = match payload {
        Ok(Json(request)) => request.question.trim().to_string(),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable ask payload");
            String::new()
        }
    };

    if question.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, QUESTION_REQUIRED);
    }

    let Some(pipeline) = state.qa.ensure_initialized().await else {
        tracing::warn!(readiness = %state.qa.readiness(), "Question received before QA system is ready");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, NOT_INITIALIZED);
    };

    tracing::info!(question = %sanitize_prompt(&question), "Processing question");

    match pipeline.answer(&question).await {
        Ok(answer) => {
            tracing::info!(sources_count = answer.sources.len(), "Answer generated");
            let sources = answer
                .sources
                .into_iter()
                .map(|source| format!("{}{PREVIEW_SUFFIX}", source.text))
                .collect();

            (
                StatusCode::OK,
                Json(AskResponse {
                    question: answer.question,
                    answer: answer.text,
                    sources,
                }),
            )
                .into_response()
        }
        Err(AnsweringError::InvalidInput) => {
            error_response(StatusCode::BAD_REQUEST, QUESTION_REQUIRED)
        }
        Err(e) => {
            tracing::error!(error = %e, "Answering failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
