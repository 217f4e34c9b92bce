use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{LlmClient, Retriever};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{ask_handler, health_handler, info_handler};
use crate::presentation::state::AppState;

const INDEX_PAGE: &str = "index.html";

pub fn create_router<R, L>(state: AppState<R, L>) -> Router
where
    R: Retriever + ?Sized + 'static,
    L: LlmClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let static_dir = state.settings.server.static_dir.clone();

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join(INDEX_PAGE)))
        .route("/health", get(health_handler::<R, L>))
        .route("/api/ask", post(ask_handler::<R, L>))
        .route("/api/info", get(info_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
