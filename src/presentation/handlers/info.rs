use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct InfoResponse {
    pub app_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub technologies: Vec<&'static str>,
    pub status: &'static str,
}

pub async fn info_handler() -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: "docqa",
        description: "Retrieval-augmented question answering over a single reference document",
        version: env!("CARGO_PKG_VERSION"),
        technologies: vec!["Rust", "axum", "tokio", "OpenAI"],
        status: "running",
    })
}
