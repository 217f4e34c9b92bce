use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docqa::application::services::{PromptTemplate, QaContext};
use docqa::infrastructure::observability::{TracingConfig, init_tracing};
use docqa::presentation::{
    AppState, Settings, create_router, initialize_pipeline, pipeline_initializer,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (settings, environment) = Settings::load().context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ))?;

    tracing::info!(
        environment = %environment,
        index_dir = %settings.index.dir.display(),
        lazy_init = settings.server.lazy_init,
        "Starting docqa"
    );

    let qa = if settings.server.lazy_init {
        settings.api_key().context("Cannot start without an OpenAI API key")?;
        PromptTemplate::new(settings.rag.prompt_template.clone())
            .context("Invalid prompt template")?;
        QaContext::new(pipeline_initializer(settings.clone()))
    } else {
        match initialize_pipeline(&settings).await {
            Ok(pipeline) => {
                tracing::info!("QA system ready");
                QaContext::ready(pipeline)
            }
            Err(e) if e.is_fatal() => {
                return Err(e).context("Cannot start the QA system");
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    index_dir = %settings.index.dir.display(),
                    "QA system unavailable; run build-index and restart. Serving health checks only"
                );
                QaContext::failed()
            }
        }
    };
    let qa = Arc::new(qa);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;

    let router = create_router(AppState::new(qa, settings));

    tracing::info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutdown signal received");
        })
        .await?;

    Ok(())
}
