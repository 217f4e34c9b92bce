use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use docqa::application::ports::IndexRepository;
use docqa::application::services::IndexBuilder;
use docqa::infrastructure::llm::EmbedderFactory;
use docqa::infrastructure::observability::{TracingConfig, init_tracing};
use docqa::infrastructure::persistence::LocalIndexRepository;
use docqa::infrastructure::text_processing::{CompositeFileLoader, RecursiveCharacterSplitter};
use docqa::presentation::Settings;

/// Build the vector index for the reference document.
#[derive(Debug, Parser)]
#[command(name = "build-index", version, about)]
struct Cli {
    /// Source document (PDF or plain text)
    #[arg(long = "pdf", value_name = "PATH")]
    pdf: Option<PathBuf>,

    /// Directory receiving index.bin and index.json
    #[arg(long = "index-dir", value_name = "DIR")]
    index_dir: Option<PathBuf>,

    /// Replace an existing index directory
    #[arg(long)]
    force: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (settings, environment) = Settings::load().context("Failed to load configuration")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ))?;

    let source = cli
        .pdf
        .unwrap_or_else(|| settings.index.source_document.clone());
    let index_dir = cli.index_dir.unwrap_or_else(|| settings.index.dir.clone());

    let api_key = settings
        .api_key()
        .context("Cannot build the index without an OpenAI API key")?;
    let embedder = EmbedderFactory::create(
        settings.embeddings.model.clone(),
        Some(api_key.to_string()),
        settings.llm.base_url.clone(),
    )?;

    let builder = IndexBuilder::new(
        Arc::new(CompositeFileLoader::with_default_adapters()),
        embedder,
        Arc::new(RecursiveCharacterSplitter::new(
            settings.chunking.chunk_size,
            settings.chunking.chunk_overlap,
        )),
    )
    .with_batch_size(settings.embeddings.batch_size);

    let repository = LocalIndexRepository::new(index_dir);

    tracing::info!(
        source = %source.display(),
        index_dir = %repository.location().display(),
        force = cli.force,
        "Building index"
    );

    let summary = builder
        .build_and_save(&source, &repository, cli.force)
        .await
        .context("Index build failed")?;

    tracing::info!(
        pages = summary.pages,
        chunks = summary.chunks,
        dimensions = summary.dimensions,
        location = %summary.location.display(),
        "Index built"
    );
    println!(
        "Indexed {} chunks from {} pages into {}",
        summary.chunks,
        summary.pages,
        summary.location.display()
    );

    Ok(())
}

