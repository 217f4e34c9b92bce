use std::sync::{Arc, RwLock};

use futures::future::BoxFuture;
use tokio::sync::OnceCell;

use crate::application::ports::IndexRepositoryError;
use crate::domain::Readiness;

use super::{IndexBuildError, PromptTemplateError};

pub type Initializer<P> =
    Arc<dyn Fn() -> BoxFuture<'static, Result<Arc<P>, InitializationError>> + Send + Sync>;

/// Owns the pipeline handle and its readiness.
///
/// Initialization runs at most once: concurrent callers of
/// [`QaContext::ensure_initialized`] wait on the same attempt and observe the
/// same outcome. A failed attempt is terminal.
pub struct QaContext<P> {
    readiness: RwLock<Readiness>,
    pipeline: OnceCell<Option<Arc<P>>>,
    initializer: Option<Initializer<P>>,
}

impl<P> QaContext<P>
where
    P: Send + Sync,
{
    pub fn new(initializer: Initializer<P>) -> Self {
        Self {
            readiness: RwLock::new(Readiness::Uninitialized),
            pipeline: OnceCell::new(),
            initializer: Some(initializer),
        }
    }

    pub fn ready(pipeline: Arc<P>) -> Self {
        Self {
            readiness: RwLock::new(Readiness::Ready),
            pipeline: OnceCell::new_with(Some(Some(pipeline))),
            initializer: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            readiness: RwLock::new(Readiness::Failed),
            pipeline: OnceCell::new_with(Some(None)),
            initializer: None,
        }
    }

    pub fn readiness(&self) -> Readiness {
        self.readiness
            .read()
            .map(|r| *r)
            .unwrap_or(Readiness::Failed)
    }

    pub fn is_ready(&self) -> bool {
        self.readiness() == Readiness::Ready
    }

    /// The pipeline if initialization already succeeded; never starts it.
    pub fn pipeline(&self) -> Option<Arc<P>> {
        self.pipeline.get().and_then(|p| p.clone())
    }

    pub async fn ensure_initialized(&self) -> Option<Arc<P>> {
        self.pipeline
            .get_or_init(|| self.run_initializer())
            .await
            .clone()
    }

    async fn run_initializer(&self) -> Option<Arc<P>> {
        let Some(initializer) = self.initializer.as_ref() else {
            self.set_readiness(Readiness::Failed);
            return None;
        };

        self.set_readiness(Readiness::Initializing);
        tracing::info!("Initializing QA system");

        let mut in_flight = InFlightAttempt {
            readiness: &self.readiness,
            settled: false,
        };
        let outcome = initializer().await;
        in_flight.settled = true;

        match outcome {
            Ok(pipeline) => {
                self.set_readiness(Readiness::Ready);
                tracing::info!("QA system ready");
                Some(pipeline)
            }
            Err(e) => {
                self.set_readiness(Readiness::Failed);
                tracing::error!(error = %e, "QA system initialization failed");
                None
            }
        }
    }

    fn set_readiness(&self, readiness: Readiness) {
        if let Ok(mut guard) = self.readiness.write() {
            tracing::debug!(from = %*guard, to = %readiness, "Readiness transition");
            *guard = readiness;
        }
    }
}

/// Rolls readiness back to `Uninitialized` when the caller driving the
/// attempt is dropped before it settles, so the next caller can retry.
struct InFlightAttempt<'a> {
    readiness: &'a RwLock<Readiness>,
    settled: bool,
}

impl Drop for InFlightAttempt<'_> {
    fn drop(&mut self) {
        if self.settled {
            return;
        }
        if let Ok(mut guard) = self.readiness.write() {
            tracing::warn!("QA system initialization cancelled");
            *guard = Readiness::Uninitialized;
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum InitializationError {
    #[error("configuration: {0}")]
    Configuration(String),
    #[error("prompt template: {0}")]
    Prompt(#[from] PromptTemplateError),
    #[error("vector index: {0}")]
    Index(#[from] IndexRepositoryError),
    #[error("index build: {0}")]
    Build(#[from] IndexBuildError),
}

impl InitializationError {
    /// Configuration problems abort the process; index problems only keep it from becoming ready.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Configuration(_) | Self::Prompt(_))
    }
}
