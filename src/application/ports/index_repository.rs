use std::path::Path;

use async_trait::async_trait;

use crate::domain::VectorIndex;

/// Durable storage for a [`VectorIndex`] as a self-contained artifact.
#[async_trait]
pub trait IndexRepository: Send + Sync {
    fn location(&self) -> &Path;

    /// True when every artifact the index needs is on disk.
    fn files_present(&self) -> bool;

    async fn save(&self, index: &VectorIndex) -> Result<(), IndexRepositoryError>;

    async fn load(&self) -> Result<VectorIndex, IndexRepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum IndexRepositoryError {
    #[error("index not found: {0}")]
    Missing(String),
    #[error("index is corrupt: {0}")]
    Corrupt(String),
    #[error("index write failed: {0}")]
    WriteFailed(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
