use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::application::ports::{IndexRepository, IndexRepositoryError};
use crate::domain::{Chunk, Embedding, VectorIndex};

pub const VECTORS_FILE_NAME: &str = "index.bin";
pub const METADATA_FILE_NAME: &str = "index.json";

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct VectorsFile {
    index_id: Uuid,
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

#[derive(Serialize, Deserialize)]
struct MetadataFile {
    version: u32,
    index_id: Uuid,
    embedding_model: Option<String>,
    dimensions: usize,
    chunks: Vec<Chunk>,
}

/// Stores a [`VectorIndex`] as two files in one directory: a bincode
/// vector table and a JSON chunk table. Both carry the same index id so a
/// mismatched pair is detected on load.
pub struct LocalIndexRepository {
    dir: PathBuf,
}

impl LocalIndexRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn vectors_path(&self) -> PathBuf {
        self.dir.join(VECTORS_FILE_NAME)
    }

    fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE_NAME)
    }

    async fn read_file(path: &Path) -> Result<Vec<u8>, IndexRepositoryError> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(IndexRepositoryError::Missing(path.display().to_string()))
            }
            Err(e) => Err(IndexRepositoryError::Io(e)),
        }
    }
}

#[async_trait]
impl IndexRepository for LocalIndexRepository {
    fn location(&self) -> &Path {
        &self.dir
    }

    fn files_present(&self) -> bool {
        self.vectors_path().is_file() && self.metadata_path().is_file()
    }

    #[instrument(skip(self, index), fields(dir = %self.dir.display(), chunks = index.len()))]
    async fn save(&self, index: &VectorIndex) -> Result<(), IndexRepositoryError> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let (chunks, vectors): (Vec<Chunk>, Vec<Vec<f32>>) = index
            .entries()
            .iter()
            .map(|e| (e.chunk.clone(), e.embedding.values.clone()))
            .unzip();

        let vectors_file = VectorsFile {
            index_id: index.id(),
            dimensions: index.dimensions(),
            vectors,
        };
        let metadata_file = MetadataFile {
            version: FORMAT_VERSION,
            index_id: index.id(),
            embedding_model: index.embedding_model().map(str::to_string),
            dimensions: index.dimensions(),
            chunks,
        };

        let vector_bytes = bincode::serialize(&vectors_file)
            .map_err(|e| IndexRepositoryError::WriteFailed(e.to_string()))?;
        let metadata_bytes = serde_json::to_vec_pretty(&metadata_file)
            .map_err(|e| IndexRepositoryError::WriteFailed(e.to_string()))?;

        tokio::fs::write(self.vectors_path(), vector_bytes).await?;
        tokio::fs::write(self.metadata_path(), metadata_bytes).await?;

        info!(index_id = %index.id(), "Index saved");
        Ok(())
    }

    #[instrument(skip(self), fields(dir = %self.dir.display()))]
    async fn load(&self) -> Result<VectorIndex, IndexRepositoryError> {
        if !self.dir.is_dir() {
            return Err(IndexRepositoryError::Missing(self.dir.display().to_string()));
        }

        let vector_bytes = Self::read_file(&self.vectors_path()).await?;
        let metadata_bytes = Self::read_file(&self.metadata_path()).await?;

        let vectors_file: VectorsFile = bincode::deserialize(&vector_bytes)
            .map_err(|e| IndexRepositoryError::Corrupt(format!("{VECTORS_FILE_NAME}: {e}")))?;
        let metadata_file: MetadataFile = serde_json::from_slice(&metadata_bytes)
            .map_err(|e| IndexRepositoryError::Corrupt(format!("{METADATA_FILE_NAME}: {e}")))?;

        if metadata_file.version != FORMAT_VERSION {
            return Err(IndexRepositoryError::Corrupt(format!(
                "unsupported format version {}",
                metadata_file.version
            )));
        }
        if vectors_file.index_id != metadata_file.index_id {
            return Err(IndexRepositoryError::Corrupt(format!(
                "index id mismatch: {} vs {}",
                vectors_file.index_id, metadata_file.index_id
            )));
        }
        if vectors_file.dimensions != metadata_file.dimensions {
            return Err(IndexRepositoryError::Corrupt(format!(
                "dimension mismatch: {} vs {}",
                vectors_file.dimensions, metadata_file.dimensions
            )));
        }

        let embeddings: Vec<Embedding> = vectors_file
            .vectors
            .into_iter()
            .map(Embedding::new)
            .collect();

        let index = VectorIndex::with_id(metadata_file.index_id, metadata_file.chunks, embeddings)
            .map_err(|e| IndexRepositoryError::Corrupt(e.to_string()))?;

        if !index.is_empty() && index.dimensions() != vectors_file.dimensions {
            return Err(IndexRepositoryError::Corrupt(format!(
                "vectors have {} dimensions, header says {}",
                index.dimensions(),
                vectors_file.dimensions
            )));
        }

        let index = match metadata_file.embedding_model {
            Some(model) => index.with_embedding_model(model),
            None => index,
        };

        info!(index_id = %index.id(), chunks = index.len(), "Index loaded");
        Ok(index)
    }
}
