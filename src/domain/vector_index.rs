use uuid::Uuid;

use super::{Chunk, Embedding};

#[derive(Debug, Clone, PartialEq)]
pub struct IndexEntry {
    pub chunk: Chunk,
    pub embedding: Embedding,
}

/// A nearest-neighbour hit borrowed from the index.
#[derive(Debug, Clone, Copy)]
pub struct Neighbor<'a> {
    pub entry: &'a IndexEntry,
    pub distance: f32,
}

impl Neighbor<'_> {
    pub fn similarity(&self) -> f32 {
        1.0 - self.distance
    }
}

/// Exact, flat nearest-neighbour index over chunk embeddings.
///
/// Entries keep insertion order, which is also the tie-break order for
/// equally distant results. All embeddings share one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorIndex {
    id: Uuid,
    dimensions: usize,
    embedding_model: Option<String>,
    entries: Vec<IndexEntry>,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum VectorIndexError {
    #[error("chunk count {chunks} does not match embedding count {embeddings}")]
    CountMismatch { chunks: usize, embeddings: usize },
    #[error("embedding {position} has {actual} dimensions, expected {expected}")]
    DimensionMismatch {
        position: usize,
        expected: usize,
        actual: usize,
    },
}

impl VectorIndex {
    pub fn new(chunks: Vec<Chunk>, embeddings: Vec<Embedding>) -> Result<Self, VectorIndexError> {
        Self::with_id(Uuid::new_v4(), chunks, embeddings)
    }

    pub fn with_id(
        id: Uuid,
        chunks: Vec<Chunk>,
        embeddings: Vec<Embedding>,
    ) -> Result<Self, VectorIndexError> {
        if chunks.len() != embeddings.len() {
            return Err(VectorIndexError::CountMismatch {
                chunks: chunks.len(),
                embeddings: embeddings.len(),
            });
        }

        let dimensions = embeddings.first().map(Embedding::dimensions).unwrap_or(0);
        if let Some((position, bad)) = embeddings
            .iter()
            .enumerate()
            .find(|(_, e)| e.dimensions() != dimensions)
        {
            return Err(VectorIndexError::DimensionMismatch {
                position,
                expected: dimensions,
                actual: bad.dimensions(),
            });
        }

        let entries = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| IndexEntry { chunk, embedding })
            .collect();

        Ok(Self {
            id,
            dimensions,
            embedding_model: None,
            entries,
        })
    }

    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = Some(model.into());
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn embedding_model(&self) -> Option<&str> {
        self.embedding_model.as_deref()
    }

    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns up to `k` entries ordered by ascending cosine distance.
    pub fn query(&self, vector: &Embedding, k: usize) -> Vec<Neighbor<'_>> {
        let mut neighbors: Vec<Neighbor<'_>> = self
            .entries
            .iter()
            .map(|entry| Neighbor {
                entry,
                distance: entry.embedding.cosine_distance(vector),
            })
            .collect();

        // sort_by is stable: equal distances stay in insertion order
        neighbors.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        neighbors.truncate(k);
        neighbors
    }
}
