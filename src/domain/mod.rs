mod answer;
mod chunk;
mod document;
mod embedding;
mod readiness;
mod vector_index;

pub use answer::{Answer, DEFAULT_PREVIEW_CHARS, GeneratedText, SourcePreview};
pub use chunk::{Chunk, ChunkId, DocumentId};
pub use document::{ContentType, Document, PAGE_SEPARATOR, Page};
pub use embedding::Embedding;
pub use readiness::Readiness;
pub use vector_index::{IndexEntry, Neighbor, VectorIndex, VectorIndexError};
