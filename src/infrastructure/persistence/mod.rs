mod repositories;
mod vector_store;

pub use repositories::{LocalIndexRepository, METADATA_FILE_NAME, VECTORS_FILE_NAME};

pub use vector_store::{EmptyVectorStore, InMemoryVectorStore, MockVectorStore};
