mod in_memory_vector_store;
mod mock_vector_store;

pub use in_memory_vector_store::InMemoryVectorStore;
pub use mock_vector_store::{EmptyVectorStore, MockVectorStore};
