mod local_index_repository;

pub use local_index_repository::{LocalIndexRepository, METADATA_FILE_NAME, VECTORS_FILE_NAME};
