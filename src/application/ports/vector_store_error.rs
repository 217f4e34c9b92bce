#[derive(Debug, thiserror::Error)]
pub enum VectorStoreError {
    #[error("query has {actual} dimensions, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("search failed: {0}")]
    SearchFailed(String),
}
