use super::Chunk;

pub const DEFAULT_PREVIEW_CHARS: usize = 200;

/// Text produced by the generator, already normalized by its adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedText {
    pub text: String,
}

impl GeneratedText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Truncated view of a retrieved chunk, for citation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePreview {
    pub text: String,
    pub page: Option<u32>,
}

impl SourcePreview {
    pub fn from_chunk(chunk: &Chunk, max_chars: usize) -> Self {
        Self {
            text: chunk.text.chars().take(max_chars).collect(),
            page: chunk.page,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question: String,
    pub text: String,
    pub sources: Vec<SourcePreview>,
}
