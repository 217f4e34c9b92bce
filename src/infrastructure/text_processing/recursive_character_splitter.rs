use async_trait::async_trait;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, DocumentId, PAGE_SEPARATOR, Page};

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Fixed-size character windows with a fixed overlap.
///
/// Windows end after a paragraph break where possible, then after a line
/// break, then after whitespace, and are cut hard at `chunk_size` otherwise.
/// Every chunk after the first starts exactly `chunk_overlap` characters
/// before the end of its predecessor, so dropping that prefix from each chunk
/// and concatenating reproduces the input text.
pub struct RecursiveCharacterSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl RecursiveCharacterSplitter {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    fn validate(&self) -> Result<(), TextSplitterError> {
        if self.chunk_size == 0 {
            return Err(TextSplitterError::InvalidConfiguration(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(TextSplitterError::InvalidConfiguration(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }
        Ok(())
    }

    /// Character spans `[start, end)` covering `chars`.
    fn spans(&self, chars: &[char]) -> Vec<(usize, usize)> {
        let total_len = chars.len();
        let mut spans = Vec::new();
        if total_len == 0 {
            return spans;
        }

        let mut start = 0;
        loop {
            if total_len - start <= self.chunk_size {
                spans.push((start, total_len));
                break;
            }

            let end = self.find_break(chars, start);
            spans.push((start, end));
            start = end - self.chunk_overlap;
        }

        spans
    }

    fn find_break(&self, chars: &[char], start: usize) -> usize {
        let max_end = start + self.chunk_size;
        let min_end = start + (self.chunk_overlap + 1).max(self.chunk_size / 2);

        let paragraph = |e: usize| e >= 2 && chars[e - 2] == '\n' && chars[e - 1] == '\n';
        let line = |e: usize| chars[e - 1] == '\n';
        let word = |e: usize| chars[e - 1].is_whitespace();

        let boundaries: [&dyn Fn(usize) -> bool; 3] = [&paragraph, &line, &word];
        for is_boundary in boundaries {
            if let Some(end) = (min_end..=max_end).rev().find(|&e| is_boundary(e)) {
                return end;
            }
        }

        max_end
    }
}

/// Joins non-empty pages and records where each one starts.
fn concatenate_pages(pages: &[Page]) -> (Vec<char>, Vec<(usize, u32)>) {
    let mut chars = Vec::new();
    let mut page_starts = Vec::new();

    for page in pages.iter().filter(|p| !p.text.is_empty()) {
        if !chars.is_empty() {
            chars.extend(PAGE_SEPARATOR.chars());
        }
        page_starts.push((chars.len(), page.number));
        chars.extend(page.text.chars());
    }

    (chars, page_starts)
}

fn page_at(page_starts: &[(usize, u32)], offset: usize) -> Option<u32> {
    page_starts
        .iter()
        .take_while(|(start, _)| *start <= offset)
        .last()
        .map(|(_, number)| *number)
}

#[async_trait]
impl TextSplitter for RecursiveCharacterSplitter {
    async fn split(
        &self,
        pages: &[Page],
        document_id: DocumentId,
    ) -> Result<Vec<Chunk>, TextSplitterError> {
        self.validate()?;

        let (chars, page_starts) = concatenate_pages(pages);

        let chunks = self
            .spans(&chars)
            .into_iter()
            .map(|(start, end)| {
                let text: String = chars[start..end].iter().collect();
                Chunk::new(text, document_id, page_at(&page_starts, start), start)
            })
            .collect();

        Ok(chunks)
    }
}
