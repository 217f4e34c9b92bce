use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, Page};

/// Treats the bytes as UTF-8 and splits pages on form feeds.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_pages(&self, data: &[u8], _doc: &Document) -> Result<Vec<Page>, FileLoaderError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))?;

        Ok(text
            .split('\x0c')
            .enumerate()
            .map(|(i, page)| Page::new((i + 1) as u32, page))
            .collect())
    }
}
