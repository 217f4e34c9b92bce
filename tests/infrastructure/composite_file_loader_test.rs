use std::sync::Arc;

use docqa::application::ports::{FileLoader, FileLoaderError};
use docqa::domain::{ContentType, Document};
use docqa::infrastructure::text_processing::{
    CompositeFileLoader, MockFileLoader, PdfAdapter, PlainTextAdapter,
};

fn document(content_type: ContentType, data: &[u8]) -> Document {
    Document::new("source".to_string(), content_type, data.len() as u64)
}

#[tokio::test]
async fn given_text_document_when_loading_then_routes_to_plain_text_adapter() {
    let loader = CompositeFileLoader::with_default_adapters();
    let data = b"line one\nline two";

    let pages = loader
        .extract_pages(data, &document(ContentType::Text, data))
        .await
        .unwrap();

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].number, 1);
    assert_eq!(pages[0].text, "line one\nline two");
}

#[tokio::test]
async fn given_unregistered_content_type_when_loading_then_returns_unsupported() {
    let loader = CompositeFileLoader::new(vec![(
        ContentType::Text,
        Arc::new(PlainTextAdapter) as Arc<dyn FileLoader>,
    )]);
    let data = b"%PDF-1.4";

    let result = loader
        .extract_pages(data, &document(ContentType::Pdf, data))
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedContentType(_))
    ));
}

#[tokio::test]
async fn given_blank_text_when_loading_then_returns_no_pages() {
    let data = b"  \n ";

    let pages = PlainTextAdapter
        .extract_pages(data, &document(ContentType::Text, data))
        .await
        .unwrap();

    assert!(pages.is_empty());
}

#[tokio::test]
async fn given_invalid_utf8_when_loading_text_then_returns_extraction_failed() {
    let data = [0xff, 0xfe, 0xfd];

    let result = PlainTextAdapter
        .extract_pages(&data, &document(ContentType::Text, &data))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_bytes_that_are_not_a_pdf_when_loading_then_returns_extraction_failed() {
    let data = b"definitely not a pdf";

    let result = PdfAdapter::new()
        .extract_pages(data, &document(ContentType::Pdf, data))
        .await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_form_feeds_when_mock_loader_extracts_then_splits_pages() {
    let data = b"page one\x0cpage two";

    let pages = MockFileLoader
        .extract_pages(data, &document(ContentType::Text, data))
        .await
        .unwrap();

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[1].number, 2);
    assert_eq!(pages[1].text, "page two");
}
