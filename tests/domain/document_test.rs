use std::path::Path;

use docqa::domain::{ContentType, Document, Page};

#[test]
fn given_pdf_extension_when_detecting_content_type_then_returns_pdf() {
    assert_eq!(
        ContentType::from_path(Path::new("docs/Document.PDF")),
        Some(ContentType::Pdf)
    );
}

#[test]
fn given_text_extensions_when_detecting_content_type_then_returns_text() {
    assert_eq!(ContentType::from_path(Path::new("a.txt")), Some(ContentType::Text));
    assert_eq!(ContentType::from_path(Path::new("a.md")), Some(ContentType::Text));
}

#[test]
fn given_unknown_extension_when_detecting_content_type_then_returns_none() {
    assert_eq!(ContentType::from_path(Path::new("a.docx")), None);
    assert_eq!(ContentType::from_path(Path::new("no_extension")), None);
}

#[test]
fn given_mime_type_when_parsing_then_round_trips_through_as_mime() {
    let content_type = ContentType::from_mime("application/pdf").unwrap();

    assert_eq!(content_type.as_mime(), "application/pdf");
    assert_eq!(ContentType::from_mime("image/png"), None);
}

#[test]
fn given_new_document_when_created_then_keeps_metadata() {
    let document = Document::new("document.pdf".to_string(), ContentType::Pdf, 42);

    assert_eq!(document.filename, "document.pdf");
    assert_eq!(document.size_bytes, 42);
    assert_eq!(Page::new(1, "text").number, 1);
}
