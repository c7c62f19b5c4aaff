mod common;
use common::{create_test_docx, docx_from_paragraphs};

use pretty_assertions::assert_eq;
use recap::error::RecapError;
use recap::processing::extractors::docx::DocxExtractor;
use recap::processing::MediaType;

#[test]
fn test_docx_basic_text() {
    let bytes = docx_from_paragraphs(&["Hello World", "This is a test document."]);

    let result = DocxExtractor::extract(&bytes);
    assert!(result.is_ok(), "Should successfully extract DOCX content");

    let extracted = result.unwrap();
    assert_eq!(extracted.media_type, MediaType::Docx);
    assert_eq!(extracted.text, "Hello World\nThis is a test document.");
    assert_eq!(extracted.word_count, 6);
}

#[test]
fn test_docx_keeps_empty_paragraphs_as_blank_lines() {
    let bytes = docx_from_paragraphs(&["Agenda", "", "Action items"]);

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(extracted.text, "Agenda\n\nAction items");
}

#[test]
fn test_docx_hyperlink_text_is_kept() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Notes are in "))
                .add_hyperlink(
                    Hyperlink::new("https://wiki.example.com/q4", HyperlinkType::External)
                        .add_run(Run::new().add_text("the Q4 wiki")),
                )
                .add_run(Run::new().add_text(", please review.")),
        )
    });

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(extracted.text, "Notes are in the Q4 wiki, please review.");
}

#[test]
fn test_docx_runs_are_concatenated() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(
            Paragraph::new()
                .add_run(Run::new().add_text("Alice: ").bold())
                .add_run(Run::new().add_text("send the report"))
                .add_run(Run::new().add_tab().add_text("Friday")),
        )
    });

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert_eq!(extracted.text, "Alice: send the report\tFriday");
}

#[test]
fn test_docx_tables_are_skipped() {
    use docx_rs::*;

    let bytes = create_test_docx(|docx| {
        docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text("Before table")))
            .add_table(Table::new(vec![TableRow::new(vec![TableCell::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Cell text")))])]))
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("After table")))
    });

    let extracted = DocxExtractor::extract(&bytes).unwrap();
    assert!(extracted.text.contains("Before table"));
    assert!(extracted.text.contains("After table"));
    assert!(!extracted.text.contains("Cell text"));
}

#[test]
fn test_docx_invalid_bytes_is_extraction_error() {
    let result = DocxExtractor::extract(b"definitely not a zip archive");

    match result {
        Err(RecapError::Extraction(message)) => assert!(message.contains("DOCX")),
        other => panic!("Expected Extraction error, got: {other:?}"),
    }
}
