//! Document extraction — converts an uploaded resume into plain text.

use crate::errors::AppError;

/// Extracts plain text from an uploaded resume, dispatching on the filename
/// extension (case-insensitive). Supported: `.pdf`, `.docx`.
///
/// A document with no extractable text (e.g. a scanned PDF) yields an empty
/// string, not an error — callers decide whether that is acceptable.
pub fn extract_text(filename: &str, data: &[u8]) -> Result<String, AppError> {
    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|v| v.to_str())
        .map(|v| v.to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "pdf" => extract_pdf_text(data),
        "docx" => extract_docx_text(data),
        _ => Err(AppError::UnsupportedFileType(filename.to_string())),
    }
}

/// Per-page extraction. A page with no extractable text contributes nothing;
/// the remaining page texts are joined with newlines.
fn extract_pdf_text(data: &[u8]) -> Result<String, AppError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(data)
        .map_err(|e| AppError::DocumentParse(format!("Failed to read PDF: {e}")))?;

    Ok(pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Per-paragraph extraction: the run text of each paragraph in document
/// order, joined with newlines. Empty paragraphs keep their line.
fn extract_docx_text(data: &[u8]) -> Result<String, AppError> {
    let docx = docx_rs::read_docx(data)
        .map_err(|e| AppError::DocumentParse(format!("Failed to read DOCX: {e}")))?;

    let mut paragraphs = Vec::new();
    for child in docx.document.children {
        if let docx_rs::DocumentChild::Paragraph(paragraph) = child {
            let mut text = String::new();
            for paragraph_child in paragraph.children {
                if let docx_rs::ParagraphChild::Run(run) = paragraph_child {
                    for run_child in run.children {
                        if let docx_rs::RunChild::Text(t) = run_child {
                            text.push_str(&t.text);
                        }
                    }
                }
            }
            paragraphs.push(text);
        }
    }

    Ok(paragraphs.join("\n"))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use docx_rs::{Docx, Paragraph, Run};

    use super::*;

    fn docx_fixture(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).expect("packable docx fixture");
        buf.into_inner()
    }

    #[test]
    fn test_docx_paragraphs_joined_in_source_order() {
        let data = docx_fixture(&["Experienced engineer.", "Built systems."]);
        let text = extract_text("resume.docx", &data).unwrap();
        assert_eq!(text, "Experienced engineer.\nBuilt systems.");
    }

    #[test]
    fn test_docx_empty_paragraph_keeps_its_line() {
        let data = docx_fixture(&["First", "", "Second"]);
        let text = extract_text("resume.docx", &data).unwrap();
        assert_eq!(text, "First\n\nSecond");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let data = docx_fixture(&["Experienced engineer."]);
        let text = extract_text("RESUME.DOCX", &data).unwrap();
        assert_eq!(text, "Experienced engineer.");
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = extract_text("resume.txt", b"plain text").unwrap_err();
        match err {
            AppError::UnsupportedFileType(name) => assert_eq!(name, "resume.txt"),
            other => panic!("expected UnsupportedFileType, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_extension_is_rejected() {
        let err = extract_text("resume", b"bytes").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedFileType(_)));
    }

    #[test]
    fn test_corrupt_docx_surfaces_parse_error() {
        let err = extract_text("resume.docx", b"not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }

    #[test]
    fn test_corrupt_pdf_surfaces_parse_error() {
        let err = extract_text("resume.pdf", b"not a pdf").unwrap_err();
        assert!(matches!(err, AppError::DocumentParse(_)));
    }
}
