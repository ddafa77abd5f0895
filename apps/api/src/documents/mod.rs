//! Document text extraction: turns uploaded job descriptions and resumes into
//! plain text before anything reaches the matching core.
//!
//! PDF goes through `pdf-extract` and `.docx` through the [`docx`] reader.
//! Plain text is decoded as UTF-8. Legacy `.doc` and image uploads are rejected
//! rather than guessed at byte by byte.

pub mod docx;

use thiserror::Error;

/// Minimum readable characters a PDF must yield to count as extracted.
pub const MIN_PDF_TEXT_CHARS: usize = 20;
/// Minimum characters for an upload of unknown type decoded as text.
pub const MIN_FALLBACK_TEXT_CHARS: usize = 10;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    #[error("Document is not valid UTF-8 text")]
    InvalidEncoding,

    #[error("No readable text found in {0}")]
    NoReadableText(String),

    #[error("PDF extraction failed: {0}")]
    Pdf(String),

    #[error("Word extraction failed: {0}")]
    Word(String),

    #[error("Extraction aborted: {0}")]
    Aborted(String),
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".bmp", ".tif", ".tiff", ".webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    /// Office Open XML (`.docx`).
    Docx,
    /// Binary Word 97-2003 (`.doc`).
    LegacyWord,
    Text,
    Image,
    Unknown,
}

impl DocumentKind {
    /// A kind matches when either its MIME type or its file extension does.
    /// Kinds are tried in order PDF, `.docx`, `.doc`, text, image, so
    /// `cv.pdf` sent as `text/plain` is still a PDF.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Self {
        let mime = content_type.unwrap_or_default().to_lowercase();
        let name = file_name.to_lowercase();
        let has_ext = |exts: &[&str]| exts.iter().any(|ext| name.ends_with(ext));

        if mime == "application/pdf" || has_ext(&[".pdf"]) {
            DocumentKind::Pdf
        } else if mime == DOCX_MIME || has_ext(&[".docx"]) {
            DocumentKind::Docx
        } else if mime == "application/msword" || has_ext(&[".doc"]) {
            DocumentKind::LegacyWord
        } else if mime.starts_with("text/") || has_ext(&[".txt", ".md"]) {
            DocumentKind::Text
        } else if mime.starts_with("image/") || has_ext(IMAGE_EXTENSIONS) {
            DocumentKind::Image
        } else {
            DocumentKind::Unknown
        }
    }
}

/// Extracts plain text from an uploaded document. Blocking for PDFs; callers on
/// an async runtime should run it on a blocking thread.
pub fn extract_document_text(
    bytes: &[u8],
    file_name: &str,
    content_type: Option<&str>,
) -> Result<String, ExtractionError> {
    match DocumentKind::detect(file_name, content_type) {
        DocumentKind::Pdf => {
            let raw = pdf_extract::extract_text_from_mem(bytes)
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?;
            let text = collapse_whitespace(&raw);
            if text.chars().count() < MIN_PDF_TEXT_CHARS {
                return Err(ExtractionError::NoReadableText(file_name.to_string()));
            }
            Ok(text)
        }
        DocumentKind::Docx => {
            let text = collapse_whitespace(&docx::extract_docx_text(bytes)?);
            if text.is_empty() {
                return Err(ExtractionError::NoReadableText(file_name.to_string()));
            }
            Ok(text)
        }
        DocumentKind::Text => decode_text(bytes),
        DocumentKind::Unknown => {
            let text = decode_text(bytes)?;
            if text.chars().count() < MIN_FALLBACK_TEXT_CHARS {
                return Err(ExtractionError::NoReadableText(file_name.to_string()));
            }
            Ok(text)
        }
        DocumentKind::LegacyWord => Err(ExtractionError::UnsupportedFormat(format!(
            "{file_name} (legacy .doc files must be saved as .docx, PDF or text)"
        ))),
        DocumentKind::Image => Err(ExtractionError::UnsupportedFormat(format!(
            "{file_name} (images require OCR)"
        ))),
    }
}

fn decode_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text = std::str::from_utf8(bytes).map_err(|_| ExtractionError::InvalidEncoding)?;
    Ok(text.trim().to_string())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
