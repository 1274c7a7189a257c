//! Resume document decoding: PDF and plain text are read, DOCX is recognized
//! and refused.

use bytes::Bytes;
use tracing::debug;

use crate::extraction::ExtractionError;

const PDF_MAGIC: &[u8] = b"%PDF-";
/// DOCX files are zip archives.
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

const PDF_CONTENT_TYPE: &str = "application/pdf";
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    PlainText,
    Docx,
}

/// Decides the format from the declared content type, then the file
/// extension, then the leading bytes.
pub fn detect_format(
    file_name: Option<&str>,
    content_type: Option<&str>,
    content: &[u8],
) -> Result<DocumentFormat, ExtractionError> {
    let content_type = content_type
        .map(|ct| ct.split(';').next().unwrap_or(ct).trim().to_lowercase())
        .unwrap_or_default();
    let extension = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default();

    if content_type == PDF_CONTENT_TYPE || extension == "pdf" || content.starts_with(PDF_MAGIC) {
        return Ok(DocumentFormat::Pdf);
    }
    if content_type == DOCX_CONTENT_TYPE || extension == "docx" || content.starts_with(ZIP_MAGIC) {
        return Ok(DocumentFormat::Docx);
    }
    if content_type.starts_with("text/") || matches!(extension.as_str(), "txt" | "text" | "md") {
        return Ok(DocumentFormat::PlainText);
    }
    if content_type.is_empty() && extension.is_empty() {
        return Ok(DocumentFormat::PlainText);
    }

    Err(ExtractionError::UnsupportedDocument(format!(
        "unsupported resume format (content type '{content_type}', extension '{extension}'); \
         upload a PDF or plain-text file"
    )))
}

/// Extracts the text layer of an uploaded resume.
pub fn extract_document_text(
    file_name: Option<&str>,
    content_type: Option<&str>,
    content: &Bytes,
) -> Result<String, ExtractionError> {
    let format = detect_format(file_name, content_type, content)?;
    debug!("Extracting {:?} resume ({} bytes)", format, content.len());

    match format {
        DocumentFormat::Pdf => pdf_extract::extract_text_from_mem(content)
            .map_err(|e| ExtractionError::DocumentRead(format!("could not read PDF: {e}"))),
        DocumentFormat::PlainText => String::from_utf8(content.to_vec())
            .map_err(|_| ExtractionError::DocumentRead("text file is not valid UTF-8".to_string())),
        DocumentFormat::Docx => Err(ExtractionError::UnsupportedDocument(
            "DOCX resumes are not supported; export the document as PDF".to_string(),
        )),
    }
}
