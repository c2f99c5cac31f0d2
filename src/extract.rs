// src/extract.rs
use crate::error::ApiError;

/// Uploads above this size are rejected before any decoding happens.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Detect a PDF upload by filename extension or magic bytes.
pub fn is_pdf_upload(filename: &str, head: &[u8]) -> bool {
    filename.to_lowercase().ends_with(".pdf") || head.starts_with(b"%PDF-")
}

/// Turn an uploaded document into plain text. PDF pages are decoded and
/// concatenated with newline separators; anything else is treated as
/// UTF-8 text.
pub fn text_from_upload(filename: &str, bytes: &[u8]) -> Result<String, ApiError> {
    if is_pdf_upload(filename, bytes) {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ApiError::InvalidFormat(format!("Could not read PDF: {}", e)))
    } else {
        String::from_utf8(bytes.to_vec())
            .map_err(|_| ApiError::InvalidFormat("File is not valid UTF-8 text".to_string()))
    }
}

/// Reject extraction results that contain no usable text.
pub fn require_content(text: String) -> Result<String, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::EmptyContent);
    }
    Ok(text)
}

/// Exact character-count prefix, safe on multi-byte boundaries.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
