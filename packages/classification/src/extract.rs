//! Text extraction from uploaded email files.
//!
//! Converts raw bytes into a normalized string of email content. Plain text
//! is decoded as UTF-8 with a WINDOWS-1252 fallback, since email bodies
//! frequently arrive in legacy single-byte encodings. PDFs are extracted
//! page by page; pages that fail to extract contribute no text, and the
//! orchestrator's length gate catches documents that yielded nothing.

use encoding_rs::WINDOWS_1252;
use lopdf::Document;
use tracing::warn;

use crate::error::{ClassificationError, Result};

/// Supported upload formats. The allow-list is exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Plain,
    Pdf,
}

impl SourceFormat {
    /// Resolve the format from a file name, case-insensitively.
    ///
    /// Rejects anything outside `.txt` / `.pdf` before a single byte of the
    /// upload is inspected.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("txt") => Ok(Self::Plain),
            Some("pdf") => Ok(Self::Pdf),
            Some(other) => Err(ClassificationError::UnsupportedFormat {
                extension: format!(".{}", other),
            }),
            None => Err(ClassificationError::UnsupportedFormat {
                extension: filename.to_string(),
            }),
        }
    }
}

/// Extract normalized email text from an upload.
///
/// Output is not length-validated here; the orchestrator applies the
/// minimum-length gate uniformly to direct text and file-derived text.
pub fn extract_text(bytes: &[u8], format: SourceFormat) -> Result<String> {
    match format {
        SourceFormat::Plain => Ok(decode_plain(bytes)),
        SourceFormat::Pdf => extract_pdf_text(bytes),
    }
}

fn decode_plain(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            // Best-effort recovery for legacy encodings rather than failing
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

fn extract_pdf_text(bytes: &[u8]) -> Result<String> {
    let document =
        Document::load_mem(bytes).map_err(|e| ClassificationError::DocumentParse(e.to_string()))?;

    let mut pages = Vec::new();
    for (page_number, _) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(text) => pages.push(text),
            Err(error) => {
                warn!(page = page_number, %error, "skipping unreadable PDF page");
            }
        }
    }

    Ok(pages.join("\n").trim().to_string())
}
