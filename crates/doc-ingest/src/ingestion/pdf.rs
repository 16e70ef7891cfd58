//! PDF reader with per-page boundary markers

use lopdf::{Document, Object};

use super::extractor::FormatReader;
use crate::error::ExtractionCause;
use crate::types::{ExtractionMetadata, RawExtraction};

/// Reads PDF documents page by page
pub struct PdfReader;

impl FormatReader for PdfReader {
    fn read(&self, data: &[u8]) -> Result<RawExtraction, ExtractionCause> {
        let doc = Document::load_mem(data)?;
        let pages = doc.get_pages();

        let mut text = String::new();
        for (index, &page_number) in pages.keys().enumerate() {
            text.push_str(&format!("\n--- Page {} ---\n", index + 1));

            // A bad page contributes its marker and nothing else
            match doc.extract_text(&[page_number]) {
                Ok(page_text) => text.push_str(&page_text),
                Err(e) => {
                    tracing::warn!("Could not extract text from page {}: {}", index + 1, e);
                }
            }
        }

        let metadata = ExtractionMetadata {
            pages: Some(pages.len()),
            title: Some(info_string(&doc, b"Title")),
            author: Some(info_string(&doc, b"Author")),
            ..Default::default()
        };

        Ok(RawExtraction {
            raw_text: text.trim().to_string(),
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "pdf"
    }
}

/// Read a string entry of the trailer's Info dictionary, `""` when absent
fn info_string(doc: &Document, key: &[u8]) -> String {
    let info = match doc.trailer.get(b"Info") {
        Ok(Object::Reference(id)) => doc.get_dictionary(*id).ok(),
        Ok(Object::Dictionary(dict)) => Some(dict),
        _ => None,
    };

    let value = info.and_then(|dict| dict.get(key).ok()).and_then(|obj| match obj {
        Object::Reference(id) => doc.get_object(*id).ok(),
        other => Some(other),
    });

    match value {
        Some(Object::String(bytes, _)) => decode_pdf_string(bytes),
        _ => String::new(),
    }
}

/// Decode a PDF text string: UTF-16BE when it carries a BOM, else one byte per char
fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    bytes.iter().map(|&b| b as char).collect()
}
