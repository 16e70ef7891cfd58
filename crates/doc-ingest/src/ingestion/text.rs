//! Plain text reader

use super::extractor::FormatReader;
use crate::error::ExtractionCause;
use crate::types::{ExtractionMetadata, RawExtraction};

/// Reads plain text with error-tolerant UTF-8 decoding
pub struct TextReader;

impl FormatReader for TextReader {
    fn read(&self, data: &[u8]) -> Result<RawExtraction, ExtractionCause> {
        let text = decode_permissive(data);

        let metadata = ExtractionMetadata {
            lines: Some(text.split('\n').count()),
            characters: Some(text.chars().count()),
            ..Default::default()
        };

        Ok(RawExtraction {
            raw_text: text,
            metadata,
        })
    }

    fn name(&self) -> &'static str {
        "text"
    }
}

/// Decode UTF-8, dropping invalid byte sequences instead of replacing them
pub(crate) fn decode_permissive(data: &[u8]) -> String {
    let mut decoded = String::with_capacity(data.len());
    let mut rest = data;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                decoded.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                decoded.push_str(&String::from_utf8_lossy(valid));
                let skip = err.error_len().unwrap_or(after.len());
                rest = &after[skip..];
            }
        }
    }

    decoded
}
