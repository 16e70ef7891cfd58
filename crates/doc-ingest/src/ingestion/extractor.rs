//! Format dispatch and file access for the extraction stage

use std::path::Path;

use super::docx::DocxReader;
use super::pdf::PdfReader;
use super::pptx::PptxReader;
use super::text::TextReader;
use crate::config::ExtractionConfig;
use crate::error::{Error, ExtractionCause, Result};
use crate::types::{DocumentFormat, RawExtraction};

/// A format-specific reader turning file bytes into raw text and metadata.
///
/// Readers tolerate per-page and per-slide failures themselves; an `Err`
/// means the container as a whole could not be read.
pub trait FormatReader: Send + Sync {
    /// Extract raw text and metadata from the file contents
    fn read(&self, data: &[u8]) -> std::result::Result<RawExtraction, ExtractionCause>;

    /// Reader name for logging
    fn name(&self) -> &'static str;
}

/// Reader for a format. Adding a format means adding a variant and an arm here.
pub fn reader_for(format: DocumentFormat) -> &'static dyn FormatReader {
    match format {
        DocumentFormat::Pdf => &PdfReader,
        DocumentFormat::Docx => &DocxReader,
        DocumentFormat::Txt => &TextReader,
        DocumentFormat::Pptx => &PptxReader,
    }
}

/// Extraction stage entry point
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractionConfig,
}

impl Extractor {
    /// Create a new extractor
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Extract a file given a format tag such as `"pdf"`.
    ///
    /// The tag is resolved before the file system is touched, so an
    /// unsupported tag fails without side effects.
    pub fn extract(&self, path: &Path, format_tag: &str) -> Result<RawExtraction> {
        let format = DocumentFormat::from_tag(format_tag)?;
        self.extract_format(path, format)
    }

    /// Extract a file with an already resolved format
    pub fn extract_format(&self, path: &Path, format: DocumentFormat) -> Result<RawExtraction> {
        let label = path.display().to_string();

        let size = std::fs::metadata(path)
            .map_err(|e| Error::extraction(&label, e))?
            .len();
        if size > self.config.max_file_size {
            return Err(Error::extraction(
                &label,
                ExtractionCause::FileTooLarge {
                    size,
                    limit: self.config.max_file_size,
                },
            ));
        }

        let data = std::fs::read(path).map_err(|e| Error::extraction(&label, e))?;
        tracing::debug!("[{}] Read {} bytes as {}", label, data.len(), format);

        self.read_with(&label, &data, format)
    }

    /// Extract from bytes already in memory
    pub fn extract_bytes(&self, data: &[u8], format: DocumentFormat) -> Result<RawExtraction> {
        self.read_with("<memory>", data, format)
    }

    fn read_with(&self, label: &str, data: &[u8], format: DocumentFormat) -> Result<RawExtraction> {
        let reader = reader_for(format);
        match reader.read(data) {
            Ok(raw) => {
                tracing::info!(
                    "[{}] {} reader extracted {} chars",
                    label,
                    reader.name(),
                    raw.raw_text.chars().count()
                );
                Ok(raw)
            }
            Err(cause) => {
                tracing::error!("[{}] {} reader failed: {}", label, reader.name(), cause);
                Err(Error::extraction(label, cause))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_tag_touches_nothing() {
        let extractor = Extractor::default();
        let err = extractor
            .extract(Path::new("/definitely/not/here.xlsx"), "xlsx")
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedFormat(_)));
    }

    #[test]
    fn test_missing_file_is_extraction_failure() {
        let extractor = Extractor::default();
        let err = extractor
            .extract(Path::new("/definitely/not/here.txt"), "txt")
            .unwrap_err();
        match err {
            Error::ExtractionFailed { source, .. } => {
                assert!(matches!(source, ExtractionCause::Io(_)))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("big.txt");
        std::fs::write(&file, "0123456789").unwrap();

        let extractor = Extractor::new(ExtractionConfig { max_file_size: 4 });
        let err = extractor.extract(&file, "txt").unwrap_err();
        assert!(matches!(
            err,
            Error::ExtractionFailed {
                source: ExtractionCause::FileTooLarge { size: 10, limit: 4 },
                ..
            }
        ));
    }

    #[test]
    fn test_empty_containers_fail() {
        let extractor = Extractor::default();
        for format in [DocumentFormat::Pdf, DocumentFormat::Docx, DocumentFormat::Pptx] {
            let result = extractor.extract_bytes(&[], format);
            assert!(
                matches!(result, Err(Error::ExtractionFailed { .. })),
                "{format} should reject an empty byte stream"
            );
        }
    }

    #[test]
    fn test_empty_text_file() {
        let raw = Extractor::default()
            .extract_bytes(&[], DocumentFormat::Txt)
            .unwrap();
        assert_eq!(raw.raw_text, "");
    }

    #[test]
    fn test_extraction_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        std::fs::write(&file, "line one\nline two").unwrap();

        let raw = Extractor::default().extract(&file, ".TXT").unwrap();
        assert_eq!(raw.raw_text, "line one\nline two");
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "line one\nline two");
    }
}
