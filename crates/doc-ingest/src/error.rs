//! Error types for the extraction and preprocessing pipeline

use std::io::ErrorKind;

use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline errors
#[derive(Debug, Error)]
pub enum Error {
    /// Format tag outside the recognized set
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Whole-file extraction failure (cannot open, cannot parse container)
    #[error("Extraction failed for '{path}': {source}")]
    ExtractionFailed {
        path: String,
        #[source]
        source: ExtractionCause,
    },

    /// Analysis failure on malformed or oversized input
    #[error("Preprocessing failed: {0}")]
    PreprocessingFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Worker gave up waiting for a document run
    #[error("Processing timeout after {0}s")]
    Timeout(u64),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Underlying cause of an [`Error::ExtractionFailed`]
#[derive(Debug, Error)]
pub enum ExtractionCause {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File exceeds the configured size limit
    #[error("file too large: {size} bytes (limit {limit})")]
    FileTooLarge { size: u64, limit: u64 },

    /// PDF container could not be parsed
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// DOCX container could not be parsed
    #[error("DOCX error: {0}")]
    Docx(String),

    /// Zip container could not be opened
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Required XML part could not be parsed
    #[error("XML error: {0}")]
    Xml(String),
}

impl Error {
    /// Create an extraction error for a path
    pub fn extraction(path: impl Into<String>, source: impl Into<ExtractionCause>) -> Self {
        Self::ExtractionFailed {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create a preprocessing error
    pub fn preprocessing(message: impl Into<String>) -> Self {
        Self::PreprocessingFailed(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether retrying the same call could succeed.
    ///
    /// Only transient I/O failures and worker timeouts qualify; everything
    /// else is terminal for the document.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::ExtractionFailed {
                source: ExtractionCause::Io(err),
                ..
            } => matches!(
                err.kind(),
                ErrorKind::Interrupted | ErrorKind::TimedOut | ErrorKind::WouldBlock
            ),
            Error::Timeout(_) => true,
            _ => false,
        }
    }
}
