//! doc-ingest: document extraction and text preprocessing
//!
//! Turns PDF, DOCX, PPTX and plain-text files into raw text with
//! format metadata, then into cleaned text, sentences, sections, entities,
//! key phrases and overlapping sentence chunks.

pub mod analysis;
pub mod config;
pub mod error;
pub mod ingestion;
pub mod processing;
pub mod types;

use std::path::Path;

pub use analysis::{EntityRecognizer, Preprocessor, RuleBasedRecognizer};
pub use config::{ExtractionConfig, PipelineConfig, PreprocessConfig, ProcessingConfig};
pub use error::{Error, ExtractionCause, Result};
pub use ingestion::{Extractor, Pipeline};
pub use processing::{DocumentJob, PipelineWorker};
pub use types::{
    analysis::{Chunk, Entity, EntityLabel, PreprocessResult, Section},
    document::{DocumentFormat, ExtractionMetadata, Heading, ProcessedDocument, RawExtraction},
};

/// Extract a file with the default configuration
pub fn extract(path: impl AsRef<Path>, format_tag: &str) -> Result<RawExtraction> {
    Extractor::default().extract(path.as_ref(), format_tag)
}

/// Preprocess raw text with the default configuration
pub fn preprocess(raw_text: &str) -> Result<PreprocessResult> {
    Preprocessor::new(PreprocessConfig::default())?.preprocess(raw_text)
}
