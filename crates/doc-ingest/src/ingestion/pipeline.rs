//! Extraction and preprocessing composed per document

use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::Path;
use std::time::Instant;
use uuid::Uuid;

use super::extractor::Extractor;
use crate::analysis::Preprocessor;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::types::{DocumentFormat, ProcessedDocument, RawExtraction};

/// Main document pipeline: extract, then preprocess
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Extraction stage
    extractor: Extractor,
    /// Analysis stage
    preprocessor: Preprocessor,
}

impl Pipeline {
    /// Create a new pipeline from configuration
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            extractor: Extractor::new(config.extraction.clone()),
            preprocessor: Preprocessor::new(config.preprocessing.clone())?,
        })
    }

    /// Assemble a pipeline from already built stages
    pub fn from_parts(extractor: Extractor, preprocessor: Preprocessor) -> Self {
        Self {
            extractor,
            preprocessor,
        }
    }

    /// Get the extraction stage
    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Get the analysis stage
    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    /// Full run for one file: extract + preprocess
    pub fn process_file(&self, path: &Path, format_tag: &str) -> Result<ProcessedDocument> {
        let format = DocumentFormat::from_tag(format_tag)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        tracing::info!("[{}] Starting processing as {}", filename, format.display_name());
        let start_time = Instant::now();

        let raw = self.extractor.extract_format(path, format)?;
        let document = self.finish(filename, format, raw, start_time)?;

        tracing::info!(
            "[{}] Processed {} chars in {:.2}s: {} sentences, {} chunks, {} entities",
            document.filename,
            document.raw_text_length(),
            document.processing_time_secs,
            document.analysis.sentence_count,
            document.analysis.chunks.len(),
            document.analysis.entities.len()
        );

        Ok(document)
    }

    /// Full run for bytes already in memory
    pub fn process_bytes(
        &self,
        filename: &str,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ProcessedDocument> {
        let start_time = Instant::now();
        let raw = self.extractor.extract_bytes(data, format)?;
        self.finish(filename.to_string(), format, raw, start_time)
    }

    fn finish(
        &self,
        filename: String,
        format: DocumentFormat,
        raw: RawExtraction,
        start_time: Instant,
    ) -> Result<ProcessedDocument> {
        let analysis = self.preprocessor.preprocess(&raw.raw_text).map_err(|e| {
            tracing::error!("[{}] Preprocessing failed: {}", filename, e);
            e
        })?;

        Ok(ProcessedDocument {
            id: Uuid::new_v4(),
            content_hash: hash_content(&raw.raw_text),
            filename,
            format,
            raw,
            analysis,
            processing_time_secs: start_time.elapsed().as_secs_f64(),
            processed_at: Utc::now(),
        })
    }
}

/// Hash content for deduplication
fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("{:x}", hasher.finalize())
}
