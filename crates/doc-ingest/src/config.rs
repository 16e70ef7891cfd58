//! Configuration for the extraction and preprocessing pipeline

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{Error, Result};

/// Default maximum file size: 50 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;

/// Main pipeline configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PipelineConfig {
    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Preprocessing configuration
    #[serde(default)]
    pub preprocessing: PreprocessConfig,
    /// Worker configuration
    #[serde(default)]
    pub processing: ProcessingConfig,
}

impl PipelineConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| Error::config(format!("invalid TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<()> {
        self.preprocessing.validate()?;
        if self.extraction.max_file_size == 0 {
            return Err(Error::config("extraction.max_file_size must be positive"));
        }
        if self.processing.parallel_documents == Some(0) {
            return Err(Error::config("processing.parallel_documents must be at least 1"));
        }
        Ok(())
    }
}

/// Extraction configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Files larger than this are rejected before parsing
    pub max_file_size: u64,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

/// Preprocessing configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreprocessConfig {
    /// Sentences per chunk; consecutive chunks share one sentence
    pub chunk_size: usize,
    /// Lines at or above this many characters are never headings
    pub max_heading_length: usize,
    /// Longest raw text (in characters) accepted for analysis
    pub max_text_length: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            chunk_size: 5,
            max_heading_length: 100,
            max_text_length: 1_000_000,
        }
    }
}

impl PreprocessConfig {
    /// A window of one sentence would have a zero stride.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size < 2 {
            return Err(Error::config(format!(
                "preprocessing.chunk_size must be at least 2, got {}",
                self.chunk_size
            )));
        }
        if self.max_heading_length == 0 {
            return Err(Error::config("preprocessing.max_heading_length must be positive"));
        }
        Ok(())
    }
}

/// Worker configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Documents processed concurrently (default: CPU count, max 8)
    pub parallel_documents: Option<usize>,
    /// How long a caller waits on one document before giving up
    pub document_timeout_secs: Option<u64>,
}

impl ProcessingConfig {
    /// Effective concurrency limit
    pub fn parallelism(&self) -> usize {
        self.parallel_documents
            .unwrap_or_else(|| num_cpus::get().min(8))
            .max(1)
    }

    /// Effective wait limit, if any
    pub fn document_timeout(&self) -> Option<Duration> {
        self.document_timeout_secs.map(Duration::from_secs)
    }
}
