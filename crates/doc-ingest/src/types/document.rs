//! Document formats, raw extractions and processed-document records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

use super::analysis::PreprocessResult;
use crate::error::Error;

/// Supported document formats
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// PDF document
    Pdf,
    /// Microsoft Word document (.docx)
    Docx,
    /// Plain text file
    Txt,
    /// Microsoft PowerPoint presentation (.pptx)
    Pptx,
}

impl DocumentFormat {
    /// All supported formats
    pub const ALL: [DocumentFormat; 4] = [Self::Pdf, Self::Docx, Self::Txt, Self::Pptx];

    /// Resolve a caller-supplied format tag.
    ///
    /// Matching is case-insensitive and tolerates a leading dot, so a raw
    /// file extension such as `".PDF"` is accepted.
    pub fn from_tag(tag: &str) -> Result<Self, Error> {
        let normalized = tag.trim().trim_start_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.tag() == normalized)
            .ok_or_else(|| Error::UnsupportedFormat(tag.to_string()))
    }

    /// Detect the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_tag(ext)
    }

    /// Canonical tag (also the file extension)
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Pptx => "pptx",
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "Word Document (.docx)",
            Self::Txt => "Text File",
            Self::Pptx => "PowerPoint (.pptx)",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DocumentFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

/// A heading paragraph recorded by the DOCX reader
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Heading {
    /// Heading text
    pub text: String,
    /// Level parsed from the paragraph style (`Heading2` => 2)
    pub level: u32,
}

/// Format-specific metadata.
///
/// Only the fields a given format produces are set; absent fields are left
/// out of the serialized form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionMetadata {
    /// Number of pages (PDF)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<usize>,
    /// Document title (PDF, empty when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Document author (PDF, empty when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Number of non-empty paragraphs (DOCX)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraphs: Option<usize>,
    /// Heading paragraphs (DOCX)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headings: Option<Vec<Heading>>,
    /// Number of lines (TXT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<usize>,
    /// Character count (TXT)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub characters: Option<usize>,
    /// Number of slides (PPTX)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<usize>,
}

/// Output of the extraction stage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawExtraction {
    /// Text as extracted, including page/slide boundary markers
    pub raw_text: String,
    /// Format-specific metadata
    pub metadata: ExtractionMetadata,
}

/// A document run through both pipeline stages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    /// Unique document ID
    pub id: Uuid,
    /// Original filename
    pub filename: String,
    /// Detected format
    pub format: DocumentFormat,
    /// SHA-256 of the raw text, for deduplication by the caller
    pub content_hash: String,
    /// Extraction stage output
    pub raw: RawExtraction,
    /// Preprocessing stage output
    pub analysis: PreprocessResult,
    /// Wall time spent on both stages
    pub processing_time_secs: f64,
    /// Completion timestamp
    pub processed_at: DateTime<Utc>,
}

impl ProcessedDocument {
    /// Number of characters in the raw text
    pub fn raw_text_length(&self) -> usize {
        self.raw.raw_text.chars().count()
    }
}
