//! Core types for extraction and preprocessing

pub mod analysis;
pub mod document;

pub use analysis::{Chunk, Entity, EntityLabel, PreprocessResult, Section};
pub use document::{DocumentFormat, ExtractionMetadata, Heading, ProcessedDocument, RawExtraction};
