//! Document ingestion with multi-format extraction

pub mod chunker;
mod docx;
pub mod extractor;
mod pdf;
mod pipeline;
mod pptx;
mod text;

pub use chunker::SentenceChunker;
pub use docx::DocxReader;
pub use extractor::{reader_for, Extractor, FormatReader};
pub use pdf::PdfReader;
pub use pipeline::Pipeline;
pub use pptx::PptxReader;
pub use text::TextReader;
