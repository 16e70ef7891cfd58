//! Format-agnostic text analysis: cleaning, segmentation, sections,
//! entities, key phrases and chunking

pub mod cleaning;
pub mod entities;
pub mod lexicon;
pub mod phrases;
pub mod sections;
pub mod sentences;
pub mod tokenizer;

use std::fmt;
use std::sync::Arc;

use crate::config::PreprocessConfig;
use crate::error::{Error, Result};
use crate::ingestion::chunker::SentenceChunker;
use crate::types::PreprocessResult;

pub use cleaning::TextCleaner;
pub use entities::{EntityRecognizer, RuleBasedRecognizer};
pub use lexicon::{lexicon, Lexicon};
pub use phrases::{extract_key_phrases, noun_phrases};
pub use sections::SectionSplitter;
pub use sentences::split_sentences;
pub use tokenizer::{tokenize, Token};

/// Turns raw text into a [`PreprocessResult`].
///
/// Holds only immutable state, so one instance can serve concurrent
/// documents. The same input always produces the same output.
#[derive(Clone)]
pub struct Preprocessor {
    config: PreprocessConfig,
    cleaner: TextCleaner,
    sections: SectionSplitter,
    chunker: SentenceChunker,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preprocessor")
            .field("config", &self.config)
            .field("recognizer", &self.recognizer.name())
            .finish()
    }
}

impl Preprocessor {
    /// Create a preprocessor with the rule-based entity recognizer
    pub fn new(config: PreprocessConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            cleaner: TextCleaner::new()?,
            sections: SectionSplitter::new(config.max_heading_length)?,
            chunker: SentenceChunker::new(config.chunk_size),
            recognizer: Arc::new(RuleBasedRecognizer),
            config,
        })
    }

    /// Replace the entity recognizer
    pub fn with_recognizer(mut self, recognizer: impl EntityRecognizer + 'static) -> Self {
        self.recognizer = Arc::new(recognizer);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &PreprocessConfig {
        &self.config
    }

    /// Run every analysis stage over `raw_text`.
    ///
    /// Fails with [`Error::PreprocessingFailed`] when the text exceeds the
    /// configured length or the recognizer fails; nothing partial is returned.
    pub fn preprocess(&self, raw_text: &str) -> Result<PreprocessResult> {
        let length = raw_text.chars().count();
        if length > self.config.max_text_length {
            return Err(Error::preprocessing(format!(
                "text of {} chars exceeds the limit of {}",
                length, self.config.max_text_length
            )));
        }

        let cleaned_text = self.cleaner.clean(raw_text);
        let sentences = split_sentences(&cleaned_text);

        // Cleaning flattens line breaks, so headings are found on the raw lines
        let lines: Vec<String> = raw_text.lines().map(|line| self.cleaner.clean(line)).collect();
        let sections = self.sections.split(&lines);

        let tokens = tokenize(&cleaned_text);
        let entities = self
            .recognizer
            .recognize(&cleaned_text, &tokens)
            .map_err(|e| match e {
                Error::PreprocessingFailed(_) => e,
                other => Error::preprocessing(format!(
                    "{} recognizer failed: {}",
                    self.recognizer.name(),
                    other
                )),
            })?;

        let key_phrases = extract_key_phrases(&sentences, &entities);
        let chunks = self.chunker.chunk(&sentences);

        tracing::debug!(
            "Preprocessed {} chars: {} sentences, {} sections, {} entities, {} key phrases, {} chunks",
            length,
            sentences.len(),
            sections.len(),
            entities.len(),
            key_phrases.len(),
            chunks.len()
        );

        Ok(PreprocessResult {
            word_count: tokens.len(),
            sentence_count: sentences.len(),
            cleaned_text,
            sentences,
            sections,
            entities,
            key_phrases,
            chunks,
        })
    }
}
