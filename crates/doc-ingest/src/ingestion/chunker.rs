//! Sentence-window chunking with one-sentence overlap

use crate::types::Chunk;

/// Chunker producing windows of `chunk_size` sentences with stride `chunk_size - 1`
#[derive(Debug, Clone)]
pub struct SentenceChunker {
    /// Target window size in sentences
    chunk_size: usize,
}

impl SentenceChunker {
    /// Create a new chunker. `chunk_size` below 2 is raised to 2 so the
    /// stride stays positive; configuration validation rejects such values
    /// before they get here.
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(2),
        }
    }

    /// Partition sentences into overlapping windows.
    ///
    /// Window `i` starts at `i * (K - 1)`. The scan stops right after the
    /// window whose start plus `K` reaches the end, so the last window may
    /// hold fewer than `K` sentences.
    pub fn chunk<S: AsRef<str>>(&self, sentences: &[S]) -> Vec<Chunk> {
        let total = sentences.len();
        let stride = self.chunk_size - 1;
        let mut chunks = Vec::new();

        let mut start = 0usize;
        while start < total {
            let end = (start + self.chunk_size - 1).min(total - 1);
            let text = sentences[start..=end]
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(" ");

            chunks.push(Chunk {
                id: start / stride,
                text,
                start_sentence: start,
                end_sentence: end,
                sentence_count: end - start + 1,
            });

            if start + self.chunk_size >= total {
                break;
            }
            start += stride;
        }

        chunks
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new(5)
    }
}
