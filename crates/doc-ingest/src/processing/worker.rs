//! Worker pool offloading blocking document runs from async callers

use futures::stream::{FuturesOrdered, StreamExt};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tokio::time::timeout;

use crate::config::ProcessingConfig;
use crate::error::{Error, Result};
use crate::ingestion::Pipeline;
use crate::types::ProcessedDocument;

/// One document to run through the pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentJob {
    /// File to read
    pub path: PathBuf,
    /// Format tag, as accepted by [`crate::DocumentFormat::from_tag`]
    pub format_tag: String,
}

impl DocumentJob {
    /// Create a job with an explicit format tag
    pub fn new(path: impl Into<PathBuf>, format_tag: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            format_tag: format_tag.into(),
        }
    }

    /// Create a job whose format tag is the file extension
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format_tag = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_string();
        Self { path, format_tag }
    }

    /// File name used in logs and batch results
    pub fn filename(&self) -> String {
        display_name(&self.path)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Runs whole documents on blocking threads with bounded concurrency
pub struct PipelineWorker {
    pipeline: Arc<Pipeline>,
    semaphore: Arc<Semaphore>,
    parallel_documents: usize,
    document_timeout: Option<Duration>,
}

impl PipelineWorker {
    /// Create a new worker
    pub fn new(pipeline: Arc<Pipeline>, config: &ProcessingConfig) -> Self {
        let parallel_documents = config.parallelism();
        let document_timeout = config.document_timeout();

        tracing::info!(
            "Worker configured: {} parallel documents, timeout {}",
            parallel_documents,
            document_timeout
                .map(|t| format!("{}s", t.as_secs()))
                .unwrap_or_else(|| "none".to_string())
        );

        Self {
            pipeline,
            semaphore: Arc::new(Semaphore::new(parallel_documents)),
            parallel_documents,
            document_timeout,
        }
    }

    /// Maximum number of documents running at once
    pub fn parallel_documents(&self) -> usize {
        self.parallel_documents
    }

    /// Submit one document; the handle resolves when the run finishes or
    /// the configured timeout elapses.
    ///
    /// A timed-out run is not interrupted. It keeps its concurrency slot
    /// until it completes and its result is discarded.
    pub fn submit(&self, job: DocumentJob) -> JoinHandle<Result<ProcessedDocument>> {
        let pipeline = self.pipeline.clone();
        let semaphore = self.semaphore.clone();
        let document_timeout = self.document_timeout;

        tokio::spawn(async move {
            let permit = semaphore
                .acquire_owned()
                .await
                .map_err(|e| Error::internal(format!("worker pool closed: {}", e)))?;

            let filename = job.filename();
            tracing::debug!("[{}] Acquired worker slot", filename);
            let start_time = Instant::now();

            let run = tokio::task::spawn_blocking(move || {
                let _permit = permit;
                pipeline.process_file(&job.path, &job.format_tag)
            });

            let joined = match document_timeout {
                Some(limit) => match timeout(limit, run).await {
                    Ok(joined) => joined,
                    Err(_) => {
                        tracing::error!(
                            "TIMEOUT processing '{}' after {:.1}s (limit: {}s)",
                            filename,
                            start_time.elapsed().as_secs_f64(),
                            limit.as_secs()
                        );
                        return Err(Error::Timeout(limit.as_secs()));
                    }
                },
                None => run.await,
            };

            joined.unwrap_or_else(|e| {
                Err(Error::internal(format!(
                    "worker task for '{}' failed: {}",
                    filename, e
                )))
            })
        })
    }

    /// Submit every job and wait for all of them; results keep job order
    pub async fn process_batch(
        &self,
        jobs: Vec<DocumentJob>,
    ) -> Vec<(String, Result<ProcessedDocument>)> {
        self.process_batch_with(jobs, |_, _| {}).await
    }

    /// Like [`Self::process_batch`], calling `on_result` for each document
    /// in job order as soon as it and every earlier job have finished
    pub async fn process_batch_with<F>(
        &self,
        jobs: Vec<DocumentJob>,
        mut on_result: F,
    ) -> Vec<(String, Result<ProcessedDocument>)>
    where
        F: FnMut(&str, &Result<ProcessedDocument>),
    {
        tracing::info!("Processing batch of {} documents", jobs.len());

        let mut pending: FuturesOrdered<_> = jobs
            .into_iter()
            .map(|job| {
                let filename = job.filename();
                let handle = self.submit(job);
                async move { (filename, handle.await) }
            })
            .collect();

        let mut results = Vec::with_capacity(pending.len());
        while let Some((filename, joined)) = pending.next().await {
            let result = joined.unwrap_or_else(|e| {
                Err(Error::internal(format!("worker task panicked: {}", e)))
            });
            match &result {
                Ok(doc) => tracing::info!(
                    "Processed {}: {} sentences",
                    filename,
                    doc.analysis.sentence_count
                ),
                Err(e) => tracing::error!("Failed to process {}: {}", filename, e),
            }
            on_result(&filename, &result);
            results.push((filename, result));
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{EntityRecognizer, Preprocessor, Token};
    use crate::config::{PipelineConfig, PreprocessConfig};
    use crate::ingestion::Extractor;
    use crate::types::Entity;

    fn worker(config: &ProcessingConfig) -> PipelineWorker {
        let pipeline = Pipeline::new(&PipelineConfig::default()).unwrap();
        PipelineWorker::new(Arc::new(pipeline), config)
    }

    struct SlowRecognizer;

    impl EntityRecognizer for SlowRecognizer {
        fn recognize(&self, _text: &str, _tokens: &[Token<'_>]) -> Result<Vec<Entity>> {
            std::thread::sleep(Duration::from_secs(2));
            Ok(Vec::new())
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    #[test]
    fn test_job_from_path() {
        let job = DocumentJob::from_path("/data/Deck.PPTX");
        assert_eq!(job.format_tag, "PPTX");
        assert_eq!(job.filename(), "Deck.PPTX");
        assert_eq!(DocumentJob::from_path("/data/README").format_tag, "");
    }

    #[tokio::test]
    async fn test_submit_single() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.txt");
        std::fs::write(&file, "One sentence. Two sentences.").unwrap();

        let worker = worker(&ProcessingConfig::default());
        let doc = worker
            .submit(DocumentJob::from_path(&file))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.analysis.sentence_count, 2);
    }

    #[tokio::test]
    async fn test_batch_keeps_order_and_reports_errors() {
        let dir = tempfile::tempdir().unwrap();
        let first = dir.path().join("first.txt");
        let third = dir.path().join("third.txt");
        std::fs::write(&first, "Alpha.").unwrap();
        std::fs::write(&third, "Gamma. Delta.").unwrap();

        let worker = worker(&ProcessingConfig {
            parallel_documents: Some(2),
            ..Default::default()
        });
        assert_eq!(worker.parallel_documents(), 2);

        let results = worker
            .process_batch(vec![
                DocumentJob::from_path(&first),
                DocumentJob::from_path(dir.path().join("missing.txt")),
                DocumentJob::from_path(&third),
                DocumentJob::new(&first, "xls"),
            ])
            .await;

        let names: Vec<_> = results.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["first.txt", "missing.txt", "third.txt", "first.txt"]);

        assert_eq!(results[0].1.as_ref().unwrap().analysis.sentence_count, 1);
        assert!(matches!(results[1].1, Err(Error::ExtractionFailed { .. })));
        assert_eq!(results[2].1.as_ref().unwrap().analysis.sentence_count, 2);
        assert!(matches!(results[3].1, Err(Error::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_batch_callback_sees_results_in_job_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut jobs = Vec::new();
        for (name, text) in [("slow.txt", "Alpha. ".repeat(2000)), ("fast.txt", "Beta.".into())] {
            let path = dir.path().join(name);
            std::fs::write(&path, text).unwrap();
            jobs.push(DocumentJob::from_path(path));
        }
        jobs.push(DocumentJob::from_path(dir.path().join("gone.txt")));

        let worker = worker(&ProcessingConfig {
            parallel_documents: Some(3),
            ..Default::default()
        });

        let mut seen = Vec::new();
        let results = worker
            .process_batch_with(jobs, |name, result| seen.push((name.to_string(), result.is_ok())))
            .await;

        assert_eq!(
            seen,
            vec![
                ("slow.txt".to_string(), true),
                ("fast.txt".to_string(), true),
                ("gone.txt".to_string(), false),
            ]
        );
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].1.as_ref().unwrap().analysis.sentence_count, 2000);
    }

    #[tokio::test]
    async fn test_timeout_gives_up_waiting() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("slow.txt");
        std::fs::write(&file, "Takes a while.").unwrap();

        let preprocessor = Preprocessor::new(PreprocessConfig::default())
            .unwrap()
            .with_recognizer(SlowRecognizer);
        let pipeline = Pipeline::from_parts(Extractor::default(), preprocessor);
        let worker = PipelineWorker::new(
            Arc::new(pipeline),
            &ProcessingConfig {
                parallel_documents: Some(1),
                document_timeout_secs: Some(1),
            },
        );

        let err = worker
            .submit(DocumentJob::from_path(&file))
            .await
            .unwrap()
            .unwrap_err();
        assert!(matches!(err, Error::Timeout(1)));
        assert!(err.is_retryable());
    }
}
