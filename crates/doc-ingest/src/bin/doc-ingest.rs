//! Document ingestion CLI
//!
//! Run with: cargo run -p doc-ingest -- report.pdf notes.txt --pretty

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use doc_ingest::{DocumentJob, Pipeline, PipelineConfig, PipelineWorker};

/// Extract and preprocess documents, printing one JSON record per file
#[derive(Debug, Parser)]
#[command(name = "doc-ingest", version, about)]
struct Cli {
    /// Files to process (format taken from the extension)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sentences per chunk
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Documents processed concurrently
    #[arg(short = 'j', long)]
    parallel: Option<usize>,

    /// Give up on a document after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => PipelineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PipelineConfig::default(),
    };
    if let Some(chunk_size) = cli.chunk_size {
        config.preprocessing.chunk_size = chunk_size;
    }
    if let Some(parallel) = cli.parallel {
        config.processing.parallel_documents = Some(parallel);
    }
    if let Some(timeout) = cli.timeout {
        config.processing.document_timeout_secs = Some(timeout);
    }

    tracing::info!("Configuration loaded");
    tracing::info!("  - Chunk size: {}", config.preprocessing.chunk_size);
    tracing::info!("  - Max file size: {} bytes", config.extraction.max_file_size);

    let pipeline = Pipeline::new(&config)?;
    let worker = PipelineWorker::new(Arc::new(pipeline), &config.processing);

    let progress = if cli.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(cli.files.len() as u64)
    };
    progress.set_style(
        ProgressStyle::with_template("{spinner} [{bar:40}] {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let jobs = cli.files.iter().map(DocumentJob::from_path).collect();

    let mut failures = 0usize;
    worker
        .process_batch_with(jobs, |filename, result| {
            progress.set_message(filename.to_string());
            let record = result.as_ref().map_err(|e| e.to_string()).and_then(|document| {
                let json = if cli.pretty {
                    serde_json::to_string_pretty(document)
                } else {
                    serde_json::to_string(document)
                };
                json.map_err(|e| e.to_string())
            });

            match record {
                Ok(json) => progress.suspend(|| println!("{}", json)),
                Err(e) => {
                    failures += 1;
                    progress.suspend(|| {
                        eprintln!("{} {}: {}", style("error").red().bold(), filename, e)
                    });
                }
            }
            progress.inc(1);
        })
        .await;
    progress.finish_and_clear();

    let processed = cli.files.len() - failures;
    eprintln!(
        "{} {} processed, {} failed",
        style("done").green().bold(),
        processed,
        failures
    );

    if failures > 0 {
        std::process::exit(1);
    }
    Ok(())
}
