//! Background processing of documents

mod worker;

pub use worker::{DocumentJob, PipelineWorker};
