// Summarizer: length-bounded calls into a sequence-to-sequence model

pub mod bounds;
pub mod http;
pub mod service;
pub mod types;

use anyhow::Result;
use async_trait::async_trait;

pub use bounds::{adjust_bounds, trim_to_words, word_count};
pub use http::HttpSummarizer;
pub use service::TextSummarizer;
pub use types::{
    EffectiveBounds, SummarizeError, SummarizeParams, SummarizeResult, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH,
};

/// A summarization model.
///
/// Implementations turn text plus length bounds into a summary. Any error
/// is reported to callers as a failed summarization.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, params: SummarizeParams) -> Result<String>;
}
