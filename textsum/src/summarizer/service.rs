use std::sync::Arc;

use tracing::{debug, error};

use crate::metrics::MODEL_LATENCY;

use super::bounds::{adjust_bounds, trim_to_words, word_count};
use super::types::{SummarizeError, SummarizeParams, SummarizeResult};
use super::Summarizer;

/// Validates requests, calls the model and enforces the caller's word limit.
#[derive(Clone)]
pub struct TextSummarizer {
    model: Arc<dyn Summarizer>,
}

impl TextSummarizer {
    pub fn new(model: Arc<dyn Summarizer>) -> Self {
        Self { model }
    }

    /// Summarize `text` into at most `max_length` words.
    ///
    /// The model is asked for the adjusted bounds from [`adjust_bounds`],
    /// but the returned summary is trimmed against the `max_length` the
    /// caller asked for.
    pub async fn summarize(
        &self,
        text: &str,
        max_length: usize,
        min_length: usize,
    ) -> SummarizeResult<String> {
        let bounds = adjust_bounds(text, max_length, min_length)?;
        debug!(
            "Effective bounds: max={}, min={} (requested max={}, min={})",
            bounds.max, bounds.min, max_length, min_length
        );

        let params = SummarizeParams {
            text: text.to_string(),
            max_length: bounds.max,
            min_length: bounds.min,
            truncate: true,
            deterministic: true,
        };

        let timer = MODEL_LATENCY.start_timer();
        let result = self.model.summarize(params).await;
        timer.observe_duration();

        let summary = result.map_err(|e| {
            error!("Summarization error: {:#}", e);
            SummarizeError::SummarizationFailed(format!("{:#}", e))
        })?;

        if word_count(&summary) > max_length {
            debug!("Model exceeded requested max_length, trimming to {} words", max_length);
        }
        Ok(trim_to_words(summary, max_length))
    }
}
