// Remote model client for Hugging Face style inference endpoints

use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use super::types::SummarizeParams;
use super::Summarizer;

pub struct HttpSummarizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: InferenceParameters,
}

#[derive(Debug, Serialize)]
struct InferenceParameters {
    max_length: usize,
    min_length: usize,
    truncation: bool,
    do_sample: bool,
}

impl HttpSummarizer {
    pub fn new(endpoint: String, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build model HTTP client")?;
        Ok(Self {
            client,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl Summarizer for HttpSummarizer {
    async fn summarize(&self, params: SummarizeParams) -> Result<String> {
        let body = InferenceRequest {
            inputs: &params.text,
            parameters: InferenceParameters {
                max_length: params.max_length,
                min_length: params.min_length,
                truncation: params.truncate,
                do_sample: !params.deterministic,
            },
        };

        info!(
            "Sending summarization request to {} (max_length={}, min_length={})",
            self.endpoint, params.max_length, params.min_length
        );

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let resp = request.send().await.context("model request failed")?;
        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            bail!("model endpoint returned {}: {}", status, error_text);
        }

        let payload: Value = resp
            .json()
            .await
            .context("model response was not valid JSON")?;
        parse_summary(&payload)
    }
}

/// Pull the summary out of an inference response.
///
/// Accepts `[{"summary_text": ...}]` or a bare `{"summary_text": ...}` and
/// surfaces `{"error": ...}` bodies as failures.
pub fn parse_summary(payload: &Value) -> Result<String> {
    if let Some(err) = payload.get("error") {
        let msg = err.as_str().map(str::to_string).unwrap_or_else(|| err.to_string());
        bail!("model endpoint error: {}", msg);
    }

    let entry = match payload {
        Value::Array(items) => items
            .first()
            .ok_or_else(|| anyhow!("model response was an empty list"))?,
        other => other,
    };

    entry["summary_text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("model response contained no summary_text"))
}
