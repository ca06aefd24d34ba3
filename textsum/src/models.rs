use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::summarizer::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

pub const TEXT_MIN_CHARS: usize = 100;
pub const TEXT_MAX_CHARS: usize = 10_000;
pub const MAX_LENGTH_RANGE: (usize, usize) = (30, 500);
pub const MIN_LENGTH_RANGE: (usize, usize) = (10, 100);
pub const QUERY_MAX_CHARS: usize = 1000;

// API Request/Response models
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    pub message: String,
    pub query: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub min_length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummarizeResponse {
    pub summary: String,
    pub original_length: usize,
    pub summary_length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl QueryRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        let len = self.query.chars().count();
        if len == 0 || len > QUERY_MAX_CHARS {
            return Err(ApiError::BadRequest(format!(
                "query must be between 1 and {} characters",
                QUERY_MAX_CHARS
            )));
        }
        Ok(())
    }
}

impl SummarizeRequest {
    /// Check field bounds and resolve defaults, returning `(max_length, min_length)`.
    pub fn validated_lengths(&self) -> Result<(usize, usize), ApiError> {
        let chars = self.text.chars().count();
        if chars < TEXT_MIN_CHARS {
            return Err(ApiError::BadRequest(
                "Text too short for summarization".to_string(),
            ));
        }
        if chars > TEXT_MAX_CHARS {
            return Err(ApiError::BadRequest(format!(
                "Text exceeds {} characters",
                TEXT_MAX_CHARS
            )));
        }

        let max_length = self.max_length.unwrap_or(DEFAULT_MAX_LENGTH);
        let min_length = self.min_length.unwrap_or(DEFAULT_MIN_LENGTH);
        check_range("max_length", max_length, MAX_LENGTH_RANGE)?;
        check_range("min_length", min_length, MIN_LENGTH_RANGE)?;

        Ok((max_length, min_length))
    }
}

fn check_range(field: &str, value: usize, (lo, hi): (usize, usize)) -> Result<(), ApiError> {
    if value < lo || value > hi {
        return Err(ApiError::BadRequest(format!(
            "{} must be between {} and {}, got {}",
            field, lo, hi, value
        )));
    }
    Ok(())
}
