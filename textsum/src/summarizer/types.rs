use thiserror::Error;

/// Default upper bound on summary length, in words.
pub const DEFAULT_MAX_LENGTH: usize = 130;

/// Default lower bound on summary length, in words.
pub const DEFAULT_MIN_LENGTH: usize = 30;

/// Inputs with this many words or fewer are rejected as too short.
pub const MIN_INPUT_WORDS: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SummarizeError {
    #[error("Input text cannot be empty")]
    EmptyInput,

    #[error("min_length ({min_length}) cannot be greater than max_length ({max_length})")]
    InvalidBounds { min_length: usize, max_length: usize },

    #[error("Input text is too short to summarize effectively ({words} words)")]
    TooShort { words: usize },

    #[error("Failed to summarize text: {0}")]
    SummarizationFailed(String),
}

impl SummarizeError {
    /// True for errors caused by the caller's input rather than the model.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SummarizeError::SummarizationFailed(_))
    }
}

pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// Length bounds actually handed to the model.
///
/// Always satisfies `1 <= min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveBounds {
    pub max: usize,
    pub min: usize,
}

/// One call into the summarization model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeParams {
    pub text: String,
    pub max_length: usize,
    pub min_length: usize,
    /// Let the model truncate inputs that exceed its context window.
    pub truncate: bool,
    /// Greedy decoding, no sampling.
    pub deterministic: bool,
}
