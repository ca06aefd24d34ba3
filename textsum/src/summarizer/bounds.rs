//! Length bound adjustment for summarization requests.

use super::types::{EffectiveBounds, SummarizeError, SummarizeResult, MIN_INPUT_WORDS};

/// Number of whitespace-delimited tokens in `text`.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep at most `max_words` words of `text`.
///
/// Text already within the limit is returned untouched; otherwise the first
/// `max_words` words are joined with single spaces.
pub fn trim_to_words(text: String, max_words: usize) -> String {
    if word_count(&text) <= max_words {
        return text;
    }
    text.split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive the bounds to hand to the model from the caller's request.
///
/// The checks run in a fixed order: empty input, inverted bounds, then the
/// raw word count. The effective max never exceeds the input length minus
/// `MIN_INPUT_WORDS`, and the effective min never exceeds half the effective
/// max.
pub fn adjust_bounds(
    text: &str,
    max_length: usize,
    min_length: usize,
) -> SummarizeResult<EffectiveBounds> {
    if text.trim().is_empty() {
        return Err(SummarizeError::EmptyInput);
    }

    if min_length > max_length {
        return Err(SummarizeError::InvalidBounds {
            min_length,
            max_length,
        });
    }

    let words = word_count(text);
    if words <= MIN_INPUT_WORDS {
        return Err(SummarizeError::TooShort { words });
    }

    let max = max_length.min(words - MIN_INPUT_WORDS).max(1);
    let min = min_length.min(max / 2).max(1);

    Ok(EffectiveBounds { max, min })
}
